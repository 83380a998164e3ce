use crate::{
    CornerRef, Face, LineError, Model, ModelParser, ParseOptions, Point3, TexCoord2,
    TokenCountError, UnknownKeywordError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    UseMaterial,
    MaterialLibrary,
    GeometricVertex,
    TextureVertex,
    VertexNormal,
    Face,
}

impl TryFrom<&str> for Keyword {
    type Error = UnknownKeywordError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        use Keyword::*;

        let keyword = match token {
            "usemtl" => UseMaterial,
            "mtllib" => MaterialLibrary,
            "v" => GeometricVertex,
            "vt" => TextureVertex,
            "vn" => VertexNormal,
            "f" => Face,
            unknown => return Err(UnknownKeywordError::new(unknown)),
        };

        Ok(keyword)
    }
}

/// Parser for the Wavefront OBJ subset: positions, texture coordinates,
/// normals, triangular faces and material names.
#[derive(Debug, Default, Clone)]
pub struct ObjParser {
    model: Model,
    current_material: Option<String>,
    options: ParseOptions,
}

impl ObjParser {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }
    pub fn current_material(&self) -> Option<&str> {
        self.current_material.as_deref()
    }
    pub fn into_model(self) -> Model {
        self.model
    }
    fn parse_face<'a>(&self, tokens: impl Iterator<Item = &'a str>) -> Result<Face, LineError> {
        let policy = self.options.face_policy;
        let mut corners = [CornerRef::default(); 3];
        let mut count = 0;

        for reference in tokens {
            if count < corners.len() {
                let components = reference.split('/');
                policy.check(3, components.clone().count(), "corner is not v/vt/vn")?;
                corners[count] = CornerRef::from_tokens(components)?;
            }
            count += 1;
        }

        policy.check(corners.len(), count, "face is not a triangle")?;

        let [a, b, c] = corners;
        Ok(Face::new(a, b, c).with_material(self.current_material.clone()))
    }
}

impl ModelParser for ObjParser {
    fn model(&self) -> &Model {
        &self.model
    }
    fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }
    fn parse_line(&mut self, line: &str) -> Result<(), LineError> {
        let mut tokens = line.split_whitespace();

        let token = match tokens.next() {
            Some(token) if !token.starts_with('#') => token,
            _ => return Ok(()),
        };

        let keyword = match Keyword::try_from(token) {
            Err(UnknownKeywordError(unknown)) => {
                tracing::trace!(keyword = %unknown, "ignoring line");
                *self.model.unknown_keywords.entry(unknown).or_default() += 1;
                return Ok(());
            }
            Ok(keyword) => keyword,
        };

        match keyword {
            Keyword::UseMaterial => {
                let name = tokens.next().ok_or(TokenCountError::new(1, 0))?;
                self.model.note_material(name);
                self.current_material = Some(name.to_owned());
            }
            Keyword::MaterialLibrary => {
                self.model
                    .material_libraries
                    .extend(tokens.map(str::to_owned));
            }
            Keyword::GeometricVertex => self.add_vertex(Point3::from_tokens(tokens)?),
            Keyword::TextureVertex => self.add_tex_coord(TexCoord2::from_tokens(tokens)?),
            Keyword::VertexNormal => self.add_normal(Point3::from_tokens(tokens)?),
            Keyword::Face => {
                let face = self.parse_face(tokens)?;
                self.add_face(face);
            }
        }

        Ok(())
    }
}
