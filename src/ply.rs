use crate::{
    bail, CornerRef, Face, LineError, Model, ModelParser, ParseOptions, Point3, TokenCountError,
    UnknownKeywordError, VertexIndex,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKeyword {
    Format,
    Comment,
    Element,
    Property,
    EndHeader,
}

impl TryFrom<&str> for HeaderKeyword {
    type Error = UnknownKeywordError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        use HeaderKeyword::*;

        let keyword = match token {
            "format" => Format,
            "comment" | "obj_info" => Comment,
            "element" => Element,
            "property" => Property,
            "end_header" => EndHeader,
            unknown => return Err(UnknownKeywordError::new(unknown)),
        };

        Ok(keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyProperty {
    pub name: String,
    /// `property list <count type> <item type> <name>` rather than a scalar.
    pub is_list: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyElement {
    pub name: String,
    pub count: usize,
    pub properties: Vec<PlyProperty>,
}

impl PlyElement {
    fn position_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Magic,
    Header,
    Body {
        element: usize,
        row: usize,
    },
}

/// Parser for ASCII PLY 1.0 files.
///
/// Reads `x y z` (and `nx ny nz` when declared) from the `vertex` element
/// and `vertex_indices` from the `face` element. Rows of other elements are
/// skipped. PLY indices are 0-based; they are stored shifted to the 1-based
/// convention the rest of the crate uses.
#[derive(Debug, Default, Clone)]
pub struct PlyParser {
    model: Model,
    elements: Vec<PlyElement>,
    state: State,
    options: ParseOptions,
}

impl PlyParser {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }
    pub fn elements(&self) -> &[PlyElement] {
        &self.elements
    }
    pub fn into_model(self) -> Model {
        self.model
    }
    fn parse_header<'a>(
        &mut self,
        keyword: &str,
        mut tokens: impl Iterator<Item = &'a str>,
    ) -> Result<(), LineError> {
        let keyword = match HeaderKeyword::try_from(keyword) {
            Err(UnknownKeywordError(unknown)) => {
                tracing::trace!(keyword = %unknown, "ignoring header line");
                *self.model.unknown_keywords.entry(unknown).or_default() += 1;
                return Ok(());
            }
            Ok(keyword) => keyword,
        };

        match keyword {
            HeaderKeyword::Comment => {}
            HeaderKeyword::Format => {
                let format: Vec<&str> = tokens.collect();
                if format != ["ascii", "1.0"] {
                    bail!(LineError::Unsupported(format!("format '{}'", format.join(" "))));
                }
            }
            HeaderKeyword::Element => {
                let name = tokens.next().ok_or(TokenCountError::new(2, 0))?;
                let count = tokens.next().ok_or(TokenCountError::new(2, 1))?;
                self.elements.push(PlyElement {
                    name: name.to_owned(),
                    count: count.parse().map_err(|_| LineError::malformed(count))?,
                    properties: Vec::new(),
                });
            }
            HeaderKeyword::Property => {
                let tokens: Vec<&str> = tokens.collect();
                let is_list = tokens.first() == Some(&"list");
                let expected = if is_list { 4 } else { 2 };
                if tokens.len() != expected {
                    bail!(TokenCountError::new(expected, tokens.len()));
                }

                let element = self
                    .elements
                    .last_mut()
                    .ok_or(LineError::unexpected("property"))?;
                element.properties.push(PlyProperty {
                    name: tokens[expected - 1].to_owned(),
                    is_list,
                });
            }
            HeaderKeyword::EndHeader => {
                self.state = State::Body { element: 0, row: 0 };
                self.skip_finished_elements();
            }
        }

        Ok(())
    }
    /// Moves past elements whose rows have all been read.
    fn skip_finished_elements(&mut self) {
        while let State::Body { element, row } = self.state {
            match self.elements.get(element) {
                Some(current) if row >= current.count => {
                    self.state = State::Body {
                        element: element + 1,
                        row: 0,
                    };
                }
                _ => break,
            }
        }
    }
    fn parse_row(&mut self, element: usize, line: &str) -> Result<(), LineError> {
        let element = &self.elements[element];
        let values = split_row(element, line)?;

        match element.name.as_str() {
            "vertex" => {
                let scalar = |name: &str| -> Result<Option<f32>, LineError> {
                    match element.position_of(name).and_then(|i| values[i].first()) {
                        Some(token) => token
                            .parse()
                            .map(Some)
                            .map_err(|_| LineError::malformed(*token)),
                        None => Ok(None),
                    }
                };

                let position = Point3::new(
                    scalar("x")?.unwrap_or_default(),
                    scalar("y")?.unwrap_or_default(),
                    scalar("z")?.unwrap_or_default(),
                );
                let normal = match (scalar("nx")?, scalar("ny")?, scalar("nz")?) {
                    (Some(x), Some(y), Some(z)) => Some(Point3::new(x, y, z)),
                    _ => None,
                };

                self.add_vertex(position);
                if let Some(normal) = normal {
                    self.add_normal(normal);
                }
            }
            "face" => {
                let indices = element
                    .position_of("vertex_indices")
                    .or_else(|| element.position_of("vertex_index"))
                    .map(|i| values[i].clone())
                    .unwrap_or_default();
                let has_normals = self.has_vertex_normals();

                self.options
                    .face_policy
                    .check(3, indices.len(), "face is not a triangle")?;

                let mut corners = [CornerRef::default(); 3];
                for (corner, token) in corners.iter_mut().zip(&indices) {
                    let index = token
                        .parse::<VertexIndex>()
                        .map_err(|_| LineError::malformed(*token))?
                        + 1;
                    *corner = CornerRef::new(Some(index), None, has_normals.then_some(index));
                }

                let [a, b, c] = corners;
                self.add_face(Face::new(a, b, c));
            }
            _ => {}
        }

        Ok(())
    }
    fn has_vertex_normals(&self) -> bool {
        self.elements
            .iter()
            .find(|element| element.name == "vertex")
            .is_some_and(|vertex| {
                ["nx", "ny", "nz"]
                    .iter()
                    .all(|name| vertex.position_of(name).is_some())
            })
    }
}

/// Splits a body row into one token slice per property of `element`.
fn split_row<'a>(element: &PlyElement, line: &'a str) -> Result<Vec<Vec<&'a str>>, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut values = Vec::with_capacity(element.properties.len());
    let mut cursor = 0;

    for property in &element.properties {
        let (start, end) = match property.is_list {
            true => {
                let length = tokens
                    .get(cursor)
                    .ok_or(TokenCountError::new(cursor + 1, tokens.len()))?;
                let length: usize = length
                    .parse()
                    .map_err(|_| LineError::malformed(*length))?;
                (cursor + 1, cursor + 1 + length)
            }
            false => (cursor, cursor + 1),
        };

        if end > tokens.len() {
            bail!(TokenCountError::new(end, tokens.len()));
        }
        values.push(tokens[start..end].to_vec());
        cursor = end;
    }

    Ok(values)
}

impl ModelParser for PlyParser {
    fn model(&self) -> &Model {
        &self.model
    }
    fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }
    fn parse_line(&mut self, line: &str) -> Result<(), LineError> {
        let mut tokens = line.split_whitespace();
        let token = match tokens.next() {
            Some(token) => token,
            None => return Ok(()),
        };

        match self.state {
            State::Magic => {
                if token != "ply" {
                    bail!(LineError::unexpected(token));
                }
                self.state = State::Header;
            }
            State::Header => self.parse_header(token, tokens)?,
            State::Body { element, row } => {
                if element >= self.elements.len() {
                    tracing::trace!("ignoring line after last element");
                    return Ok(());
                }
                self.parse_row(element, line)?;
                self.state = State::Body {
                    element,
                    row: row + 1,
                };
                self.skip_finished_elements();
            }
        }

        Ok(())
    }
}
