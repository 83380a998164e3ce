use std::fmt;

use crate::{LineError, TokenCountError};

/// Face index exactly as written in the source file: 1-based, or negative
/// when relative to the end of the sequence.
pub type VertexIndex = isize;

/// A vertex position or a vertex normal. Normals are not guaranteed to be
/// unit length.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
    /// Builds a point from the first three tokens. Trailing tokens, such as
    /// the optional `w` of a vertex, are ignored.
    pub fn from_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Self, LineError> {
        let [x, y, z]: [f32; 3] = parse_coordinates(tokens)?;
        Ok(Self::new(x, y, z))
    }
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }
}

impl From<[f32; 3]> for Point3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TexCoord2 {
    pub u: f32,
    pub v: f32,
}

impl TexCoord2 {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
    /// Builds a texture coordinate from the first two tokens. A third (`w`)
    /// coordinate is read past and dropped.
    pub fn from_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Self, LineError> {
        let [u, v]: [f32; 2] = parse_coordinates(tokens)?;
        Ok(Self::new(u, v))
    }
}

impl fmt::Display for TexCoord2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.u, self.v)
    }
}

fn parse_coordinates<'a, const N: usize>(
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<[f32; N], LineError> {
    let mut result = [0f32; N];
    for (idx, item) in result.iter_mut().enumerate() {
        let token = tokens.next().ok_or(TokenCountError::new(N, idx))?;
        *item = token.parse().map_err(|_| LineError::malformed(token))?;
    }

    Ok(result)
}

fn parse_index(token: &str) -> Result<Option<VertexIndex>, LineError> {
    if token.is_empty() {
        return Ok(None);
    }
    token
        .parse()
        .map(Some)
        .map_err(|_| LineError::malformed(token))
}

/// Set of indices for a single face corner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerRef {
    pub position: Option<VertexIndex>,
    pub texture: Option<VertexIndex>,
    pub normal: Option<VertexIndex>,
}

impl CornerRef {
    pub const fn new(
        position: Option<VertexIndex>,
        texture: Option<VertexIndex>,
        normal: Option<VertexIndex>,
    ) -> Self {
        Self {
            position,
            texture,
            normal,
        }
    }
    /// Builds a corner from the `/`-separated components of a reference.
    /// Absent or empty components are `None`; components past the third are
    /// not looked at.
    pub fn from_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Self, LineError> {
        let mut indices = tokens.map(parse_index);
        let mut next = || indices.next().transpose().map(Option::flatten);

        Ok(Self {
            position: next()?,
            texture: next()?,
            normal: next()?,
        })
    }
}

impl fmt::Display for CornerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(position) = self.position {
            write!(f, "{position}")?;
        }
        match (self.texture, self.normal) {
            (None, None) => Ok(()),
            (Some(texture), None) => write!(f, "/{texture}"),
            (None, Some(normal)) => write!(f, "//{normal}"),
            (Some(texture), Some(normal)) => write!(f, "/{texture}/{normal}"),
        }
    }
}

/// A triangle and the material that was current when it was declared.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    pub a: CornerRef,
    pub b: CornerRef,
    pub c: CornerRef,
    pub material: Option<String>,
}

impl Face {
    pub fn new(a: CornerRef, b: CornerRef, c: CornerRef) -> Self {
        Self {
            a,
            b,
            c,
            material: None,
        }
    }
    pub fn with_material(mut self, material: Option<String>) -> Self {
        self.material = material;
        self
    }
    /// Builds a face from a flattened token sequence laid out as
    /// `a aTex aNorm b bTex bNorm c cTex cNorm mtl`.
    ///
    /// Slots are filled positionally. A short sequence leaves the trailing
    /// slots empty, and a sequence built from partial corner references
    /// (`1 2 3`) lands in the wrong slots.
    pub fn from_flattened<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self, LineError> {
        let mut tokens = tokens.into_iter();
        let mut slots = [None; 9];

        for slot in slots.iter_mut() {
            match tokens.next() {
                Some(token) => *slot = parse_index(token)?,
                None => break,
            }
        }

        let [a, a_tex, a_norm, b, b_tex, b_norm, c, c_tex, c_norm] = slots;

        Ok(Self {
            a: CornerRef::new(a, a_tex, a_norm),
            b: CornerRef::new(b, b_tex, b_norm),
            c: CornerRef::new(c, c_tex, c_norm),
            material: tokens.next().map(str::to_owned),
        })
    }
    pub fn corners(&self) -> [CornerRef; 3] {
        [self.a, self.b, self.c]
    }
    /// Returns the nine index slots in `a aTex aNorm b bTex bNorm c cTex cNorm`
    /// order.
    pub fn indices(&self) -> [Option<VertexIndex>; 9] {
        let [a, b, c] = self.corners();
        [
            a.position, a.texture, a.normal, b.position, b.texture, b.normal, c.position,
            c.texture, c.normal,
        ]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.b, self.c)
    }
}
