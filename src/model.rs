use std::collections::HashMap;
use std::fmt;

use crate::{Error, Face, Point3, Result, TexCoord2, VertexIndex};

/// The sequence a face index points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Vertex,
    TexCoord,
    Normal,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Vertex => "vertex",
            Element::TexCoord => "texture coordinate",
            Element::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// Geometry accumulated by a parser, in file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Model {
    pub vertices: Vec<Point3>,
    pub normals: Vec<Point3>,
    pub tex_coords: Vec<TexCoord2>,
    pub faces: Vec<Face>,
    /// Material names seen through `usemtl`, first occurrence first.
    pub materials: Vec<String>,
    /// Library files named by `mtllib`. They are never opened.
    pub material_libraries: Vec<String>,
    pub unknown_keywords: HashMap<String, usize>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len_of(&self, element: Element) -> usize {
        match element {
            Element::Vertex => self.vertices.len(),
            Element::TexCoord => self.tex_coords.len(),
            Element::Normal => self.normals.len(),
        }
    }
    /// Turns a face index as written in the file into an offset into the
    /// matching sequence. Negative indices count back from the end.
    pub fn resolve(&self, element: Element, index: VertexIndex) -> Result<usize> {
        let len = self.len_of(element);
        let resolved = match index.signum() {
            1 => Some(index.unsigned_abs() - 1),
            -1 => len.checked_sub(index.unsigned_abs()),
            _ => None,
        };

        match resolved {
            Some(offset) if offset < len => Ok(offset),
            _ => Err(Error::IndexOutOfRange {
                element,
                index,
                len,
            }),
        }
    }
    /// Resolves every face to three vertex offsets. Faces with a corner
    /// lacking a position index are rejected.
    pub fn triangles(&self) -> Result<Vec<[usize; 3]>> {
        self.faces
            .iter()
            .map(|face| -> Result<[usize; 3]> {
                let mut resolved = [0; 3];
                for (offset, corner) in resolved.iter_mut().zip(face.corners()) {
                    let index = corner.position.ok_or(Error::MissingIndex {
                        element: Element::Vertex,
                    })?;
                    *offset = self.resolve(Element::Vertex, index)?;
                }
                Ok(resolved)
            })
            .collect()
    }
    /// Component-wise minimum and maximum of all vertex positions.
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        let (first, rest) = self.vertices.split_first()?;

        Some(
            rest.iter()
                .fold((*first, *first), |(min, max), vertex| {
                    (min.min(*vertex), max.max(*vertex))
                }),
        )
    }
    pub(crate) fn note_material(&mut self, name: &str) {
        if !self.materials.iter().any(|material| material == name) {
            self.materials.push(name.to_owned());
        }
    }
}
