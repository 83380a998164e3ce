use std::fmt;

use crate::{Model, Result};

/// Writes an ASCII PLY 1.0 file holding positions and triangles.
///
/// Face indices are resolved when the exporter is built, so a model with
/// dangling indices is rejected up front instead of producing a broken file.
#[derive(Debug, Clone)]
pub struct PlyExporter<'a> {
    model: &'a Model,
    faces: Vec<[usize; 3]>,
}

impl<'a> PlyExporter<'a> {
    pub fn new(model: &'a Model) -> Result<Self> {
        let faces = model.triangles()?;
        Ok(Self { model, faces })
    }
}

impl fmt::Display for PlyExporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ply")?;
        writeln!(f, "format ascii 1.0")?;
        writeln!(f, "comment generated by model-converter")?;
        writeln!(f, "element vertex {}", self.model.vertices.len())?;
        writeln!(f, "property float32 x")?;
        writeln!(f, "property float32 y")?;
        writeln!(f, "property float32 z")?;
        writeln!(f, "element face {}", self.faces.len())?;
        writeln!(f, "property list uint8 int32 vertex_indices")?;
        writeln!(f, "end_header")?;

        for vertex in &self.model.vertices {
            writeln!(f, "{vertex}")?;
        }
        for [a, b, c] in &self.faces {
            writeln!(f, "3 {a} {b} {c}")?;
        }

        Ok(())
    }
}
