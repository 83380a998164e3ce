use std::fmt;

use crate::{Model, Result};

/// Writes an Object File Format mesh: positions and 0-based triangles.
#[derive(Debug, Clone)]
pub struct OffExporter<'a> {
    model: &'a Model,
    faces: Vec<[usize; 3]>,
}

impl<'a> OffExporter<'a> {
    pub fn new(model: &'a Model) -> Result<Self> {
        let faces = model.triangles()?;
        Ok(Self { model, faces })
    }
}

impl fmt::Display for OffExporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OFF")?;
        writeln!(f, "{} {} 0", self.model.vertices.len(), self.faces.len())?;

        for vertex in &self.model.vertices {
            writeln!(f, "{vertex}")?;
        }
        for [a, b, c] in &self.faces {
            writeln!(f, "3 {a} {b} {c}")?;
        }

        Ok(())
    }
}
