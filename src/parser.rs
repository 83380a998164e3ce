use std::fs;
use std::io::Read;
use std::path::Path;

use crate::{bail, Error, Face, LineError, Model, Point3, Result, TexCoord2, TokenCountError};

/// How faces that are not three full references are treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacePolicy {
    /// Missing corners and components are left empty, surplus ones dropped.
    #[default]
    Lenient,
    /// Anything other than three corners of three components is an error.
    Strict,
}

impl FacePolicy {
    /// Checks a corner or component count against what a triangle needs.
    /// Under [`FacePolicy::Lenient`] a mismatch is logged and let through.
    pub fn check(self, expected: usize, got: usize, what: &str) -> Result<(), LineError> {
        if got == expected {
            return Ok(());
        }
        if self == FacePolicy::Strict {
            bail!(TokenCountError::new(expected, got));
        }
        tracing::warn!(expected, got, "{what}");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    pub face_policy: FacePolicy,
}

/// Line-oriented model parser.
///
/// Implementors own the [`Model`] they fill and decide what a line means;
/// reading input and feeding it line by line is shared.
pub trait ModelParser {
    fn model(&self) -> &Model;
    fn model_mut(&mut self) -> &mut Model;
    fn parse_line(&mut self, line: &str) -> Result<(), LineError>;

    fn add_vertex(&mut self, vertex: Point3) {
        self.model_mut().vertices.push(vertex);
    }
    fn add_tex_coord(&mut self, tex_coord: TexCoord2) {
        self.model_mut().tex_coords.push(tex_coord);
    }
    fn add_normal(&mut self, normal: Point3) {
        self.model_mut().normals.push(normal);
    }
    fn add_face(&mut self, face: Face) {
        self.model_mut().faces.push(face);
    }
    /// Splits `text` on `\n` and parses the lines in order, stopping at the
    /// first line that fails.
    fn parse_str(&mut self, text: &str) -> Result<()> {
        for (idx, line) in text.split('\n').enumerate() {
            self.parse_line(line)
                .map_err(|source| Error::Line {
                    line: idx + 1,
                    source,
                })?;
        }
        Ok(())
    }
    /// Reads `reader` to the end before parsing anything.
    fn parse_reader(&mut self, mut reader: impl Read) -> Result<()>
    where
        Self: Sized,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse_str(&text)
    }
    fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<()>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "parsing model file");

        let text = fs::read_to_string(path)?;
        self.parse_str(&text)?;

        let model = self.model();
        tracing::debug!(
            vertices = model.vertices.len(),
            tex_coords = model.tex_coords.len(),
            normals = model.normals.len(),
            faces = model.faces.len(),
            "parsed model file"
        );
        Ok(())
    }
}
