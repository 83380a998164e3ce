use std::fmt;

use crate::Model;

/// Writes the internal dump format.
///
/// Positions are tagged `n` and every face lands on one shared `f` line, so
/// the output is not OBJ and does not parse back into the same model.
/// Material names are not written.
#[derive(Debug, Clone, Copy)]
pub struct DumpExporter<'a> {
    model: &'a Model,
}

impl<'a> DumpExporter<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }
}

impl fmt::Display for DumpExporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.model.vertices {
            writeln!(f, "n {vertex}")?;
        }
        writeln!(f)?;

        for tex_coord in &self.model.tex_coords {
            writeln!(f, "vt {tex_coord}")?;
        }
        writeln!(f)?;

        for normal in &self.model.normals {
            writeln!(f, "vn {normal}")?;
        }
        writeln!(f)?;

        if let Some((first, rest)) = self.model.faces.split_first() {
            write!(f, "f {first}")?;
            for face in rest {
                write!(f, " {face}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
