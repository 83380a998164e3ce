use std::fmt;

use crate::Model;

/// Writes a Wavefront OBJ file that [`ObjParser`](crate::ObjParser) reads
/// back into the same geometry.
#[derive(Debug, Clone, Copy)]
pub struct ObjExporter<'a> {
    model: &'a Model,
}

impl<'a> ObjExporter<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }
}

impl fmt::Display for ObjExporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;

        if !model.material_libraries.is_empty() {
            writeln!(f, "mtllib {}", model.material_libraries.join(" "))?;
            writeln!(f)?;
        }

        for vertex in &model.vertices {
            writeln!(f, "v {vertex}")?;
        }
        writeln!(f)?;

        if !model.tex_coords.is_empty() {
            for tex_coord in &model.tex_coords {
                writeln!(f, "vt {tex_coord}")?;
            }
            writeln!(f)?;
        }

        if !model.normals.is_empty() {
            for normal in &model.normals {
                writeln!(f, "vn {normal}")?;
            }
            writeln!(f)?;
        }

        // Materials no face uses are only kept by naming them before the
        // first face that has one, in the recorded order.
        let mut used: Vec<&str> = Vec::new();
        for material in model.faces.iter().filter_map(|face| face.material.as_deref()) {
            if !used.contains(&material) {
                used.push(material);
            }
        }
        let mut preamble = (used != model.materials).then_some(&model.materials[..]);

        let mut current_material = None;
        for face in &model.faces {
            if let (Some(material), Some(names)) = (face.material.as_deref(), preamble) {
                for name in names {
                    writeln!(f, "usemtl {name}")?;
                }
                current_material = names.last().map(String::as_str);
                preamble = None;
                if current_material != Some(material) {
                    current_material = Some(material);
                    writeln!(f, "usemtl {material}")?;
                }
            } else if face.material.is_some() && face.material.as_deref() != current_material {
                current_material = face.material.as_deref();
                writeln!(f, "usemtl {}", current_material.unwrap_or_default())?;
            }
            writeln!(f, "f {face}")?;
        }
        for name in preamble.into_iter().flatten() {
            writeln!(f, "usemtl {name}")?;
        }

        Ok(())
    }
}
