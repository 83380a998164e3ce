use std::path::Path;

use clap::ValueEnum;

use crate::{
    DumpExporter, Error, Model, ModelParser, ObjExporter, ObjParser, OffExporter, OffParser,
    ParseOptions, PlyExporter, PlyParser, Result,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Format {
    /// Internal dump: `n` positions and a single aggregated `f` line.
    #[default]
    Dump,
    /// Wavefront OBJ.
    Obj,
    /// ASCII PLY, positions and faces only.
    Ply,
    /// Object File Format, positions and faces only.
    Off,
}

impl Format {
    /// Picks the format from the file extension, ignoring case. The dump
    /// format has no extension of its own.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("obj") => Ok(Format::Obj),
            Some("ply") => Ok(Format::Ply),
            Some("off") => Ok(Format::Off),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_owned(),
            }),
        }
    }
    pub fn export(self, model: &Model) -> Result<String> {
        let text = match self {
            Format::Dump => DumpExporter::new(model).to_string(),
            Format::Obj => ObjExporter::new(model).to_string(),
            Format::Ply => PlyExporter::new(model)?.to_string(),
            Format::Off => OffExporter::new(model)?.to_string(),
        };
        Ok(text)
    }
}

fn parse_with(mut parser: impl ModelParser, path: &Path) -> Result<Model> {
    parser.parse_file(path)?;
    Ok(parser.model().clone())
}

/// Parses `path` with the parser its extension names.
pub fn load_model(path: impl AsRef<Path>, options: ParseOptions) -> Result<Model> {
    let path = path.as_ref();

    match Format::from_path(path)? {
        Format::Obj => parse_with(ObjParser::with_options(options), path),
        Format::Ply => parse_with(PlyParser::with_options(options), path),
        Format::Off => parse_with(OffParser::with_options(options), path),
        Format::Dump => Err(Error::UnsupportedFormat {
            path: path.to_owned(),
        }),
    }
}
