use model_converter::{load_model, FacePolicy, Format, ParseOptions, Result};

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "model-converter")]
#[command(about = "Convert triangle meshes between OBJ, PLY and OFF")]
#[command(version)]
struct Cli {
    /// Input model (.obj, .ply or .off)
    #[arg(env = "OBJ_PATH", default_value = "demos/cube.obj")]
    input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format. Defaults to the output extension, or the dump format
    /// when writing to stdout
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Reject faces that are not triangles, and OBJ corners that are not full
    /// v/vt/vn references
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let face_policy = match cli.strict {
        true => FacePolicy::Strict,
        false => FacePolicy::Lenient,
    };
    let model = load_model(&cli.input, ParseOptions { face_policy })?;

    let format = match (cli.format, &cli.output) {
        (Some(format), _) => format,
        (None, Some(path)) => Format::from_path(path)?,
        (None, None) => Format::Dump,
    };
    let text = format.export(&model)?;

    match cli.output {
        Some(path) => {
            fs::write(&path, text)?;
            tracing::info!(path = %path.display(), format = ?format, "model written");
        }
        None => println!("{text}"),
    }

    Ok(())
}
