use model_converter::{load_model, Error, ParseOptions, Result};

use std::env;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .ok_or(Error::Generic("model file path not specified"))?;

    let model = load_model(&path, ParseOptions::default())?;

    println!("{model:#?}");
    println!("vertices:   {}", model.vertices.len());
    println!("tex coords: {}", model.tex_coords.len());
    println!("normals:    {}", model.normals.len());
    println!("faces:      {}", model.faces.len());
    println!("materials:  {}", model.materials.join(", "));

    if let Some((min, max)) = model.bounds() {
        println!("bounds:     ({min}) .. ({max})");
    }

    let mut unknown: Vec<_> = model.unknown_keywords.iter().collect();
    unknown.sort();
    for (keyword, count) in unknown {
        println!("ignored '{keyword}': {count}");
    }

    Ok(())
}
