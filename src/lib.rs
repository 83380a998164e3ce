//! Reads triangle meshes from Wavefront OBJ, ASCII PLY or OFF into a
//! [`Model`] and writes them back out as an internal dump, OBJ, PLY or OFF.

mod error;
mod export;
mod format;
mod geometry;
mod model;
mod obj;
mod off;
mod parser;
mod ply;
mod util;

pub use error::*;
pub use export::*;
pub use format::*;
pub use geometry::*;
pub use model::*;
pub use obj::*;
pub use off::*;
pub use parser::*;
pub use ply::*;

pub(crate) use util::bail;

pub type Result<T, E = Error> = std::result::Result<T, E>;
