//! Text serializers for a parsed [`Model`](crate::Model).
//!
//! Every exporter borrows the model and implements [`std::fmt::Display`], so
//! `to_string()` can be called any number of times with identical results.

mod dump;
mod off;
mod ply;
mod wavefront;

pub use dump::*;
pub use off::*;
pub use ply::*;
pub use wavefront::*;
