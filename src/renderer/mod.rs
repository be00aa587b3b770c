//! Rendering support
//!
//! Turns a frame snapshot into a flat list of colored quads. Drawing them
//! (canvas, GPU) is left to the host.

pub mod shapes;
pub mod vertex;

pub use shapes::build_frame;
pub use vertex::{Quad, as_bytes};
