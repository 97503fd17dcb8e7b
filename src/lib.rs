//! Converts sampled vector contours into simplified, hole-free polygon rings for fill output.
//!
//! A shape's curve is walked at a fixed resolution and split wherever it jumps, each run is
//! simplified, and for filled shapes every hole is bridged into the ring that contains it so
//! each output polygon is a single closed outline.

pub mod config;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod sampler;
pub mod simplify;
pub mod unpack;
pub mod utils;

pub use config::ConversionConfig;
pub use curve::{Circle, Curve, Path, PathBuilder, Segment};
pub use error::{ContourError, Result};
pub use pipeline::{convert_shape, convert_shapes, ConvertedShape, Shape};
pub use unpack::unpack;
