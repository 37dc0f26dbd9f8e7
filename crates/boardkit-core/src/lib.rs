//! # Boardkit Core
//!
//! Core types for the boardkit item model and settings stack:
//! integer-unit geometry, fixed-point angles, drawing layers with
//! front/back pairing, and the RGBA color type used by color themes.

pub mod color;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod units;

pub use color::{Color, LayerColors};
pub use error::PlotError;
pub use geometry::{rotate_point, Angle, BoundingBox, Point, Vector};
pub use layer::Layer;
