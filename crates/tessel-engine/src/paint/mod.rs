//! Color model shared between vertices and renderers.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
