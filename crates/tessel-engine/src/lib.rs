//! Tessel engine crate.
//!
//! 2D vertex arrays, the render-target contract they draw through, and the
//! CPU and GPU targets that implement it.

pub mod coords;
pub mod device;
pub mod graphics;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

pub use coords::{Rect, Vec2};
pub use graphics::{
    BlendMode, Drawable, PrimitiveType, RenderStates, RenderTarget, TextureId, Transform, Vertex,
    VertexArray,
};
pub use paint::Color;
pub use scene::DrawList;
