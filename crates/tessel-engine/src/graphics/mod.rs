//! Drawable geometry and the render-target contract.
//!
//! Responsibilities:
//! - vertex records and primitive grouping tags
//! - render-state bundles passed through to targets untouched
//! - the `Drawable` / `RenderTarget` pair that connects geometry to backends
//!
//! Backends live elsewhere: `scene::DrawList` records submissions on the CPU,
//! `render::VertexRenderer` turns recorded submissions into GPU draw calls.

mod drawable;
mod primitive;
mod states;
mod transform;
mod vertex;
mod vertex_array;

pub use drawable::{Drawable, RenderTarget};
pub use primitive::PrimitiveType;
pub use states::{BlendMode, RenderStates, TextureId};
pub use transform::Transform;
pub use vertex::Vertex;
pub use vertex_array::VertexArray;
