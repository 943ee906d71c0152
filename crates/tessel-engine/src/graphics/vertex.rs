use crate::coords::Vec2;
use crate::paint::Color;

/// A point with a color and texture coordinates.
///
/// Only `position` is interpreted on the CPU (bounds, transforms).
/// `color` and `tex_coords` are carried verbatim to the renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Color,
    pub tex_coords: Vec2,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec2, color: Color, tex_coords: Vec2) -> Self {
        Self { position, color, tex_coords }
    }

    #[inline]
    pub const fn with_color(position: Vec2, color: Color) -> Self {
        Self::new(position, color, Vec2::zero())
    }

    #[inline]
    pub const fn with_tex_coords(position: Vec2, tex_coords: Vec2) -> Self {
        Self::new(position, Color::white(), tex_coords)
    }
}

/// Position (0, 0), opaque white, texture coordinates (0, 0).
impl Default for Vertex {
    #[inline]
    fn default() -> Self {
        Self::new(Vec2::zero(), Color::white(), Vec2::zero())
    }
}

impl From<Vec2> for Vertex {
    #[inline]
    fn from(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }
}
