use super::Transform;

/// How drawn pixels are combined with the target.
///
/// Colors are premultiplied, so blend factors assume premultiplied sources.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BlendMode {
    /// `src + dst * (1 - src.a)`.
    #[default]
    Alpha,
    /// `src + dst`.
    Add,
    /// `src * dst`.
    Multiply,
    /// Overwrite the destination.
    None,
}

/// Opaque texture handle. Resolution to GPU resources belongs to the renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// State bundle passed alongside geometry to a render target.
///
/// Drawables forward it untouched; targets decide how to apply each field.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RenderStates {
    pub blend_mode: BlendMode,
    pub transform: Transform,
    pub texture: Option<TextureId>,
}

impl RenderStates {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    #[inline]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn default_states() {
        let s = RenderStates::default();
        assert_eq!(s.blend_mode, BlendMode::Alpha);
        assert!(s.transform.is_identity());
        assert_eq!(s.texture, None);
    }

    #[test]
    fn builders_set_fields() {
        let t = Transform::translation(Vec2::new(1.0, 2.0));
        let s = RenderStates::new()
            .with_blend_mode(BlendMode::Add)
            .with_transform(t)
            .with_texture(TextureId(7));
        assert_eq!(s.blend_mode, BlendMode::Add);
        assert_eq!(s.transform, t);
        assert_eq!(s.texture, Some(TextureId(7)));
    }
}
