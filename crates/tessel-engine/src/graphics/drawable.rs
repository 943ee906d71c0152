use super::{PrimitiveType, RenderStates, Vertex};

/// Something that can submit itself to a [`RenderTarget`].
///
/// Implementors push their geometry with the given states. Whether a drawable
/// adds its own transform is its choice; [`super::VertexArray`] does not.
pub trait Drawable {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates);
}

/// Destination for vertex geometry.
pub trait RenderTarget {
    /// Submits a vertex run grouped by `primitive`, rendered with `states`.
    fn draw_vertices(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates);

    /// Lets `drawable` submit itself to this target.
    #[inline]
    fn draw(&mut self, drawable: &dyn Drawable, states: &RenderStates)
    where
        Self: Sized,
    {
        drawable.draw(self, states);
    }
}
