use core::ops::Range;

use crate::graphics::{PrimitiveType, RenderStates, RenderTarget, Vertex};

/// A single recorded submission: how to group a vertex run and how to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub primitive: PrimitiveType,
    pub states: RenderStates,
    /// Range into [`DrawList::vertices`].
    pub range: Range<usize>,
}

impl DrawItem {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.range.len()
    }
}

/// Recorded draw stream for a frame.
///
/// Geometry from every submission is copied into one shared vertex buffer, so the
/// recording outlives the drawables that produced it.
///
/// Performance characteristics:
/// - `draw_vertices()` is O(n) in the submitted vertex count
/// - consecutive list-type submissions with equal states share one item
/// - `clear()` keeps allocated capacity; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    vertices: Vec<Vertex>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and geometry. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.vertices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in submission order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Returns all recorded geometry.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the geometry of one item.
    #[inline]
    pub fn vertices_of(&self, item: &DrawItem) -> &[Vertex] {
        &self.vertices[item.range.clone()]
    }

    /// (vertex capacity, item capacity)
    #[inline]
    pub fn capacity(&self) -> (usize, usize) {
        (self.vertices.capacity(), self.items.capacity())
    }

    /// Whether a new submission can extend the last item instead of starting one.
    fn can_merge(last: &DrawItem, primitive: PrimitiveType, states: &RenderStates) -> bool {
        let Some(group) = primitive.group_size() else {
            return false;
        };
        last.primitive == primitive
            && last.states == *states
            // an incomplete trailing primitive would swallow the new vertices
            && last.vertex_count() % group == 0
    }
}

impl RenderTarget for DrawList {
    fn draw_vertices(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates) {
        if vertices.is_empty() {
            log::trace!("DrawList: empty {primitive:?} submission dropped");
            return;
        }

        let start = self.vertices.len();
        self.vertices.extend_from_slice(vertices);
        let end = self.vertices.len();

        if let Some(last) = self.items.last_mut() {
            if Self::can_merge(last, primitive, states) {
                debug_assert_eq!(last.range.end, start);
                last.range.end = end;
                return;
            }
        }

        self.items.push(DrawItem {
            primitive,
            states: *states,
            range: start..end,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::graphics::{BlendMode, TextureId, VertexArray};

    fn array(primitive: PrimitiveType, points: &[(f32, f32)]) -> VertexArray {
        let mut va: VertexArray = points.iter().map(|&p| Vertex::from(Vec2::from(p))).collect();
        va.set_primitive_type(primitive);
        va
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn records_drawable_geometry() {
        let va = array(PrimitiveType::LinesStrip, &[(10.0, 0.0), (20.0, 0.0), (30.0, 5.0)]);
        let mut list = DrawList::new();
        list.draw(&va, &RenderStates::default());

        assert_eq!(list.items().len(), 1);
        let item = &list.items()[0];
        assert_eq!(item.primitive, PrimitiveType::LinesStrip);
        assert_eq!(list.vertices_of(item), va.vertices());
    }

    #[test]
    fn empty_submission_is_dropped() {
        let mut list = DrawList::new();
        list.draw(&VertexArray::new(), &RenderStates::default());
        assert!(list.is_empty());
        assert!(list.vertices().is_empty());
    }

    #[test]
    fn recording_is_a_copy() {
        let mut va = array(PrimitiveType::Points, &[(1.0, 1.0)]);
        let mut list = DrawList::new();
        list.draw(&va, &RenderStates::default());

        va[0].position = Vec2::new(9.0, 9.0);
        assert_eq!(list.vertices()[0].position, Vec2::new(1.0, 1.0));
    }

    // ── merging ───────────────────────────────────────────────────────────

    #[test]
    fn merges_consecutive_triangle_lists() {
        let a = array(PrimitiveType::Triangles, &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let b = array(PrimitiveType::Triangles, &[(5.0, 5.0), (6.0, 5.0), (5.0, 6.0)]);
        let mut list = DrawList::new();
        list.draw(&a, &RenderStates::default());
        list.draw(&b, &RenderStates::default());

        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].range, 0..6);
    }

    #[test]
    fn never_merges_strips() {
        let a = array(PrimitiveType::TrianglesStrip, &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let mut list = DrawList::new();
        list.draw(&a, &RenderStates::default());
        list.draw(&a, &RenderStates::default());

        assert_eq!(list.items().len(), 2);
        assert_eq!(list.items()[1].range, 3..6);
    }

    #[test]
    fn does_not_merge_different_states() {
        let a = array(PrimitiveType::Lines, &[(0.0, 0.0), (1.0, 0.0)]);
        let mut list = DrawList::new();
        list.draw(&a, &RenderStates::default());
        list.draw(&a, &RenderStates::default().with_blend_mode(BlendMode::Add));
        list.draw(&a, &RenderStates::default().with_texture(TextureId(1)));

        assert_eq!(list.items().len(), 3);
    }

    #[test]
    fn does_not_merge_different_primitives() {
        let a = array(PrimitiveType::Points, &[(0.0, 0.0), (1.0, 0.0)]);
        let b = array(PrimitiveType::Lines, &[(0.0, 0.0), (1.0, 0.0)]);
        let mut list = DrawList::new();
        list.draw(&a, &RenderStates::default());
        list.draw(&b, &RenderStates::default());

        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn does_not_merge_after_incomplete_primitive() {
        let partial = array(PrimitiveType::Triangles, &[(0.0, 0.0), (1.0, 0.0)]);
        let full = array(PrimitiveType::Triangles, &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let mut list = DrawList::new();
        list.draw(&partial, &RenderStates::default());
        list.draw(&full, &RenderStates::default());

        assert_eq!(list.items().len(), 2);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_keeps_capacity() {
        let a = array(PrimitiveType::LinesStrip, &[(0.0, 0.0), (1.0, 0.0), (2.0, 2.0)]);
        let mut list = DrawList::new();
        for _ in 0..8 {
            list.draw(&a, &RenderStates::default());
        }
        let cap = list.capacity();
        list.clear();

        assert!(list.is_empty());
        assert!(list.vertices().is_empty());
        assert_eq!(list.capacity(), cap);
    }
}
