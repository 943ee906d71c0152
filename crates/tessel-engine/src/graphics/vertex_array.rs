use core::ops::{Index, IndexMut};

use crate::coords::Rect;

use super::{Drawable, PrimitiveType, RenderStates, RenderTarget, Vertex};

/// A set of 2D primitives: a growable vertex sequence plus the rule that groups it.
///
/// Insertion order defines grouping (consecutive triples form triangles, etc.).
/// Vertex counts are not validated against the primitive type; an incomplete
/// trailing primitive is the renderer's business.
///
/// Unlike other drawables this type is not transformable: positions are drawn as
/// stored, and any placement comes from the caller or from `RenderStates::transform`.
///
/// ```ignore
/// let mut lines = VertexArray::with_vertex_count(PrimitiveType::LinesStrip, 4);
/// lines[0].position = Vec2::new(10.0, 0.0);
/// lines[1].position = Vec2::new(20.0, 0.0);
/// lines[2].position = Vec2::new(30.0, 5.0);
/// lines[3].position = Vec2::new(40.0, 2.0);
/// target.draw(&lines, &RenderStates::default());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexArray {
    vertices: Vec<Vertex>,
    primitive_type: PrimitiveType,
}

impl VertexArray {
    /// Creates an empty array of points.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array of `count` default vertices grouped as `primitive_type`.
    pub fn with_vertex_count(primitive_type: PrimitiveType, count: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); count],
            primitive_type,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices the array can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Returns the vertex at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Returns the vertex at `index` for in-place edits, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Vertex> {
        self.vertices.get_mut(index)
    }

    /// Returns the vertex at `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than [`vertex_count`](Self::vertex_count).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &Vertex {
        debug_assert!(index < self.vertices.len(), "vertex index {index} out of range");
        // SAFETY: caller guarantees `index < len`.
        unsafe { self.vertices.get_unchecked(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    /// `index` must be less than [`vertex_count`](Self::vertex_count).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Vertex {
        debug_assert!(index < self.vertices.len(), "vertex index {index} out of range");
        // SAFETY: caller guarantees `index < len`.
        unsafe { self.vertices.get_unchecked_mut(index) }
    }

    /// Removes every vertex. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Grows with default vertices or truncates to exactly `count` vertices.
    #[inline]
    pub fn resize(&mut self, count: usize) {
        self.vertices.resize(count, Vertex::default());
    }

    #[inline]
    pub fn append(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Changes how vertices are grouped at the next draw.
    #[inline]
    pub fn set_primitive_type(&mut self, primitive_type: PrimitiveType) {
        self.primitive_type = primitive_type;
    }

    #[inline]
    pub fn primitive_type(&self) -> PrimitiveType {
        self.primitive_type
    }

    /// Smallest axis-aligned rectangle containing every vertex position.
    ///
    /// An empty array yields a zero-size rectangle at the origin.
    /// Recomputed on every call.
    pub fn bounds(&self) -> Rect {
        let mut positions = self.vertices.iter().map(|v| v.position);
        let Some(first) = positions.next() else {
            return Rect::default();
        };

        let (min, max) = positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Rect::from_min_max(min, max)
    }
}

impl Drawable for VertexArray {
    #[inline]
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        target.draw_vertices(&self.vertices, self.primitive_type, states);
    }
}

/// Checked access; panics when `index >= vertex_count()`.
impl Index<usize> for VertexArray {
    type Output = Vertex;
    #[inline]
    fn index(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }
}

impl IndexMut<usize> for VertexArray {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vertex {
        &mut self.vertices[index]
    }
}

impl Extend<Vertex> for VertexArray {
    #[inline]
    fn extend<I: IntoIterator<Item = Vertex>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

/// Collects into an array of points.
impl FromIterator<Vertex> for VertexArray {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
            primitive_type: PrimitiveType::Points,
        }
    }
}

impl<'a> IntoIterator for &'a VertexArray {
    type Item = &'a Vertex;
    type IntoIter = core::slice::Iter<'a, Vertex>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
