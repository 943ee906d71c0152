/// How a vertex sequence is grouped into primitives at draw time.
///
/// The tag is stored and forwarded; nothing is restructured when it changes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum PrimitiveType {
    /// Each vertex is a point.
    #[default]
    Points,
    /// Each pair of vertices is a segment.
    Lines,
    /// Each vertex after the first extends a connected polyline.
    LinesStrip,
    /// Each triple of vertices is a triangle.
    Triangles,
    /// Each vertex after the second forms a triangle with the two before it.
    TrianglesStrip,
    /// Each vertex after the second forms a triangle with the previous one and the first.
    TrianglesFan,
    /// Each group of four vertices is a quad.
    Quads,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 7] = [
        PrimitiveType::Points,
        PrimitiveType::Lines,
        PrimitiveType::LinesStrip,
        PrimitiveType::Triangles,
        PrimitiveType::TrianglesStrip,
        PrimitiveType::TrianglesFan,
        PrimitiveType::Quads,
    ];

    /// Whether primitives are independent groups of vertices.
    ///
    /// Two vertex runs of a list type can be concatenated without changing what
    /// is drawn, provided the first run holds only complete primitives.
    /// Strips and fans connect every vertex to its predecessors, so they never can.
    #[inline]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            PrimitiveType::Points | PrimitiveType::Lines | PrimitiveType::Triangles | PrimitiveType::Quads
        )
    }

    /// Vertices per primitive for list types, `None` for connected types.
    #[inline]
    pub const fn group_size(self) -> Option<usize> {
        match self {
            PrimitiveType::Points => Some(1),
            PrimitiveType::Lines => Some(2),
            PrimitiveType::Triangles => Some(3),
            PrimitiveType::Quads => Some(4),
            PrimitiveType::LinesStrip | PrimitiveType::TrianglesStrip | PrimitiveType::TrianglesFan => None,
        }
    }
}
