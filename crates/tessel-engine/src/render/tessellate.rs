//! Primitive expansion for GPU topologies.
//!
//! wgpu has no quad or fan topology, so those are expanded into triangle lists on the CPU.
//! Everything else passes through with incomplete trailing primitives dropped.

use crate::graphics::{PrimitiveType, Vertex};

/// Topologies the GPU draws natively.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    PointList,
    LineList,
    LineStrip,
    TriangleList,
    TriangleStrip,
}

impl Topology {
    /// The native topology a primitive type is drawn with.
    #[inline]
    pub const fn of(primitive: PrimitiveType) -> Self {
        match primitive {
            PrimitiveType::Points => Topology::PointList,
            PrimitiveType::Lines => Topology::LineList,
            PrimitiveType::LinesStrip => Topology::LineStrip,
            PrimitiveType::Triangles | PrimitiveType::TrianglesFan | PrimitiveType::Quads => {
                Topology::TriangleList
            }
            PrimitiveType::TrianglesStrip => Topology::TriangleStrip,
        }
    }
}

/// Feeds `vertices`, grouped as `primitive`, to `emit` in native-topology order.
///
/// Returns the topology the emitted run must be drawn with.
pub fn tessellate(
    vertices: &[Vertex],
    primitive: PrimitiveType,
    mut emit: impl FnMut(&Vertex),
) -> Topology {
    match primitive {
        PrimitiveType::Quads => {
            for q in vertices.chunks_exact(4) {
                for i in [0, 1, 2, 0, 2, 3] {
                    emit(&q[i]);
                }
            }
        }
        PrimitiveType::TrianglesFan => {
            if let Some((center, rim)) = vertices.split_first() {
                for pair in rim.windows(2) {
                    emit(center);
                    emit(&pair[0]);
                    emit(&pair[1]);
                }
            }
        }
        PrimitiveType::LinesStrip | PrimitiveType::TrianglesStrip => {
            vertices.iter().for_each(&mut emit);
        }
        PrimitiveType::Points | PrimitiveType::Lines | PrimitiveType::Triangles => {
            let group = primitive.group_size().unwrap_or(1);
            let complete = vertices.len() - vertices.len() % group;
            vertices[..complete].iter().for_each(&mut emit);
        }
    }

    Topology::of(primitive)
}
