//! Shared GPU types and utilities.

use bytemuck::{Pod, Zeroable};

use crate::graphics::BlendMode;

use super::Topology;

// ── blend ─────────────────────────────────────────────────────────────────

/// Blend state for premultiplied sources.
pub(super) fn blend_state(mode: BlendMode) -> wgpu::BlendState {
    let component = |src_factor, dst_factor| wgpu::BlendComponent {
        src_factor,
        dst_factor,
        operation: wgpu::BlendOperation::Add,
    };

    match mode {
        BlendMode::Alpha => {
            let c = component(wgpu::BlendFactor::One, wgpu::BlendFactor::OneMinusSrcAlpha);
            wgpu::BlendState { color: c, alpha: c }
        }
        BlendMode::Add => {
            let c = component(wgpu::BlendFactor::One, wgpu::BlendFactor::One);
            wgpu::BlendState { color: c, alpha: c }
        }
        BlendMode::Multiply => {
            let c = component(wgpu::BlendFactor::Dst, wgpu::BlendFactor::Zero);
            wgpu::BlendState { color: c, alpha: c }
        }
        BlendMode::None => wgpu::BlendState::REPLACE,
    }
}

// ── topology ──────────────────────────────────────────────────────────────

pub(super) fn primitive_topology(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::PointList => wgpu::PrimitiveTopology::PointList,
        Topology::LineList => wgpu::PrimitiveTopology::LineList,
        Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
        Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
    }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

/// Returns the `wgpu` minimum binding size for the viewport uniform buffer.
pub(super) fn viewport_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
        .expect("ViewportUniform has non-zero size by construction")
}

// ── vertex ────────────────────────────────────────────────────────────────

/// Vertex as uploaded: transformed position + premultiplied color + texture coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct GpuVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl GpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4, // color
        2 => Float32x2  // uv
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<GpuVertex>(), 8 * 4);
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
    }

    #[test]
    fn alpha_blend_is_premultiplied_over() {
        let b = blend_state(BlendMode::Alpha);
        assert_eq!(b.color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(b.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
    }

    #[test]
    fn none_blend_replaces() {
        assert_eq!(blend_state(BlendMode::None), wgpu::BlendState::REPLACE);
    }
}
