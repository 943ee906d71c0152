use std::collections::HashMap;
use std::ops::Range;

use crate::graphics::BlendMode;
use crate::render::{GpuTarget, RenderCtx};
use crate::scene::DrawList;

use super::common::{
    GpuVertex, ViewportUniform, blend_state, primitive_topology, viewport_ubo_min_binding_size,
};
use super::tessellate::{Topology, tessellate};

/// Pipelines differ only by topology and blending.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct PipelineKey {
    topology: Topology,
    blend: BlendMode,
}

/// One draw call over a range of the uploaded vertex buffer.
#[derive(Debug, Clone, PartialEq)]
struct Batch {
    key: PipelineKey,
    range: Range<u32>,
}

/// Renders recorded vertex geometry.
///
/// Geometry is provided as logical pixels, converted to NDC in the vertex shader using viewport.
/// Render-state transforms are applied on the CPU while staging, so one vertex buffer
/// serves every item in the draw list.
///
/// Supported states:
/// - `BlendMode`: all modes, one pipeline per (topology, blend)
/// - `Transform`: any affine transform
/// - `texture`: not bound yet; textured items are drawn untextured (one-time debug message)
#[derive(Default)]
pub struct VertexRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    shader: Option<wgpu::ShaderModule>,
    pipeline_layout: Option<wgpu::PipelineLayout>,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    staging: Vec<GpuVertex>,
    batches: Vec<Batch>,

    warned_textured: bool,
}

impl VertexRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every item of `draw_list` into `target`, in submission order.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut GpuTarget<'_>, draw_list: &DrawList) {
        if !ctx.viewport.is_valid() {
            log::debug!("VertexRenderer: invalid viewport {:?}; frame skipped", ctx.viewport);
            return;
        }

        self.prepare(draw_list);
        if self.batches.is_empty() {
            return;
        }

        // Mutating methods must happen before borrowing pipelines/buffers immutably.
        self.ensure_shared(ctx);
        self.ensure_bindings(ctx);
        for i in 0..self.batches.len() {
            let key = self.batches[i].key;
            self.ensure_pipeline(ctx, key);
        }
        self.write_viewport_uniform(ctx);
        self.ensure_vertex_capacity(ctx, self.staging.len());

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.staging));

        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessel vertex pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));

        let mut bound: Option<PipelineKey> = None;
        for batch in &self.batches {
            if bound != Some(batch.key) {
                let Some(pipeline) = self.pipelines.get(&batch.key) else { continue };
                rpass.set_pipeline(pipeline);
                bound = Some(batch.key);
            }
            rpass.draw(batch.range.clone(), 0..1);
        }
    }

    /// Expands and transforms the draw list into `staging`, one batch per item.
    fn prepare(&mut self, draw_list: &DrawList) {
        self.staging.clear();
        self.batches.clear();

        for item in draw_list.items() {
            if item.states.texture.is_some() && !self.warned_textured {
                log::debug!("VertexRenderer: textures are not bound yet; drawing untextured");
                self.warned_textured = true;
            }

            let transform = item.states.transform;
            let start = self.staging.len();
            let staging = &mut self.staging;
            let topology = tessellate(draw_list.vertices_of(item), item.primitive, |v| {
                let p = transform.transform_point(v.position);
                staging.push(GpuVertex {
                    pos: [p.x, p.y],
                    color: v.color.to_array(),
                    uv: [v.tex_coords.x, v.tex_coords.y],
                });
            });
            let end = self.staging.len();

            if start == end {
                continue;
            }
            self.batches.push(Batch {
                key: PipelineKey { topology, blend: item.states.blend_mode },
                range: start as u32..end as u32,
            });
        }
    }

    /// Shader and layouts are format independent; pipelines are dropped on format change.
    fn ensure_shared(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format != Some(ctx.surface_format) {
            self.pipelines.clear();
            self.pipeline_format = Some(ctx.surface_format);
        }
        if self.shader.is_some() && self.pipeline_layout.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/vertices.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tessel vertex shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("tessel vertex bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(viewport_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("tessel vertex pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        self.shader = Some(shader);
        self.pipeline_layout = Some(pipeline_layout);
        self.bind_group_layout = Some(bind_group_layout);

        self.pipelines.clear();
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, key: PipelineKey) {
        if self.pipelines.contains_key(&key) {
            return;
        }
        let Some(shader) = self.shader.as_ref() else { return };
        let Some(layout) = self.pipeline_layout.as_ref() else { return };

        log::debug!("VertexRenderer: building pipeline {key:?} for {:?}", ctx.surface_format);

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tessel vertex pipeline"),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GpuVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(blend_state(key.blend)),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: primitive_topology(key.topology),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipelines.insert(key, pipeline);
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessel vertex viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tessel vertex bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }

        let new_cap = required_vertices.next_power_of_two().max(256);
        let new_size = (new_cap * std::mem::size_of::<GpuVertex>()) as u64;

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessel vertex vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::graphics::{
        PrimitiveType, RenderStates, RenderTarget, TextureId, Transform, Vertex, VertexArray,
    };
    use crate::paint::Color;

    fn array(primitive: PrimitiveType, points: &[(f32, f32)]) -> VertexArray {
        let mut va: VertexArray = points.iter().map(|&p| Vertex::from(Vec2::from(p))).collect();
        va.set_primitive_type(primitive);
        va
    }

    fn prepared(list: &DrawList) -> VertexRenderer {
        let mut r = VertexRenderer::new();
        r.prepare(list);
        r
    }

    // ── staging ───────────────────────────────────────────────────────────

    #[test]
    fn stages_colors_and_tex_coords_verbatim() {
        let mut va = VertexArray::new();
        va.append(Vertex::new(Vec2::new(1.0, 2.0), Color::black(), Vec2::new(0.25, 0.75)));

        let mut list = DrawList::new();
        list.draw(&va, &RenderStates::default());
        let r = prepared(&list);

        assert_eq!(
            r.staging,
            vec![GpuVertex { pos: [1.0, 2.0], color: [0.0, 0.0, 0.0, 1.0], uv: [0.25, 0.75] }]
        );
    }

    #[test]
    fn applies_state_transform() {
        let va = array(PrimitiveType::Points, &[(1.0, 1.0), (2.0, 3.0)]);
        let states = RenderStates::default().with_transform(Transform::translation(Vec2::new(10.0, 20.0)));

        let mut list = DrawList::new();
        list.draw(&va, &states);
        let r = prepared(&list);

        let positions: Vec<[f32; 2]> = r.staging.iter().map(|v| v.pos).collect();
        assert_eq!(positions, vec![[11.0, 21.0], [12.0, 23.0]]);
    }

    #[test]
    fn expands_quads_before_upload() {
        let va = array(PrimitiveType::Quads, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let mut list = DrawList::new();
        list.draw(&va, &RenderStates::default());
        let r = prepared(&list);

        assert_eq!(r.staging.len(), 6);
        assert_eq!(r.batches.len(), 1);
        assert_eq!(r.batches[0].key.topology, Topology::TriangleList);
        assert_eq!(r.batches[0].range, 0..6);
    }

    // ── batching ──────────────────────────────────────────────────────────

    #[test]
    fn one_batch_per_item_with_contiguous_ranges() {
        let strip = array(PrimitiveType::LinesStrip, &[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)]);
        let tris = array(PrimitiveType::Triangles, &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);

        let mut list = DrawList::new();
        list.draw(&strip, &RenderStates::default());
        list.draw(&tris, &RenderStates::default().with_blend_mode(BlendMode::Add));
        let r = prepared(&list);

        assert_eq!(
            r.batches,
            vec![
                Batch {
                    key: PipelineKey { topology: Topology::LineStrip, blend: BlendMode::Alpha },
                    range: 0..3,
                },
                Batch {
                    key: PipelineKey { topology: Topology::TriangleList, blend: BlendMode::Add },
                    range: 3..6,
                },
            ]
        );
    }

    #[test]
    fn items_without_complete_primitives_are_skipped() {
        let fan = array(PrimitiveType::TrianglesFan, &[(0.0, 0.0), (1.0, 0.0)]);
        let mut list = DrawList::new();
        list.draw(&fan, &RenderStates::default());
        let r = prepared(&list);

        assert!(r.staging.is_empty());
        assert!(r.batches.is_empty());
    }

    #[test]
    fn textured_items_still_draw() {
        let va = array(PrimitiveType::Points, &[(0.0, 0.0)]);
        let mut list = DrawList::new();
        list.draw(&va, &RenderStates::default().with_texture(TextureId(3)));
        let r = prepared(&list);

        assert!(r.warned_textured);
        assert_eq!(r.batches.len(), 1);
    }

    #[test]
    fn prepare_resets_previous_frame() {
        let va = array(PrimitiveType::Points, &[(0.0, 0.0), (1.0, 1.0)]);
        let mut list = DrawList::new();
        list.draw(&va, &RenderStates::default());

        let mut r = VertexRenderer::new();
        r.prepare(&list);
        r.prepare(&list);
        assert_eq!(r.staging.len(), 2);
        assert_eq!(r.batches.len(), 1);
    }
}
