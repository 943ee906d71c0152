use anyhow::Result;
use tessel_engine::device::{GpuInit, HeadlessGpu};
use tessel_engine::logging::{LoggingConfig, init_logging};
use tessel_engine::render::{GpuTarget, VertexRenderer};
use tessel_engine::{
    BlendMode, Color, DrawList, PrimitiveType, RenderStates, RenderTarget, Transform, Vec2, Vertex,
    VertexArray,
};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let shapes = build_shapes();

    let mut draw_list = DrawList::new();
    for (name, shape, states) in &shapes {
        let b = shape.bounds();
        log::info!(
            "{name}: {} vertices as {:?}, bounds ({}, {}, {}, {})",
            shape.vertex_count(),
            shape.primitive_type(),
            b.origin.x,
            b.origin.y,
            b.size.x,
            b.size.y,
        );
        draw_list.draw(shape, states);
    }
    log::info!(
        "recorded {} draw items, {} vertices",
        draw_list.items().len(),
        draw_list.vertices().len()
    );

    let init = GpuInit { width: 320, height: 240, ..GpuInit::default() };
    let gpu = match HeadlessGpu::new_blocking(init) {
        Ok(gpu) => gpu,
        Err(err) => {
            log::warn!("no GPU available, skipping offscreen render: {err:#}");
            return Ok(());
        }
    };

    let mut renderer = VertexRenderer::new();
    let mut frame = gpu.begin_frame(Color::black());
    {
        let ctx = gpu.render_ctx();
        let mut target = GpuTarget::new(&mut frame.encoder, &frame.view);
        renderer.render(&ctx, &mut target, &draw_list);
    }
    gpu.submit(frame);

    let (w, h) = gpu.size();
    log::info!("rendered {w}x{h} frame on {}", gpu.adapter_info().name);
    Ok(())
}

fn build_shapes() -> Vec<(&'static str, VertexArray, RenderStates)> {
    // Four-point polyline, positions edited in place.
    let mut lines = VertexArray::with_vertex_count(PrimitiveType::LinesStrip, 4);
    lines[0].position = Vec2::new(10.0, 0.0);
    lines[1].position = Vec2::new(20.0, 0.0);
    lines[2].position = Vec2::new(30.0, 5.0);
    lines[3].position = Vec2::new(40.0, 2.0);

    let mut quad = VertexArray::new();
    quad.set_primitive_type(PrimitiveType::Quads);
    let red = Color::from_srgb_u8(220, 40, 40, 255);
    for (x, y) in [(0.0, 0.0), (60.0, 0.0), (60.0, 40.0), (0.0, 40.0)] {
        quad.append(Vertex::with_color(Vec2::new(x, y), red));
    }

    // Hexagon fanned around its center.
    let mut fan = VertexArray::new();
    fan.set_primitive_type(PrimitiveType::TrianglesFan);
    fan.append(Vertex::with_color(Vec2::zero(), Color::white()));
    let rim = Color::from_straight(0.2, 0.6, 1.0, 0.8);
    fan.extend((0..=6).map(|i| {
        let angle = (i as f32 * 60.0).to_radians();
        Vertex::with_color(Vec2::new(30.0 * angle.cos(), 30.0 * angle.sin()), rim)
    }));

    let at = |x, y| RenderStates::default().with_transform(Transform::translation(Vec2::new(x, y)));

    vec![
        ("polyline", lines, at(20.0, 20.0)),
        ("quad", quad, at(40.0, 80.0)),
        (
            "fan",
            fan,
            RenderStates::default()
                .with_blend_mode(BlendMode::Add)
                .with_transform(
                    Transform::translation(Vec2::new(220.0, 120.0)) * Transform::rotation(15.0),
                ),
        ),
    ]
}
