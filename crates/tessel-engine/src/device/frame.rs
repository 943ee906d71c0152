/// Commands recorded for one offscreen frame.
///
/// Consumed by [`super::HeadlessGpu::submit`].
pub struct GpuFrame {
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
