//! GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - owning an offscreen color target
//! - providing encoders/views for rendering and submitting them

mod frame;
mod headless;
mod init;

pub use frame::GpuFrame;
pub use headless::HeadlessGpu;
pub use init::GpuInit;
