//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating the Surface and applying its one-time configuration
//! - acquiring frames and providing encoders/views for rendering

mod frame;
mod gpu;
mod init;
pub mod surface;

pub use frame::GpuFrame;
pub use gpu::{acquire_device, Gpu};
pub use init::GpuInit;

#[cfg(test)]
pub(crate) use gpu::testing;
