//! Frame timing.
//!
//! The renderer owns one `FrameClock` and ticks it once per presented frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
