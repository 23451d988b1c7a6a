//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to a runtime.
//! Intended usage:
//! - one `FrameClock` per animation loop
//! - call `tick()` once per presented frame, or `advance(dt)` when stepping
//!   a simulation at a fixed rate

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
