//! Kinetic engine crate.
//!
//! This crate owns the host-side primitives the animation layers build on:
//! logger setup, frame timing and the CSS color model.

pub mod logging;
pub mod paint;
pub mod time;
