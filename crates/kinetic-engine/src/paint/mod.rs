//! Paint model shared between the parser and the animation layer.
//!
//! Scope:
//! - color representation (straight-alpha sRGB, CSS syntax)
//! - CSS number formatting for emitted style values

pub mod color;
pub mod css;

pub use color::Color;
pub use css::format_number;
