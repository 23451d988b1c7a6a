//! Kinetic FX — frame-driven style-property animation with support for
//! **complex properties**: functional-notation values such as
//! `clip: rect(0px 50px 50px 0px)` or `transform: rotate(10deg) translateX(0px)`.
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use kinetic_fx::prelude::*;
//!
//! let mut node = StyleMap::new();
//! let mut anim = animate_property(
//!     AnimationOptions::new()
//!         .duration(Duration::from_millis(600))
//!         .easing(Easing::Linear)
//!         .property("clip", PropertyDescriptor::new("rect(0px 50px 50px 0px)", "rect(10px 30px 30px 10px)")),
//! );
//!
//! anim.play();
//! anim.tick(Duration::from_millis(300), &mut node).unwrap();
//! assert_eq!(node.get("clip"), Some("rect(5px 40px 40px 5px)"));
//! ```
//!
//! # How properties are interpolated
//!
//! When an animation begins, each property is resolved on its own:
//!
//! | Start value | Interpolation |
//! |-------------|---------------|
//! | text containing `(` | [`ComplexValue`](kinetic_complex::ComplexValue), via [`ComplexHook`] |
//! | name contains `color` | channel blend, written as `rgb(r, g, b)` |
//! | list | skipped |
//! | number, or text with a leading number | linear, unit from `units` (default `px`, none for `opacity`) |
//!
//! [`Animation::new`] alone only performs the last three; [`animate_property`]
//! installs [`ComplexHook`] on top.

pub mod animation;
pub mod curve;
pub mod easing;
pub mod error;
pub mod hook;
pub mod property;
pub mod target;

pub use animation::{Animation, AnimationOptions, AnimationStatus};
pub use error::AnimationError;
pub use hook::{BeginHook, ComplexHook};

/// Builds an [`Animation`] that understands complex properties.
///
/// Equivalent to `Animation::new(options).with_hook(ComplexHook)`.
pub fn animate_property(options: AnimationOptions) -> Animation {
    Animation::new(options).with_hook(ComplexHook)
}

/// Everything needed to set up and drive animations.
pub mod prelude {
    pub use crate::animate_property;
    pub use crate::animation::{Animation, AnimationOptions, AnimationStatus};
    pub use crate::curve::{FrameValues, Interpolator, PropertyCurve};
    pub use crate::easing::Easing;
    pub use crate::error::AnimationError;
    pub use crate::hook::{BeginHook, ComplexHook};
    pub use crate::property::{PropertyDescriptor, PropertyValue};
    pub use crate::target::{StyleMap, StyleTarget};

    pub use kinetic_engine::paint::Color;
}

#[cfg(test)]
mod animate_tests {
    use std::time::Duration;

    use super::prelude::*;

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    fn run_to(options: AnimationOptions, at: u64) -> StyleMap {
        let mut node = StyleMap::new();
        let mut anim = animate_property(options);
        anim.play();
        anim.tick(ms(at), &mut node).unwrap();
        node
    }

    #[test]
    fn clip_rect_example() {
        let node = run_to(
            AnimationOptions::new()
                .duration(ms(600))
                .easing(Easing::Linear)
                .property("clip", PropertyDescriptor::new("rect(0px 50px 50px 0px)", "rect(10px 30px 30px 10px)")),
            300,
        );
        assert_eq!(node.get("clip"), Some("rect(5px 40px 40px 5px)"));
    }

    #[test]
    fn default_easing_starts_slow_and_lands_exactly() {
        let options = AnimationOptions::new()
            .duration(ms(100))
            .property("width", PropertyDescriptor::new(0, 100));

        let early = run_to(options.clone(), 25);
        let width: f64 = early.get("width").unwrap().trim_end_matches("px").parse().unwrap();
        assert!(width > 0.0 && width < 25.0, "sine easing at 25% gave {}", width);

        let done = run_to(options, 100);
        assert_eq!(done.get("width"), Some("100px"));
    }

    #[test]
    fn complex_start_from_target_style() {
        let mut node = StyleMap::new().with("clip", "rect(0px 10px)");
        let mut anim = animate_property(
            AnimationOptions::new()
                .duration(ms(100))
                .easing(Easing::Linear)
                .property("clip", PropertyDescriptor::to("rect(10px 20px)")),
        );
        anim.play();
        anim.tick(ms(50), &mut node).unwrap();
        assert_eq!(node.get("clip"), Some("rect(5px 15px)"));
    }

    #[test]
    fn mixed_properties_dispatch_independently() {
        let node = run_to(
            AnimationOptions::new()
                .duration(ms(100))
                .easing(Easing::Linear)
                .property("transform", PropertyDescriptor::new("scale(1, 1)", "scale(2, 3)"))
                .property("color", PropertyDescriptor::new("#000000", "#ffffff"))
                .property("height", PropertyDescriptor::new("10", "20").units("em"))
                .property("points", PropertyDescriptor::new(vec![1.0], vec![2.0])),
            50,
        );
        assert_eq!(node.get("transform"), Some("scale(1.5, 2)"));
        assert_eq!(node.get("color"), Some("rgb(128, 128, 128)"));
        assert_eq!(node.get("height"), Some("15em"));
        assert_eq!(node.get("points"), None);
    }

    #[test]
    fn structural_mismatch_aborts_begin() {
        let mut node = StyleMap::new();
        let mut anim = animate_property(
            AnimationOptions::new()
                .property("clip", PropertyDescriptor::new("rect(1px 2px)", "rect(1px 2px 3px)"))
                .property("width", PropertyDescriptor::new(0, 10)),
        );
        anim.play();
        let err = anim.tick(ms(10), &mut node).unwrap_err();
        assert!(matches!(err, AnimationError::Complex { .. }));
        assert!(node.is_empty());
        assert_eq!(anim.status(), AnimationStatus::Stopped);
    }
}
