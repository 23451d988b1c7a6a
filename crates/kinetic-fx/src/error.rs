use kinetic_complex::ComplexError;
use thiserror::Error;

/// Reasons an animation cannot begin.
///
/// All of these are raised while building the property curve, before the first
/// frame. A running animation never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("property {property:?}: {source}")]
    Complex {
        property: String,
        #[source]
        source: ComplexError,
    },

    #[error("property {property:?}: {value:?} is not a color")]
    InvalidColor { property: String, value: String },

    #[error("property {property:?}: {value:?} is not a number")]
    InvalidNumber { property: String, value: String },

    #[error("property {property:?} has no start value and the target has no current style for it")]
    MissingStart { property: String },
}
