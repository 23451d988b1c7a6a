use thiserror::Error;

/// A construction-time failure while parsing a complex property pair.
///
/// Every variant is a caller error in the start/end strings; none is recoverable
/// by retrying. Evaluation of a successfully parsed value cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplexError {
    /// Group or term counts differ between the start and end strings.
    #[error("start and end values differ in structure: {detail}")]
    StructuralMismatch { detail: String },

    /// A term that is not a color carries no number.
    #[error("term {term:?} has no numeric value")]
    MalformedTerm { term: String },

    /// A `(` without a matching `)`, or a `)` without a matching `(`.
    #[error("unbalanced parenthesis at byte {offset}")]
    UnterminatedGroup { offset: usize },

    /// A `(` inside an open group. Only one level of parentheses is supported.
    #[error("nested parenthesis at byte {offset} is not supported")]
    NestedGroup { offset: usize },

    /// A `#` term whose hex payload is not `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`,
    /// or a color paired with a non-color term.
    #[error("term {term:?} is not a valid hex color")]
    InvalidColor { term: String },
}

impl ComplexError {
    pub(crate) fn mismatch(detail: impl Into<String>) -> Self {
        Self::StructuralMismatch { detail: detail.into() }
    }
}
