use std::fmt;

use kinetic_engine::paint::{format_number, Color};

// ── Placeholder ───────────────────────────────────────────────────────────

/// Identifies one term of a complex value by position.
///
/// Its `Display` form is the template token `"\0{group}.{term}\0"`. NUL never
/// appears in a style value, so the token cannot collide with literal text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placeholder {
    pub group: usize,
    pub term: usize,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{0}{}.{}\u{0}", self.group, self.term)
    }
}

// ── ComponentSpec ─────────────────────────────────────────────────────────

/// Discriminant of a [`ComponentSpec`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    Numeric,
    Color,
}

/// One interpolatable term: a number with a unit, or a color.
///
/// Built once at parse time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentSpec {
    Numeric {
        start: f64,
        end: f64,
        /// Unit suffix taken from the start term (`"px"`, `"deg"`, `""`).
        unit: String,
    },
    Color {
        start: Color,
        end: Color,
        /// Whether the start literal carried an alpha channel.
        alpha: bool,
    },
}

impl ComponentSpec {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentSpec::Numeric { .. } => ComponentKind::Numeric,
            ComponentSpec::Color { .. } => ComponentKind::Color,
        }
    }

    /// Unit suffix; empty for colors.
    pub fn unit(&self) -> &str {
        match self {
            ComponentSpec::Numeric { unit, .. } => unit,
            ComponentSpec::Color { .. } => "",
        }
    }

    /// Formats the interpolated term at `ratio`. No clamping, no rounding.
    pub fn value_at(&self, ratio: f64) -> String {
        match self {
            ComponentSpec::Numeric { start, end, unit } => {
                let v = (end - start) * ratio + start;
                let mut out = format_number(v);
                out.push_str(unit);
                out
            }
            ComponentSpec::Color { start, end, alpha } => {
                Color::blend(*start, *end, ratio).to_hex(*alpha)
            }
        }
    }
}

// ── Segment ───────────────────────────────────────────────────────────────

/// One piece of a template: literal text copied verbatim, or a component slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    /// Index into [`ComplexValue::components`].
    Slot(usize),
}

// ── ComplexValue ──────────────────────────────────────────────────────────

/// An animatable complex property over its whole transition.
///
/// Invariant: every `Segment::Slot` indexes exactly one component, and every
/// component is referenced by exactly one slot, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexValue {
    pub(crate) segments: Vec<Segment>,
    pub(crate) components: Vec<(Placeholder, ComponentSpec)>,
}

impl ComplexValue {
    /// Parses a start/end pair. See [`crate::parse`].
    pub fn parse(start: &str, end: &str) -> Result<Self, crate::ComplexError> {
        crate::parser::parse(start, end)
    }

    /// Number of interpolated terms.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Components in scan order: groups left to right, terms left to right.
    pub fn components(&self) -> impl Iterator<Item = (Placeholder, &ComponentSpec)> + '_ {
        self.components.iter().map(|(p, spec)| (*p, spec))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The start string with every term replaced by its placeholder token.
    pub fn template(&self) -> String {
        self.segments
            .iter()
            .map(|seg| match seg {
                Segment::Literal(s) => s.clone(),
                Segment::Slot(i) => self.components[*i].0.to_string(),
            })
            .collect()
    }

    /// Builds the property string for animation progress `ratio`.
    ///
    /// `ratio` is not clamped; values outside `[0, 1]` extrapolate linearly.
    pub fn evaluate(&self, ratio: f64) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => out.push_str(s),
                Segment::Slot(i) => out.push_str(&self.components[*i].1.value_at(ratio)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(start: f64, end: f64) -> ComponentSpec {
        ComponentSpec::Numeric { start, end, unit: "px".into() }
    }

    #[test]
    fn numeric_value_at_is_linear() {
        assert_eq!(px(0.0, 10.0).value_at(0.5), "5px");
        assert_eq!(px(10.0, 0.0).value_at(0.25), "7.5px");
    }

    #[test]
    fn numeric_value_at_extrapolates() {
        assert_eq!(px(0.0, 10.0).value_at(1.5), "15px");
        assert_eq!(px(0.0, 10.0).value_at(-0.5), "-5px");
    }

    #[test]
    fn color_value_at_blends() {
        let spec = ComponentSpec::Color {
            start: Color::rgb(255, 0, 0),
            end: Color::rgb(0, 0, 255),
            alpha: false,
        };
        assert_eq!(spec.value_at(0.5), "#800080");
        assert_eq!(spec.kind(), ComponentKind::Color);
        assert_eq!(spec.unit(), "");
    }

    #[test]
    fn placeholder_token_is_nul_delimited() {
        let token = Placeholder { group: 1, term: 12 }.to_string();
        assert_eq!(token, "\u{0}1.12\u{0}");
    }

    #[test]
    fn evaluate_stitches_segments() {
        let value = ComplexValue {
            segments: vec![
                Segment::Literal("f(".into()),
                Segment::Slot(0),
                Segment::Literal(")".into()),
            ],
            components: vec![(Placeholder { group: 0, term: 0 }, px(2.0, 4.0))],
        };
        assert_eq!(value.evaluate(0.5), "f(3px)");
        assert_eq!(value.template(), "f(\u{0}0.0\u{0})");
    }
}
