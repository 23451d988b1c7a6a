//! Parser and evaluator for **complex property values**: style strings made of
//! literal text and parenthesized groups of numeric or color terms, such as
//! `rect(0px 50px 50px 0px)` or `rotate(10deg) translateX(0px)`.
//!
//! A start/end pair is parsed once into a [`ComplexValue`]; each animation frame
//! then calls [`ComplexValue::evaluate`] with the progress ratio to get a string
//! with the same shape as the start value.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `ComplexError` |
//! | [`scanner`] | `Scanner`, `Group`, `Term` |
//! | [`parser`] | `parse` entry point |
//! | [`value`] | `ComplexValue`, `ComponentSpec`, `Placeholder`, `Segment` |
//!
//! # Grammar limits
//!
//! Groups do not nest: `translate(calc(1px))` is rejected with
//! [`ComplexError::NestedGroup`]. Inside one group, terms are either all
//! comma-separated or all whitespace-separated.
//!
//! # Quick start
//!
//! ```rust
//! use kinetic_complex::ComplexValue;
//!
//! let clip = ComplexValue::parse("rect(0px 50px 50px 0px)", "rect(10px 30px 30px 10px)").unwrap();
//! assert_eq!(clip.evaluate(0.5), "rect(5px 40px 40px 5px)");
//! ```

pub mod error;
pub mod parser;
pub mod scanner;
pub mod value;

pub use error::ComplexError;
pub use parser::parse;
pub use value::{ComplexValue, ComponentKind, ComponentSpec, Placeholder, Segment};

/// Returns true when a property value must go through the complex path.
///
/// Any `(` marks functional notation; plain numbers and unit strings have none.
pub fn is_complex(value: &str) -> bool {
    value.contains('(')
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(start: &str, end: &str) -> ComplexValue { parse(start, end).unwrap() }
    fn err(start: &str, end: &str) -> ComplexError { parse(start, end).unwrap_err() }

    /// Numbers found in an output string, in order.
    fn numbers(s: &str) -> Vec<f64> {
        s.split(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
            .filter(|p| !p.is_empty() && *p != "-" && *p != ".")
            .map(|p| p.parse().unwrap())
            .collect()
    }

    /// `(groups, terms per group)` of a string, as the scanner sees it.
    fn shape(s: &str) -> Vec<usize> {
        scanner::Scanner::new(s).scan().unwrap().iter().map(|g| g.terms.len()).collect()
    }

    // ── worked examples ───────────────────────────────────────────────────

    #[test] fn clip_rect_midpoint() {
        let v = ok("rect(0px 50px 50px 0px)", "rect(10px 30px 30px 10px)");
        assert_eq!(v.evaluate(0.5), "rect(5px 40px 40px 5px)");
    }
    #[test] fn transform_quarter_keeps_fraction() {
        let v = ok("rotate(10deg) translateX(0px)", "rotate(0deg) translateX(20px)");
        assert_eq!(v.evaluate(0.25), "rotate(7.5deg) translateX(5px)");
    }
    #[test] fn color_term_midpoint() {
        let v = ok("shadow(2px, #ff0000)", "shadow(4px, #0000ff)");
        assert_eq!(v.evaluate(0.5), "shadow(3px, #800080)");
    }
    #[test] fn color_with_alpha_keeps_alpha() {
        let v = ok("glow(#ff000000)", "glow(#ff0000ff)");
        assert_eq!(v.evaluate(0.5), "glow(#ff000080)");
    }
    #[test] fn term_count_mismatch() {
        assert!(matches!(err("rect(1px 2px)", "rect(1px 2px 3px)"),
            ComplexError::StructuralMismatch { .. }));
    }

    // ── properties ────────────────────────────────────────────────────────

    #[test] fn endpoints_reproduce_content() {
        let (start, end) = ("matrix(1, 0, -3, 1, 20, 40)", "matrix(2, 5, 3, 1, -20, 0)");
        let v = ok(start, end);
        assert_eq!(numbers(&v.evaluate(0.0)), numbers(start));
        assert_eq!(numbers(&v.evaluate(1.0)), numbers(end));
    }
    #[test] fn each_component_is_exactly_linear() {
        let v = ok("f(0 10 -4)", "f(8 20 4)");
        for r in [0.0, 0.1, 0.3, 0.5, 0.9, 1.0, 1.25] {
            let expected: Vec<f64> = [(0.0, 8.0), (10.0, 20.0), (-4.0, 4.0)]
                .iter()
                .map(|(s, e)| (e - s) * r + s)
                .collect();
            assert_eq!(numbers(&v.evaluate(r)), expected);
        }
    }
    #[test] fn shape_is_preserved_at_every_ratio() {
        let start = "rect(0px 50px 50px 0px) rotate(1deg, #000)";
        let v = ok(start, "rect(9px 1px 2px 3px) rotate(4deg, #fff)");
        for r in [-0.5, 0.0, 0.33, 0.5, 1.0, 2.0] {
            assert_eq!(shape(&v.evaluate(r)), shape(start));
        }
    }
    #[test] fn reparse_is_identical() {
        let a = ok("scale(1 2) skew(10deg)", "scale(3 4) skew(-10deg)");
        let b = ok("scale(1 2) skew(10deg)", "scale(3 4) skew(-10deg)");
        assert_eq!(a, b);
        for r in [0.0, 0.2, 0.7, 1.0] {
            assert_eq!(a.evaluate(r), b.evaluate(r));
        }
    }
    #[test] fn unit_comes_from_start_term() {
        let v = ok("f(0px)", "f(10em)");
        assert_eq!(v.evaluate(1.0), "f(10px)");
    }
    #[test] fn literal_outside_groups_is_kept() {
        let v = ok("  inset(1px) !x", "  inset(3px) !x");
        assert_eq!(v.evaluate(0.5), "  inset(2px) !x");
    }
    #[test] fn empty_group_round_trips() {
        let v = ok("none() f(1)", "none() f(3)");
        assert_eq!(v.len(), 1);
        assert_eq!(v.evaluate(0.5), "none() f(2)");
    }
    #[test] fn is_complex_detects_parens() {
        assert!(is_complex("rect(0 0 0 0)"));
        assert!(!is_complex("10px"));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test] fn err_malformed_term() {
        assert_eq!(err("f(auto)", "f(1)"), ComplexError::MalformedTerm { term: "auto".into() });
    }
    #[test] fn err_unterminated() {
        assert!(matches!(err("rect(1px", "rect(1px)"), ComplexError::UnterminatedGroup { .. }));
    }
    #[test] fn err_nested() {
        assert!(matches!(err("f(g(1))", "f(g(2))"), ComplexError::NestedGroup { .. }));
    }
    #[test] fn err_exponent_term() {
        assert_eq!(err("f(1e3px)", "f(2e3px)"), ComplexError::MalformedTerm { term: "1e3px".into() });
    }
    #[test] fn err_empty_comma_term() {
        assert!(matches!(err("f(1,,2)", "f(1,2,3)"), ComplexError::MalformedTerm { .. }));
    }
}
