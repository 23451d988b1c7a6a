use kinetic_engine::paint::Color;

use crate::error::ComplexError;
use crate::scanner::{Group, Scanner, Term};
use crate::value::{ComplexValue, ComponentSpec, Placeholder, Segment};

// ── Public parse entry point ──────────────────────────────────────────────

/// Parses a start/end pair of complex property strings into a [`ComplexValue`].
///
/// Both strings must have the same number of groups, and each pair of groups the
/// same number of terms. The template is taken from `start`.
pub fn parse(start: &str, end: &str) -> Result<ComplexValue, ComplexError> {
    let start_groups = Scanner::new(start).scan()?;
    let end_groups = Scanner::new(end).scan()?;

    if start_groups.len() != end_groups.len() {
        return Err(ComplexError::mismatch(format!(
            "start has {} groups, end has {}",
            start_groups.len(),
            end_groups.len()
        )));
    }

    let mut segments = Vec::new();
    let mut components = Vec::new();
    let mut cursor = 0;

    for (i, (sg, eg)) in start_groups.iter().zip(&end_groups).enumerate() {
        check_terms(i, sg, eg)?;

        for (j, (st, et)) in sg.terms.iter().zip(&eg.terms).enumerate() {
            if cursor < st.span.start {
                segments.push(Segment::Literal(start[cursor..st.span.start].to_string()));
            }
            segments.push(Segment::Slot(components.len()));
            components.push((Placeholder { group: i, term: j }, component(st, et)?));
            cursor = st.span.end;
        }
    }
    if cursor < start.len() {
        segments.push(Segment::Literal(start[cursor..].to_string()));
    }

    log::debug!(
        "parsed complex value {:?}: {} groups, {} components",
        start,
        start_groups.len(),
        components.len()
    );

    Ok(ComplexValue { segments, components })
}

fn check_terms(index: usize, start: &Group<'_>, end: &Group<'_>) -> Result<(), ComplexError> {
    if start.terms.len() == end.terms.len() {
        return Ok(());
    }
    Err(ComplexError::mismatch(format!(
        "group {} has {} terms in start, {} in end",
        index,
        start.terms.len(),
        end.terms.len()
    )))
}

// ── Component ─────────────────────────────────────────────────────────────

fn component(start: &Term<'_>, end: &Term<'_>) -> Result<ComponentSpec, ComplexError> {
    if start.text.contains('#') || end.text.contains('#') {
        let (start, alpha) = hex_color(&start.text)?;
        let (end, _) = hex_color(&end.text)?;
        return Ok(ComponentSpec::Color { start, end, alpha });
    }

    let (start_num, unit) = number_and_unit(&start.text)?;
    let (end_num, _) = number_and_unit(&end.text)?;
    Ok(ComponentSpec::Numeric { start: start_num, end: end_num, unit: unit.to_string() })
}

/// Parses the `#...` tail of a term. Returns the color and whether it carried alpha.
fn hex_color(term: &str) -> Result<(Color, bool), ComplexError> {
    let invalid = || ComplexError::InvalidColor { term: term.to_string() };

    let hex = term.find('#').map(|i| &term[i..]).ok_or_else(invalid)?;
    let color = Color::from_hex(hex).ok_or_else(invalid)?;
    let alpha = matches!(hex.len() - 1, 4 | 8);
    Ok((color, alpha))
}

/// Extracts the first number in a term and the unit following it.
///
/// Number: `[+-]?digits[.digits]` or `[+-]?.digits`.
/// Unit: `%` directly after the number, else the first run of ASCII lowercase
/// letters after it, else empty. A unit run directly followed by a digit
/// (`1e3px`) is malformed.
fn number_and_unit(term: &str) -> Result<(f64, &str), ComplexError> {
    let malformed = || ComplexError::MalformedTerm { term: term.to_string() };

    let (range, value) = find_number(term).ok_or_else(malformed)?;
    let rest = &term[range.end..];

    let unit = if rest.starts_with('%') {
        "%"
    } else {
        match rest.find(|c: char| c.is_ascii_lowercase()) {
            Some(i) => {
                let run = &rest[i..];
                let len = run.find(|c: char| !c.is_ascii_lowercase()).unwrap_or(run.len());
                if run[len..].starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(malformed());
                }
                &run[..len]
            }
            None => "",
        }
    };
    Ok((value, unit))
}

fn find_number(term: &str) -> Option<(std::ops::Range<usize>, f64)> {
    let bytes = term.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    for start in 0..bytes.len() {
        let mut i = start;
        if matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let int_end = digits_from(i);
        let mut end = int_end;
        if end < bytes.len() && bytes[end] == b'.' {
            let frac_end = digits_from(end + 1);
            if frac_end > end + 1 {
                end = frac_end;
            }
        }
        let has_digits = int_end > i || end > int_end;
        if !has_digits {
            continue;
        }
        if let Ok(v) = term[start..end].parse::<f64>() {
            return Some((start..end, v));
        }
    }
    None
}
