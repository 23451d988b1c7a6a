use std::borrow::Cow;
use std::ops::Range;

use crate::error::ComplexError;

// ── Group / Term ──────────────────────────────────────────────────────────

/// One parenthesized `(...)` segment of a property value.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'s> {
    /// Byte span of the whole group, parentheses included.
    pub span: Range<usize>,
    pub terms: Vec<Term<'s>>,
}

/// One delimited element inside a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Term<'s> {
    /// Byte span in the source string that the term occupies.
    pub span: Range<usize>,
    /// Term text. For comma-delimited groups all whitespace is removed.
    pub text: Cow<'s, str>,
}

// ── Scanner ───────────────────────────────────────────────────────────────

/// Splits a property value into groups and terms.
///
/// Grammar: literal text interspersed with `(term, term, ...)` or
/// `(term term ...)` groups. Groups do not nest.
pub struct Scanner<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Scanner<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn scan(mut self) -> Result<Vec<Group<'s>>, ComplexError> {
        let mut groups = Vec::new();
        while let Some(group) = self.next_group()? {
            groups.push(group);
        }
        Ok(groups)
    }

    fn next_group(&mut self) -> Result<Option<Group<'s>>, ComplexError> {
        let rest = &self.src[self.pos..];
        let open = match rest.find(['(', ')']) {
            None => return Ok(None),
            Some(i) => self.pos + i,
        };
        if self.src.as_bytes()[open] == b')' {
            return Err(ComplexError::UnterminatedGroup { offset: open });
        }

        let inner_start = open + 1;
        let close = match self.src[inner_start..].find(['(', ')']) {
            None => return Err(ComplexError::UnterminatedGroup { offset: open }),
            Some(i) => inner_start + i,
        };
        if self.src.as_bytes()[close] == b'(' {
            return Err(ComplexError::NestedGroup { offset: close });
        }

        self.pos = close + 1;
        Ok(Some(Group {
            span: open..close + 1,
            terms: split_terms(self.src, inner_start..close),
        }))
    }
}

/// Splits the interior of a group into terms.
///
/// A comma anywhere in the interior makes it a comma list; otherwise terms are
/// separated by whitespace runs.
fn split_terms(src: &str, inner: Range<usize>) -> Vec<Term<'_>> {
    let body = &src[inner.clone()];
    if body.contains(',') {
        split_commas(src, inner)
    } else {
        split_whitespace(src, inner)
    }
}

fn split_commas(src: &str, inner: Range<usize>) -> Vec<Term<'_>> {
    let mut terms = Vec::new();
    let mut piece_start = inner.start;

    for (i, ch) in src[inner.clone()].char_indices() {
        if ch == ',' {
            terms.push(comma_term(src, piece_start..inner.start + i));
            piece_start = inner.start + i + 1;
        }
    }
    terms.push(comma_term(src, piece_start..inner.end));
    terms
}

fn comma_term(src: &str, piece: Range<usize>) -> Term<'_> {
    let raw = &src[piece.clone()];
    let lead = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    let span = piece.start + lead..piece.start + lead + trimmed.len();

    let text = if trimmed.contains(char::is_whitespace) {
        Cow::Owned(trimmed.chars().filter(|c| !c.is_whitespace()).collect())
    } else {
        Cow::Borrowed(trimmed)
    };
    Term { span, text }
}

fn split_whitespace(src: &str, inner: Range<usize>) -> Vec<Term<'_>> {
    let mut terms = Vec::new();
    let mut start: Option<usize> = None;

    for (i, ch) in src[inner.clone()].char_indices() {
        let at = inner.start + i;
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                terms.push(Term { span: s..at, text: Cow::Borrowed(&src[s..at]) });
                start = None;
            }
            (false, None) => start = Some(at),
            _ => {}
        }
    }
    if let Some(s) = start {
        terms.push(Term { span: s..inner.end, text: Cow::Borrowed(&src[s..inner.end]) });
    }
    terms
}
