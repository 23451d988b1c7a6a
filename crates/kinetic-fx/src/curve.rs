use kinetic_complex::ComplexValue;
use kinetic_engine::paint::{format_number, Color};

use crate::error::AnimationError;
use crate::property::{PropertyDescriptor, PropertyValue};

// ── Interpolator ──────────────────────────────────────────────────────────

/// Per-property interpolation, decided once when the animation begins.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolator {
    /// `(end - start) * r + start` followed by `unit`.
    Number { start: f64, end: f64, unit: String },
    /// Channel blend, written as `rgb(...)`.
    Color { start: Color, end: Color },
    /// Functional-notation value; see [`kinetic_complex`].
    Complex(ComplexValue),
    /// List-valued property. Emits nothing.
    Skipped,
    /// Base resolution failed. A begin hook may still replace this entry;
    /// otherwise the error is reported when the animation begins.
    Unresolved(AnimationError),
}

impl Interpolator {
    /// Base resolution for one property, without any begin hook applied.
    ///
    /// - list starts are skipped
    /// - names containing `color` blend as colors
    /// - everything else reads as a number, unit defaulting to `px`
    ///   (`opacity` is always unitless)
    pub fn resolve(
        name: &str,
        start: &PropertyValue,
        end: &PropertyValue,
        units: Option<&str>,
    ) -> Self {
        if let PropertyValue::List(_) = start {
            return Interpolator::Skipped;
        }

        if name.to_ascii_lowercase().contains("color") {
            let color = |v: &PropertyValue| v.as_text().and_then(Color::parse);
            return match (color(start), color(end)) {
                (Some(start), Some(end)) => Interpolator::Color { start, end },
                (None, _) => Interpolator::Unresolved(invalid_color(name, start)),
                (_, None) => Interpolator::Unresolved(invalid_color(name, end)),
            };
        }

        match (start.leading_number(), end.leading_number()) {
            (Some(start), Some(end)) => {
                let unit = if name == "opacity" { "" } else { units.unwrap_or("px") };
                Interpolator::Number { start, end, unit: unit.to_string() }
            }
            (None, _) => Interpolator::Unresolved(invalid_number(name, start)),
            (_, None) => Interpolator::Unresolved(invalid_number(name, end)),
        }
    }

    /// Style text at `ratio`, or `None` for properties that emit nothing.
    pub fn value_at(&self, ratio: f64) -> Option<String> {
        match self {
            Interpolator::Number { start, end, unit } => {
                let mut out = format_number((end - start) * ratio + start);
                out.push_str(unit);
                Some(out)
            }
            Interpolator::Color { start, end } => Some(Color::blend(*start, *end, ratio).to_css(false)),
            Interpolator::Complex(value) => Some(value.evaluate(ratio)),
            Interpolator::Skipped | Interpolator::Unresolved(_) => None,
        }
    }
}

fn invalid_color(name: &str, value: &PropertyValue) -> AnimationError {
    AnimationError::InvalidColor { property: name.to_string(), value: value.to_style_string() }
}

fn invalid_number(name: &str, value: &PropertyValue) -> AnimationError {
    AnimationError::InvalidNumber { property: name.to_string(), value: value.to_style_string() }
}

// ── FrameValues ───────────────────────────────────────────────────────────

/// Style values computed for one frame, in property order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameValues(Vec<(String, String)>);

impl FrameValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── PropertyCurve ─────────────────────────────────────────────────────────

/// The per-frame value computation of an animation: one interpolator per
/// property, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyCurve {
    entries: Vec<(String, Interpolator)>,
}

impl PropertyCurve {
    /// Base resolution of every property. `props` must have their starts filled in.
    pub fn resolve(props: &[(String, PropertyDescriptor)]) -> Self {
        let entries = props
            .iter()
            .map(|(name, desc)| {
                let interp = match &desc.start {
                    Some(start) => Interpolator::resolve(name, start, &desc.end, desc.units.as_deref()),
                    None => Interpolator::Unresolved(AnimationError::MissingStart { property: name.clone() }),
                };
                (name.clone(), interp)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Interpolator> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, i)| i)
    }

    /// Swaps the interpolator of an existing property. Returns false if the
    /// property is not part of the curve.
    pub fn replace(&mut self, name: &str, interp: Interpolator) -> bool {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => {
                *slot = interp;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Interpolator)> {
        self.entries.iter().map(|(n, i)| (n.as_str(), i))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fails with the first error left behind by base resolution.
    pub fn check(&self) -> Result<(), AnimationError> {
        for (name, interp) in &self.entries {
            match interp {
                Interpolator::Unresolved(err) => return Err(err.clone()),
                Interpolator::Skipped => log::warn!("property {:?} has a list value; skipped", name),
                _ => {}
            }
        }
        Ok(())
    }

    /// Computes every property's style text at `ratio`.
    pub fn value_at(&self, ratio: f64) -> FrameValues {
        FrameValues(
            self.entries
                .iter()
                .filter_map(|(name, interp)| interp.value_at(ratio).map(|v| (name.clone(), v)))
                .collect(),
        )
    }
}
