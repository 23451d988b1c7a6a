use kinetic_engine::paint::format_number;

// ── PropertyValue ─────────────────────────────────────────────────────────

/// A start or end value as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    /// Any style text: `"10px"`, `"#ff0000"`, `"rect(0px 1px 1px 0px)"`.
    Text(String),
    /// Multi-value input. Not interpolated; such properties are skipped.
    List(Vec<f64>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value written out as style text.
    pub fn to_style_string(&self) -> String {
        match self {
            PropertyValue::Number(n) => format_number(*n),
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::List(items) => items
                .iter()
                .map(|v| format_number(*v))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Numeric reading of the value: numbers as-is, text by its leading number.
    pub fn leading_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Text(s) => leading_number(s),
            PropertyValue::List(_) => None,
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self { PropertyValue::Number(v) }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self { PropertyValue::Number(v as f64) }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self { PropertyValue::Text(v.to_string()) }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self { PropertyValue::Text(v) }
}

impl From<Vec<f64>> for PropertyValue {
    fn from(v: Vec<f64>) -> Self { PropertyValue::List(v) }
}

// ── PropertyDescriptor ────────────────────────────────────────────────────

/// How one style property moves over an animation.
///
/// ```rust
/// use kinetic_fx::property::PropertyDescriptor;
///
/// let clip = PropertyDescriptor::new("rect(0px 50px 50px 0px)", "rect(10px 30px 30px 10px)");
/// let width = PropertyDescriptor::to(300).units("em");
/// assert!(width.start.is_none());
/// # let _ = clip;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// `None` means "the target's current style", read when the animation begins.
    pub start: Option<PropertyValue>,
    pub end: PropertyValue,
    /// Unit for plain numeric properties. Defaults to `px`; ignored for `opacity`.
    pub units: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(start: impl Into<PropertyValue>, end: impl Into<PropertyValue>) -> Self {
        Self { start: Some(start.into()), end: end.into(), units: None }
    }

    /// Animates from the target's current style to `end`.
    pub fn to(end: impl Into<PropertyValue>) -> Self {
        Self { start: None, end: end.into(), units: None }
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}

/// `parseFloat`-style reading: the longest numeric prefix after leading
/// whitespace (`"12.5px"` → `12.5`, `"px"` → `None`).
pub fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    let int_end = digits_from(i);
    let mut end = int_end;
    if end < bytes.len() && bytes[end] == b'.' {
        end = digits_from(end + 1);
    }
    if int_end == i && end <= int_end + 1 {
        return None;
    }

    // Optional exponent, only if it has digits.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_number_reads_prefix() {
        assert_eq!(leading_number("12.5px"), Some(12.5));
        assert_eq!(leading_number("  -3em"), Some(-3.0));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("1e2px"), Some(100.0));
        assert_eq!(leading_number("4."), Some(4.0));
    }

    #[test]
    fn leading_number_rejects_non_numbers() {
        assert_eq!(leading_number("px"), None);
        assert_eq!(leading_number("rect(1px)"), None);
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn style_string_forms() {
        assert_eq!(PropertyValue::from(5).to_style_string(), "5");
        assert_eq!(PropertyValue::from("10px").to_style_string(), "10px");
        assert_eq!(PropertyValue::from(vec![1.0, 2.5]).to_style_string(), "1 2.5");
    }

    #[test]
    fn descriptor_builders() {
        let d = PropertyDescriptor::to(0.5).units("em");
        assert_eq!(d.start, None);
        assert_eq!(d.end, PropertyValue::Number(0.5));
        assert_eq!(d.units.as_deref(), Some("em"));
    }
}
