use super::css::format_number;

/// Straight-alpha sRGB color, the CSS color model.
///
/// Invariant:
/// - `a` is in `[0, 1]`; channels are full bytes.
///
/// Colors coming out of [`Color::blend`] are rounded and clamped back into this
/// range, so any `Color` can be written out with [`Color::to_css`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// CSS basic color keywords.
const NAMED: &[(&str, [u8; 3])] = &[
    ("black",   [0, 0, 0]),
    ("silver",  [192, 192, 192]),
    ("gray",    [128, 128, 128]),
    ("white",   [255, 255, 255]),
    ("maroon",  [128, 0, 0]),
    ("red",     [255, 0, 0]),
    ("purple",  [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green",   [0, 128, 0]),
    ("lime",    [0, 255, 0]),
    ("olive",   [128, 128, 0]),
    ("yellow",  [255, 255, 0]),
    ("navy",    [0, 0, 128]),
    ("blue",    [0, 0, 255]),
    ("teal",    [0, 128, 128]),
    ("aqua",    [0, 255, 255]),
];

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0.0 }
    }

    /// Parses any supported CSS color syntax: hex, `rgb()`/`rgba()`, or a keyword.
    pub fn parse(src: &str) -> Option<Self> {
        let s = src.trim();
        if s.starts_with('#') {
            Self::from_hex(s)
        } else if s.contains('(') {
            Self::from_rgb_fn(s)
        } else {
            Self::named(s)
        }
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(src: &str) -> Option<Self> {
        let hex = src.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let long = |i: usize| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok();

        let (r, g, b, a) = match hex.len() {
            3 => (short(0)?, short(1)?, short(2)?, 255),
            4 => (short(0)?, short(1)?, short(2)?, short(3)?),
            6 => (long(0)?, long(1)?, long(2)?, 255),
            8 => (long(0)?, long(1)?, long(2)?, long(3)?),
            _ => return None,
        };
        Some(Self::rgba(r, g, b, a as f32 / 255.0))
    }

    /// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Channels may be integers or percentages; alpha is a number in `[0, 1]`.
    pub fn from_rgb_fn(src: &str) -> Option<Self> {
        let s = src.trim();
        let open = s.find('(')?;
        let name = s[..open].trim().to_ascii_lowercase();
        let body = s[open + 1..].strip_suffix(')')?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        let expected = match name.as_str() {
            "rgb" => 3,
            "rgba" => 4,
            _ => return None,
        };
        if parts.len() != expected {
            return None;
        }

        let channel = |p: &str| -> Option<u8> {
            let v = match p.strip_suffix('%') {
                Some(pct) => pct.trim().parse::<f64>().ok()? * 255.0 / 100.0,
                None => p.parse::<f64>().ok()?,
            };
            Some(round_half_up(v).clamp(0.0, 255.0) as u8)
        };

        let a = match parts.get(3) {
            Some(p) => p.parse::<f32>().ok()?,
            None => 1.0,
        };
        Some(Self::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }

    /// Looks up a CSS keyword (`red`, `navy`, `transparent`, ...), case-insensitively.
    pub fn named(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "transparent" {
            return Some(Self::transparent());
        }
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, [r, g, b])| Self::rgb(*r, *g, *b))
    }

    /// Blends two colors channel-wise.
    ///
    /// `weight` is not clamped, so values outside `[0, 1]` extrapolate; the
    /// result is rounded and clamped back into the valid color range.
    pub fn blend(start: Color, end: Color, weight: f64) -> Color {
        let lerp = |s: f64, e: f64| s + (e - s) * weight;
        let channel = |s: u8, e: u8| round_half_up(lerp(s as f64, e as f64)).clamp(0.0, 255.0) as u8;

        Color {
            r: channel(start.r, end.r),
            g: channel(start.g, end.g),
            b: channel(start.b, end.b),
            a: lerp(start.a as f64, end.a as f64).clamp(0.0, 1.0) as f32,
        }
    }

    /// Writes the color as `rgb(r, g, b)` or, with `include_alpha`, `rgba(r, g, b, a)`.
    pub fn to_css(self, include_alpha: bool) -> String {
        if include_alpha {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                format_number(alpha_f64(self.a))
            )
        } else {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        }
    }

    /// Writes the color as `#rrggbb` or, with `include_alpha`, `#rrggbbaa`.
    ///
    /// Unlike [`Color::to_css`] the result is a single token with no commas or
    /// parentheses, so it can sit inside a functional-notation group.
    pub fn to_hex(self, include_alpha: bool) -> String {
        if include_alpha {
            let a = round_half_up(self.a as f64 * 255.0).clamp(0.0, 255.0) as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }
}

/// JavaScript-style `Math.round`: halves round towards positive infinity.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Widens alpha to f64 without exposing f32 noise (`0.1f32` would print as
/// `0.10000000149011612`).
#[inline]
fn alpha_f64(a: f32) -> f64 {
    format!("{}", a).parse().unwrap_or(a as f64)
}
