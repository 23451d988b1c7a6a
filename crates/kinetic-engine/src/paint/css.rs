/// Formats a number the way style values are written out.
///
/// - integral values print without a fractional part (`5`, not `5.0`)
/// - fractional values print with the shortest round-trip representation
/// - negative zero prints as `0`
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // Catches -0.0 as well.
        return "0".to_string();
    }
    format!("{}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_has_no_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-40.0), "-40");
    }

    #[test]
    fn fraction_is_verbatim() {
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_number(-0.0), "0");
    }
}
