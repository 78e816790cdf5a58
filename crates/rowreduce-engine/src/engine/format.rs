/// Format a number for display.
///
/// Whole numbers print without a decimal point, everything else uses the
/// shortest representation that round-trips. Negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "#NAN!".to_string()
    } else if n.is_infinite() {
        "#INF!".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Parse a numeric literal as written in operations and matrix input.
///
/// Only finite values are accepted, so `inf` and `NaN` spellings are rejected.
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_whole_and_fractional() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-8.0), "-8");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("-1.5"), Some(-1.5));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("abc"), None);
    }
}
