//! Field text parsing and formatting

/// Parse the text of an input field
///
/// Surrounding whitespace is ignored. Returns `None` for text that is not a
/// number yet (empty, `-`, `1e`), in which case the bound value stays as it was.
/// `inf` and `NaN` are accepted and propagate like any other value.
pub fn parse_value(text: &str) -> Option<f32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f32>().ok()
}

/// Format a value for display with a fixed number of decimals
pub fn format_value(value: f32, decimal_places: usize) -> String {
    format!("{value:.decimal_places$}")
}

#[cfg(test)]
#[expect(clippy::float_cmp, reason = "Parsed literals are exact")]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_value("4"), Some(4.0));
        assert_eq!(parse_value("-2.5"), Some(-2.5));
        assert_eq!(parse_value("  256.000 "), Some(256.0));
        assert_eq!(parse_value("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_incomplete_text() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("-"), None);
        assert_eq!(parse_value("1e"), None);
        assert_eq!(parse_value("abc"), None);
    }

    #[test]
    fn test_parse_non_finite() {
        assert!(parse_value("NaN").is_some_and(f32::is_nan));
        assert_eq!(parse_value("inf"), Some(f32::INFINITY));
        assert_eq!(parse_value("-inf"), Some(f32::NEG_INFINITY));
    }

    #[test]
    fn test_format_three_decimals() {
        assert_eq!(format_value(0.0, 3), "0.000");
        assert_eq!(format_value(256.0, 3), "256.000");
        assert_eq!(format_value(-0.5, 3), "-0.500");
        assert_eq!(format_value(1.0, 0), "1");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_value(f32::NAN, 3), "NaN");
        assert_eq!(format_value(f32::INFINITY, 3), "inf");
    }

    #[test]
    fn test_formatted_text_parses_back() {
        for value in [0.0_f32, 1.0, -128.0, 2.5, 4096.25] {
            assert_eq!(parse_value(&format_value(value, 3)), Some(value));
        }
    }
}
