//! Currency-string parsing and display formatting.

/// Reduces a formatted currency string to its numeric content.
///
/// Every character that is not an ASCII digit, `.` or `-` is stripped
/// before parsing, so `"$1,234.50"` yields `1234.5`. Malformed or empty
/// input yields `0.0`; nothing is surfaced as an error.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Formats a number with a thousands separator (space) and the given number
/// of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a space every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Integer display with thousands separator, used for axis ticks.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formatted_currency() {
        assert_eq!(parse_amount("$1,234.50"), 1234.5);
        assert_eq!(parse_amount("$120,000"), 120000.0);
        assert_eq!(parse_amount("-$2,500.75"), -2500.75);
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("N/A"), 0.0);
        assert_eq!(parse_amount("$"), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
        assert_eq!(parse_amount("--5"), 0.0);
    }

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(parse_amount("42"), 42.0);
        assert_eq!(parse_amount("3.5"), 3.5);
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.5, 2), "1 234.50");
        assert_eq!(format_number_with_decimals(1234567.89, 2), "1 234 567.89");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
        assert_eq!(format_number_with_decimals(-1234.56, 2), "-1 234.56");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1 234");
    }
}
