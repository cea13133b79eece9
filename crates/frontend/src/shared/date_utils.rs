//! Utilities for date and amount formatting
//!
//! Provides consistent formatting across the application
use contracts::domain::a002_order::parse_order_date;

/// Table format, e.g. "Jan 5, 2024". Unparseable input is returned as is.
pub fn format_date(date_str: &str) -> String {
    parse_order_date(date_str)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// Detail view format, e.g. "January 5, 2024"
pub fn format_long_date(date_str: &str) -> String {
    parse_order_date(date_str)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

pub fn format_amount(amount: f64) -> String {
    format!("Rs {:.2}", amount)
}

/// `"N/A"` for blank text
pub fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2024-12-31T23:59:59Z"), "Dec 31, 2024");
        assert_eq!(format_long_date("2024-01-05T00:00:00.000Z"), "January 5, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_long_date(""), "");
    }

    #[test]
    fn test_amount_and_na() {
        assert_eq!(format_amount(7.5), "Rs 7.50");
        assert_eq!(or_na(" "), "N/A");
        assert_eq!(or_na("Berlin"), "Berlin");
    }
}
