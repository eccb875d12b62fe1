use std::str::FromStr;

use rust_decimal::Decimal;

/// Formats a scale-bar value without trailing zeros.
///
/// `1000.0` formats as `"1000"`, `0.1` as `"0.1"`, `1.50` as `"1.5"`.
#[must_use]
pub fn format_bar_value(value: f64) -> String {
    let Ok(decimal) = Decimal::from_str(&value.to_string()) else {
        return value.to_string();
    };

    if decimal.is_integer() {
        decimal.trunc().to_string()
    } else {
        decimal.normalize().to_string()
    }
}

/// Fixed-precision tick label with trailing zeros trimmed.
#[must_use]
pub fn format_tick_value(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    trim_trailing_zeros(format!("{value:.precision$}"))
}

fn trim_trailing_zeros(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    if text == "-0" { "0".to_owned() } else { text }
}

#[cfg(test)]
mod tests {
    use super::{format_bar_value, format_tick_value};

    #[test]
    fn bar_values_drop_trailing_zeros() {
        assert_eq!(format_bar_value(1000.0), "1000");
        assert_eq!(format_bar_value(0.1), "0.1");
        assert_eq!(format_bar_value(1.50), "1.5");
        assert_eq!(format_bar_value(0.001), "0.001");
    }

    #[test]
    fn tick_values_trim_to_precision() {
        assert_eq!(format_tick_value(2.5000, 4), "2.5");
        assert_eq!(format_tick_value(-0.0001, 2), "0");
        assert_eq!(format_tick_value(120.0, 1), "120");
    }
}
