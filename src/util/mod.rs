use crate::list::sort::parse_instant;
use crate::list::FieldValue;
use chrono::DateTime;

/// Wall clock in milliseconds (browser runtime).
pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

/// Table cell text for a timestamp column. Unparseable input is shown as-is.
pub(crate) fn format_instant(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "—".to_string();
    }
    let Some(ms) = parse_instant(&FieldValue::text(raw)) else {
        return raw.to_string();
    };
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) if raw.len() == 10 => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

pub(crate) fn format_count(n: Option<f64>) -> String {
    match n {
        Some(n) if n.is_finite() => format!("{}", n.round() as i64),
        _ => "—".to_string(),
    }
}

pub(crate) fn format_amount(n: Option<f64>, currency: &str) -> String {
    match n {
        Some(n) if n.is_finite() => format!("{n:.2} {currency}").trim_end().to_string(),
        _ => "—".to_string(),
    }
}

/// `"—"` for blank strings, so empty cells stay visibly empty.
pub(crate) fn or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "—".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_instant() {
        assert_eq!(format_instant("2024-03-05T14:07:09Z"), "2024-03-05 14:07");
        assert_eq!(format_instant("2024-03-05T16:07:09+02:00"), "2024-03-05 14:07");
        assert_eq!(format_instant("2024-03-05"), "2024-03-05");
        assert_eq!(format_instant("yesterday"), "yesterday");
        assert_eq!(format_instant("  "), "—");
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_count(Some(41.6)), "42");
        assert_eq!(format_count(None), "—");
        assert_eq!(format_amount(Some(29.0), "USD"), "29.00 USD");
        assert_eq!(format_amount(Some(29.0), ""), "29.00");
        assert_eq!(format_amount(Some(f64::NAN), "USD"), "—");
        assert_eq!(or_dash(""), "—");
        assert_eq!(or_dash("x"), "x");
    }
}
