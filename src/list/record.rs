/// A field value as seen by the sort/filter machinery.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Missing,
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Treats blank strings as missing.
    pub fn opt_text(s: Option<&str>) -> Self {
        match s {
            Some(s) if !s.trim().is_empty() => FieldValue::Text(s.to_string()),
            _ => FieldValue::Missing,
        }
    }

    pub fn opt_number(n: Option<f64>) -> Self {
        n.map(FieldValue::Number).unwrap_or(FieldValue::Missing)
    }

    /// Lowercased text form used by local search and filters.
    pub fn as_search_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.to_lowercase(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Missing => String::new(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// A row of a remote collection.
///
/// Identity is `id()`: two records with the same id are the same logical entity.
pub trait Record: Clone {
    fn id(&self) -> &str;

    /// Looks up a sortable/filterable field by its wire name.
    fn field(&self, name: &str) -> FieldValue;
}

/// Field names following the date/time naming convention compare as instants.
pub fn is_temporal_field(name: &str) -> bool {
    const SUFFIXES: [&str; 8] = [
        "_at",
        "At",
        "_date",
        "Date",
        "_time",
        "Time",
        "timestamp",
        "Timestamp",
    ];
    matches!(name, "date" | "time" | "timestamp") || SUFFIXES.iter().any(|s| name.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_field_names() {
        assert!(is_temporal_field("created_at"));
        assert!(is_temporal_field("updatedAt"));
        assert!(is_temporal_field("scheduled_date"));
        assert!(is_temporal_field("releaseDate"));
        assert!(is_temporal_field("send_time"));
        assert!(is_temporal_field("date"));
        assert!(is_temporal_field("timestamp"));
        assert!(!is_temporal_field("format"));
        assert!(!is_temporal_field("status"));
        assert!(!is_temporal_field("amount"));
    }

    #[test]
    fn test_field_value_search_text() {
        assert_eq!(FieldValue::text("Acme Inc").as_search_text(), "acme inc");
        assert_eq!(FieldValue::Number(42.0).as_search_text(), "42");
        assert_eq!(FieldValue::Number(1.5).as_search_text(), "1.5");
        assert_eq!(FieldValue::Missing.as_search_text(), "");
    }

    #[test]
    fn test_opt_text_blank_is_missing() {
        assert_eq!(FieldValue::opt_text(Some("  ")), FieldValue::Missing);
        assert_eq!(FieldValue::opt_text(None), FieldValue::Missing);
        assert_eq!(FieldValue::opt_text(Some("x")), FieldValue::text("x"));
    }
}
