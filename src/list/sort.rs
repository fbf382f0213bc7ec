use super::record::{is_temporal_field, FieldValue, Record};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Header-click cycle, the same for every list: asc -> desc -> unsorted.
///
/// Clicking a different column always starts at ascending.
pub fn next_sort(current: Option<&SortSpec>, field: &str) -> Option<SortSpec> {
    match current {
        Some(s) if s.field == field => match s.direction {
            SortDirection::Asc => Some(SortSpec::desc(field)),
            SortDirection::Desc => None,
        },
        _ => Some(SortSpec::asc(field)),
    }
}

/// Compares two records on `field`, dispatching on the field type.
pub fn compare<R: Record>(a: &R, b: &R, field: &str, direction: SortDirection) -> Ordering {
    let base = compare_values(&a.field(field), &b.field(field), is_temporal_field(field));
    match direction {
        SortDirection::Asc => base,
        SortDirection::Desc => base.reverse(),
    }
}

fn compare_values(a: &FieldValue, b: &FieldValue, temporal: bool) -> Ordering {
    if temporal {
        // None < Some, so unparsable instants sort as smallest.
        return parse_instant(a).cmp(&parse_instant(b));
    }

    match (a, b) {
        (FieldValue::Number(_), _) | (_, FieldValue::Number(_)) => {
            let x = as_number(a);
            let y = as_number(b);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        _ => as_text(a).cmp(&as_text(b)),
    }
}

fn as_number(v: &FieldValue) -> f64 {
    match v {
        FieldValue::Number(n) if n.is_finite() => *n,
        FieldValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn as_text(v: &FieldValue) -> String {
    match v {
        FieldValue::Text(s) => s.to_lowercase(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Missing => String::new(),
    }
}

/// Milliseconds since the Unix epoch. Naive timestamps are taken as UTC.
pub fn parse_instant(v: &FieldValue) -> Option<i64> {
    match v {
        FieldValue::Number(n) if n.is_finite() => Some(*n as i64),
        FieldValue::Text(s) => parse_instant_str(s.trim()),
        _ => None,
    }
}

fn parse_instant_str(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Stable in-place sort. `None` leaves the input order untouched.
pub fn sort_records<R: Record>(records: &mut [R], spec: Option<&SortSpec>) {
    let Some(spec) = spec else {
        return;
    };
    records.sort_by(|a, b| compare(a, b, &spec.field, spec.direction));
}
