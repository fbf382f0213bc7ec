use super::record::Record;
use std::collections::HashSet;

/// Collapses `records` to the first occurrence of each id, preserving order.
///
/// Ids compare exactly. Records with a blank id are malformed and dropped.
pub fn dedupe<R: Record>(records: Vec<R>) -> Vec<R> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut out = Vec::with_capacity(records.len());
    let mut malformed = 0usize;

    for r in records {
        let id = r.id();
        if id.trim().is_empty() {
            malformed += 1;
            continue;
        }
        if seen.insert(id.to_string()) {
            out.push(r);
        }
    }

    if malformed > 0 {
        tracing::debug!(malformed, "dropped records without an id");
    }

    out
}
