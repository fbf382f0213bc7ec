use super::record::Record;
use super::sort::SortSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the user controls about a list view.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub search_text: String,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort: None,
        }
    }

    /// `page=..&limit=..&search=..&<filter>=..` in the backend's collection convention.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![
            format!("page={}", self.page),
            format!("limit={}", self.page_size),
        ];

        let search = self.search_text.trim();
        if !search.is_empty() {
            parts.push(format!("search={}", urlencoding::encode(search)));
        }

        for (k, v) in &self.filters {
            if v.trim().is_empty() {
                continue;
            }
            parts.push(format!(
                "{}={}",
                urlencoding::encode(k),
                urlencoding::encode(v.trim())
            ));
        }

        parts.join("&")
    }

    /// Client-side search + filter check.
    ///
    /// Search is a case-insensitive substring over `search_fields`; each filter is a
    /// case-insensitive equality on the field of the same name.
    pub fn matches_local<R: Record>(&self, record: &R, search_fields: &[&str]) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        if !needle.is_empty()
            && !search_fields
                .iter()
                .any(|f| record.field(f).as_search_text().contains(&needle))
        {
            return false;
        }

        self.filters.iter().all(|(k, v)| {
            let want = v.trim().to_lowercase();
            want.is_empty() || record.field(k).as_search_text() == want
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::dedupe::tests::Row;

    #[test]
    fn test_defaults() {
        let q = QueryState::new(10);
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
        assert!(q.search_text.is_empty());
        assert!(q.filters.is_empty());
        assert!(q.sort.is_none());
        assert_eq!(QueryState::new(0).page_size, 1);
    }

    #[test]
    fn test_query_string() {
        let mut q = QueryState::new(20);
        q.page = 3;
        assert_eq!(q.to_query_string(), "page=3&limit=20");

        q.search_text = "  acme corp ".to_string();
        q.filters.insert("status".to_string(), "active".to_string());
        q.filters.insert("plan".to_string(), String::new());
        q.filters.insert("company id".to_string(), "a&b".to_string());
        assert_eq!(
            q.to_query_string(),
            "page=3&limit=20&search=acme%20corp&company%20id=a%26b&status=active"
        );
    }

    #[test]
    fn test_matches_local_search_and_filters() {
        let row = Row::new("r1", "Acme Industries").with_amount(12.0);

        let mut q = QueryState::new(10);
        assert!(q.matches_local(&row, &["name"]));

        q.search_text = "INDUS".to_string();
        assert!(q.matches_local(&row, &["name"]));
        assert!(!q.matches_local(&row, &["id"]));

        q.filters.insert("amount".to_string(), "12".to_string());
        assert!(q.matches_local(&row, &["name"]));

        q.filters.insert("amount".to_string(), "13".to_string());
        assert!(!q.matches_local(&row, &["name"]));

        q.filters.insert("amount".to_string(), " ".to_string());
        assert!(q.matches_local(&row, &["name"]));
    }
}
