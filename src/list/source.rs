use super::paginate::Page;
use super::query::QueryState;
use super::record::Record;
use super::sort::sort_records;
use crate::api::{ApiClient, ApiResult, CollectionEndpoint};
use serde::de::DeserializeOwned;

/// Where a list view gets its rows.
#[derive(Clone, Debug)]
pub(crate) enum ListSource<R> {
    Remote(CollectionEndpoint),
    /// Built-in illustrative rows; never used as a fallback for failed fetches.
    Demo(Vec<R>),
}

impl<R> ListSource<R> {
    pub fn is_demo(&self) -> bool {
        matches!(self, ListSource::Demo(_))
    }
}

impl<R: Record + DeserializeOwned> ListSource<R> {
    pub async fn fetch(
        &self,
        client: &ApiClient,
        query: &QueryState,
        search_fields: &[&str],
    ) -> ApiResult<Page<R>> {
        match self {
            ListSource::Remote(endpoint) => client.fetch_collection(*endpoint, query).await,
            ListSource::Demo(rows) => Ok(demo_page(rows, query, search_fields)),
        }
    }
}

/// Answers a query the way the backend would: search, filter, then page.
pub(crate) fn demo_page<R: Record>(
    rows: &[R],
    query: &QueryState,
    search_fields: &[&str],
) -> Page<R> {
    let mut matching: Vec<R> = rows
        .iter()
        .filter(|r| query.matches_local(*r, search_fields))
        .cloned()
        .collect();
    sort_records(&mut matching, query.sort.as_ref());
    Page::from_ordered(&matching, query.page, query.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::dedupe::tests::Row;

    #[test]
    fn test_demo_page_behaves_like_backend() {
        let rows: Vec<Row> = (1..=25)
            .map(|i| Row::new(&format!("d{i}"), if i % 5 == 0 { "Globex" } else { "Initech" }))
            .collect();

        let mut q = QueryState::new(10);
        q.page = 3;
        let page = demo_page(&rows, &q, &["name"]);
        assert_eq!(page.total, 25);
        assert_eq!(page.items.len(), 5);

        q.page = 1;
        q.search_text = "globex".to_string();
        let page = demo_page(&rows, &q, &["name"]);
        assert_eq!(page.total, 5);
        assert_eq!(page.items[0].id, "d5");
    }

    #[test]
    fn test_is_demo() {
        let demo: ListSource<Row> = ListSource::Demo(vec![]);
        let remote: ListSource<Row> =
            ListSource::Remote(CollectionEndpoint::new("/api/users", "users"));
        assert!(demo.is_demo());
        assert!(!remote.is_demo());
    }
}
