use super::{ApiClient, ApiError, ApiResult};
use crate::list::paginate::Page;
use crate::list::query::QueryState;
use crate::models::normalize_id;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A paginated collection resource.
///
/// The backend names the array differently per resource (`subscriptions`,
/// `activities`, `data`, ...), so the key travels with the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CollectionEndpoint {
    pub path: &'static str,
    pub items_key: &'static str,
}

impl CollectionEndpoint {
    pub const fn new(path: &'static str, items_key: &'static str) -> Self {
        Self { path, items_key }
    }
}

impl ApiClient {
    /// `GET <path>?page=..&limit=..&search=..&<filters>`
    pub async fn fetch_collection<R: DeserializeOwned>(
        &self,
        endpoint: CollectionEndpoint,
        query: &QueryState,
    ) -> ApiResult<Page<R>> {
        let path = format!("{}?{}", endpoint.path, query.to_query_string());
        let data: Value = self.send(Method::GET, &path, None::<&()>).await?;
        let page = parse_collection_response(data, endpoint.items_key, query)?;
        tracing::info!(
            path = endpoint.path,
            page = page.page,
            items = page.items.len(),
            total = page.total,
            "collection fetched"
        );
        Ok(page)
    }
}

/// Reads `{ <items_key>: [...], total, page, limit }`.
///
/// Missing `total`/`page`/`limit` fall back to the item count and the request.
/// `_id` is folded into `id` first. Entries that still do not deserialize
/// (non-objects) are dropped.
pub(crate) fn parse_collection_response<R: DeserializeOwned>(
    data: Value,
    items_key: &str,
    query: &QueryState,
) -> ApiResult<Page<R>> {
    let (raw, envelope) = match data {
        Value::Array(items) => (items, Value::Null),
        Value::Object(mut map) => match map.remove(items_key) {
            Some(Value::Array(items)) => (items, Value::Object(map)),
            Some(Value::Null) | None => {
                return Err(ApiError::Parse(format!(
                    "response has no `{items_key}` array"
                )))
            }
            Some(other) => {
                return Err(ApiError::Parse(format!(
                    "`{items_key}` is not an array: {other}"
                )))
            }
        },
        other => return Err(ApiError::Parse(format!("expected an object, got {other}"))),
    };

    let raw_len = raw.len();
    let items: Vec<R> = raw
        .into_iter()
        .filter_map(|mut item| {
            normalize_id(&mut item);
            match serde_json::from_value::<R>(item) {
                Ok(r) => Some(r),
                Err(e) => {
                    tracing::debug!(error = %e, "dropping malformed record");
                    None
                }
            }
        })
        .collect();

    let get_usize = |k: &str| -> Option<usize> {
        let v = envelope.get(k)?;
        v.as_u64()
            .map(|n| n as usize)
            .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
    };

    Ok(Page {
        items,
        total: get_usize("total").unwrap_or(raw_len),
        page: get_usize("page").filter(|p| *p > 0).unwrap_or(query.page),
        page_size: get_usize("limit")
            .filter(|l| *l > 0)
            .unwrap_or(query.page_size),
    })
}
