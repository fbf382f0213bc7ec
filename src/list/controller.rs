use super::debounce::Debouncer;
use super::dedupe::dedupe;
use super::paginate::{clamp_page, Page};
use super::query::QueryState;
use super::record::Record;
use super::sort::{next_sort, sort_records};
use crate::api::{ApiError, ApiResult};

/// Where search/filter/pagination happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListMode {
    /// The backend pages, searches and filters; the client dedupes and sorts the page.
    Remote,
    /// One fetch of the whole collection; everything else happens in memory.
    ///
    /// Falls back to [`ListMode::Remote`] when the backend reports more rows
    /// than the prefetch returned.
    Local,
}

#[derive(Clone, Debug)]
pub struct ListConfig {
    pub page_size: usize,
    pub mode: ListMode,
    pub search_debounce_ms: u32,
    /// Fields matched by local search.
    pub search_fields: Vec<&'static str>,
    /// `limit` sent for the single Local-mode fetch.
    pub prefetch_limit: usize,
}

impl ListConfig {
    pub fn remote(page_size: usize) -> Self {
        Self {
            page_size,
            mode: ListMode::Remote,
            search_debounce_ms: 400,
            search_fields: vec![],
            prefetch_limit: 1000,
        }
    }

    pub fn local(page_size: usize, search_fields: &[&'static str]) -> Self {
        Self {
            mode: ListMode::Local,
            search_fields: search_fields.to_vec(),
            ..Self::remote(page_size)
        }
    }

    pub fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.search_debounce_ms = ms;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<R> {
    Idle,
    Loading,
    Ready(Page<R>),
    Error(ApiError),
}

/// A fetch the caller must run and hand back to [`ListViewController::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: u64,
    pub query: QueryState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued (or the view unmounted) after this one.
    Discarded,
    /// The requested page fell off the end; fetch the clamped page instead.
    Refetch(FetchRequest),
}

/// State machine behind every list page: query state in, visible page out.
///
/// It never performs I/O. Mutators return a [`FetchRequest`] when new data is
/// needed; only the response to the most recent request is ever applied.
#[derive(Clone, Debug)]
pub struct ListViewController<R> {
    config: ListConfig,
    query: QueryState,
    state: ViewState<R>,
    /// Local mode: the whole deduped collection.
    loaded: Option<Vec<R>>,
    latest_request: u64,
    search: Debouncer<String>,
    mounted: bool,
}

impl<R: Record> ListViewController<R> {
    pub fn new(config: ListConfig) -> Self {
        Self {
            query: QueryState::new(config.page_size),
            search: Debouncer::new(config.search_debounce_ms),
            state: ViewState::Idle,
            loaded: None,
            latest_request: 0,
            mounted: false,
            config,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn state(&self) -> &ViewState<R> {
        &self.state
    }

    pub fn page(&self) -> Option<&Page<R>> {
        match &self.state {
            ViewState::Ready(p) => Some(p),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.state {
            ViewState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn mount(&mut self) -> Option<FetchRequest> {
        self.mounted = true;
        self.begin()
    }

    /// Stops accepting responses; any in-flight fetch is discarded when it lands.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.search.cancel();
        self.latest_request += 1;
    }

    pub fn set_page(&mut self, page: usize) -> Option<FetchRequest> {
        let mut page = page.max(1);
        if let Some(p) = self.page() {
            page = clamp_page(page, p.total, self.query.page_size);
        }
        if page == self.query.page && self.page().is_some() {
            return None;
        }
        self.query.page = page;
        self.begin()
    }

    /// Queues a search change. Nothing is fetched until [`Self::poll_search`]
    /// runs after the quiet interval.
    pub fn set_search(&mut self, text: impl Into<String>, now_ms: i64) {
        self.search.push(text.into(), now_ms);
    }

    /// When the pending search (if any) becomes due.
    pub fn search_deadline(&self) -> Option<i64> {
        self.search.deadline()
    }

    pub fn poll_search(&mut self, now_ms: i64) -> Option<FetchRequest> {
        let text = self.search.poll(now_ms)?;
        if text.trim() == self.query.search_text.trim() {
            return None;
        }
        self.query.search_text = text;
        self.begin()
    }

    /// A blank value removes the filter.
    pub fn set_filter(&mut self, key: &str, value: &str) -> Option<FetchRequest> {
        let value = value.trim();
        let changed = if value.is_empty() {
            self.query.filters.remove(key).is_some()
        } else {
            self.query.filters.insert(key.to_string(), value.to_string()) != Some(value.to_string())
        };
        if !changed {
            return None;
        }
        self.begin()
    }

    pub fn clear_filters(&mut self) -> Option<FetchRequest> {
        if self.query.filters.is_empty() {
            return None;
        }
        self.query.filters.clear();
        self.begin()
    }

    /// Cycles the sort on `field`: asc, desc, then unsorted.
    pub fn set_sort(&mut self, field: &str) -> Option<FetchRequest> {
        self.query.sort = next_sort(self.query.sort.as_ref(), field);
        self.begin()
    }

    pub fn refresh(&mut self) -> Option<FetchRequest> {
        self.loaded = None;
        self.begin()
    }

    /// Called after a successful create/update/delete: the current page is stale.
    pub fn invalidate(&mut self) -> Option<FetchRequest> {
        tracing::debug!("list invalidated by mutation");
        self.refresh()
    }

    pub fn resolve(&mut self, request_id: u64, result: ApiResult<Page<R>>) -> Resolution {
        if !self.mounted || request_id != self.latest_request {
            tracing::debug!(
                request_id,
                latest = self.latest_request,
                "discarding stale list response"
            );
            return Resolution::Discarded;
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                self.state = ViewState::Error(e);
                return Resolution::Applied;
            }
        };

        match self.config.mode {
            ListMode::Local if page.total > page.items.len() => {
                tracing::warn!(
                    fetched = page.items.len(),
                    total = page.total,
                    "collection exceeds the local prefetch limit, switching to server paging"
                );
                self.config.mode = ListMode::Remote;
                self.loaded = None;
                match self.begin() {
                    Some(req) => Resolution::Refetch(req),
                    None => Resolution::Applied,
                }
            }
            ListMode::Local => {
                self.loaded = Some(dedupe(page.items));
                self.recompute_local();
                Resolution::Applied
            }
            ListMode::Remote => {
                let clamped = clamp_page(self.query.page, page.total, self.query.page_size);
                if clamped != self.query.page {
                    tracing::debug!(
                        from = self.query.page,
                        to = clamped,
                        total = page.total,
                        "page out of range, refetching"
                    );
                    self.query.page = clamped;
                    return match self.begin() {
                        Some(req) => Resolution::Refetch(req),
                        None => Resolution::Applied,
                    };
                }

                let mut items = dedupe(page.items);
                items.truncate(self.query.page_size);
                sort_records(&mut items, self.query.sort.as_ref());
                self.state = ViewState::Ready(Page {
                    items,
                    total: page.total,
                    page: self.query.page,
                    page_size: self.query.page_size,
                });
                Resolution::Applied
            }
        }
    }

    fn begin(&mut self) -> Option<FetchRequest> {
        if !self.mounted {
            return None;
        }

        if self.config.mode == ListMode::Local && self.loaded.is_some() {
            self.recompute_local();
            return None;
        }

        self.latest_request += 1;
        self.state = ViewState::Loading;
        Some(FetchRequest {
            id: self.latest_request,
            query: self.fetch_query(),
        })
    }

    fn fetch_query(&self) -> QueryState {
        match self.config.mode {
            ListMode::Remote => self.query.clone(),
            ListMode::Local => QueryState::new(self.config.prefetch_limit),
        }
    }

    fn recompute_local(&mut self) {
        let Some(all) = self.loaded.as_ref() else {
            return;
        };

        let mut visible: Vec<R> = all
            .iter()
            .filter(|r| self.query.matches_local(*r, &self.config.search_fields))
            .cloned()
            .collect();
        sort_records(&mut visible, self.query.sort.as_ref());

        let page = clamp_page(self.query.page, visible.len(), self.query.page_size);
        self.query.page = page;
        self.state = ViewState::Ready(Page::from_ordered(&visible, page, self.query.page_size));
    }
}
