//! Binds a [`ListViewController`] to the reactive graph.
//!
//! The controller decides *what* to fetch; this hook runs the fetches with
//! `spawn_local`, schedules the search debounce on a browser timer and feeds
//! results back. Responses that land after unmount (or after a newer request)
//! are dropped by the controller.

use crate::api::{ApiClient, ApiError};
use crate::list::controller::{FetchRequest, Resolution};
use crate::list::query::QueryState;
use crate::list::{ListConfig, ListSource, ListViewController, Page, Record};
use crate::state::AppContext;
use crate::util::now_ms;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

/// Everything a row type needs to back a list page.
pub(crate) trait ListRow:
    Record + DeserializeOwned + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
}

impl<T> ListRow for T where
    T: Record + DeserializeOwned + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
}

/// Handle to one mounted list. Cheap to copy into event handlers.
pub(crate) struct ListView<R> {
    controller: RwSignal<ListViewController<R>>,
    source: StoredValue<ListSource<R>>,
    api_client: RwSignal<ApiClient>,
    search_timer: StoredValue<Option<i32>>,
    /// Raw search box text (updates on every keystroke).
    pub search_input: RwSignal<String>,
}

impl<R> Clone for ListView<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ListView<R> {}

pub(crate) fn use_list_view<R: ListRow>(source: ListSource<R>, config: ListConfig) -> ListView<R> {
    let app_state = expect_context::<AppContext>();

    let list = ListView {
        controller: RwSignal::new(ListViewController::new(config)),
        source: StoredValue::new(source),
        api_client: app_state.0.api_client,
        search_timer: StoredValue::new(None),
        search_input: RwSignal::new(String::new()),
    };

    list.dispatch(|c| c.mount());

    on_cleanup(move || {
        list.clear_search_timer();
        let _ = list.controller.try_update(|c| c.unmount());
    });

    list
}

impl<R: ListRow> ListView<R> {
    // Reads (tracked).

    pub fn page(&self) -> Option<Page<R>> {
        self.controller.with(|c| c.page().cloned())
    }

    pub fn error(&self) -> Option<ApiError> {
        self.controller.with(|c| c.error().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.controller.with(|c| c.is_loading())
    }

    pub fn query(&self) -> QueryState {
        self.controller.with(|c| c.query().clone())
    }

    pub fn filter_value(&self, key: &str) -> String {
        self.controller
            .with(|c| c.query().filters.get(key).cloned())
            .unwrap_or_default()
    }

    pub fn is_demo(&self) -> bool {
        self.source.with_value(|s| s.is_demo())
    }

    // Mutations.

    pub fn set_page(self, page: usize) {
        self.dispatch(|c| c.set_page(page));
    }

    /// Debounced: the fetch happens once typing pauses.
    pub fn set_search(self, text: String) {
        let now = now_ms();
        let deadline = self
            .controller
            .try_update(|c| {
                c.set_search(text, now);
                c.search_deadline()
            })
            .flatten();
        if let Some(deadline) = deadline {
            self.schedule_search_poll(deadline - now);
        }
    }

    pub fn set_filter(self, key: &'static str, value: String) {
        self.dispatch(|c| c.set_filter(key, &value));
    }

    pub fn clear_filters(self) {
        self.dispatch(|c| c.clear_filters());
    }

    pub fn set_sort(self, field: &'static str) {
        self.dispatch(|c| c.set_sort(field));
    }

    pub fn refresh(self) {
        self.dispatch(|c| c.refresh());
    }

    /// Call after a successful create/update/delete.
    pub fn invalidate(self) {
        self.dispatch(|c| c.invalidate());
    }

    /// Demo source only: drops a fixture row, then reloads as a real delete would.
    pub fn remove_demo_row(self, id: &str) {
        self.source.update_value(|s| {
            if let ListSource::Demo(rows) = s {
                rows.retain(|r| r.id() != id);
            }
        });
        self.invalidate();
    }

    fn dispatch(self, f: impl FnOnce(&mut ListViewController<R>) -> Option<FetchRequest>) {
        if let Some(req) = self.controller.try_update(f).flatten() {
            self.run(req);
        }
    }

    fn run(self, req: FetchRequest) {
        let Some(source) = self.source.try_get_value() else {
            return;
        };
        let client = self.api_client.get_untracked();
        let search_fields = self
            .controller
            .with_untracked(|c| c.config().search_fields.clone());

        spawn_local(async move {
            let result = source.fetch(&client, &req.query, &search_fields).await;
            if let Err(e) = &result {
                tracing::warn!(request_id = req.id, error = %e, "list fetch failed");
            }
            // `None` means the view was disposed while the request was in flight.
            match self.controller.try_update(|c| c.resolve(req.id, result)) {
                Some(Resolution::Refetch(next)) => self.run(next),
                Some(Resolution::Applied | Resolution::Discarded) | None => {}
            }
        });
    }

    fn schedule_search_poll(self, delay_ms: i64) {
        self.clear_search_timer();
        let Some(win) = web_sys::window() else {
            return;
        };

        let cb = Closure::once_into_js(move || {
            let _ = self.search_timer.try_set_value(None);
            self.dispatch(|c| c.poll_search(now_ms()));
            // Timer fired a tick early: try again at the real deadline.
            let now = now_ms();
            if let Some(deadline) = self
                .controller
                .try_with_untracked(|c| c.search_deadline())
                .flatten()
            {
                self.schedule_search_poll((deadline - now).max(1));
            }
        });

        let delay = delay_ms.clamp(0, i32::MAX as i64) as i32;
        let tid = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay)
            .ok();
        let _ = self.search_timer.try_set_value(tid);
    }

    fn clear_search_timer(self) {
        if let Some(tid) = self.search_timer.try_get_value().flatten() {
            if let Some(win) = web_sys::window() {
                win.clear_timeout_with_handle(tid);
            }
        }
    }
}
