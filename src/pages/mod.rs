mod activity;
mod app_versions;
mod companies;
mod layout;
mod login;
mod notification_schedules;
mod notifications;
mod subscriptions;
mod users;

pub use activity::ActivityPage;
pub use app_versions::AppVersionsPage;
pub use companies::CompaniesPage;
pub use layout::RootAuthed;
pub use login::LoginPage;
pub use notification_schedules::NotificationSchedulesPage;
pub use notifications::NotificationsPage;
pub use subscriptions::SubscriptionsPage;
pub use users::UsersPage;

use crate::api::CollectionEndpoint;
use crate::components::hooks::{ListRow, ListView};
use crate::list::{ListConfig, ListSource};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Backend rows, or the built-in fixtures while demo mode is on.
fn list_source<R>(demo: bool, endpoint: CollectionEndpoint, fixtures: fn() -> Vec<R>) -> ListSource<R> {
    if demo {
        ListSource::Demo(fixtures())
    } else {
        ListSource::Remote(endpoint)
    }
}

/// Server-side paging and search.
fn remote_config(state: &AppState) -> ListConfig {
    let (page_size, debounce_ms) = state
        .config
        .with_value(|c| (c.page_size, c.search_debounce_ms));
    ListConfig::remote(page_size).with_debounce_ms(debounce_ms)
}

/// One fetch, then search/sort/paging in memory. For small collections.
fn local_config(state: &AppState, search_fields: &[&'static str]) -> ListConfig {
    let (page_size, debounce_ms) = state
        .config
        .with_value(|c| (c.page_size, c.search_debounce_ms));
    ListConfig::local(page_size, search_fields).with_debounce_ms(debounce_ms)
}

/// Row delete: confirm, `DELETE <endpoint>/{id}`, then reload the list.
fn delete_action<R: ListRow>(
    state: &AppState,
    list: ListView<R>,
    endpoint: CollectionEndpoint,
) -> Callback<String> {
    let api_client = state.api_client;
    Callback::new(move |id: String| {
        if !window()
            .confirm_with_message("Delete this item? This cannot be undone.")
            .unwrap_or(false)
        {
            return;
        }
        if list.is_demo() {
            list.remove_demo_row(&id);
            return;
        }

        let client = api_client.get_untracked();
        spawn_local(async move {
            match client.delete(endpoint.path, &id).await {
                Ok(_) => {
                    tracing::info!(path = endpoint.path, id = %id, "deleted");
                    list.invalidate();
                }
                Err(e) => {
                    tracing::warn!(path = endpoint.path, id = %id, error = %e, "delete failed");
                    let _ = window().alert_with_message(&e.user_message());
                }
            }
        });
    })
}
