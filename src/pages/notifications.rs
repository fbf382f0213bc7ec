use super::{list_source, remote_config};
use crate::api::CollectionEndpoint;
use crate::components::hooks::use_list_view;
use crate::components::list_view::{Column, FilterDef, ListPanel};
use crate::demo;
use crate::models::Notification;
use crate::state::AppContext;
use crate::util::{format_count, format_instant, or_dash};
use leptos::prelude::*;

const ENDPOINT: CollectionEndpoint =
    CollectionEndpoint::new("/api/notifications", "notifications");

const FILTERS: &[FilterDef] = &[
    FilterDef {
        key: "channel",
        label: "Any channel",
        options: &[("email", "Email"), ("push", "Push"), ("sms", "SMS")],
    },
    FilterDef {
        key: "status",
        label: "Any status",
        options: &[("sent", "Sent"), ("failed", "Failed")],
    },
];

/// Notifications already sent.
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let demo_mode = expect_context::<AppContext>().0.demo_mode;
    move || view! { <NotificationsList demo=demo_mode.get() /> }
}

#[component]
fn NotificationsList(demo: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = use_list_view(
        list_source(demo, ENDPOINT, demo::notifications),
        remote_config(&app_state.0),
    );

    let columns = vec![
        Column::new("title", "Title", |n: &Notification| or_dash(&n.title)),
        Column::new("channel", "Channel", |n: &Notification| or_dash(&n.channel)),
        Column::new("status", "Status", |n: &Notification| or_dash(&n.status)),
        Column::new("recipients", "Recipients", |n: &Notification| format_count(n.recipients)),
        Column::new("sent_at", "Sent", |n: &Notification| format_instant(&n.sent_at)),
    ];

    view! {
        <ListPanel
            list=list
            title="Notifications"
            columns=columns
            filters=FILTERS.to_vec()
            search_placeholder="Search title…"
        />
    }
}
