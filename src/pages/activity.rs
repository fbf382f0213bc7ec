use super::{list_source, remote_config};
use crate::api::CollectionEndpoint;
use crate::components::hooks::use_list_view;
use crate::components::list_view::{Column, FilterDef, ListPanel};
use crate::demo;
use crate::models::Activity;
use crate::state::AppContext;
use crate::util::{format_instant, or_dash};
use leptos::prelude::*;

const ENDPOINT: CollectionEndpoint = CollectionEndpoint::new("/api/activities", "activities");

const FILTERS: &[FilterDef] = &[
    FilterDef {
        key: "action",
        label: "Any action",
        options: &[
            ("login", "Login"),
            ("create", "Create"),
            ("update", "Update"),
            ("delete", "Delete"),
        ],
    },
    FilterDef {
        key: "resource",
        label: "Any resource",
        options: &[
            ("company", "Company"),
            ("user", "User"),
            ("subscription", "Subscription"),
            ("notification", "Notification"),
        ],
    },
];

/// Audit trail of admin and user actions, newest first on the backend.
#[component]
pub fn ActivityPage() -> impl IntoView {
    let demo_mode = expect_context::<AppContext>().0.demo_mode;
    move || view! { <ActivityList demo=demo_mode.get() /> }
}

#[component]
fn ActivityList(demo: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = use_list_view(
        list_source(demo, ENDPOINT, demo::activities),
        remote_config(&app_state.0),
    );

    let columns = vec![
        Column::new("created_at", "When", |a: &Activity| format_instant(&a.created_at)),
        Column::new("user_email", "User", |a: &Activity| or_dash(&a.user_email)),
        Column::new("action", "Action", |a: &Activity| or_dash(&a.action)),
        Column::new("resource", "Resource", |a: &Activity| or_dash(&a.resource)),
        Column::new("ip_address", "IP", |a: &Activity| or_dash(&a.ip_address)).unsortable(),
    ];

    view! {
        <ListPanel
            list=list
            title="Activity"
            columns=columns
            filters=FILTERS.to_vec()
            search_placeholder="Search user or resource…"
        />
    }
}
