use super::{delete_action, list_source, local_config};
use crate::api::CollectionEndpoint;
use crate::components::hooks::use_list_view;
use crate::components::list_view::{Column, FilterDef, ListPanel};
use crate::demo;
use crate::models::AppVersion;
use crate::state::AppContext;
use crate::util::{format_count, format_instant, or_dash};
use leptos::prelude::*;

const ENDPOINT: CollectionEndpoint = CollectionEndpoint::new("/api/app-versions", "data");

const FILTERS: &[FilterDef] = &[FilterDef {
    key: "platform",
    label: "Any platform",
    options: &[("ios", "iOS"), ("android", "Android")],
}];

#[component]
pub fn AppVersionsPage() -> impl IntoView {
    let demo_mode = expect_context::<AppContext>().0.demo_mode;
    move || view! { <AppVersionsList demo=demo_mode.get() /> }
}

#[component]
fn AppVersionsList(demo: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = use_list_view(
        list_source(demo, ENDPOINT, demo::app_versions),
        local_config(&app_state.0, &["version", "notes"]),
    );
    let on_delete = delete_action(&app_state.0, list, ENDPOINT);

    let columns = vec![
        Column::new("version", "Version", |v: &AppVersion| or_dash(&v.version)),
        Column::new("platform", "Platform", |v: &AppVersion| or_dash(&v.platform)),
        Column::new("build_number", "Build", |v: &AppVersion| format_count(v.build_number)),
        Column::new("is_mandatory", "Mandatory", |v: &AppVersion| {
            (if v.is_mandatory { "Yes" } else { "No" }).to_string()
        }),
        Column::new("release_date", "Released", |v: &AppVersion| format_instant(&v.release_date)),
        Column::new("notes", "Notes", |v: &AppVersion| or_dash(&v.notes)).unsortable(),
    ];

    view! {
        <ListPanel
            list=list
            title="App versions"
            columns=columns
            filters=FILTERS.to_vec()
            search_placeholder="Search version or notes…"
            on_delete=on_delete
        />
    }
}
