use super::{list_source, local_config};
use crate::api::CollectionEndpoint;
use crate::components::hooks::use_list_view;
use crate::components::list_view::{Column, FilterDef, ListPanel};
use crate::demo;
use crate::models::Company;
use crate::state::AppContext;
use crate::util::{format_count, format_instant, or_dash};
use leptos::prelude::*;

const ENDPOINT: CollectionEndpoint = CollectionEndpoint::new("/api/companies", "data");

const FILTERS: &[FilterDef] = &[
    FilterDef {
        key: "plan",
        label: "Any plan",
        options: &[
            ("starter", "Starter"),
            ("business", "Business"),
            ("enterprise", "Enterprise"),
        ],
    },
    FilterDef {
        key: "status",
        label: "Any status",
        options: &[("active", "Active"), ("suspended", "Suspended")],
    },
];

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let demo_mode = expect_context::<AppContext>().0.demo_mode;
    move || view! { <CompaniesList demo=demo_mode.get() /> }
}

// Few enough companies to load once and page in memory.
#[component]
fn CompaniesList(demo: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = use_list_view(
        list_source(demo, ENDPOINT, demo::companies),
        local_config(&app_state.0, &["name", "domain"]),
    );

    let columns = vec![
        Column::new("name", "Name", |c: &Company| or_dash(&c.name)),
        Column::new("domain", "Domain", |c: &Company| or_dash(&c.domain)),
        Column::new("plan", "Plan", |c: &Company| or_dash(&c.plan)),
        Column::new("status", "Status", |c: &Company| or_dash(&c.status)),
        Column::new("user_count", "Users", |c: &Company| format_count(c.user_count)),
        Column::new("created_at", "Created", |c: &Company| format_instant(&c.created_at)),
    ];

    view! {
        <ListPanel
            list=list
            title="Companies"
            columns=columns
            filters=FILTERS.to_vec()
            search_placeholder="Search name or domain…"
        />
    }
}
