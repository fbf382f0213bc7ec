use super::{list_source, remote_config};
use crate::api::CollectionEndpoint;
use crate::components::hooks::use_list_view;
use crate::components::list_view::{Column, FilterDef, ListPanel};
use crate::demo;
use crate::models::Subscription;
use crate::state::AppContext;
use crate::util::{format_amount, format_instant, or_dash};
use leptos::prelude::*;

const ENDPOINT: CollectionEndpoint =
    CollectionEndpoint::new("/api/subscriptions", "subscriptions");

const FILTERS: &[FilterDef] = &[
    FilterDef {
        key: "status",
        label: "Any status",
        options: &[
            ("active", "Active"),
            ("trialing", "Trialing"),
            ("cancelled", "Cancelled"),
        ],
    },
    FilterDef {
        key: "plan",
        label: "Any plan",
        options: &[
            ("starter", "Starter"),
            ("business", "Business"),
            ("enterprise", "Enterprise"),
        ],
    },
];

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let demo_mode = expect_context::<AppContext>().0.demo_mode;
    move || view! { <SubscriptionsList demo=demo_mode.get() /> }
}

#[component]
fn SubscriptionsList(demo: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = use_list_view(
        list_source(demo, ENDPOINT, demo::subscriptions),
        remote_config(&app_state.0),
    );

    let columns = vec![
        Column::new("company_name", "Company", |s: &Subscription| or_dash(&s.company_name)),
        Column::new("plan", "Plan", |s: &Subscription| or_dash(&s.plan)),
        Column::new("status", "Status", |s: &Subscription| or_dash(&s.status)),
        Column::new("amount", "Amount", |s: &Subscription| {
            format_amount(s.amount, &s.currency)
        }),
        Column::new("start_date", "Start", |s: &Subscription| format_instant(&s.start_date)),
        Column::new("end_date", "End", |s: &Subscription| format_instant(&s.end_date)),
    ];

    view! {
        <ListPanel
            list=list
            title="Subscriptions"
            columns=columns
            filters=FILTERS.to_vec()
            search_placeholder="Search company…"
        />
    }
}
