use super::{list_source, remote_config};
use crate::api::CollectionEndpoint;
use crate::components::hooks::use_list_view;
use crate::components::list_view::{Column, FilterDef, ListPanel};
use crate::demo;
use crate::models::User;
use crate::state::AppContext;
use crate::util::{format_instant, or_dash};
use leptos::prelude::*;

const ENDPOINT: CollectionEndpoint = CollectionEndpoint::new("/api/users", "users");

const FILTERS: &[FilterDef] = &[
    FilterDef {
        key: "role",
        label: "Any role",
        options: &[("admin", "Admin"), ("member", "Member")],
    },
    FilterDef {
        key: "status",
        label: "Any status",
        options: &[("active", "Active"), ("invited", "Invited"), ("disabled", "Disabled")],
    },
];

#[component]
pub fn UsersPage() -> impl IntoView {
    let demo_mode = expect_context::<AppContext>().0.demo_mode;
    move || view! { <UsersList demo=demo_mode.get() /> }
}

#[component]
fn UsersList(demo: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = use_list_view(
        list_source(demo, ENDPOINT, demo::users),
        remote_config(&app_state.0),
    );

    let columns = vec![
        Column::new("name", "Name", |u: &User| or_dash(&u.name)),
        Column::new("email", "Email", |u: &User| or_dash(&u.email)),
        Column::new("company_name", "Company", |u: &User| or_dash(&u.company_name)),
        Column::new("role", "Role", |u: &User| or_dash(&u.role)),
        Column::new("status", "Status", |u: &User| or_dash(&u.status)),
        Column::new("last_login_at", "Last login", |u: &User| format_instant(&u.last_login_at)),
    ];

    view! {
        <ListPanel
            list=list
            title="Users"
            columns=columns
            filters=FILTERS.to_vec()
            search_placeholder="Search name or email…"
        />
    }
}
