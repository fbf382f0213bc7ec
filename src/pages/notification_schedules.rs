use super::{delete_action, list_source, local_config};
use crate::api::CollectionEndpoint;
use crate::components::hooks::use_list_view;
use crate::components::list_view::{Column, FilterDef, ListPanel};
use crate::demo;
use crate::models::NotificationSchedule;
use crate::state::AppContext;
use crate::util::{format_instant, or_dash};
use leptos::prelude::*;

const ENDPOINT: CollectionEndpoint =
    CollectionEndpoint::new("/api/notification-schedules", "schedules");

const FILTERS: &[FilterDef] = &[FilterDef {
    key: "status",
    label: "Any status",
    options: &[("active", "Active"), ("paused", "Paused")],
}];

#[component]
pub fn NotificationSchedulesPage() -> impl IntoView {
    let demo_mode = expect_context::<AppContext>().0.demo_mode;
    move || view! { <NotificationSchedulesList demo=demo_mode.get() /> }
}

#[component]
fn NotificationSchedulesList(demo: bool) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = use_list_view(
        list_source(demo, ENDPOINT, demo::notification_schedules),
        local_config(&app_state.0, &["name", "cron"]),
    );
    let on_delete = delete_action(&app_state.0, list, ENDPOINT);

    let columns = vec![
        Column::new("name", "Name", |s: &NotificationSchedule| or_dash(&s.name)),
        Column::new("channel", "Channel", |s: &NotificationSchedule| or_dash(&s.channel)),
        Column::new("cron", "Schedule", |s: &NotificationSchedule| or_dash(&s.cron)).unsortable(),
        Column::new("status", "Status", |s: &NotificationSchedule| or_dash(&s.status)),
        Column::new("next_run_at", "Next run", |s: &NotificationSchedule| {
            format_instant(&s.next_run_at)
        }),
    ];

    view! {
        <ListPanel
            list=list
            title="Notification schedules"
            columns=columns
            filters=FILTERS.to_vec()
            search_placeholder="Search name…"
            on_delete=on_delete
        />
    }
}
