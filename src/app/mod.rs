use crate::config::EnvConfig;
use crate::pages::{
    ActivityPage, AppVersionsPage, CompaniesPage, LoginPage, NotificationSchedulesPage,
    NotificationsPage, RootAuthed, SubscriptionsPage, UsersPage,
};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App(config: EnvConfig) -> impl IntoView {
    provide_context(AppContext(AppState::new(config)));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("login") view=LoginPage />
                <Route path=path!("activity") view=move || view! {
                    <RootAuthed>
                        <ActivityPage />
                    </RootAuthed>
                } />
                <Route path=path!("companies") view=move || view! {
                    <RootAuthed>
                        <CompaniesPage />
                    </RootAuthed>
                } />
                <Route path=path!("users") view=move || view! {
                    <RootAuthed>
                        <UsersPage />
                    </RootAuthed>
                } />
                <Route path=path!("subscriptions") view=move || view! {
                    <RootAuthed>
                        <SubscriptionsPage />
                    </RootAuthed>
                } />
                <Route path=path!("app-versions") view=move || view! {
                    <RootAuthed>
                        <AppVersionsPage />
                    </RootAuthed>
                } />
                <Route path=path!("notifications") view=move || view! {
                    <RootAuthed>
                        <NotificationsPage />
                    </RootAuthed>
                } />
                <Route path=path!("notification-schedules") view=move || view! {
                    <RootAuthed>
                        <NotificationSchedulesPage />
                    </RootAuthed>
                } />
                // Home is the activity feed.
                <Route path=path!("") view=move || view! {
                    <RootAuthed>
                        <ActivityPage />
                    </RootAuthed>
                } />
            </Routes>
        </Router>
    }
}
