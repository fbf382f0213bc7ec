use super::LoginPage;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card, CardContent};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Sidebar entries: `(href, label)`.
const NAV: [(&str, &str); 7] = [
    ("/activity", "Activity"),
    ("/companies", "Companies"),
    ("/users", "Users"),
    ("/subscriptions", "Subscriptions"),
    ("/app-versions", "App versions"),
    ("/notifications", "Notifications"),
    ("/notification-schedules", "Schedules"),
];

#[component]
pub fn AppLayout(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let demo_mode = app_state.0.demo_mode;
    let current_user = app_state.0.current_user;

    let pathname = use_location().pathname;

    let on_toggle_demo = {
        let state = app_state.0.clone();
        move |_| state.set_demo_mode(!state.demo_mode.get_untracked())
    };

    let on_logout = move |_| {
        tracing::info!("signed out");
        let mut api_client = app_state.0.api_client.get_untracked();
        api_client.logout();
        app_state.0.api_client.set(api_client);
        app_state.0.current_user.set(None);
        let _ = window().location().set_href("/login");
    };

    let nav_links = NAV
        .iter()
        .map(|(href, label)| {
            let href = *href;
            let is_active = move || {
                let p = pathname.get();
                p == href || (href == "/activity" && p == "/")
            };
            view! {
                <a
                    href=href
                    class=move || {
                        if is_active() {
                            "block rounded-md bg-accent px-2 py-1.5 text-sm font-medium text-accent-foreground"
                        } else {
                            "block rounded-md px-2 py-1.5 text-sm text-muted-foreground hover:bg-accent/50 hover:text-foreground"
                        }
                    }
                    aria-current=move || is_active().then_some("page")
                >
                    {*label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <div class="mx-auto flex min-h-screen w-full max-w-6xl gap-4 px-4 py-6">
                <aside class="w-56 shrink-0">
                    <div class="sticky top-6 space-y-4">
                        <a href="/" class="text-sm font-medium text-foreground">"Admin dashboard"</a>

                        <Card class="py-3">
                            <CardContent class="px-2">
                                <nav class="space-y-0.5" aria-label="Sections">{nav_links}</nav>
                            </CardContent>
                        </Card>

                        <Card class="py-3">
                            <CardContent class="space-y-2 px-3">
                                <div class="truncate text-xs text-muted-foreground">
                                    {move || {
                                        current_user
                                            .get()
                                            .map(|u| u.display_name())
                                            .unwrap_or_else(|| "Signed in".to_string())
                                    }}
                                </div>
                                <label class="flex items-center justify-between gap-2 text-xs">
                                    <span>"Demo data"</span>
                                    <input
                                        type="checkbox"
                                        role="switch"
                                        prop:checked=move || demo_mode.get()
                                        on:change=on_toggle_demo
                                    />
                                </label>
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    on:click=on_logout
                                    class="w-full"
                                >
                                    "Sign out"
                                </Button>
                            </CardContent>
                        </Card>
                    </div>
                </aside>

                <main class="min-w-0 flex-1">{children()}</main>
            </div>
        </div>
    }
}

/// Renders `children` inside the layout when a token is present, else the login page.
#[component]
pub fn RootAuthed(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let is_authenticated = move || app_state.0.api_client.get().is_authenticated();

    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    view! {
        <Show when=is_authenticated fallback=move || view! { <LoginPage /> }>
            <AppLayout>
                {move || children.with_value(|c| c())}
            </AppLayout>
        </Show>
    }
}
