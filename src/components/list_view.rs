//! Generic table view over a [`ListView`]: search box, filter selects,
//! sortable headers, pager and an error banner with retry.

use crate::components::hooks::{ListRow, ListView};
use crate::components::ui::{
    Alert, AlertDescription, AlertTitle, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardFooter, CardHeader, CardTitle, DemoBadge, Input, Select, Spinner,
};
use crate::list::SortDirection;
use icons::{ChevronDown, ChevronLeft, ChevronRight, ChevronUp};
use leptos::prelude::*;

/// One table column. `key` is the record field used for sorting.
pub struct Column<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub cell: fn(&R) -> String,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> Column<R> {
    pub const fn new(key: &'static str, label: &'static str, cell: fn(&R) -> String) -> Self {
        Self {
            key,
            label,
            sortable: true,
            cell,
        }
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// A select filter. An empty selection removes the filter.
#[derive(Clone, Copy, Debug)]
pub struct FilterDef {
    pub key: &'static str,
    /// Shown as the "any value" option.
    pub label: &'static str,
    /// `(value, label)` pairs.
    pub options: &'static [(&'static str, &'static str)],
}

#[component]
pub(crate) fn ListPanel<R>(
    list: ListView<R>,
    #[prop(into)] title: String,
    columns: Vec<Column<R>>,
    #[prop(optional)] filters: Vec<FilterDef>,
    #[prop(into, default = "Search…".to_string())] search_placeholder: String,
    /// Adds a trailing "Delete" button per row, called with the row id.
    #[prop(optional)]
    on_delete: Option<Callback<String>>,
) -> impl IntoView
where
    R: ListRow,
{
    let col_count = (columns.len() + usize::from(on_delete.is_some())).to_string();
    let columns = StoredValue::new(columns);

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .copied()
                .map(|col| {
                    let direction = move || {
                        list.query()
                            .sort
                            .filter(|s| s.field == col.key)
                            .map(|s| s.direction)
                    };
                    let sort_icon = move || match direction() {
                        Some(SortDirection::Asc) => view! { <ChevronUp class="size-3" /> }.into_any(),
                        Some(SortDirection::Desc) => {
                            view! { <ChevronDown class="size-3" /> }.into_any()
                        }
                        None => view! { <span class="size-3" /> }.into_any(),
                    };
                    let aria_sort = move || match direction() {
                        Some(SortDirection::Asc) => "ascending",
                        Some(SortDirection::Desc) => "descending",
                        None => "none",
                    };

                    if col.sortable {
                        view! {
                            <th class="px-3 py-2 text-left font-medium" aria-sort=aria_sort>
                                <button
                                    type="button"
                                    class="inline-flex items-center gap-1 hover:text-foreground"
                                    on:click=move |_| list.set_sort(col.key)
                                >
                                    {col.label}
                                    {sort_icon}
                                </button>
                            </th>
                        }
                        .into_any()
                    } else {
                        view! { <th class="px-3 py-2 text-left font-medium">{col.label}</th> }
                            .into_any()
                    }
                })
                .collect_view()
        })
    };

    let body = move || {
        let message_row = |content: AnyView| {
            view! {
                <tr>
                    <td colspan=col_count.clone() class="px-3 py-6 text-center text-xs text-muted-foreground">
                        {content}
                    </td>
                </tr>
            }
            .into_any()
        };

        if list.is_loading() {
            return message_row(
                view! {
                    <span class="inline-flex items-center gap-2">
                        <Spinner />
                        "Loading…"
                    </span>
                }
                .into_any(),
            );
        }
        // Idle or failed: the error banner above explains why.
        let Some(page) = list.page() else {
            return message_row(view! { <span>"—"</span> }.into_any());
        };
        if page.items.is_empty() {
            return message_row(view! { <span>"No results"</span> }.into_any());
        }

        page.items
            .into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|c| view! { <td class="px-3 py-2">{(c.cell)(&row)}</td> })
                        .collect_view()
                });
                let action = on_delete.map(|cb| {
                    let id = row.id().to_string();
                    view! {
                        <td class="px-3 py-2 text-right">
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Xs
                                class="text-destructive"
                                on:click=move |_| cb.run(id.clone())
                            >
                                "Delete"
                            </Button>
                        </td>
                    }
                });
                view! { <tr class="border-b last:border-0 hover:bg-muted/40">{cells}{action}</tr> }
            })
            .collect_view()
            .into_any()
    };

    let error_banner = move || {
        list.error().map(|e| {
            view! {
                <Alert class="border-destructive/30">
                    <AlertTitle class="text-destructive text-xs">"Couldn't load data"</AlertTitle>
                    <AlertDescription class="flex items-center justify-between gap-2 text-xs text-destructive">
                        <span>{e.user_message()}</span>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Xs
                            on:click=move |_| list.refresh()
                        >
                            "Retry"
                        </Button>
                    </AlertDescription>
                </Alert>
            }
        })
    };

    let pager = move || {
        list.page().map(|page| {
            let current = page.page;
            let has_prev = page.has_prev();
            let has_next = page.has_next();
            view! {
                <span class="text-xs text-muted-foreground">{page.range_label()}</span>
                <div class="flex items-center gap-1 text-xs text-muted-foreground">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        attr:disabled=!has_prev
                        attr:aria-label="Previous page"
                        on:click=move |_| list.set_page(current.saturating_sub(1))
                    >
                        <ChevronLeft />
                    </Button>
                    <span class="px-2">{format!("Page {} of {}", page.page, page.total_pages())}</span>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Icon
                        attr:disabled=!has_next
                        attr:aria-label="Next page"
                        on:click=move |_| list.set_page(current + 1)
                    >
                        <ChevronRight />
                    </Button>
                </div>
            }
        })
    };

    let filter_selects = filters
        .into_iter()
        .map(|f| {
            view! {
                <Select
                    class="w-40"
                    placeholder=f.label
                    options=f.options
                    value=Signal::derive(move || list.filter_value(f.key))
                    on_change=Callback::new(move |v: String| list.set_filter(f.key, v))
                />
            }
        })
        .collect_view();

    view! {
        <Card class="gap-3 py-4">
            <CardHeader class="px-4">
                <CardTitle class="text-base">{title}</CardTitle>
                {list.is_demo().then(|| view! { <DemoBadge>"Demo data"</DemoBadge> })}
            </CardHeader>

            <CardContent class="space-y-3 px-4">
                <div class="flex flex-wrap items-center gap-2">
                    <Input
                        class="h-8 w-64 text-sm"
                        placeholder=search_placeholder
                        bind_value=list.search_input
                        on_change=Callback::new(move |v: String| list.set_search(v))
                    />
                    {filter_selects}
                    <Show when=move || !list.query().filters.is_empty()>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on:click=move |_| list.clear_filters()
                        >
                            "Clear filters"
                        </Button>
                    </Show>
                    <div class="ml-auto">
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            attr:disabled=move || list.is_loading()
                            on:click=move |_| list.refresh()
                        >
                            "Refresh"
                        </Button>
                    </div>
                </div>

                {error_banner}

                <div class="overflow-x-auto rounded-md border">
                    <table class="w-full text-sm">
                        <thead class="border-b bg-muted/40 text-xs text-muted-foreground">
                            <tr>
                                {header}
                                {on_delete.map(|_| view! { <th class="px-3 py-2" /> })}
                            </tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
            </CardContent>

            <CardFooter class="px-4">{pager}</CardFooter>
        </Card>
    }
}
