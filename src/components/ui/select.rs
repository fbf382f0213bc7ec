use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Native `<select>` with a leading "all" option whose value is the empty string.
#[component]
pub fn Select(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    /// Label of the empty-value option.
    #[prop(into)] placeholder: String,
    /// `(value, label)` pairs.
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "border-input h-8 rounded-md border bg-transparent px-2 text-sm shadow-xs outline-none focus-visible:border-ring focus-visible:ring-2 focus-visible:ring-ring/50",
        class
    );

    let on_select = move |ev: web_sys::Event| {
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            on_change.run(select.value());
        }
    };

    view! {
        <select data-name="Select" id=id class=merged_class prop:value=move || value.get() on:change=on_select>
            <option value="">{placeholder}</option>
            {options
                .iter()
                .map(|(v, label)| view! { <option value=*v>{*label}</option> })
                .collect_view()}
        </select>
    }
}
