use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    // Marks a list as showing illustrative rows rather than backend data.
    clx! {DemoBadge, span, "inline-flex items-center rounded-md border border-amber-300 bg-amber-50 px-2 py-0.5 text-[11px] font-medium text-amber-800"}
}

pub use components::*;
