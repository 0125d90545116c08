//! Filter Bar Component
//!
//! Three-way view selector over the list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;

const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            {FILTERS.iter().map(|(filter, label)| {
                let filter = *filter;
                let is_active = move || ctx.store.with(|s| s.filter()) == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.store.write().set_filter(filter)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
