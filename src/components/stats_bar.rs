//! Stats Bar Component
//!
//! Aggregate counts plus the clear-completed action.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let stats = move || ctx.store.with(|s| s.stats());

    let clear_completed = Callback::new(move |_| {
        let removed = ctx.store.write().clear_completed();
        match removed {
            0 => ctx.show_error("No completed todos to clear"),
            1 => ctx.show_toast("1 completed todo deleted!"),
            n => ctx.show_toast(format!("{} completed todos deleted!", n)),
        }
    });

    view! {
        <div class="stats-bar">
            <span class="stat">{move || stats().total} " total"</span>
            <span class="stat">{move || stats().active} " active"</span>
            <span class="stat">{move || stats().completed} " completed"</span>

            <Show when=move || (stats().completed > 0)>
                <DeleteConfirmButton
                    button_class="clear-completed-btn"
                    label="Clear completed"
                    on_confirm=clear_completed
                />
            </Show>
        </div>
    }
}
