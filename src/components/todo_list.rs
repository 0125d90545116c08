//! Todo List Component
//!
//! Renders the visible subset of the list, or an empty state.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let visible = move || ctx.store.with(|s| s.visible_items());

    view! {
        <div class="todo-list">
            {move || {
                if visible().is_empty() {
                    let (list_empty, filter) =
                        ctx.store.with(|s| (s.items().is_empty(), s.filter()));
                    let (icon, message) = if list_empty {
                        ("📝", "No todos yet. Add one above!".to_string())
                    } else {
                        ("🔍", format!("No {} todos found", filter.as_str()))
                    };
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">{icon}</div>
                            <p>{message}</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <For
                            each=visible
                            // Key on the mutable fields so edits and toggles
                            // re-render the row
                            key=|item| (item.id.clone(), item.text.clone(), item.completed)
                            children=move |item| view! { <TodoRow item=item /> }
                        />
                    }.into_any()
                }
            }}
        </div>
    }
}
