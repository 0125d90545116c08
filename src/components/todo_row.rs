//! Todo Row Component
//!
//! A single item row: checkbox, text, creation date, and actions.

use chrono::Local;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{relative_date, TodoItem};

#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id.clone();
    let completed = item.completed;
    let text = item.text.clone();
    let created = relative_date(item.created_at.with_timezone(&Local), Local::now());

    let toggle = {
        let id = id.clone();
        move |_| {
            let result = ctx.store.write().toggle(&id);
            match result {
                Ok(item) => ctx.show_toast(if item.completed {
                    "Todo completed!"
                } else {
                    "Todo marked as active"
                }),
                Err(err) => ctx.show_error(err.to_string()),
            }
        }
    };

    // Completed items must be toggled back before editing
    let open_edit = {
        let id = id.clone();
        move |_| {
            if completed {
                return;
            }
            let result = ctx.store.write().begin_edit(&id);
            if let Err(err) = result {
                ctx.show_error(err.to_string());
            }
        }
    };

    let delete = {
        let id = id.clone();
        Callback::new(move |_| {
            let result = ctx.store.write().delete(&id);
            match result {
                Ok(()) => ctx.show_toast("Todo deleted successfully!"),
                Err(err) => ctx.show_error(err.to_string()),
            }
        })
    };

    view! {
        <div class=move || if completed { "todo-item completed" } else { "todo-item" }>
            <input type="checkbox" checked=completed on:change=toggle />

            <div class="todo-content">
                <span
                    class=move || if completed { "todo-text completed" } else { "todo-text" }
                    on:dblclick=open_edit.clone()
                >
                    {text}
                </span>
                <span class="todo-date">{created}</span>
            </div>

            <div class="todo-actions">
                {(!completed).then(|| {
                    let open_edit = open_edit.clone();
                    view! {
                        <button class="edit-btn" title="Edit" on:click=open_edit>
                            "✎"
                        </button>
                    }
                })}
                <DeleteConfirmButton
                    button_class="delete-btn"
                    label="×"
                    on_confirm=delete
                />
            </div>
        </div>
    }
}
