//! Add Todo Modal
//!
//! Modal form for creating a new item. Dismissing it (cancel, escape,
//! outside click) discards the input without touching the store.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FOCUS_DELAY_MS, MAX_TEXT_LEN, SHAKE_MS, WARN_TEXT_LEN};
use crate::context::AppContext;
use crate::store::TodoError;

#[component]
pub fn AddTodoModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (text, set_text) = signal(String::new());
    let (shake, set_shake) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Reset and focus the input whenever the modal opens
    Effect::new(move |_| {
        if open.get() {
            set_text.set(String::new());
            spawn_local(async move {
                TimeoutFuture::new(FOCUS_DELAY_MS).await;
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let char_count = move || text.get().chars().count();

    let submit = move || {
        let value = text.get_untracked();
        let result = ctx.store.write().add(&value);
        match result {
            Ok(_) => {
                ctx.show_toast("Todo added successfully!");
                set_open.set(false);
            }
            Err(TodoError::EmptyInput) => {
                ctx.show_error("Please enter a todo item");
                set_shake.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(SHAKE_MS).await;
                    set_shake.set(false);
                });
            }
            Err(err) => ctx.show_error(err.to_string()),
        }
    };

    view! {
        <Show when=move || open.get()>
            // Keydown is handled on the container so Escape still dismisses
            // after focus moves off the input
            <div
                class="modal"
                on:click=move |_| set_open.set(false)
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        set_open.set(false);
                    }
                }
            >
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <h2>"Add New Todo"</h2>
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }>
                        <input
                            type="text"
                            class=move || if shake.get() { "todo-input shake" } else { "todo-input" }
                            placeholder="What needs to be done?"
                            maxlength=MAX_TEXT_LEN.to_string()
                            node_ref=input_ref
                            prop:value=move || text.get()
                            on:input=move |ev| set_text.set(event_target_value(&ev))
                        />
                        <div class=move || {
                            if char_count() > WARN_TEXT_LEN { "char-count warn" } else { "char-count" }
                        }>
                            {move || char_count()} "/" {MAX_TEXT_LEN}
                        </div>
                        <div class="modal-actions">
                            <button
                                type="submit"
                                prop:disabled=move || {
                                    let count = char_count();
                                    count == 0 || count > MAX_TEXT_LEN
                                }
                            >
                                "Add"
                            </button>
                            <button type="button" on:click=move |_| set_open.set(false)>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
