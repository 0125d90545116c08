//! Edit Todo Modal
//!
//! Modal form for editing an existing item. Visibility is driven by the
//! store's edit target, so a successful save or a cancel closes it by
//! clearing that target.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FOCUS_DELAY_MS, MAX_TEXT_LEN, SHAKE_MS, WARN_TEXT_LEN};
use crate::context::AppContext;
use crate::store::TodoError;

#[component]
pub fn EditTodoModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (text, set_text) = signal(String::new());
    let (shake, set_shake) = signal(false);
    let (last_id, set_last_id) = signal::<Option<String>>(None);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let editing = move || ctx.store.with(|s| s.editing_id().map(str::to_string));

    // Seed the input when the edit target changes, not on every store write
    Effect::new(move |_| {
        let current = editing();
        if current != last_id.get_untracked() {
            if let Some(id) = &current {
                let seed = ctx.store.with_untracked(|s| {
                    s.items().iter().find(|i| &i.id == id).map(|i| i.text.clone())
                });
                if let Some(seed) = seed {
                    set_text.set(seed);
                }
                spawn_local(async move {
                    TimeoutFuture::new(FOCUS_DELAY_MS).await;
                    if let Some(input) = input_ref.get_untracked() {
                        let _ = input.focus();
                    }
                });
            }
            set_last_id.set(current);
        }
    });

    let char_count = move || text.get().chars().count();

    let close = move || ctx.store.write().cancel_edit();

    let submit = move || {
        let Some(id) = editing() else { return };
        let value = text.get_untracked();
        let result = ctx.store.write().edit(&id, &value);
        match result {
            Ok(_) => ctx.show_toast("Todo updated successfully!"),
            Err(TodoError::EmptyInput) => {
                ctx.show_error("Please enter a todo item");
                set_shake.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(SHAKE_MS).await;
                    set_shake.set(false);
                });
            }
            Err(err) => {
                // Stale target (deleted or completed elsewhere): report and
                // drop the edit
                ctx.show_error(err.to_string());
                ctx.store.write().cancel_edit();
            }
        }
    };

    view! {
        <Show when=move || editing().is_some()>
            // Keydown is handled on the container so Escape still dismisses
            // after focus moves off the input
            <div
                class="modal"
                on:click=move |_| close()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        close();
                    }
                }
            >
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <h2>"Edit Todo"</h2>
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }>
                        <input
                            type="text"
                            class=move || if shake.get() { "todo-input shake" } else { "todo-input" }
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
                                "Save"
                            </button>
                            <button type="button" on:click=move |_| close()>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
