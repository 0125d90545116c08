//! Ticklist App
//!
//! Root component: builds the store from browser storage, provides the
//! context, and composes the bars, list, modals, and toast.

use leptos::prelude::*;

use crate::components::{AddTodoModal, EditTodoModal, FilterBar, StatsBar, Toast, TodoList};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let store = TodoStore::load(BrowserStorage::new());
    leptos::logging::log!("loaded {} todos", store.stats().total);

    let store = RwSignal::new(store);
    let (add_open, set_add_open) = signal(false);

    // Provide context to all children
    provide_context(AppContext::new(store));

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Ticklist"</h1>
                <button class="add-todo-btn" on:click=move |_| set_add_open.set(true)>
                    "+ Add Todo"
                </button>
            </header>

            <StatsBar />
            <FilterBar />
            <TodoList />

            <AddTodoModal open=add_open set_open=set_add_open />
            <EditTodoModal />
            <Toast />
        </div>
    }
}
