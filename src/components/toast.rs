//! Toast Component
//!
//! Renders the transient notification from [`AppContext`]; showing and
//! auto-hiding is handled there.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.toast.get().map(|toast| view! {
            <div class=format!("toast {} show", toast.kind.as_str())>
                {toast.message}
            </div>
        })}
    }
}
