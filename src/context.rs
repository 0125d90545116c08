//! Application Context
//!
//! Shared state provided via Leptos Context API: the store signal plus the
//! transient toast channel.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::storage::BrowserStorage;
use crate::store::TodoStore;

/// How long a toast stays on screen
const TOAST_MS: u32 = 3000;

/// The shared store, wrapped in a signal so every mutation re-renders its
/// projections
pub type StoreSignal = RwSignal<TodoStore<BrowserStorage>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    seq: u32,
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The todo store - all mutations go through this signal
    pub store: StoreSignal,
    /// Currently visible toast, if any
    pub toast: RwSignal<Option<Toast>>,
    /// Monotonic toast counter, so a stale hide timer never dismisses a
    /// newer toast
    toast_seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new(store: StoreSignal) -> Self {
        Self {
            store,
            toast: RwSignal::new(None),
            toast_seq: RwSignal::new(0),
        }
    }

    /// Show a success toast that hides itself after a few seconds.
    pub fn show_toast(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    /// Show an error toast that hides itself after a few seconds.
    pub fn show_error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&self, message: String, kind: ToastKind) {
        let seq = self.toast_seq.get_untracked() + 1;
        self.toast_seq.set(seq);
        self.toast.set(Some(Toast { message, kind, seq }));

        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toast.update(|current| {
                if current.as_ref().map(|t| t.seq) == Some(seq) {
                    *current = None;
                }
            });
        });
    }
}
