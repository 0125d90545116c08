//! Ticklist core library.
//!
//! The state-and-persistence core lives in [`store`] and [`storage`] and has
//! no dependency on the rendering layer; [`app`] and [`components`] project it
//! into the DOM with Leptos.

pub mod app;
pub mod components;
pub mod context;
pub mod models;
pub mod storage;
pub mod store;

pub use models::{Filter, Stats, TodoItem};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
pub use store::{TodoError, TodoStore};
