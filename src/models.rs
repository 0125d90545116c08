//! Data Model
//!
//! Todo items, the view filter, and aggregate counts.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item.
///
/// `id` and `created_at` are assigned at creation and never change. The wire
/// form uses camelCase field names (`createdAt` serializes as RFC 3339).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a new active item with a fresh id and the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// View filter over the todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Whether an item is visible under this filter
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

/// Aggregate counts for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Human-friendly creation date relative to `now`.
///
/// Mirrors the status line shown under each item: same day gives
/// "Today at HH:MM", then "Yesterday at HH:MM", "N days ago" inside a week,
/// and a plain date beyond that.
pub fn relative_date(created: DateTime<Local>, now: DateTime<Local>) -> String {
    let days = (now - created).num_days();

    if days <= 0 {
        format!("Today at {}", created.format("%H:%M"))
    } else if days == 1 {
        format!("Yesterday at {}", created.format("%H:%M"))
    } else if days < 7 {
        format!("{} days ago", days)
    } else {
        created.format("%b %e, %Y").to_string()
    }
}
