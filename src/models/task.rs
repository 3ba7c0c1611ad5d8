use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item as stored in the remote `todos` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,            // ⇔ todos.id (assigned by the store, immutable)
    pub task: String,       // ⇔ todos.task (display text)
    pub is_complete: bool,  // ⇔ todos.is_complete (default false)
    pub created_at: DateTime<Utc>, // ⇔ todos.created_at (store-assigned, immutable)
}

impl Task {
    /// Calendar day of creation in the viewer's local time zone.
    /// Time-of-day is discarded; this alone decides section membership.
    pub fn local_day(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }

    /// Long-form day label, e.g. "January 5, 2024".
    /// Two timestamps on the same local day always format identically and
    /// distinct days never collide under this format.
    pub fn day_title(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%B %-d, %Y")
            .to_string()
    }
}
