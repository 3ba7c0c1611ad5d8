use super::task::Task;

/// A derived, day-keyed grouping of tasks for display.
/// Recomputed on every render pass; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Human-readable day label, e.g. "June 5, 2024". Unique in a result.
    pub title: String,
    /// Tasks created on that day, in the order they arrived from the store.
    /// Never empty.
    pub items: Vec<Task>,
}
