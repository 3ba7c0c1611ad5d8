//! In-memory task collection and optimistic mutation against the store.

use log::debug;

use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use crate::store::TaskStore;

/// Owns the authoritative local copy of the task collection and mediates
/// mutations against the remote store. Each operation awaits the store
/// before touching local state; on store failure the local collection is
/// left exactly as it was and the error propagates to the caller.
pub struct TaskListState {
    store: TaskStore,
    tasks: Vec<Task>,
}

impl TaskListState {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            tasks: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the whole local collection with the store's current contents.
    /// Ordering (newest created first) is delegated to the store query and
    /// never recomputed locally.
    pub async fn load(&mut self) -> AppResult<()> {
        self.tasks = self.store.list_tasks().await?;
        debug!("loaded {} tasks from the store", self.tasks.len());
        Ok(())
    }

    /// Insert a new task, then reload the full collection.
    ///
    /// Blank text is a no-op (returns false). Ids and timestamps are
    /// store-assigned, so nothing partial is inserted locally while the
    /// request is in flight.
    pub async fn create(&mut self, text: &str) -> AppResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.store.insert_task(text).await?;
        self.load().await?;
        Ok(true)
    }

    /// Flip completion for the task with the given id.
    ///
    /// On success only the matching record is patched in place; no reload
    /// happens. Returns the new completion value.
    pub async fn toggle(&mut self, id: i64) -> AppResult<bool> {
        let current = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(AppError::UnknownTask(id))?
            .is_complete;
        let target = !current;

        self.store.update_task_completion(id, target).await?;

        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.is_complete = target;
        }
        Ok(target)
    }

    /// Delete the task with the given id; on success the local record is
    /// dropped without a reload.
    pub async fn remove(&mut self, id: i64) -> AppResult<()> {
        if !self.tasks.iter().any(|t| t.id == id) {
            return Err(AppError::UnknownTask(id));
        }
        self.store.delete_task(id).await?;
        self.tasks.retain(|t| t.id != id);
        Ok(())
    }
}
