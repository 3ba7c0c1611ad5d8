//! Remote task store client.
//!
//! The store is a hosted relational table exposed over a PostgREST-style
//! HTTP interface: filters and ordering travel as query parameters, the
//! access key in the `apikey` and `Authorization` headers.

pub mod snapshot;

use log::debug;
use reqwest::{Client, Response};
use serde_json::json;

use crate::errors::{AppError, AppResult};
use crate::models::task::Task;

pub struct TaskStore {
    base_url: String,
    key: String,
    table: String,
    http: Client,
}

impl TaskStore {
    pub fn new(base_url: &str, key: &str, table: &str) -> AppResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
            table: table.to_string(),
            http,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// All tasks, newest created first. Ordering is part of the query so
    /// callers never re-sort.
    pub async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        debug!("GET {}", self.table_url());
        let resp = self
            .http
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str::<Vec<Task>>(&body)?)
    }

    /// Insert a task with the given text and return the created row.
    /// Id, timestamp and completion flag are assigned by the store. The
    /// text is sent as-is; validation is the caller's responsibility.
    pub async fn insert_task(&self, text: &str) -> AppResult<Task> {
        debug!("POST {}", self.table_url());
        let resp = self
            .http
            .post(self.table_url())
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=representation")
            .json(&json!([{ "task": text }]))
            .send()
            .await?;
        let resp = check_status(resp).await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        let rows = serde_json::from_str::<Vec<Task>>(&body)?;
        rows.into_iter().next().ok_or_else(|| AppError::Store {
            status,
            message: "insert returned no row".to_string(),
        })
    }

    /// Set the completion flag on a single row, matched by id.
    pub async fn update_task_completion(&self, id: i64, complete: bool) -> AppResult<()> {
        debug!("PATCH {} id=eq.{}", self.table_url(), id);
        let resp = self
            .http
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .json(&json!({ "is_complete": complete }))
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    /// Delete a single row, matched by id.
    pub async fn delete_task(&self, id: i64) -> AppResult<()> {
        debug!("DELETE {} id=eq.{}", self.table_url(), id);
        let resp = self
            .http
            .delete(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }
}

/// Map non-success statuses onto the store error, keeping the response body
/// as the message (network/auth/constraint/not-found all surface here).
async fn check_status(resp: Response) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(AppError::Store {
        status: status.as_u16(),
        message,
    })
}
