#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use std::path::Path;

/// Build an rtodo command with an isolated config home and a pinned time
/// zone, with any ambient store credentials stripped.
pub fn rt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtodo");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env("TZ", "UTC")
        .env_remove("RTODO_STORE_URL")
        .env_remove("RTODO_STORE_KEY");
    cmd
}

pub fn task_json(id: i64, text: &str, complete: bool, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "task": text,
        "is_complete": complete,
        "created_at": created_at,
    })
}

/// Register a catch-all GET mock returning the given task list body.
pub fn mock_list(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("GET", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}
