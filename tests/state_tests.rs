use mockito::{Matcher, Server, ServerGuard};
use rtodo::core::state::TaskListState;
use rtodo::errors::AppError;
use rtodo::store::TaskStore;
use serde_json::json;

fn task_json(id: i64, text: &str, complete: bool, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "task": text,
        "is_complete": complete,
        "created_at": created_at,
    })
}

fn state_for(server: &ServerGuard) -> TaskListState {
    let store = TaskStore::new(&server.url(), "test-key", "todos").expect("client");
    TaskListState::new(store)
}

#[tokio::test]
async fn load_replaces_collection_with_store_contents() {
    let mut server = Server::new_async().await;
    let body = json!([
        task_json(2, "newer", false, "2024-01-06T01:00:00Z"),
        task_json(1, "older", true, "2024-01-05T23:00:00Z"),
    ])
    .to_string();

    let m = server
        .mock("GET", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let mut state = state_for(&server);
    state.load().await.expect("load");

    // Store order (newest first) is kept as-is.
    assert_eq!(state.tasks().len(), 2);
    assert_eq!(state.tasks()[0].id, 2);
    assert_eq!(state.tasks()[1].id, 1);
    m.assert_async().await;
}

#[tokio::test]
async fn create_inserts_then_reloads() {
    let mut server = Server::new_async().await;

    let insert = server
        .mock("POST", "/rest/v1/todos")
        .match_header("prefer", "return=representation")
        .match_body(Matcher::Json(json!([{ "task": "buy milk" }])))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!([task_json(5, "buy milk", false, "2024-01-07T09:00:00Z")]).to_string())
        .expect(1)
        .create_async()
        .await;

    let reload = server
        .mock("GET", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([task_json(5, "buy milk", false, "2024-01-07T09:00:00Z")]).to_string())
        .expect(1)
        .create_async()
        .await;

    let mut state = state_for(&server);
    let created = state.create("buy milk").await.expect("create");

    assert!(created);
    assert_eq!(state.tasks().len(), 1);
    assert_eq!(state.tasks()[0].id, 5);
    insert.assert_async().await;
    reload.assert_async().await;
}

#[tokio::test]
async fn create_with_blank_text_is_a_no_op() {
    // No mocks registered: any request would fail the test.
    let server = Server::new_async().await;

    let mut state = state_for(&server);
    let created = state.create("   ").await.expect("create");

    assert!(!created);
    assert!(state.tasks().is_empty());
}

#[tokio::test]
async fn toggle_patches_single_record_in_place_without_reload() {
    let mut server = Server::new_async().await;

    let list = server
        .mock("GET", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                task_json(2, "other", false, "2024-01-06T01:00:00Z"),
                task_json(1, "target", false, "2024-01-05T23:00:00Z"),
            ])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let patch = server
        .mock("PATCH", "/rest/v1/todos")
        .match_query(Matcher::UrlEncoded("id".into(), "eq.1".into()))
        .match_body(Matcher::Json(json!({ "is_complete": true })))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let mut state = state_for(&server);
    state.load().await.expect("load");

    let now_complete = state.toggle(1).await.expect("toggle");

    assert!(now_complete);
    let patched = state.tasks().iter().find(|t| t.id == 1).expect("present");
    assert!(patched.is_complete);
    assert_eq!(patched.task, "target"); // other fields untouched
    assert!(!state.tasks()[0].is_complete); // id 2 untouched

    // Exactly one GET ever happened: toggle does not reload.
    list.assert_async().await;
    patch.assert_async().await;
}

#[tokio::test]
async fn toggle_unknown_id_is_an_error_and_sends_nothing() {
    let mut server = Server::new_async().await;

    let _list = server
        .mock("GET", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let mut state = state_for(&server);
    state.load().await.expect("load");

    let err = state.toggle(99).await.expect_err("unknown id");
    assert!(matches!(err, AppError::UnknownTask(99)));
}

#[tokio::test]
async fn remove_drops_local_record_without_reload() {
    let mut server = Server::new_async().await;

    let list = server
        .mock("GET", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                task_json(2, "keep", false, "2024-01-06T01:00:00Z"),
                task_json(1, "drop", false, "2024-01-05T23:00:00Z"),
            ])
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let delete = server
        .mock("DELETE", "/rest/v1/todos")
        .match_query(Matcher::UrlEncoded("id".into(), "eq.1".into()))
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let mut state = state_for(&server);
    state.load().await.expect("load");

    state.remove(1).await.expect("remove");

    assert_eq!(state.tasks().len(), 1);
    assert_eq!(state.tasks()[0].id, 2);
    list.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn store_failure_leaves_local_state_untouched() {
    let mut server = Server::new_async().await;

    let _list = server
        .mock("GET", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([task_json(1, "target", false, "2024-01-05T23:00:00Z")]).to_string())
        .create_async()
        .await;

    let _patch = server
        .mock("PATCH", "/rest/v1/todos")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let mut state = state_for(&server);
    state.load().await.expect("load");

    let err = state.toggle(1).await.expect_err("store failure");
    assert!(matches!(err, AppError::Store { status: 500, .. }));

    // Nothing was applied speculatively.
    assert!(!state.tasks()[0].is_complete);
    assert_eq!(state.tasks().len(), 1);
}
