use chrono::{DateTime, Utc};
use rtodo::models::task::Task;
use rtodo::store::snapshot;
use rtodo::utils::render::{render_widget, truncate_to_width};

fn task(id: i64, text: &str, complete: bool) -> Task {
    Task {
        id,
        task: text.to_string(),
        is_complete: complete,
        created_at: "2024-06-05T10:00:00Z".parse::<DateTime<Utc>>().unwrap(),
    }
}

#[test]
fn snapshot_roundtrip_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".rtodo").join("widget_snapshot.json");

    let tasks = vec![task(2, "newer", false), task(1, "older", true)];
    snapshot::write(&path, &tasks).expect("write");

    let back = snapshot::read(&path).expect("read");
    assert_eq!(back, tasks);
}

#[test]
fn missing_snapshot_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    assert!(snapshot::read(&path).expect("read").is_empty());
}

#[test]
fn widget_shows_at_most_the_first_five_tasks() {
    let tasks: Vec<Task> = (1..=7)
        .map(|i| task(i, &format!("task {}", i), false))
        .collect();

    let out = render_widget(&tasks, 5);

    assert_eq!(out.lines().count(), 5);
    assert!(out.contains("task 1"));
    assert!(out.contains("task 5"));
    assert!(!out.contains("task 6"));
}

#[test]
fn widget_marks_completed_tasks() {
    let out = render_widget(&[task(1, "done thing", true), task(2, "open thing", false)], 5);

    assert!(out.contains("[x] done thing"));
    assert!(out.contains("[ ] open thing"));
}

#[test]
fn long_widget_rows_are_truncated_with_an_ellipsis() {
    let long = "a very long task description that will not fit in a widget row";
    let out = render_widget(&[task(1, long, false)], 5);

    assert!(!out.contains(long));
    assert!(out.contains('…'));
}

#[test]
fn truncate_leaves_short_text_alone() {
    assert_eq!(truncate_to_width("short", 40), "short");
    assert_eq!(truncate_to_width("ab", 2), "ab");
}
