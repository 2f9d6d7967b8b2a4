//! Behavior of the task list and row edit state through the public API.

use pretty_assertions::assert_eq;
use tasklist::model::config::ResyncPolicy;
use tasklist::ops::row_ops::{CommitOutcome, RowMode, TaskRows};
use tasklist::ops::task_ops::TaskList;

fn snapshot(list: &TaskList) -> Vec<(String, bool)> {
    list.tasks()
        .iter()
        .map(|t| (t.title.clone(), t.done))
        .collect()
}

#[test]
fn buy_milk_lifecycle() {
    let mut tasks = TaskList::new();
    let mut rows = TaskRows::new(ResyncPolicy::ResetAll);

    let id = tasks.add_task("Buy milk");
    rows.sync_if_stale(&tasks);
    assert_eq!(snapshot(&tasks), vec![("Buy milk".to_string(), false)]);

    assert!(tasks.toggle_done(id));
    rows.sync_if_stale(&tasks);
    assert_eq!(snapshot(&tasks), vec![("Buy milk".to_string(), true)]);

    assert!(rows.begin_edit(id));
    rows.update_draft(id, |d| {
        d.clear();
        d.insert_str("Buy oat milk");
    });
    assert_eq!(rows.commit_edit(id, &mut tasks), CommitOutcome::Committed);
    assert_eq!(snapshot(&tasks), vec![("Buy oat milk".to_string(), true)]);
    assert_eq!(rows.row(id).unwrap().title, "Buy oat milk");

    assert!(tasks.remove_task(id));
    rows.sync_if_stale(&tasks);
    assert!(tasks.is_empty());
    assert!(rows.is_empty());
}

#[test]
fn toggling_row_b_resets_edit_on_row_a() {
    let mut tasks = TaskList::new();
    let a = tasks.add_task("Row A");
    let b = tasks.add_task("Row B");
    let mut rows = TaskRows::new(ResyncPolicy::ResetAll);
    rows.sync_if_stale(&tasks);

    rows.begin_edit(a);
    rows.update_draft(a, |d| d.insert_str(" (draft)"));
    tasks.toggle_done(b);
    rows.sync_if_stale(&tasks);

    let row_a = rows.row(a).unwrap();
    assert_eq!(row_a.mode, RowMode::Display);
    assert_eq!(row_a.title, "Row A");
    assert_eq!(tasks.get(a).unwrap().title, "Row A");
}

#[test]
fn adding_elsewhere_also_resets_edits() {
    let mut tasks = TaskList::new();
    let a = tasks.add_task("Row A");
    let mut rows = TaskRows::new(ResyncPolicy::ResetAll);
    rows.sync_if_stale(&tasks);

    rows.begin_edit(a);
    tasks.add_task("Row B");
    rows.sync_if_stale(&tasks);
    assert_eq!(rows.editing_count(), 0);
}

#[test]
fn cancel_never_writes_to_the_list() {
    let mut tasks = TaskList::new();
    let a = tasks.add_task("Original");
    let mut rows = TaskRows::new(ResyncPolicy::ResetAll);
    rows.sync_if_stale(&tasks);
    let before = tasks.revision();

    rows.begin_edit(a);
    rows.update_draft(a, |d| d.insert_str(" changed"));
    assert!(rows.cancel_edit(a, &tasks));

    assert_eq!(tasks.revision(), before);
    assert_eq!(rows.row(a).unwrap().title, "Original");
}

#[test]
fn rows_match_list_after_every_mutation() {
    let mut tasks = TaskList::new();
    let mut rows = TaskRows::new(ResyncPolicy::ResetAll);
    let ids: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|t| tasks.add_task(*t))
        .collect();
    tasks.toggle_done(ids[1]);
    tasks.remove_task(ids[2]);
    tasks.edit_task(ids[3], "D");
    rows.sync_if_stale(&tasks);

    let from_rows: Vec<(String, bool)> = rows
        .rows()
        .iter()
        .map(|r| (r.title.clone(), r.done))
        .collect();
    assert_eq!(from_rows, snapshot(&tasks));
    assert_eq!(
        from_rows,
        vec![
            ("a".to_string(), false),
            ("b".to_string(), true),
            ("D".to_string(), false),
        ]
    );
}
