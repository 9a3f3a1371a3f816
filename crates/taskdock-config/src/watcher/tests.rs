//! Tests for the group store watcher.

use super::*;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::broadcast;

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    let watcher = StoreWatcher::new(PathBuf::from("/tmp/nonexistent_taskdock_groups.json"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_rejects_path_without_file_name() {
    let watcher = StoreWatcher::new(PathBuf::from("/"));
    assert!(matches!(
        watcher,
        Err(taskdock_common::ConfigError::WatchError(_))
    ));
}

#[test]
fn watcher_keeps_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("groups.json");
    std::fs::write(&path, "{}").unwrap();

    let watcher = StoreWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[tokio::test]
async fn watcher_signals_after_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("groups.json");
    std::fs::write(&path, r#"{"groups":[]}"#).unwrap();

    let watcher = StoreWatcher::new(path.clone()).unwrap();
    let (tx, mut rx) = broadcast::channel(4);
    let task = tokio::spawn(async move { watcher.watch(tx).await });

    tokio::time::sleep(Duration::from_millis(200)).await;
    std::fs::write(&path, r#"{"groups":[{"id":"a","name":"A"}]}"#).unwrap();

    let signal = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
    assert!(matches!(signal, Ok(Ok(()))));
    task.abort();
}
