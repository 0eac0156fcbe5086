//! End-to-end tests for the client facade: cache lifecycle, refresh
//! semantics, and the full scan-parse-aggregate path over a fixture tree.

use costscope_runtime::{Client, Config, Error};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn record(id: &str, session: &str, timestamp: &str, input_tokens: u64) -> String {
    format!(
        r#"{{"timestamp":"{timestamp}","sessionId":"{session}","message":{{"id":"{id}","role":"assistant","model":"test-model","usage":{{"input_tokens":{input_tokens}}}}}}}"#
    )
}

fn write_lines(path: &Path, lines: &[String]) {
    let mut file = std::fs::File::create(path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
}

/// Root with one project holding two sessions (0.0030 and 0.0045).
fn fixture_root() -> TempDir {
    let root = TempDir::new().unwrap();
    let project = root.path().join("demo");
    std::fs::create_dir(&project).unwrap();

    write_lines(
        &project.join("one.jsonl"),
        &[record("m1", "sess-1", "2026-01-01T10:00:00Z", 1000)],
    );
    write_lines(
        &project.join("two.jsonl"),
        &[record("m2", "sess-2", "2026-01-02T10:00:00Z", 1500)],
    );

    root
}

fn client_for(root: &TempDir) -> Client {
    Client::with_null_log(Config {
        log_root: root.path().to_path_buf(),
    })
}

#[tokio::test]
async fn cold_cache_scans_then_warms() {
    let root = fixture_root();
    let client = client_for(&root);

    assert!(!client.cache().is_warm());
    let snapshot = client.scan_all(true).await.unwrap();
    assert!(client.cache().is_warm());
    assert_eq!(snapshot.total_projects, 1);

    let project = &snapshot.projects[0];
    assert_eq!(project.name, "demo");
    assert_eq!(project.total_cost, 0.0075);
    assert_eq!(project.last_activity, "2026-01-02T10:00:00Z");
}

#[tokio::test]
async fn warm_cache_serves_the_same_snapshot_without_io() {
    let root = fixture_root();
    let client = client_for(&root);

    let first = client.scan_all(true).await.unwrap();

    // Remove the tree entirely; a cached read must not notice.
    let path = root.path().to_path_buf();
    drop(root);
    assert!(!path.exists());

    let second = client.scan_all(true).await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn uncached_scan_bypasses_a_warm_cache() {
    let root = fixture_root();
    let client = client_for(&root);

    let first = client.scan_all(true).await.unwrap();
    let second = client.scan_all(false).await.unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.projects, second.projects);
}

#[tokio::test]
async fn failed_scan_never_overwrites_a_warm_cache() {
    let root = fixture_root();
    let client = client_for(&root);

    let cached = client.scan_all(true).await.unwrap();

    let path = root.path().to_path_buf();
    drop(root);
    assert!(!path.exists());

    // Uncached scan now fails against the missing root...
    let err = client.scan_all(false).await.unwrap_err();
    assert!(matches!(err, Error::RootNotFound(_)));

    // ...and the warm snapshot survives.
    let still_cached = client.scan_all(true).await.unwrap();
    assert!(Arc::ptr_eq(&cached, &still_cached));
}

#[tokio::test]
async fn failed_scan_leaves_a_cold_cache_cold() {
    let client = Client::with_null_log(Config {
        log_root: PathBuf::from("/definitely/not/a/real/root"),
    });

    assert!(client.scan_all(true).await.is_err());
    assert!(!client.cache().is_warm());
}

#[tokio::test]
async fn refresh_clears_then_rescans() {
    let root = fixture_root();
    let client = client_for(&root);

    let stale = client.scan_all(true).await.unwrap();

    // Grow the tree; refresh must pick it up even though the cache is warm.
    let project = root.path().join("second");
    std::fs::create_dir(&project).unwrap();
    write_lines(
        &project.join("s.jsonl"),
        &[record("m9", "sess-9", "2026-03-01T00:00:00Z", 2000)],
    );

    let report = client.refresh().await.unwrap();
    assert_eq!(report.projects_scanned, 2);

    let fresh = client.scan_all(true).await.unwrap();
    assert!(!Arc::ptr_eq(&stale, &fresh));
    assert_eq!(fresh.total_projects, 2);
}

#[tokio::test]
async fn clear_then_cached_scan_never_returns_the_old_snapshot() {
    let root = fixture_root();
    let client = client_for(&root);

    let before = client.scan_all(true).await.unwrap();
    client.cache().clear();
    let after = client.scan_all(true).await.unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
}

#[tokio::test]
async fn lookups_reflect_disk_not_cache() {
    let root = fixture_root();
    let client = client_for(&root);

    // Warm the cache, then add a session the snapshot has never seen.
    client.scan_all(true).await.unwrap();
    write_lines(
        &root.path().join("demo").join("three.jsonl"),
        &[record("m3", "sess-3", "2026-01-03T10:00:00Z", 100)],
    );

    let sessions = client.sessions_of("demo").await.unwrap();
    assert_eq!(sessions.len(), 3);

    let detail = client.detail_of("demo", "sess-3").await.unwrap();
    assert_eq!(detail.summary.session_id, "sess-3");
    assert_eq!(detail.messages.len(), 1);
    assert_eq!(detail.messages[0].message_id, "m3");
}

#[tokio::test]
async fn lookup_misses_are_explicit_not_found_values() {
    let root = fixture_root();
    let client = client_for(&root);

    assert!(matches!(
        client.sessions_of("ghost").await.unwrap_err(),
        Error::ProjectNotFound(_)
    ));
    assert!(matches!(
        client.detail_of("demo", "ghost").await.unwrap_err(),
        Error::SessionNotFound { .. }
    ));
}
