use super::*;

use chrono::{TimeZone, Utc};

fn raw(message: &str) -> RawCommit {
    RawCommit {
        hash: "abc123".to_string(),
        message: message.to_string(),
        author_name: Some("Alice".to_string()),
        author_login: Some("alice-gh".to_string()),
        timestamp: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
    }
}

#[test]
fn exact_stats_pass_through() {
    let stats = ChangeStats {
        files_changed: 3,
        insertions: 50,
        deletions: 10,
    };
    let record = normalize(raw("feat: add payment API"), Some(stats));

    assert_eq!(record.files_changed, 3);
    assert_eq!(record.insertions, 50);
    assert_eq!(record.deletions, 10);
    assert_eq!(record.author, "Alice");
    assert_eq!(record.hash, "abc123");
}

#[test]
fn estimation_from_message_length() {
    // 120-char message: files = 120/50 = 2, ins = 120/10 = 12, del = 120/20 = 6.
    let message = "x".repeat(120);
    let stats = estimate_stats(&message);

    assert_eq!(stats.files_changed, 2);
    assert_eq!(stats.insertions, 12);
    assert_eq!(stats.deletions, 6);
}

#[test]
fn estimation_floors() {
    // Short message hits the floors: at least 1 file and 5 insertions.
    let stats = estimate_stats("wip");
    assert_eq!(stats.files_changed, 1);
    assert_eq!(stats.insertions, 5);
    assert_eq!(stats.deletions, 0);

    let stats = estimate_stats("");
    assert_eq!(stats.files_changed, 1);
    assert_eq!(stats.insertions, 5);
    assert_eq!(stats.deletions, 0);
}

#[test]
fn missing_stats_estimated() {
    let record = normalize(raw("fix"), None);
    assert_eq!(record.files_changed, 1);
    assert_eq!(record.insertions, 5);
    assert_eq!(record.deletions, 0);
}

#[test]
fn author_falls_back_to_login() {
    let mut r = raw("fix");
    r.author_name = None;
    assert_eq!(normalize(r, None).author, "alice-gh");

    let mut r = raw("fix");
    r.author_name = Some(String::new());
    assert_eq!(normalize(r, None).author, "alice-gh");
}

#[test]
fn author_falls_back_to_unknown() {
    let mut r = raw("fix");
    r.author_name = None;
    r.author_login = None;
    assert_eq!(normalize(r, None).author, "Unknown");
}

#[test]
fn missing_timestamp_becomes_now() {
    let mut r = raw("fix");
    r.timestamp = None;
    let before = Utc::now();
    let record = normalize(r, None);
    let after = Utc::now();

    assert!(record.timestamp >= before && record.timestamp <= after);
}
