use chrono::Utc;

use super::CommitRecord;
use crate::source::{ChangeStats, RawCommit};

/// Estimate change-size signals from message length alone, for commits
/// past the detail budget or whose stat lookup failed. Longer messages
/// loosely correlate with larger changes; the floors keep even a one-word
/// message from producing an empty commit.
pub fn estimate_stats(message: &str) -> ChangeStats {
    let len = message.len();
    ChangeStats {
        files_changed: (len / 50).max(1),
        insertions: (len / 10).max(5),
        deletions: len / 20,
    }
}

/// Resolve a raw commit into a [`CommitRecord`].
///
/// Author falls back name → login → "Unknown"; a missing timestamp becomes
/// the current time. When `stats` is `None` the signals are estimated from
/// the message. Missing data is a completeness compromise here, never an
/// error.
pub fn normalize(raw: RawCommit, stats: Option<ChangeStats>) -> CommitRecord {
    let stats = stats.unwrap_or_else(|| estimate_stats(&raw.message));

    let author = raw
        .author_name
        .filter(|name| !name.is_empty())
        .or(raw.author_login)
        .filter(|login| !login.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    CommitRecord {
        hash: raw.hash,
        timestamp: raw.timestamp.unwrap_or_else(Utc::now),
        author,
        message: raw.message,
        files_changed: stats.files_changed,
        insertions: stats.insertions,
        deletions: stats.deletions,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
