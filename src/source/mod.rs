//! Commit sources.
//!
//! The pipeline is parameterized by a [`CommitSource`]: something that can
//! list raw commits and, on demand, look up exact change stats for one
//! commit. Two implementations ship here — a local clone walked with git2
//! and the GitHub REST API — selected at the CLI boundary. The pipeline
//! itself never knows which one it is talking to.

pub(crate) mod github;
pub(crate) mod local;

use std::error::Error;

use chrono::{DateTime, Utc};

pub use github::GithubSource;
pub use local::LocalSource;

/// A commit as a source yields it, before normalization. Author and
/// timestamp are optional because hosted APIs omit them for some commits;
/// the normalizer fills in the fallbacks.
#[derive(Debug, Clone)]
pub struct RawCommit {
    pub hash: String,
    pub message: String,
    pub author_name: Option<String>,
    pub author_login: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Exact change-size signals for one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeStats {
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// A source of commit history.
pub trait CommitSource {
    /// Human-readable identity of the source (path or owner/repo slug),
    /// used in report headers and the AI digest.
    fn name(&self) -> String;

    /// List commits, most recent first.
    ///
    /// `max` is the ceiling for sources that fetch incrementally (the
    /// GitHub source stops paginating once it is reached). A source whose
    /// history is already materialized locally returns the full walk.
    fn list_commits(&self, max: usize) -> Result<Vec<RawCommit>, Box<dyn Error>>;

    /// Exact change stats for one commit. Callers treat any error as
    /// "unavailable" and fall back to estimation; a failure here never
    /// aborts a pipeline run.
    fn change_stats(&self, hash: &str) -> Result<ChangeStats, Box<dyn Error>>;
}
