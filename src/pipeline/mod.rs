//! The classification and aggregation pipeline.
//!
//! One run takes a commit source, normalizes each raw commit (exact change
//! stats for the first `detail_budget` commits, message-length estimation
//! for the rest), classifies and scores it, then folds everything into an
//! [`AggregateResult`]: the classified commits oldest-first, a complexity
//! trend with one point per commit, and per-author / per-feature tables in
//! first-seen order.
//!
//! The run owns its accumulators; nothing is shared across runs and the
//! result is deterministic for a given input. A failed per-commit stat
//! lookup degrades that one commit to estimation; only a failure to list
//! commits at all fails the run.

pub(crate) mod aggregate;
pub(crate) mod normalize;

use std::error::Error;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::{self, BusinessFeature, BusinessImpact, SemanticCategory};
use crate::complexity;
use crate::source::CommitSource;
pub use aggregate::aggregate;
pub use normalize::normalize;

/// How many most-recent commits get an exact per-commit stat lookup.
pub const DEFAULT_DETAIL_BUDGET: usize = 50;

/// Ceiling on commits fetched from a paginated source.
pub const DEFAULT_MAX_COMMITS: usize = 1000;

/// A normalized commit: every field resolved, change signals exact or
/// estimated.
#[derive(Debug, Clone, Serialize)]
pub struct CommitRecord {
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub message: String,
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// A commit with its derived classification and complexity score.
///
/// `impact` is always `category.impact()`; the constructor is the only way
/// to build one, so the pair cannot disagree.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedCommit {
    #[serde(flatten)]
    pub record: CommitRecord,
    pub complexity: f64,
    pub category: SemanticCategory,
    pub impact: BusinessImpact,
    pub feature: BusinessFeature,
}

impl ClassifiedCommit {
    pub fn from_record(record: CommitRecord) -> Self {
        let category = classify::classify(&record.message);
        Self {
            complexity: complexity::score(
                record.files_changed,
                record.insertions,
                record.deletions,
            ),
            category,
            impact: category.impact(),
            feature: classify::extract_feature(&record.message),
            record,
        }
    }
}

/// One point of the complexity trend; same order as `commits`.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub complexity: f64,
}

/// Per-author totals, one entry per distinct author in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorContribution {
    pub author: String,
    pub commit_count: usize,
    pub total_lines_changed: usize,
}

/// Per-feature activity; `commit_hashes[i]` pairs with `timestamps[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureActivity {
    pub feature: BusinessFeature,
    pub commit_hashes: Vec<String>,
    pub timestamps: Vec<DateTime<Utc>>,
}

/// Everything a consumer needs: the full, untruncated fold over one batch
/// of commits. Presentation-layer windowing (top-N, trend sampling) is the
/// consumer's job.
#[derive(Debug, Serialize)]
pub struct AggregateResult {
    pub commits: Vec<ClassifiedCommit>,
    pub complexity_trend: Vec<TrendPoint>,
    pub author_contributions: Vec<AuthorContribution>,
    pub business_features: Vec<FeatureActivity>,
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub detail_budget: usize,
    pub max_commits: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            detail_budget: DEFAULT_DETAIL_BUDGET,
            max_commits: DEFAULT_MAX_COMMITS,
        }
    }
}

/// Run the full pipeline against a source.
pub fn run_pipeline(
    source: &dyn CommitSource,
    opts: &PipelineOptions,
) -> Result<AggregateResult, Box<dyn Error>> {
    let raw = source.list_commits(opts.max_commits)?;

    let mut classified = Vec::with_capacity(raw.len());
    for (i, raw_commit) in raw.into_iter().enumerate() {
        // Index 0 is the most recent commit; only the first
        // `detail_budget` get the expensive exact-stat lookup.
        let stats = if i < opts.detail_budget {
            match source.change_stats(&raw_commit.hash) {
                Ok(s) => Some(s),
                Err(err) => {
                    eprintln!(
                        "warning: stats unavailable for {}, estimating: {err}",
                        short_hash(&raw_commit.hash)
                    );
                    None
                }
            }
        } else {
            None
        };

        classified.push(ClassifiedCommit::from_record(normalize(raw_commit, stats)));
    }

    // Fetch order is newest-first; consumers get chronological order.
    classified.sort_by_key(|c| c.record.timestamp);

    Ok(aggregate(classified))
}

fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(8)]
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
