use std::fmt::Write;

use crate::classify::SemanticCategory;
use crate::pipeline::AggregateResult;

/// Histories up to this many commits go into the digest in full.
const FULL_HISTORY_LIMIT: usize = 500;
/// For larger histories: all of the most recent commits in this window...
const RECENT_WINDOW: usize = 300;
/// ...plus every Nth older commit.
const OLDER_STRIDE: usize = 5;

/// Indices (into an oldest-first sequence of `n` commits) to include in
/// the digest. Small histories are kept whole; large ones keep the recent
/// window intact and thin the older tail so the prompt stays bounded.
fn sampled_indices(n: usize) -> Vec<usize> {
    if n <= FULL_HISTORY_LIMIT {
        return (0..n).collect();
    }
    let cutoff = n - RECENT_WINDOW;
    let mut indices: Vec<usize> = (0..cutoff).step_by(OLDER_STRIDE).collect();
    indices.extend(cutoff..n);
    indices
}

/// Render an aggregate result as the plain-text digest sent to the model.
///
/// This is presentation-layer sampling: the aggregate itself is complete,
/// only the per-commit log here is windowed.
pub fn build_digest(source: &str, result: &AggregateResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Repository: {source}");
    let _ = writeln!(out, "Total commits analyzed: {}", result.commits.len());

    let _ = writeln!(out, "\nAuthors:");
    for a in &result.author_contributions {
        let _ = writeln!(
            out,
            "  - {}: {} commits, {} lines changed",
            a.author, a.commit_count, a.total_lines_changed
        );
    }

    let _ = writeln!(out, "\nBusiness features:");
    for f in &result.business_features {
        let span = match (f.timestamps.first(), f.timestamps.last()) {
            (Some(first), Some(last)) => format!(
                " ({} to {})",
                first.format("%Y-%m-%d"),
                last.format("%Y-%m-%d")
            ),
            _ => String::new(),
        };
        let _ = writeln!(
            out,
            "  - {}: {} commits{span}",
            f.feature.label(),
            f.commit_hashes.len()
        );
    }

    let _ = writeln!(out, "\nCategory breakdown:");
    for category in SemanticCategory::ALL {
        let count = result
            .commits
            .iter()
            .filter(|c| c.category == category)
            .count();
        if count > 0 {
            let _ = writeln!(out, "  - {}: {count}", category.label());
        }
    }

    let indices = sampled_indices(result.commits.len());
    let _ = writeln!(
        out,
        "\nCommit log ({} of {} commits, oldest first):",
        indices.len(),
        result.commits.len()
    );
    for i in indices {
        let commit = &result.commits[i];
        let subject = commit.record.message.lines().next().unwrap_or("");
        let _ = writeln!(
            out,
            "  - [{}] {} ({}/{}, complexity {:.1}): {subject}",
            commit.record.timestamp.format("%Y-%m-%d"),
            commit.record.author,
            commit.category.label(),
            commit.feature.label(),
            commit.complexity
        );
    }

    out
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod tests;
