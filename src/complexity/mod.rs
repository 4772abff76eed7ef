//! Commit complexity scoring.
//!
//! Maps change-size signals to a bounded [0, 100] score:
//!
//!   score = min(100, ln(files + 1) * 10 + ln(insertions + deletions + 1) * 5)
//!
//! The logarithm damps very large commits so they don't dominate the scale
//! linearly; file-count changes weigh twice as heavily per log-unit as
//! line-count changes. The cap keeps chart axes bounded.

/// Score a commit's change size on a [0, 100] scale.
///
/// Monotonically non-decreasing in each argument; `score(0, 0, 0)` is 0.
pub fn score(files_changed: usize, insertions: usize, deletions: usize) -> f64 {
    let file_term = ((files_changed + 1) as f64).ln() * 10.0;
    let line_term = ((insertions + deletions + 1) as f64).ln() * 5.0;
    (file_term + line_term).min(100.0)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
