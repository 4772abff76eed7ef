//! Analysis report (`gp analyze` command).
//!
//! Runs the pipeline against the selected source and presents the result
//! as terminal tables or pretty JSON. Presentation-layer choices live
//! here: `--top` truncates the author table, and the summary condenses
//! the full complexity trend into one average. The underlying
//! [`AggregateResult`] is never truncated — the JSON output carries all
//! of it.

pub(crate) mod render;

use std::error::Error;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::{BusinessImpact, SemanticCategory};
use crate::pipeline::{AggregateResult, PipelineOptions, run_pipeline};
use crate::report_helpers;
use crate::source::CommitSource;
use render::print_report;

/// The aggregate plus a computed summary, as `--json` emits it.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub commit_count: usize,
    pub first_commit: Option<DateTime<Utc>>,
    pub last_commit: Option<DateTime<Utc>>,
    pub average_complexity: f64,
    pub categories: Vec<CategoryCount>,
    pub aggregate: AggregateResult,
}

/// Commit count per semantic category, zero-count categories omitted.
#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: SemanticCategory,
    pub impact: BusinessImpact,
    pub count: usize,
}

pub fn build_report(source: String, aggregate: AggregateResult) -> AnalysisReport {
    let commit_count = aggregate.commits.len();
    let average_complexity = if commit_count == 0 {
        0.0
    } else {
        aggregate.complexity_trend.iter().map(|p| p.complexity).sum::<f64>() / commit_count as f64
    };

    let categories = SemanticCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let count = aggregate
                .commits
                .iter()
                .filter(|c| c.category == category)
                .count();
            (count > 0).then_some(CategoryCount {
                category,
                impact: category.impact(),
                count,
            })
        })
        .collect();

    AnalysisReport {
        source,
        commit_count,
        first_commit: aggregate.commits.first().map(|c| c.record.timestamp),
        last_commit: aggregate.commits.last().map(|c| c.record.timestamp),
        average_complexity,
        categories,
        aggregate,
    }
}

/// Entry point: run the pipeline and print the report.
pub fn run(
    source: &dyn CommitSource,
    opts: &PipelineOptions,
    json: bool,
    top: usize,
) -> Result<(), Box<dyn Error>> {
    let aggregate = run_pipeline(source, opts)?;
    let report = build_report(source.name(), aggregate);

    if json {
        report_helpers::print_json_stdout(&report)
    } else {
        print_report(&report, top);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
