use std::collections::HashMap;

use super::{
    AggregateResult, AuthorContribution, ClassifiedCommit, FeatureActivity, TrendPoint,
};

/// Fold classified commits into the aggregate tables in one forward pass.
///
/// Input order is preserved: the trend has one point per commit in the
/// same order, and the author/feature tables list entries in order of
/// first appearance. Nothing is filtered or truncated here.
pub fn aggregate(commits: Vec<ClassifiedCommit>) -> AggregateResult {
    let mut complexity_trend = Vec::with_capacity(commits.len());
    let mut authors: Vec<AuthorContribution> = Vec::new();
    let mut author_index: HashMap<String, usize> = HashMap::new();
    let mut features: Vec<FeatureActivity> = Vec::new();
    let mut feature_index: HashMap<crate::classify::BusinessFeature, usize> = HashMap::new();

    for commit in &commits {
        complexity_trend.push(TrendPoint {
            timestamp: commit.record.timestamp,
            complexity: commit.complexity,
        });

        let lines_changed = commit.record.insertions + commit.record.deletions;
        let idx = *author_index
            .entry(commit.record.author.clone())
            .or_insert_with(|| {
                authors.push(AuthorContribution {
                    author: commit.record.author.clone(),
                    commit_count: 0,
                    total_lines_changed: 0,
                });
                authors.len() - 1
            });
        authors[idx].commit_count += 1;
        authors[idx].total_lines_changed += lines_changed;

        let idx = *feature_index.entry(commit.feature).or_insert_with(|| {
            features.push(FeatureActivity {
                feature: commit.feature,
                commit_hashes: Vec::new(),
                timestamps: Vec::new(),
            });
            features.len() - 1
        });
        features[idx].commit_hashes.push(commit.record.hash.clone());
        features[idx].timestamps.push(commit.record.timestamp);
    }

    AggregateResult {
        commits,
        complexity_trend,
        author_contributions: authors,
        business_features: features,
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
