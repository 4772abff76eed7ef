//! Keyword-based commit classification.
//!
//! Two independent rule tables map a commit message to (a) a semantic
//! category with its business-impact label and (b) a coarse business
//! feature bucket. Matching is case-insensitive substring containment,
//! first match wins, so rule order is the tie-break when a message
//! contains several trigger words ("feat: fix typo" is a feature).
//!
//! This is a best-effort heuristic: a message that matches nothing falls
//! through to `Other` / `Maintenance` / `CoreDevelopment`.

use std::fmt;

use serde::Serialize;

/// Semantic category of a commit, inferred from its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticCategory {
    Feature,
    Bugfix,
    Refactor,
    Testing,
    Documentation,
    Performance,
    Security,
    Other,
}

/// Business-impact label paired with a semantic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessImpact {
    Enhancement,
    Stability,
    #[serde(rename = "technical debt")]
    TechnicalDebt,
    Quality,
    Usability,
    Performance,
    Security,
    Maintenance,
}

/// Coarse product-area bucket for a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BusinessFeature {
    Authentication,
    #[serde(rename = "User Management")]
    UserManagement,
    #[serde(rename = "API Development")]
    ApiDevelopment,
    #[serde(rename = "UI/UX")]
    UiUx,
    Database,
    DevOps,
    Testing,
    Documentation,
    #[serde(rename = "Core Development")]
    CoreDevelopment,
}

impl SemanticCategory {
    /// Every category, in rule-priority order with `Other` last.
    pub const ALL: [SemanticCategory; 8] = [
        SemanticCategory::Feature,
        SemanticCategory::Bugfix,
        SemanticCategory::Refactor,
        SemanticCategory::Testing,
        SemanticCategory::Documentation,
        SemanticCategory::Performance,
        SemanticCategory::Security,
        SemanticCategory::Other,
    ];

    /// The business-impact label for this category. Total mapping, so a
    /// classified commit can never carry a mismatched category/impact pair.
    pub fn impact(self) -> BusinessImpact {
        match self {
            SemanticCategory::Feature => BusinessImpact::Enhancement,
            SemanticCategory::Bugfix => BusinessImpact::Stability,
            SemanticCategory::Refactor => BusinessImpact::TechnicalDebt,
            SemanticCategory::Testing => BusinessImpact::Quality,
            SemanticCategory::Documentation => BusinessImpact::Usability,
            SemanticCategory::Performance => BusinessImpact::Performance,
            SemanticCategory::Security => BusinessImpact::Security,
            SemanticCategory::Other => BusinessImpact::Maintenance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SemanticCategory::Feature => "feature",
            SemanticCategory::Bugfix => "bugfix",
            SemanticCategory::Refactor => "refactor",
            SemanticCategory::Testing => "testing",
            SemanticCategory::Documentation => "documentation",
            SemanticCategory::Performance => "performance",
            SemanticCategory::Security => "security",
            SemanticCategory::Other => "other",
        }
    }
}

impl BusinessImpact {
    pub fn label(self) -> &'static str {
        match self {
            BusinessImpact::Enhancement => "enhancement",
            BusinessImpact::Stability => "stability",
            BusinessImpact::TechnicalDebt => "technical debt",
            BusinessImpact::Quality => "quality",
            BusinessImpact::Usability => "usability",
            BusinessImpact::Performance => "performance",
            BusinessImpact::Security => "security",
            BusinessImpact::Maintenance => "maintenance",
        }
    }
}

impl BusinessFeature {
    pub fn label(self) -> &'static str {
        match self {
            BusinessFeature::Authentication => "Authentication",
            BusinessFeature::UserManagement => "User Management",
            BusinessFeature::ApiDevelopment => "API Development",
            BusinessFeature::UiUx => "UI/UX",
            BusinessFeature::Database => "Database",
            BusinessFeature::DevOps => "DevOps",
            BusinessFeature::Testing => "Testing",
            BusinessFeature::Documentation => "Documentation",
            BusinessFeature::CoreDevelopment => "Core Development",
        }
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for BusinessImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for BusinessFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category rules in priority order. Evaluated top to bottom; the first
/// rule with any keyword contained in the lower-cased message wins.
const CATEGORY_RULES: &[(&[&str], SemanticCategory)] = &[
    (&["feat", "feature", "add"], SemanticCategory::Feature),
    (&["fix", "bug"], SemanticCategory::Bugfix),
    (&["refactor", "clean"], SemanticCategory::Refactor),
    (&["test", "spec"], SemanticCategory::Testing),
    (&["doc", "readme"], SemanticCategory::Documentation),
    (&["perf", "optimize"], SemanticCategory::Performance),
    (&["security", "auth"], SemanticCategory::Security),
];

/// Feature rules in priority order, independent of the category table.
const FEATURE_RULES: &[(&[&str], BusinessFeature)] = &[
    (&["auth", "login", "signup"], BusinessFeature::Authentication),
    (&["user", "profile"], BusinessFeature::UserManagement),
    (&["api", "endpoint"], BusinessFeature::ApiDevelopment),
    (&["ui", "frontend", "component"], BusinessFeature::UiUx),
    (&["database", "db", "migration"], BusinessFeature::Database),
    (&["deploy", "ci", "build"], BusinessFeature::DevOps),
    (&["test", "spec"], BusinessFeature::Testing),
    (&["doc", "readme"], BusinessFeature::Documentation),
];

/// Classify a commit message into its semantic category (and, via
/// [`SemanticCategory::impact`], its business-impact label).
pub fn classify(message: &str) -> SemanticCategory {
    let lower = message.to_lowercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *category;
        }
    }
    SemanticCategory::Other
}

/// Map a commit message to a business feature bucket.
pub fn extract_feature(message: &str) -> BusinessFeature {
    let lower = message.to_lowercase();
    for (keywords, feature) in FEATURE_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *feature;
        }
    }
    BusinessFeature::CoreDevelopment
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
