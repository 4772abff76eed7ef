/// CLI argument definitions for the `gp` command.
///
/// Defines both subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "gp", version, about = "Commit-history insight tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Commit-source selection and pipeline limits, shared by both commands.
#[derive(Args)]
pub struct SourceArgs {
    /// Local clone to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Analyze a hosted repository via the GitHub API instead of a local clone
    #[arg(long, value_name = "OWNER/REPO")]
    pub github: Option<String>,

    /// GitHub API token (default: GITHUB_TOKEN env var)
    #[arg(long)]
    pub token: Option<String>,

    /// Number of most-recent commits that get exact change stats;
    /// older commits use message-length estimation (default: 50)
    #[arg(long, default_value = "50")]
    pub detail_budget: usize,

    /// Ceiling on commits fetched from a paginated source (default: 1000)
    #[arg(long, default_value = "1000")]
    pub max_commits: usize,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Classify and aggregate a repository's commit history
    #[command(long_about = "\
Classify and aggregate a repository's commit history.

Each commit message is bucketed by keyword heuristics into a semantic
category (feature, bugfix, refactor, testing, documentation, performance,
security, other) and a business feature area, and scored for complexity
on a 0-100 scale from its change size. The report shows per-author
contributions, per-feature activity, and a category breakdown.

Change-size signals are exact for the most recent commits (up to
--detail-budget) and estimated from message length beyond that, which
bounds the per-commit lookups against rate-limited sources.

Examples:
  gp analyze                         # local clone in the current directory
  gp analyze ../other-repo           # another local clone
  gp analyze --github rust-lang/log  # hosted repository via the GitHub API
  gp analyze --json                  # machine-readable output
  gp analyze --top 5                 # only the 5 most active authors")]
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON (full aggregate, untruncated)
        #[arg(long)]
        json: bool,

        /// Show only the top N authors (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Ask a free-text question about a repository's history
    #[command(long_about = "\
Ask a free-text question about a repository's commit history.

Runs the same classification pipeline as `gp analyze`, condenses the
result into a text digest (large histories keep the 300 most recent
commits plus every 5th older one), and sends digest plus question to
Anthropic Claude. Requires the ANTHROPIC_API_KEY environment variable.

Examples:
  gp ask \"who owns the auth work?\"
  gp ask \"what changed last month?\" --github rust-lang/log
  gp ask \"summarize this quarter\" --output summary.md")]
    Ask {
        /// The question to answer
        question: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Model to use (default: claude-sonnet-4-5-20250929)
        #[arg(long)]
        model: Option<String>,

        /// Save the answer to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
