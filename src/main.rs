mod ai;
mod classify;
mod cli;
mod complexity;
mod pipeline;
mod report;
mod report_helpers;
mod source;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use cli::{Cli, Commands, SourceArgs};
use pipeline::PipelineOptions;
use source::{CommitSource, GithubSource, LocalSource};

/// Select the commit source at the boundary: `--github` picks the hosted
/// API, otherwise the path is opened as a local clone.
fn open_source(args: &SourceArgs) -> Result<Box<dyn CommitSource>, Box<dyn Error>> {
    match &args.github {
        Some(slug) => Ok(Box::new(GithubSource::new(slug, args.token.clone())?)),
        None => {
            let target = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
            Ok(Box::new(LocalSource::open(&target)?))
        }
    }
}

fn pipeline_options(args: &SourceArgs) -> PipelineOptions {
    PipelineOptions {
        detail_budget: args.detail_budget,
        max_commits: args.max_commits,
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Analyze { source, json, top } => {
            let commit_source = open_source(&source)?;
            report::run(commit_source.as_ref(), &pipeline_options(&source), json, top)
        }
        Commands::Ask {
            question,
            source,
            model,
            output,
        } => {
            let commit_source = open_source(&source)?;
            ai::run(
                &question,
                commit_source.as_ref(),
                &pipeline_options(&source),
                model.as_deref(),
                output.as_deref(),
            )
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
