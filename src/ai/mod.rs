//! AI question answering (`gp ask` command).
//!
//! Runs the pipeline, renders the aggregate as a text digest, and forwards
//! digest plus question to the Anthropic Messages API in a single turn.
//! The model never sees the repository itself, only the digest.

mod client;
mod digest;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::pipeline::{PipelineOptions, run_pipeline};
use crate::source::CommitSource;
use client::{ApiRequest, Message};

const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
const MAX_TOKENS: u32 = 2048;

const SYSTEM_PROMPT: &str = "\
You are a software repository analyst. You receive a digest of a
repository's commit history: per-author contribution totals, business
feature activity, a category breakdown, and a commit log with heuristic
classification and complexity scores.

Answer the user's question using only this digest. Be specific — cite
authors, features, dates, and counts from the digest. If the digest does
not contain the information needed, say so instead of guessing.";

pub fn run(
    question: &str,
    source: &dyn CommitSource,
    opts: &PipelineOptions,
    model: Option<&str>,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
        "ANTHROPIC_API_KEY environment variable not set. \
         Get your key at https://console.anthropic.com/"
    })?;

    let aggregate = run_pipeline(source, opts)?;
    let digest = digest::build_digest(&source.name(), &aggregate);

    let model = model.unwrap_or(DEFAULT_MODEL).to_string();
    eprintln!("Querying {model}...");

    let request = ApiRequest {
        model,
        max_tokens: MAX_TOKENS,
        system: SYSTEM_PROMPT.to_string(),
        messages: vec![Message {
            role: "user".to_string(),
            content: format!("{digest}\nQuestion: {question}"),
        }],
    };

    let response = client::send_message(&api_key, &request)?;
    let answer = response.text();
    println!("{answer}");

    if let Some(out_path) = output {
        fs::write(out_path, &answer)?;
        eprintln!("Answer saved to {}", out_path.display());
    }

    Ok(())
}
