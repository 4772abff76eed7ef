use std::error::Error;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{ChangeStats, CommitSource, RawCommit};

const API_ROOT: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("gitpulse/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const PER_PAGE: usize = 100;

/// Commit source backed by the GitHub REST API.
///
/// Listing paginates `GET /repos/{owner}/{repo}/commits` until the caller's
/// ceiling or an empty page; per-commit stats come from the single-commit
/// endpoint. An unauthenticated client works but hits rate limits quickly,
/// so a bearer token is picked up from `--token` or `GITHUB_TOKEN`.
pub struct GithubSource {
    owner: String,
    repo: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

/// One entry from the commit list endpoint.
#[derive(Deserialize)]
struct CommitItem {
    sha: String,
    commit: CommitPayload,
    author: Option<Account>,
}

#[derive(Deserialize)]
struct CommitPayload {
    message: String,
    author: Option<GitActor>,
}

#[derive(Deserialize)]
struct GitActor {
    name: Option<String>,
    date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct Account {
    login: Option<String>,
}

/// Response of the single-commit endpoint; only the size signals matter.
#[derive(Deserialize)]
struct CommitDetail {
    stats: Option<DetailStats>,
    files: Option<Vec<FileEntry>>,
}

#[derive(Deserialize)]
struct DetailStats {
    additions: usize,
    deletions: usize,
}

#[derive(Deserialize)]
struct FileEntry {}

impl GithubSource {
    /// `slug` is `owner/repo`. A `None` token falls back to the
    /// `GITHUB_TOKEN` environment variable, if set.
    pub fn new(slug: &str, token: Option<String>) -> Result<Self, Box<dyn Error>> {
        let (owner, repo) = slug
            .split_once('/')
            .filter(|(o, r)| !o.is_empty() && !r.is_empty() && !r.contains('/'))
            .ok_or_else(|| format!("invalid repository slug {slug:?} (expected owner/repo)"))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.or_else(|| std::env::var("GITHUB_TOKEN").ok()),
            client,
        })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, Box<dyn Error>> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let resp = request.send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(format!("GitHub API error ({status}): {body}").into());
        }
        Ok(resp)
    }
}

impl CommitSource for GithubSource {
    fn name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn list_commits(&self, max: usize) -> Result<Vec<RawCommit>, Box<dyn Error>> {
        let mut commits = Vec::new();
        let mut page = 1;

        while commits.len() < max {
            let url = format!(
                "{API_ROOT}/repos/{}/{}/commits?per_page={PER_PAGE}&page={page}",
                self.owner, self.repo
            );
            let items: Vec<CommitItem> = self.get(&url)?.json()?;
            if items.is_empty() {
                break;
            }
            let page_len = items.len();

            for item in items {
                commits.push(raw_commit(item));
                if commits.len() == max {
                    break;
                }
            }

            // A short page is the last one; don't request an empty page.
            if page_len < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(commits)
    }

    fn change_stats(&self, hash: &str) -> Result<ChangeStats, Box<dyn Error>> {
        let url = format!(
            "{API_ROOT}/repos/{}/{}/commits/{hash}",
            self.owner, self.repo
        );
        let detail: CommitDetail = self.get(&url)?.json()?;

        let stats = detail
            .stats
            .ok_or_else(|| format!("no stats in response for commit {hash}"))?;

        Ok(ChangeStats {
            files_changed: detail.files.map(|f| f.len()).unwrap_or(0),
            insertions: stats.additions,
            deletions: stats.deletions,
        })
    }
}

fn raw_commit(item: CommitItem) -> RawCommit {
    let actor = item.commit.author;
    RawCommit {
        hash: item.sha,
        message: item.commit.message,
        author_name: actor.as_ref().and_then(|a| a.name.clone()),
        author_login: item.author.and_then(|a| a.login),
        timestamp: actor.and_then(|a| a.date),
    }
}

#[cfg(test)]
#[path = "github_test.rs"]
mod tests;
