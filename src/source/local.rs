use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::DateTime;
use git2::{DiffOptions, Oid, Repository, Sort};

use super::{ChangeStats, CommitSource, RawCommit};

/// Commit source backed by a local clone, walked with git2.
pub struct LocalSource {
    repo: Repository,
    root: PathBuf,
}

impl std::fmt::Debug for LocalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSource")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl LocalSource {
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let repo = Repository::discover(path)
            .map_err(|e| format!("not a git repository (or any parent): {e}"))?;
        let root = repo
            .workdir()
            .ok_or("bare repositories are not supported")?
            .to_path_buf();
        Ok(Self { repo, root })
    }
}

impl CommitSource for LocalSource {
    fn name(&self) -> String {
        self.root.display().to_string()
    }

    fn list_commits(&self, _max: usize) -> Result<Vec<RawCommit>, Box<dyn Error>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            // Skip merge commits: their diff against a single parent
            // double-counts the merged branch.
            if commit.parent_count() > 1 {
                continue;
            }

            let author = commit.author();
            commits.push(RawCommit {
                hash: oid.to_string(),
                message: commit.message().unwrap_or("").to_string(),
                author_name: author.name().map(str::to_string),
                author_login: None,
                timestamp: DateTime::from_timestamp(commit.time().seconds(), 0),
            });
        }

        Ok(commits)
    }

    fn change_stats(&self, hash: &str) -> Result<ChangeStats, Box<dyn Error>> {
        let oid = Oid::from_str(hash)?;
        let commit = self.repo.find_commit(oid)?;

        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let mut opts = DiffOptions::new();
        let diff =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
        let stats = diff.stats()?;

        Ok(ChangeStats {
            files_changed: stats.files_changed(),
            insertions: stats.insertions(),
            deletions: stats.deletions(),
        })
    }
}

#[cfg(test)]
#[path = "local_test.rs"]
mod tests;
