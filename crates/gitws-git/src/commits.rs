//! Commit history inspection through `git2`.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use git2::{Repository, Sort};

use crate::Result;

/// Information about a single commit.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// Short commit hash (7 characters)
    pub hash: String,

    /// First line of the commit message
    pub message: String,

    /// Commit author name
    pub author: String,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

/// Extract the last `max_count` commits reachable from HEAD.
///
/// Returns commits in reverse-chronological order (most recent first).
pub fn list_recent_commits(repo_path: &Path, max_count: usize) -> Result<Vec<CommitInfo>> {
    let repo = Repository::open(repo_path)?;

    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(Sort::TIME)?;

    let mut commits = Vec::with_capacity(max_count);

    for oid_result in revwalk.take(max_count) {
        let oid = oid_result?;
        let commit = repo.find_commit(oid)?;

        let timestamp = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .unwrap_or_default();

        let message = commit
            .message()
            .unwrap_or("")
            .lines()
            .next()
            .unwrap_or("")
            .to_string();

        let author = commit.author().name().unwrap_or("Unknown").to_string();

        commits.push(CommitInfo {
            hash: format!("{:.7}", oid),
            message,
            author,
            timestamp,
        });
    }

    Ok(commits)
}

/// The most recent commit on HEAD, if any.
pub fn head_commit(repo_path: &Path) -> Result<Option<CommitInfo>> {
    Ok(list_recent_commits(repo_path, 1)?.into_iter().next())
}

/// Number of commits reachable from HEAD.
pub fn commit_count(repo_path: &Path) -> Result<usize> {
    let repo = Repository::open(repo_path)?;
    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;

    let mut count = 0;
    for oid in revwalk {
        oid?;
        count += 1;
    }
    Ok(count)
}

/// Paths changed by the HEAD commit relative to its first parent.
///
/// For a root commit every path in the tree is reported. Submodules appear
/// as their gitlink path. Paths use forward slashes and are sorted.
pub fn head_changed_paths(repo_path: &Path) -> Result<Vec<String>> {
    let repo = Repository::open(repo_path)?;
    let head = repo.head()?.peel_to_commit()?;
    let tree = head.tree()?;

    let parent_tree = if head.parent_count() > 0 {
        Some(head.parent(0)?.tree()?)
    } else {
        None
    };

    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

    let mut paths: Vec<String> = diff
        .deltas()
        .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();
    paths.sort();
    paths.dedup();

    Ok(paths)
}
