use std::path::Path;

use chrono::DateTime;
use git2::Repository as Git2Repo;

use crate::domain::Commit;
use crate::error::Result;
use crate::git::Repository;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn commit_from_oid(&self, oid: git2::Oid) -> Result<Commit> {
        let commit = self.repo.find_commit(oid)?;

        let message = commit.summary().unwrap_or("").to_string();
        let body = commit.body().unwrap_or("").to_string();
        let author = commit.author().name().unwrap_or("unknown").to_string();
        let date = DateTime::from_timestamp(commit.time().seconds(), 0)
            .map(|time| time.to_rfc3339())
            .unwrap_or_default();

        Ok(Commit {
            hash: oid.to_string(),
            message,
            body,
            author,
            date,
        })
    }
}

impl Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn list_commits(&self, since_tag: Option<&str>) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        if let Some(tag) = since_tag {
            let reference_name = format!("refs/tags/{}", tag);
            let object = self.repo.revparse_single(&reference_name)?;
            // Annotated tags need peeling to reach the tagged commit.
            let commit = object.peel_to_commit()?;
            revwalk.hide(commit.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            commits.push(self.commit_from_oid(oid?)?);
        }

        Ok(commits)
    }
}
