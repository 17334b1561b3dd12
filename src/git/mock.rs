use crate::domain::Commit;
use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations.
///
/// Holds a fixed history: commits are stored newest→oldest and tags
/// oldest→newest, matching the ordering contract of [Repository].
#[derive(Debug, Default)]
pub struct MockRepository {
    commits: Vec<Commit>,
    tags: Vec<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository::default()
    }

    /// Set the commit history, newest→oldest.
    pub fn with_commits(mut self, commits: Vec<Commit>) -> Self {
        self.commits = commits;
        self
    }

    /// Set the tag list, oldest→newest.
    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(String::from).collect();
        self
    }
}

/// Build a commit fixture with filler author/body/date fields.
pub fn mock_commit(hash: &str, message: &str) -> Commit {
    Commit {
        hash: hash.to_string(),
        message: message.to_string(),
        body: "Some body".to_string(),
        author: "Random User".to_string(),
        date: "2024-01-01T00:00:00+00:00".to_string(),
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn list_commits(&self, _since_tag: Option<&str>) -> Result<Vec<Commit>> {
        // Simplified: the fixture history is assumed to already stop at the
        // previous tag, so the range bound is ignored.
        Ok(self.commits.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_tags() {
        let repo = MockRepository::new().with_tags(vec!["v1.0.0", "v1.1.0"]);
        assert_eq!(repo.list_tags().unwrap(), vec!["v1.0.0", "v1.1.0"]);
    }

    #[test]
    fn test_mock_repository_commits() {
        let repo = MockRepository::new().with_commits(vec![
            mock_commit("02", "fix: newest"),
            mock_commit("01", "feat: oldest"),
        ]);

        let commits = repo.list_commits(None).unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "02");
    }

    #[test]
    fn test_mock_repository_default_is_empty() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
        assert!(repo.list_commits(None).unwrap().is_empty());
    }
}
