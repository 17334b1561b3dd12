use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Could not parse commit message: {0}")]
    UnparseableCommit(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ChangelogError::Version(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChangelogError::config("scopes require a module");
        assert_eq!(
            err.to_string(),
            "Configuration error: scopes require a module"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChangelogError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ChangelogError::version("test")
            .to_string()
            .starts_with("Version parsing error"));
        assert!(ChangelogError::config("test")
            .to_string()
            .starts_with("Configuration error"));
    }

    #[test]
    fn test_unparseable_commit_names_the_message() {
        let err = ChangelogError::UnparseableCommit("Merge branch 'main'".to_string());
        assert!(err.to_string().contains("Merge branch 'main'"));
    }
}
