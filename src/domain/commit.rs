/// A single commit as retrieved from version control.
///
/// Commits are read-only once retrieved; they are only filtered, classified,
/// or cloned with a substituted message when a breaking-change entry is
/// synthesized from the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Unique identifier of the commit.
    pub hash: String,
    /// First line of the commit message, conventional-commit formatted.
    pub message: String,
    /// Remaining message lines; may contain `BREAKING CHANGE:` annotations.
    pub body: String,
    pub author: String,
    pub date: String,
}

impl Commit {
    /// Clone this commit with its message replaced.
    ///
    /// Used when a `BREAKING CHANGE:` body line becomes its own changelog
    /// entry carrying the original commit's hash.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Commit {
            message: message.into(),
            ..self.clone()
        }
    }
}
