use regex::Regex;
use tracing::debug;

use crate::config::ReleaseMode;
use crate::domain::Commit;
use crate::error::{ChangelogError, Result};
use crate::git::Repository;

/// Build the relevance filter for commit messages.
///
/// A commit is relevant when a line of its message starts with `feat`,
/// `feat!` or `fix`. With a module the scope tag is mandatory and must equal
/// one of the resolved scopes; without one, any scope (or none) passes.
/// Unscoped commits never count toward a named module's release.
pub fn filter_regex(mode: &ReleaseMode) -> Result<Regex> {
    let pattern = match mode.scopes() {
        Some(scopes) => {
            let alternation = scopes
                .iter()
                .map(|scope| regex::escape(scope))
                .collect::<Vec<_>>()
                .join("|");
            format!(r"(?m)^(feat!?|fix)\(({})\)", alternation)
        }
        None => r"(?m)^(feat!?|fix)".to_string(),
    };

    Regex::new(&pattern)
        .map_err(|e| ChangelogError::config(format!("invalid commit filter: {}", e)))
}

/// Select the commits that belong to this release, oldest→newest.
///
/// Without a previous tag the full history is in scope; otherwise only
/// commits strictly after that tag. The repository returns newest→oldest;
/// the result is reversed into changelog order.
pub fn select_relevant_commits<R: Repository>(
    repo: &R,
    prev_tag: Option<&str>,
    mode: &ReleaseMode,
) -> Result<Vec<Commit>> {
    let history = match prev_tag {
        None => {
            debug!("no previous tag, walking full history");
            repo.list_commits(None)?
        }
        Some(tag) => {
            debug!(tag, "walking commits since previous tag");
            repo.list_commits(Some(tag))?
        }
    };

    let filter = filter_regex(mode)?;
    let mut relevant: Vec<Commit> = history
        .into_iter()
        .filter(|commit| filter.is_match(&commit.message))
        .collect();
    relevant.reverse();

    debug!(count = relevant.len(), "relevant commits");
    Ok(relevant)
}
