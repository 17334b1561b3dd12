use serde::Serialize;
use tracing::{debug, info};

use crate::classify::classify;
use crate::config::ReleaseConfig;
use crate::domain::version::{next_version, Version};
use crate::error::{ChangelogError, Result};
use crate::git::Repository;
use crate::render::render;
use crate::select::select_relevant_commits;
use crate::tags::find_previous_tag;

/// Aggregate result of one release computation.
///
/// Field names serialize in camelCase so the JSON record and the Action
/// outputs share one vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseOutcome {
    /// True when the next version equals the previous one, meaning no
    /// qualifying changes occurred.
    pub skipped: bool,
    /// Markdown changelog body; empty when there are no sections and no
    /// prefix/suffix.
    pub changelog: String,
    pub prev_tag: Option<String>,
    pub prev_version: Option<String>,
    pub next_tag: String,
    pub next_version: String,
}

/// Compute the next release from the repository's history.
///
/// Sequences the core steps: resolve the previous tag, select and classify
/// the relevant commits, derive the next version and render the changelog.
/// Either a complete [ReleaseOutcome] is returned or the invocation fails
/// with the originating error; there is no partial result.
pub fn generate_changelog<R: Repository>(
    repo: &R,
    config: &ReleaseConfig,
) -> Result<ReleaseOutcome> {
    let tag_prefix = config.mode.tag_prefix();
    debug!(%tag_prefix, "computing release");

    let tags = repo.list_tags()?;
    let prev_tag = find_previous_tag(&tags, &tag_prefix);
    let prev_version = match prev_tag.as_deref() {
        Some(tag) => {
            // The resolver only returns prefix-matching tags; a mismatch
            // here means the two went out of sync.
            let remainder = tag.strip_prefix(&tag_prefix).ok_or_else(|| {
                ChangelogError::version(format!(
                    "tag '{}' does not start with '{}'",
                    tag, tag_prefix
                ))
            })?;
            Some(Version::parse(remainder)?)
        }
        None => None,
    };

    let commits = select_relevant_commits(repo, prev_tag.as_deref(), &config.mode)?;
    let changes = classify(commits);
    let changelog = render(&changes, &config.render)?;

    let next = next_version(prev_version.as_ref(), &changes);
    let next_tag = format!("{}{}", tag_prefix, next);
    let skipped = prev_version == Some(next);

    info!(
        %next_tag,
        skipped,
        fixes = changes.fixes.len(),
        features = changes.features.len(),
        breaking = changes.breaking_changes.len(),
        "release computed"
    );

    Ok(ReleaseOutcome {
        skipped,
        changelog,
        prev_tag,
        prev_version: prev_version.map(|version| version.to_string()),
        next_tag,
        next_version: next.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReleaseMode;
    use crate::git::mock::{mock_commit, MockRepository};

    #[test]
    fn test_first_release_defaults_to_1_0_0() {
        let repo = MockRepository::new().with_commits(vec![mock_commit("01", "feat: initial")]);

        let outcome = generate_changelog(&repo, &ReleaseConfig::default()).unwrap();
        assert_eq!(outcome.prev_tag, None);
        assert_eq!(outcome.prev_version, None);
        assert_eq!(outcome.next_version, "1.0.0");
        assert_eq!(outcome.next_tag, "v1.0.0");
        assert!(!outcome.skipped);
    }

    #[test]
    fn test_no_qualifying_changes_is_skipped() {
        let repo = MockRepository::new()
            .with_tags(vec!["v1.2.3"])
            .with_commits(vec![
                mock_commit("02", "chore: bump dependencies"),
                mock_commit("01", "docs: clarify readme"),
            ]);

        let outcome = generate_changelog(&repo, &ReleaseConfig::default()).unwrap();
        assert!(outcome.skipped);
        assert_eq!(outcome.prev_version.as_deref(), Some("1.2.3"));
        assert_eq!(outcome.next_version, "1.2.3");
        assert_eq!(outcome.changelog, "");
    }

    #[test]
    fn test_breaking_change_takes_precedence() {
        let repo = MockRepository::new()
            .with_tags(vec!["v1.1.1"])
            .with_commits(vec![
                mock_commit("03", "fix: patch-level change"),
                mock_commit("02", "feat: minor-level change"),
                mock_commit("01", "feat!: major-level change"),
            ]);

        let outcome = generate_changelog(&repo, &ReleaseConfig::default()).unwrap();
        assert_eq!(outcome.next_version, "2.0.0");
        assert_eq!(outcome.next_tag, "v2.0.0");
    }

    #[test]
    fn test_module_prefix_is_stripped_before_parsing() {
        let repo = MockRepository::new()
            .with_tags(vec!["api-v1.2.3"])
            .with_commits(vec![mock_commit("01", "fix(api): repair pagination")]);
        let config = ReleaseConfig {
            mode: ReleaseMode::Module {
                name: "API".to_string(),
                scopes: None,
            },
            ..ReleaseConfig::default()
        };

        let outcome = generate_changelog(&repo, &config).unwrap();
        assert_eq!(outcome.prev_version.as_deref(), Some("1.2.3"));
        assert_eq!(outcome.next_tag, "api-v1.2.4");
    }

    #[test]
    fn test_malformed_previous_version_is_fatal() {
        let repo = MockRepository::new()
            .with_tags(vec!["v1.2"])
            .with_commits(vec![mock_commit("01", "fix: something")]);

        let err = generate_changelog(&repo, &ReleaseConfig::default()).unwrap_err();
        assert!(matches!(err, ChangelogError::Version(_)));
    }

    #[test]
    fn test_outcome_serializes_in_camel_case() {
        let repo = MockRepository::new().with_commits(vec![mock_commit("01", "fix: something")]);

        let outcome = generate_changelog(&repo, &ReleaseConfig::default()).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["prevTag"], serde_json::Value::Null);
        assert_eq!(json["nextTag"], "v1.0.0");
        assert_eq!(json["skipped"], false);
    }
}
