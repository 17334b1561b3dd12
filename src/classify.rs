use crate::domain::{Changes, Commit};

/// Marker in the message subject that flags a breaking change (`feat!:` or
/// `feat(scope)!:`).
const BREAKING_MARKER: &str = "!:";
/// Body-line prefix that introduces a breaking-change annotation.
const BREAKING_CHANGE_PREFIX: &str = "BREAKING CHANGE:";

/// Partition relevant commits (oldest→newest) into fixes, features and
/// breaking changes.
///
/// A commit whose message starts with the literal `feat` is a feature,
/// everything else a fix; the selector has already narrowed the input to
/// `feat`/`feat!`/`fix` commits, so no stricter boundary check is applied
/// here. Breaking-change extraction runs independently for every feature
/// commit: a `!:` marker appends the commit itself, and each body line
/// starting with `BREAKING CHANGE:` appends a clone carrying that line as
/// its message. Both can fire for the same commit, the `!:` entry first.
pub fn classify(commits: Vec<Commit>) -> Changes {
    let mut changes = Changes::default();

    for commit in commits {
        if commit.message.starts_with("feat") {
            if commit.message.contains(BREAKING_MARKER) {
                changes.breaking_changes.push(commit.clone());
            }
            for line in commit.body.lines() {
                if line.starts_with(BREAKING_CHANGE_PREFIX) {
                    changes.breaking_changes.push(commit.with_message(line));
                }
            }
            changes.features.push(commit);
        } else {
            changes.fixes.push(commit);
        }
    }

    changes
}
