use std::fmt;

use crate::domain::Changes;
use crate::error::{ChangelogError, Result};

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted-decimal version string (e.g. "1.2.3").
    ///
    /// The input is expected to already have its tag prefix stripped. Exactly
    /// three dot-separated integers are required; anything else is a fatal
    /// version-parse error.
    pub fn parse(version: &str) -> Result<Self> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 {
            return Err(ChangelogError::version(format!(
                "invalid version format: '{}' - expected X.Y.Z",
                version
            )));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| ChangelogError::version(format!("invalid major version: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| ChangelogError::version(format!("invalid minor version: {}", parts[1])))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| ChangelogError::version(format!("invalid patch version: {}", parts[2])))?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Compute the next version from the previous one and the classified changes.
///
/// With no previous version this is the first release and the result is
/// `1.0.0` regardless of the change contents. Otherwise exactly one rule
/// applies, highest precedence first: breaking changes bump the major
/// version, features the minor, fixes the patch, and an empty change set
/// leaves the version untouched.
pub fn next_version(prev: Option<&Version>, changes: &Changes) -> Version {
    let Some(prev) = prev else {
        tracing::debug!("no previous version, using 1.0.0");
        return Version::new(1, 0, 0);
    };

    if !changes.breaking_changes.is_empty() {
        Version::new(prev.major + 1, 0, 0)
    } else if !changes.features.is_empty() {
        Version::new(prev.major, prev.minor + 1, 0)
    } else if !changes.fixes.is_empty() {
        Version::new(prev.major, prev.minor, prev.patch + 1)
    } else {
        *prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Commit;

    fn commit(message: &str) -> Commit {
        Commit {
            hash: "abcd".to_string(),
            message: message.to_string(),
            body: String::new(),
            author: "Random User".to_string(),
            date: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_first_release_ignores_changes() {
        let mut changes = Changes::default();
        changes.breaking_changes.push(commit("feat!: redesign"));
        changes.features.push(commit("feat: something"));
        assert_eq!(next_version(None, &changes), Version::new(1, 0, 0));

        assert_eq!(
            next_version(None, &Changes::default()),
            Version::new(1, 0, 0)
        );
    }

    #[test]
    fn test_breaking_change_bumps_major() {
        let mut changes = Changes::default();
        changes.breaking_changes.push(commit("feat!: redesign"));
        changes.features.push(commit("feat: a"));
        changes.fixes.push(commit("fix: b"));

        for (prev, expected) in [
            (Version::new(1, 0, 0), Version::new(2, 0, 0)),
            (Version::new(2, 1, 0), Version::new(3, 0, 0)),
            (Version::new(3, 2, 1), Version::new(4, 0, 0)),
        ] {
            assert_eq!(next_version(Some(&prev), &changes), expected);
        }
    }

    #[test]
    fn test_feature_bumps_minor() {
        let mut changes = Changes::default();
        changes.features.push(commit("feat: a"));
        changes.fixes.push(commit("fix: b"));

        for (prev, expected) in [
            (Version::new(0, 0, 0), Version::new(0, 1, 0)),
            (Version::new(1, 0, 0), Version::new(1, 1, 0)),
            (Version::new(3, 2, 1), Version::new(3, 3, 0)),
        ] {
            assert_eq!(next_version(Some(&prev), &changes), expected);
        }
    }

    #[test]
    fn test_fix_bumps_patch() {
        let mut changes = Changes::default();
        changes.fixes.push(commit("fix: b"));

        for (prev, expected) in [
            (Version::new(0, 0, 0), Version::new(0, 0, 1)),
            (Version::new(2, 1, 0), Version::new(2, 1, 1)),
            (Version::new(3, 2, 1), Version::new(3, 2, 2)),
        ] {
            assert_eq!(next_version(Some(&prev), &changes), expected);
        }
    }

    #[test]
    fn test_no_changes_keeps_version() {
        for prev in [
            Version::new(0, 0, 0),
            Version::new(1, 0, 0),
            Version::new(3, 2, 1),
        ] {
            assert_eq!(next_version(Some(&prev), &Changes::default()), prev);
        }
    }
}
