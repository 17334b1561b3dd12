use crate::domain::Commit;

/// Classified changes for one release, each bucket ordered oldest→newest.
///
/// A commit may appear in `features` and contribute one or more synthesized
/// entries to `breaking_changes`; it is never in both `fixes` and `features`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changes {
    pub fixes: Vec<Commit>,
    pub features: Vec<Commit>,
    pub breaking_changes: Vec<Commit>,
}

impl Changes {
    /// True when no qualifying change was found in any bucket.
    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty() && self.features.is_empty() && self.breaking_changes.is_empty()
    }
}
