//! Git access abstraction layer
//!
//! The core only needs two read operations from version control: listing
//! tags and listing commits, optionally bounded by a previous release tag.
//! The [Repository] trait captures that contract so the release computation
//! can run against a real repository ([repository::Git2Repository]) or a
//! fixture ([mock::MockRepository]) in tests.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Commit;
use crate::error::Result;

/// Read-only view of a repository's release history.
///
/// Implementations map their underlying errors (like `git2::Error`) into
/// [crate::error::ChangelogError]; the core propagates them unchanged and
/// performs no retries.
pub trait Repository {
    /// All tag names, oldest→newest as stored by the repository.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commit history, newest→oldest.
    ///
    /// With `since_tag` set, only commits strictly after that tag up through
    /// HEAD are returned; otherwise the full history.
    fn list_commits(&self, since_tag: Option<&str>) -> Result<Vec<Commit>>;
}
