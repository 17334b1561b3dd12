pub mod changes;
pub mod commit;
pub mod version;

pub use changes::Changes;
pub use commit::Commit;
pub use version::Version;
