pub mod classify;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod release;
pub mod render;
pub mod select;
pub mod tags;

pub use config::{ReleaseConfig, ReleaseMode, RenderOptions};
pub use error::{ChangelogError, Result};
pub use release::{generate_changelog, ReleaseOutcome};
