use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};

/// Default heading for the features section of the changelog.
pub const DEFAULT_FEAT_HEADING: &str = "Features";
/// Default heading for the fixes section of the changelog.
pub const DEFAULT_FIX_HEADING: &str = "Bug Fixes";
/// Default heading for the breaking changes section of the changelog.
pub const DEFAULT_BREAKING_CHANGE_HEADING: &str = "BREAKING CHANGES";

/// Whether the release covers the whole repository or a single module of a
/// monorepo.
///
/// Modelled as a sum type so that scopes cannot exist without a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Single-module repository, released under the `v` tag prefix.
    Single,
    /// One module of a monorepo, released under the `<module-slug>-v` prefix.
    Module {
        name: String,
        /// Commit scopes considered for this release. When unset, only the
        /// slugged module name counts.
        scopes: Option<Vec<String>>,
    },
}

impl ReleaseMode {
    /// Build a release mode from the optional `module`/`scopes` pair exposed
    /// by the CLI and Action surfaces.
    ///
    /// # Returns
    /// * `Err` - If scopes are given without a module
    pub fn from_options(module: Option<String>, scopes: Option<Vec<String>>) -> Result<Self> {
        match (module, scopes) {
            (Some(name), scopes) => Ok(ReleaseMode::Module { name, scopes }),
            (None, None) => Ok(ReleaseMode::Single),
            (None, Some(_)) => Err(ChangelogError::config(
                "scopes can only be set when a module is specified",
            )),
        }
    }

    /// The constant string preceding the version number in release tags.
    pub fn tag_prefix(&self) -> String {
        match self {
            ReleaseMode::Single => "v".to_string(),
            ReleaseMode::Module { name, .. } => format!("{}-v", slug(name)),
        }
    }

    /// Resolved commit scopes for this release.
    ///
    /// `None` in single-module mode, where every `fix`/`feat` commit counts
    /// regardless of scope. For a module without explicit scopes, defaults to
    /// the slugged module name.
    pub fn scopes(&self) -> Option<Vec<String>> {
        match self {
            ReleaseMode::Single => None,
            ReleaseMode::Module {
                scopes: Some(scopes),
                ..
            } => Some(scopes.clone()),
            ReleaseMode::Module { name, scopes: None } => Some(vec![slug(name)]),
        }
    }
}

/// Slug form of a module name: lowercased, with every run of whitespace
/// replaced by a single hyphen. Idempotent.
///
/// # Example
/// ```
/// use git_changelog::config::slug;
/// assert_eq!(slug("Some Module"), "some-module");
/// assert_eq!(slug("SOME_MODULE"), "some_module");
/// ```
pub fn slug(module: &str) -> String {
    let mut out = String::with_capacity(module.len());
    let mut pending_hyphen = false;
    for ch in module.chars() {
        if ch.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen {
            out.push('-');
            pending_hyphen = false;
        }
        out.extend(ch.to_lowercase());
    }
    if pending_hyphen {
        out.push('-');
    }
    out
}

/// Formatting options consumed by the changelog renderer.
///
/// `None` fields fall back to the named defaults above.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub fix_heading: Option<String>,
    pub feat_heading: Option<String>,
    pub breaking_change_heading: Option<String>,
    /// Markdown block rendered above the change sections.
    pub prefix: Option<String>,
    /// Markdown block rendered below the change sections.
    pub suffix: Option<String>,
    /// Entry-line template with `{scope}`, `{message}` and `{hash}`
    /// placeholders. When unset, a built-in format is used.
    pub change_template: Option<String>,
}

/// Resolved per-invocation configuration for a release computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseConfig {
    pub mode: ReleaseMode,
    pub render: RenderOptions,
}

impl Default for ReleaseMode {
    fn default() -> Self {
        ReleaseMode::Single
    }
}

/// Configuration file contents (`changelog.toml`).
///
/// Every field is optional; CLI flags and Action inputs override file values.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FileConfig {
    pub module: Option<String>,
    pub scopes: Option<Vec<String>>,
    pub fix_heading: Option<String>,
    pub feat_heading: Option<String>,
    pub breaking_change_heading: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub change_template: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `.changelog.toml` in the user config directory
/// 4. Default (empty) configuration if no file found
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./changelog.toml").exists() {
        fs::read_to_string("./changelog.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".changelog.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| ChangelogError::config(format!("invalid config file: {}", e)))
}
