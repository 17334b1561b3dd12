use regex::Regex;

use crate::config::{
    RenderOptions, DEFAULT_BREAKING_CHANGE_HEADING, DEFAULT_FEAT_HEADING, DEFAULT_FIX_HEADING,
};
use crate::domain::{Changes, Commit};
use crate::error::{ChangelogError, Result};

/// Render the markdown changelog body for a set of classified changes.
///
/// Sections appear in fixed order (Features, Bug Fixes, Breaking Changes),
/// each only when its bucket is non-empty, with one blank line before the
/// heading and one before the first entry. Optional prefix/suffix markdown
/// blocks surround the sections. The assembled text is trimmed as a whole;
/// with nothing to render the result is the empty string.
///
/// An entry whose message matches neither conventional-commit pattern aborts
/// the whole render with [ChangelogError::UnparseableCommit].
pub fn render(changes: &Changes, options: &RenderOptions) -> Result<String> {
    let formatter = EntryFormatter::new(options)?;
    let mut lines: Vec<String> = Vec::new();

    if let Some(prefix) = &options.prefix {
        lines.push(prefix.trim().to_string());
    }

    push_section(
        &mut lines,
        options
            .feat_heading
            .as_deref()
            .unwrap_or(DEFAULT_FEAT_HEADING),
        &changes.features,
        &formatter,
    )?;
    push_section(
        &mut lines,
        options
            .fix_heading
            .as_deref()
            .unwrap_or(DEFAULT_FIX_HEADING),
        &changes.fixes,
        &formatter,
    )?;
    push_section(
        &mut lines,
        options
            .breaking_change_heading
            .as_deref()
            .unwrap_or(DEFAULT_BREAKING_CHANGE_HEADING),
        &changes.breaking_changes,
        &formatter,
    )?;

    if let Some(suffix) = &options.suffix {
        lines.push(suffix.trim().to_string());
    }

    Ok(lines.join("\n").trim().to_string())
}

fn push_section(
    lines: &mut Vec<String>,
    heading: &str,
    commits: &[Commit],
    formatter: &EntryFormatter<'_>,
) -> Result<()> {
    if commits.is_empty() {
        return Ok(());
    }

    lines.push(String::new());
    lines.push(format!("### {}", heading));
    lines.push(String::new());
    for commit in commits {
        lines.push(formatter.format(commit)?);
    }
    Ok(())
}

/// Turns one commit into one changelog line.
struct EntryFormatter<'a> {
    scoped: Regex,
    unscoped: Regex,
    template: Option<&'a str>,
}

impl<'a> EntryFormatter<'a> {
    fn new(options: &'a RenderOptions) -> Result<Self> {
        // Fallback patterns for conventional-commit subjects: with and
        // without a parenthesized scope.
        let scoped = Regex::new(r".*\((.*?)\):\s*(.*)")
            .map_err(|e| ChangelogError::config(format!("invalid entry pattern: {}", e)))?;
        let unscoped = Regex::new(r".*?:\s*(.*)")
            .map_err(|e| ChangelogError::config(format!("invalid entry pattern: {}", e)))?;

        Ok(EntryFormatter {
            scoped,
            unscoped,
            template: options.change_template.as_deref(),
        })
    }

    fn format(&self, commit: &Commit) -> Result<String> {
        let (scope, message): (Option<&str>, &str) =
            if let Some(caps) = self.scoped.captures(&commit.message) {
                let scope = caps.get(1).map(|m| m.as_str());
                let message = caps.get(2).map(|m| m.as_str()).unwrap_or("").trim();
                (scope, message)
            } else if let Some(caps) = self.unscoped.captures(&commit.message) {
                let message = caps.get(1).map(|m| m.as_str()).unwrap_or("").trim();
                (None, message)
            } else {
                return Err(ChangelogError::UnparseableCommit(commit.message.clone()));
            };

        match self.template {
            Some(template) => Ok(template
                .replace("{scope}", scope.unwrap_or(""))
                .replace("{message}", message)
                .replace("{hash}", &commit.hash)),
            None => Ok(match scope {
                Some(scope) => format!("- **{}:** {} ({})", scope, message, commit.hash),
                None => format!("- {} ({})", message, commit.hash),
            }),
        }
    }
}
