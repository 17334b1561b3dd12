//! GitHub Action binding.
//!
//! Reads the Action's `INPUT_*` environment variables, runs the release
//! computation against the workspace repository, and appends every result
//! field to the `GITHUB_OUTPUT` file.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use git_changelog::config::{ReleaseConfig, ReleaseMode, RenderOptions};
use git_changelog::git::Git2Repository;
use git_changelog::release::{generate_changelog, ReleaseOutcome};

/// Read one Action input. The runner passes unset inputs as empty strings;
/// those are treated as absent.
fn input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.to_uppercase());
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Read a comma-separated Action input as a list.
fn list_input(name: &str) -> Option<Vec<String>> {
    input(name).map(|value| {
        value
            .split(',')
            .map(|item| item.trim().to_string())
            .collect()
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mode = ReleaseMode::from_options(input("module"), list_input("scopes"))?;
    let render = RenderOptions {
        fix_heading: input("fixHeading"),
        feat_heading: input("featHeading"),
        breaking_change_heading: input("breakingChangeHeading"),
        prefix: input("prefix"),
        suffix: input("suffix"),
        change_template: input("changeTemplate"),
    };

    let repo = Git2Repository::open(".")?;
    let outcome = generate_changelog(&repo, &ReleaseConfig { mode, render })?;

    let output_path = env::var("GITHUB_OUTPUT").context("GITHUB_OUTPUT is not set")?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&output_path)
        .with_context(|| format!("cannot open {}", output_path))?;
    write_outputs(&mut file, &outcome)?;

    Ok(())
}

fn write_outputs(out: &mut impl Write, outcome: &ReleaseOutcome) -> std::io::Result<()> {
    write_output(out, "skipped", &outcome.skipped.to_string())?;
    write_output(out, "changelog", &outcome.changelog)?;
    write_output(out, "prevTag", outcome.prev_tag.as_deref().unwrap_or(""))?;
    write_output(
        out,
        "prevVersion",
        outcome.prev_version.as_deref().unwrap_or(""),
    )?;
    write_output(out, "nextTag", &outcome.next_tag)?;
    write_output(out, "nextVersion", &outcome.next_version)
}

/// Append one `GITHUB_OUTPUT` entry, using heredoc syntax for multiline
/// values such as the changelog body.
fn write_output(out: &mut impl Write, key: &str, value: &str) -> std::io::Result<()> {
    if value.contains('\n') {
        writeln!(out, "{}<<GIT_CHANGELOG_EOF", key)?;
        writeln!(out, "{}", value)?;
        writeln!(out, "GIT_CHANGELOG_EOF")
    } else {
        writeln!(out, "{}={}", key, value)
    }
}
