use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use git_changelog::config::{self, ReleaseConfig, ReleaseMode, RenderOptions};
use git_changelog::git::Git2Repository;
use git_changelog::release::generate_changelog;

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Derive the next semantic version and a markdown changelog from conventional commits"
)]
struct Args {
    #[arg(help = "Path to the git repository. Defaults to the current working directory")]
    dir: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Module to release. Only use for repos hosting multiple modules"
    )]
    module: Option<String>,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Comma separated list of commit scopes considered for this release"
    )]
    scopes: Option<Vec<String>>,

    #[arg(long, help = "Markdown block included before the changes")]
    prefix: Option<String>,

    #[arg(long, help = "Markdown block included after the changes")]
    suffix: Option<String>,

    #[arg(long, help = "Custom heading for fixes")]
    fix_heading: Option<String>,

    #[arg(long, help = "Custom heading for features")]
    feat_heading: Option<String>,

    #[arg(long, help = "Custom heading for breaking changes")]
    breaking_change_heading: Option<String>,

    #[arg(
        long,
        help = "Template for change lines, with {message}, {scope} and {hash} placeholders"
    )]
    change_template: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // CLI flags win over config-file values.
    let file = config::load_config(args.config.as_deref())?;
    let mode = ReleaseMode::from_options(args.module.or(file.module), args.scopes.or(file.scopes))?;
    let render = RenderOptions {
        fix_heading: args.fix_heading.or(file.fix_heading),
        feat_heading: args.feat_heading.or(file.feat_heading),
        breaking_change_heading: args
            .breaking_change_heading
            .or(file.breaking_change_heading),
        prefix: args.prefix.or(file.prefix),
        suffix: args.suffix.or(file.suffix),
        change_template: args.change_template.or(file.change_template),
    };
    let config = ReleaseConfig { mode, render };

    let repo = Git2Repository::open(args.dir.as_deref().unwrap_or("."))?;
    let outcome = generate_changelog(&repo, &config)?;

    if outcome.skipped {
        eprintln!(
            "{} no qualifying changes since {}",
            style("→").yellow(),
            outcome.prev_tag.as_deref().unwrap_or("the first commit")
        );
    } else {
        eprintln!(
            "{} next release: {}",
            style("✓").green(),
            style(&outcome.next_tag).bold()
        );
    }

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
