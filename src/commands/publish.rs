//! Publish command - file every smell report as issues

use anyhow::{Context, bail};
use log::info;

use smellpost::adapters::{CsvDirectory, DryRunTracker, GitHubTracker};
use smellpost::config::{FileConfig, TrackerSettings};
use smellpost::core::ports::IssueTracker;
use smellpost::core::services::{FailurePolicy, PublishOptions, Publisher, RunSummary};
use smellpost::output::{DryRunPreview, OutputMode};

use crate::cli::Cli;

/// Publish all reports for `cli.commit`
pub fn publish(cli: &Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut file_config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            FileConfig::load(path)?
        },
        None => FileConfig::load_default()?,
    };
    if let Some(dir) = &cli.dir {
        file_config.reports.dir.clone_from(dir);
    }
    if let Some(chunk_size) = cli.chunk_size {
        file_config.reports.chunk_size = chunk_size;
    }
    file_config.validate()?;

    let source = CsvDirectory::new(&file_config.reports.dir);
    let options = PublishOptions {
        commit: cli.commit.clone(),
        chunk_size: file_config.reports.chunk_size,
        policy: if cli.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        },
    };

    if cli.dry_run {
        let mut tracker = DryRunTracker::new();
        let summary = run_publisher(&source, &mut tracker, options)?;
        DryRunPreview {
            issues: tracker.requests(),
            failed: summary.failed(),
        }
        .render(output_mode);
        return check_failures(&summary);
    }

    let mut settings = TrackerSettings::from_env(file_config.tracker.api_url.as_deref())?;
    if let Some(api_url) = &cli.api_url {
        settings.api_url.clone_from(api_url);
    }
    let mut tracker = GitHubTracker::new(&settings)?;
    info!(
        "Publishing reports from {} to {}",
        source.dir().display(),
        tracker.endpoint()
    );

    let summary = run_publisher(&source, &mut tracker, options)?;
    summary.render(output_mode);
    check_failures(&summary)
}

fn check_failures(summary: &RunSummary) -> anyhow::Result<()> {
    let failed = summary.failed().len();
    if failed > 0 {
        bail!("{failed} report(s) failed to publish");
    }
    Ok(())
}

fn run_publisher<T: IssueTracker>(
    source: &CsvDirectory,
    tracker: &mut T,
    options: PublishOptions,
) -> anyhow::Result<RunSummary> {
    Publisher::new(source, tracker, options)
        .run()
        .with_context(|| format!("failed to publish reports from {}", source.dir().display()))
}
