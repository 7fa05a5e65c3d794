// src/app.rs
use std::process::ExitCode;

use anyhow::{Context, Result};
use classify_lines_domain::config::RunConfig;
use classify_lines_infra::{FsLineSource, FsOutputStore};
use classify_lines_usecase::ClassifyFiles;

use crate::presentation;

/// Classify every input, write the category files and print the report.
///
/// Per-file problems and per-category write failures are printed to stderr
/// and do not stop the run. A failed category write makes the run exit with
/// status 1 after the report.
///
/// # Errors
///
/// Returns `Err` when the worker pool cannot start or the output directory
/// cannot be created.
pub fn run(config: &RunConfig) -> Result<ExitCode> {
    let source = FsLineSource::new();
    let store = FsOutputStore::new();
    let usecase = ClassifyFiles::new(&source, &store);

    let classification = usecase.classify(config).context("failed to classify input files")?;
    for issue in &classification.issues {
        eprintln!("[warn] {issue}");
    }

    let report = usecase
        .publish(config, &classification.totals)
        .with_context(|| format!("failed to prepare output directory '{}'", config.output_dir.display()))?;
    for failure in report.failures() {
        eprintln!("[error] {failure}");
    }

    presentation::print_report(&classification.totals, config.report_mode);

    Ok(if report.has_failures() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
