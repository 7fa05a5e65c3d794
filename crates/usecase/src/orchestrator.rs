use classify_lines_domain::{StatisticsSet, analytics::Aggregator, config::RunConfig};
use classify_lines_ports::{source::LineSource, store::OutputStore};
use classify_lines_shared_kernel::{ApplicationError, ClassifyLinesError, ErrorContext, InfrastructureError, Result};
use rayon::prelude::*;

use crate::{
    dto::{Classification, FileOutcome, PublishReport},
    publish, worker,
};

/// Runs one classification pass: a worker per input file on a bounded pool,
/// then a single-threaded merge once every worker has finished.
pub struct ClassifyFiles<'a> {
    source: &'a dyn LineSource,
    store: &'a dyn OutputStore,
}

impl<'a> ClassifyFiles<'a> {
    pub fn new(source: &'a dyn LineSource, store: &'a dyn OutputStore) -> Self {
        Self { source, store }
    }

    pub fn classify(&self, config: &RunConfig) -> Result<Classification> {
        let outcomes = self.run_workers(config)?;
        let files = outcomes.len();

        let mut issues = Vec::new();
        let mut per_file = Vec::with_capacity(files);
        for FileOutcome { stats, issue } in outcomes {
            issues.extend(issue);
            per_file.push(stats);
        }

        // collect() above is the barrier: nothing is merged before all workers return
        let totals = Aggregator::fold(per_file).context("merging per-file statistics")?;

        log::info!(
            "classified {} lines from {files} files ({} with issues)",
            totals.total(),
            issues.len()
        );
        Ok(Classification { totals, issues, files })
    }

    /// Create the output directory, then write or remove each category file.
    ///
    /// Only a directory failure is fatal. Per-category failures are reported
    /// in the returned [`PublishReport`].
    pub fn publish(&self, config: &RunConfig, totals: &StatisticsSet) -> Result<PublishReport> {
        self.store.ensure_dir(&config.output_dir).map_err(|e| ApplicationError::PublishFailed {
            reason: format!("cannot prepare '{}'", config.output_dir.display()),
            source: Some(Box::new(e.into())),
        })?;

        let report = publish::publish(self.store, config, totals);
        log::info!("published {} category files", report.categories.len());
        Ok(report)
    }

    fn run_workers(&self, config: &RunConfig) -> Result<Vec<FileOutcome>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()
            .map_err(|e| ApplicationError::ClassificationFailed {
                reason: format!("cannot start {} workers", config.jobs),
                source: Some(Box::new(ClassifyLinesError::from(InfrastructureError::ThreadPoolCreation {
                    details: e.to_string(),
                }))),
            })?;

        log::debug!("classifying {} files on {} threads", config.inputs.len(), config.jobs);

        let source = self.source;
        Ok(pool.install(|| config.inputs.par_iter().map(|path| worker::process_file(source, path)).collect()))
    }
}
