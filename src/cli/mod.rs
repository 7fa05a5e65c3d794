mod args;
mod parsers;

pub use args::Args;
use classify_lines_domain::{
    config::RunConfig,
    options::{EmptyOutputPolicy, ReportMode, WriteMode},
};
use classify_lines_shared_kernel::{PresentationError, PresentationResult};

const MAX_JOBS: usize = 512;

fn validate_jobs(flag: &str, jobs: Option<usize>) -> PresentationResult<()> {
    match jobs {
        Some(j) if j == 0 || j > MAX_JOBS => Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: j.to_string(),
            reason: format!("must be between 1 and {MAX_JOBS}"),
        }),
        _ => Ok(()),
    }
}

fn report_mode(args: &Args) -> ReportMode {
    if args.full { ReportMode::Full } else { ReportMode::Short }
}

fn write_mode(args: &Args) -> WriteMode {
    if args.append { WriteMode::Append } else { WriteMode::Truncate }
}

fn empty_output(args: &Args) -> EmptyOutputPolicy {
    if args.keep_existing { EmptyOutputPolicy::Keep } else { EmptyOutputPolicy::Delete }
}

/// Convert parsed CLI arguments into a [`RunConfig`].
///
/// # Errors
///
/// Returns `Err` when `--jobs` is outside `1..=512` or when the builder
/// rejects the resulting configuration.
pub fn build_config(args: &Args) -> PresentationResult<RunConfig> {
    validate_jobs("--jobs", args.jobs)?;

    let jobs = args.jobs.unwrap_or_else(|| num_cpus::get().clamp(1, MAX_JOBS));
    RunConfig::builder()
        .inputs(args.files.clone())
        .output_dir(args.output_dir.clone())
        .prefix(args.prefix.clone())
        .write_mode(write_mode(args))
        .report_mode(report_mode(args))
        .empty_output(empty_output(args))
        .jobs(jobs)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
}

impl TryFrom<&Args> for RunConfig {
    type Error = PresentationError;

    fn try_from(args: &Args) -> PresentationResult<Self> {
        build_config(args)
    }
}
