use std::path::PathBuf;

use derive_builder::Builder;

use crate::{
    category::Category,
    options::{EmptyOutputPolicy, ReportMode, WriteMode},
};

/// Resolved settings for one classification run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RunConfig {
    /// Input files, in the order given on the command line.
    pub inputs: Vec<PathBuf>,
    #[builder(default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,
    #[builder(default)]
    pub prefix: String,
    #[builder(default)]
    pub write_mode: WriteMode,
    #[builder(default)]
    pub report_mode: ReportMode,
    #[builder(default)]
    pub empty_output: EmptyOutputPolicy,
    /// Worker threads used for per-file classification.
    #[builder(default = "1")]
    pub jobs: usize,
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// `<output_dir>/<prefix><category>.txt`
    pub fn output_path(&self, category: Category) -> PathBuf {
        self.output_dir.join(category.file_name(&self.prefix))
    }
}

impl RunConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(inputs) = &self.inputs
            && inputs.is_empty()
        {
            return Err("at least one input file is required".to_string());
        }
        if self.jobs == Some(0) {
            return Err("jobs must be at least 1".to_string());
        }
        Ok(())
    }
}
