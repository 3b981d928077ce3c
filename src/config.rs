use std::path::{Path, PathBuf};

pub const DISTRICTS_FILE: &str = "districts.json";
pub const ALERTS_FILE: &str = "alerts.json";
pub const SCORES_FILE: &str = "scores.json";

/// Where a run reads its inputs and writes its outputs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Optional flat CSV export of the scores.
    pub csv_path: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            csv_path: None,
        }
    }

    pub fn with_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn districts_input(&self) -> PathBuf {
        self.input_dir.join(DISTRICTS_FILE)
    }

    pub fn alerts_input(&self) -> PathBuf {
        self.input_dir.join(ALERTS_FILE)
    }

    pub fn scores_output(&self) -> PathBuf {
        self.output_dir.join(SCORES_FILE)
    }

    pub fn alerts_output(&self) -> PathBuf {
        self.output_dir.join(ALERTS_FILE)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
