//! Configuration for the `run` command.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use dataset_facade::SyntheticConfig;
use outlier_facade::OutlierConfig;
use pipeline_facade::ScalerKind;
use serde::{Deserialize, Serialize};

use crate::CliResult;

/// Settings for the full generate, detect, treat, prepare flow.
///
/// Every section is optional in the JSON file and falls back to its
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// CSV file to clean. Without one the synthetic dataset is generated.
    pub input: Option<PathBuf>,
    pub synthetic: SyntheticConfig,
    pub outlier: OutlierConfig,
    pub scaler: ScalerKind,
    /// Width of the text box plots.
    pub plot_width: Option<usize>,
}

impl RunConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CliResult<()> {
        self.synthetic.validate().map_err(|e| e.to_string())?;
        self.outlier.validate().map_err(|e| e.to_string())?;
        Ok(())
    }
}
