//! Dataset feature preparation.

use std::fmt;
use std::str::FromStr;

use dataset_spi::{ColumnData, Dataset};
use pipeline_core::OneHotEncoder;
use pipeline_spi::{FeatureFrame, PipelineError, PipelineStep, Result};
use serde::{Deserialize, Serialize};

use crate::{NormalizeStep, StandardizeStep};

/// Scaling applied to numeric columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalerKind {
    /// Zero mean, unit variance.
    #[default]
    Standard,
    /// Min-max to [0, 1].
    MinMax,
}

impl ScalerKind {
    /// Fresh, unfitted step for this scaler.
    pub fn step(&self) -> Box<dyn PipelineStep> {
        match self {
            ScalerKind::Standard => Box::new(StandardizeStep::new()),
            ScalerKind::MinMax => Box::new(NormalizeStep::new()),
        }
    }
}

impl fmt::Display for ScalerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalerKind::Standard => write!(f, "standard"),
            ScalerKind::MinMax => write!(f, "minmax"),
        }
    }
}

impl FromStr for ScalerKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "zscore" => Ok(ScalerKind::Standard),
            "minmax" | "min-max" => Ok(ScalerKind::MinMax),
            _ => Err(PipelineError::InvalidParameter {
                name: "scaler".to_string(),
                reason: format!("unknown scaler '{}', use 'standard' or 'minmax'", s),
            }),
        }
    }
}

/// Turns a dataset into a model-ready feature frame.
///
/// Numeric columns are scaled in place with a step fitted on that column;
/// categorical columns are replaced by their one-hot indicator columns.
/// Columns keep the dataset's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturePreparer {
    pub scaler: ScalerKind,
}

impl FeaturePreparer {
    pub fn new(scaler: ScalerKind) -> Self {
        Self { scaler }
    }

    pub fn prepare(&self, dataset: &Dataset) -> Result<FeatureFrame> {
        let mut frame = FeatureFrame::new();
        for column in dataset.columns() {
            match column.data() {
                ColumnData::Numeric(values) => {
                    let mut step = self.scaler.step();
                    step.fit(values)?;
                    frame.push(column.name(), step.transform(values)?);
                }
                ColumnData::Categorical(values) => {
                    let mut encoder = OneHotEncoder::new(column.name());
                    let encoded = encoder.fit_transform(values)?;
                    for (name, indicator) in encoder.feature_names().into_iter().zip(encoded) {
                        frame.push(name, indicator);
                    }
                }
            }
        }
        tracing::info!(
            scaler = %self.scaler,
            rows = dataset.n_rows(),
            features = frame.n_features(),
            "prepared features"
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_spi::Column;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Column::numeric("GPA", vec![2.0, 3.0, 4.0, 3.0]),
            Column::categorical(
                "Year_Of_Study",
                ["Junior", "Freshman", "Junior", "Senior"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            Column::numeric("Sleep_Hours_Daily", vec![7.0; 4]),
        ])
        .unwrap()
    }

    #[test]
    fn test_feature_names_in_dataset_order() {
        let frame = FeaturePreparer::default().prepare(&dataset()).unwrap();
        assert_eq!(
            frame.names,
            vec![
                "GPA",
                "Year_Of_Study_Freshman",
                "Year_Of_Study_Junior",
                "Year_Of_Study_Senior",
                "Sleep_Hours_Daily",
            ]
        );
        assert_eq!(frame.n_rows(), 4);
    }

    #[test]
    fn test_standard_scaler() {
        let frame = FeaturePreparer::new(ScalerKind::Standard)
            .prepare(&dataset())
            .unwrap();
        let gpa = frame.column("GPA").unwrap();
        let mean = gpa.iter().sum::<f64>() / gpa.len() as f64;
        assert!(mean.abs() < 1e-12);
        assert_eq!(frame.column("Sleep_Hours_Daily").unwrap(), &[0.0; 4][..]);
        assert_eq!(frame.column("Year_Of_Study_Junior").unwrap(), &[1.0, 0.0, 1.0, 0.0][..]);
    }

    #[test]
    fn test_minmax_scaler() {
        let frame = FeaturePreparer::new(ScalerKind::MinMax)
            .prepare(&dataset())
            .unwrap();
        assert_eq!(frame.column("GPA").unwrap(), &[0.0, 0.5, 1.0, 0.5][..]);
        assert_eq!(frame.column("Sleep_Hours_Daily").unwrap(), &[0.5; 4][..]);
    }

    #[test]
    fn test_empty_dataset_is_insufficient_data() {
        let empty = Dataset::new(vec![Column::numeric("GPA", vec![])]).unwrap();
        assert!(matches!(
            FeaturePreparer::default().prepare(&empty),
            Err(PipelineError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_scaler_kind_parsing_and_serde() {
        assert_eq!("minmax".parse::<ScalerKind>().unwrap(), ScalerKind::MinMax);
        assert_eq!("Standard".parse::<ScalerKind>().unwrap(), ScalerKind::Standard);
        assert!("robust".parse::<ScalerKind>().is_err());
        assert_eq!(serde_json::to_string(&ScalerKind::MinMax).unwrap(), "\"minmax\"");
        assert_eq!(ScalerKind::default().to_string(), "standard");
    }
}
