//! Detection method identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OutlierError;

/// Outlier detection method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    ZScore,
    Iqr,
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionMethod::ZScore => write!(f, "Z-Score"),
            DetectionMethod::Iqr => write!(f, "IQR"),
        }
    }
}

impl FromStr for DetectionMethod {
    type Err = OutlierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zscore" | "z-score" => Ok(DetectionMethod::ZScore),
            "iqr" => Ok(DetectionMethod::Iqr),
            _ => Err(OutlierError::InvalidParameter {
                name: "method".to_string(),
                reason: format!("unknown method '{}', use 'zscore' or 'iqr'", s),
            }),
        }
    }
}
