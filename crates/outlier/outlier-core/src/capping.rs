//! Outlier treatment by capping (winsorizing at the IQR fences).

use dataset_spi::Dataset;
use outlier_api::IqrConfig;
use outlier_spi::{Bounds, OutlierTreatment, Result};
use serde::{Deserialize, Serialize};

use crate::iqr::iqr_bounds;

/// Clamp every value into `bounds`. Values already inside are unchanged.
pub fn cap_values(values: &[f64], bounds: &Bounds) -> Vec<f64> {
    values.iter().map(|&x| bounds.clamp(x)).collect()
}

/// Caps values above `Q3 + k * IQR` to that fence and values below
/// `Q1 - k * IQR` to the lower fence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IqrCapper {
    multiplier: f64,
}

impl IqrCapper {
    pub fn new(multiplier: f64) -> Result<Self> {
        Self::from_config(IqrConfig::new(multiplier))
    }

    pub fn from_config(config: IqrConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            multiplier: config.multiplier,
        })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for IqrCapper {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

impl OutlierTreatment for IqrCapper {
    fn bounds(&self, column: &str, values: &[f64]) -> Result<Bounds> {
        iqr_bounds(column, values, self.multiplier)
    }

    fn treat(&self, column: &str, values: &[f64]) -> Result<Vec<f64>> {
        let bounds = self.bounds(column, values)?;
        Ok(cap_values(values, &bounds))
    }
}

/// Treat the named numeric columns and return the treated copy.
///
/// Columns not named, categorical ones included, are copied unchanged.
/// The input dataset is never modified.
pub fn treat_dataset<T, S>(dataset: &Dataset, columns: &[S], treatment: &T) -> Result<Dataset>
where
    T: OutlierTreatment + ?Sized,
    S: AsRef<str>,
{
    let mut treated = dataset.clone();
    for column in columns {
        let name = column.as_ref();
        let values = dataset.numeric(name)?;
        let capped = treatment.treat(name, values)?;
        let changed = values
            .iter()
            .zip(&capped)
            .filter(|(before, after)| before != after)
            .count();
        tracing::debug!(column = name, changed, "capped column");
        treated = treated.with_numeric(name, capped)?;
    }
    tracing::info!(
        columns = columns.len(),
        rows = treated.n_rows(),
        "treated dataset"
    );
    Ok(treated)
}
