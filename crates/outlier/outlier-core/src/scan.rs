//! Column scans over a dataset.

use dataset_spi::Dataset;
use outlier_spi::{OutlierDetector, OutlierReport, OutlierResult, Result};
use rayon::prelude::*;

/// Resolve the columns to scan.
///
/// `None` selects every numeric column in dataset order. Explicit names are
/// checked to exist and be numeric before anything is computed.
pub fn resolve_columns(dataset: &Dataset, columns: Option<&[String]>) -> Result<Vec<String>> {
    match columns {
        None => Ok(dataset
            .numeric_column_names()
            .into_iter()
            .map(str::to_string)
            .collect()),
        Some(names) => {
            for name in names {
                dataset.numeric(name)?;
            }
            Ok(names.to_vec())
        }
    }
}

/// Runs one detector over several columns of a dataset.
pub struct OutlierScanner<D: OutlierDetector> {
    detector: D,
    parallel: bool,
}

impl<D: OutlierDetector> OutlierScanner<D> {
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            parallel: false,
        }
    }

    /// Process columns on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Detect outliers in each named column.
    ///
    /// Every name is validated before any detection runs. The report lists
    /// results in the order of `columns` whether or not the scan is parallel.
    pub fn scan<S: AsRef<str> + Sync>(&self, dataset: &Dataset, columns: &[S]) -> Result<OutlierReport> {
        let inputs = columns
            .iter()
            .map(|c| {
                let name = c.as_ref();
                dataset.numeric(name).map(|values| (name, values))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let detect = |&(name, values): &(&str, &[f64])| -> Result<OutlierResult> {
            self.detector.detect(name, values)
        };
        let results = if self.parallel {
            inputs.par_iter().map(detect).collect::<Result<Vec<_>>>()?
        } else {
            inputs.iter().map(detect).collect::<Result<Vec<_>>>()?
        };

        let report = OutlierReport::new(results);
        tracing::info!(
            method = %self.detector.method(),
            columns = report.results.len(),
            outliers = report.total_outliers(),
            parallel = self.parallel,
            "scanned dataset"
        );
        Ok(report)
    }
}
