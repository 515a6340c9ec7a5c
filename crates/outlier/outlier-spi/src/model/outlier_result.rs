//! Outlier detection result types.

use serde::{Deserialize, Serialize};

use super::column_stats::Bounds;
use super::method::DetectionMethod;

/// Outlier detection result for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierResult {
    /// Column the result belongs to.
    pub column: String,
    /// Method that produced the flags.
    pub method: DetectionMethod,
    /// Boolean mask indicating outliers, aligned with the input rows.
    pub is_outlier: Vec<bool>,
    /// Outlier score for each row.
    pub scores: Vec<f64>,
    /// Threshold (z-score) or multiplier (IQR) used for detection.
    pub threshold: f64,
    /// Value range considered normal, when the method defines one.
    pub bounds: Option<Bounds>,
}

impl OutlierResult {
    /// Get indices of detected outliers.
    pub fn outlier_indices(&self) -> Vec<usize> {
        self.is_outlier
            .iter()
            .enumerate()
            .filter_map(|(i, &is_outlier)| if is_outlier { Some(i) } else { None })
            .collect()
    }

    /// Count of detected outliers.
    pub fn outlier_count(&self) -> usize {
        self.is_outlier.iter().filter(|&&x| x).count()
    }

    /// Console summary line for this column.
    pub fn summary_line(&self) -> String {
        match self.outlier_count() {
            0 => format!("Column: {} - No outliers found ({})", self.column, self.method),
            n => format!("Column: {} - Outliers ({}): {} found", self.column, self.method, n),
        }
    }
}

/// Results of scanning several columns with one method, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub results: Vec<OutlierResult>,
}

impl OutlierReport {
    pub fn new(results: Vec<OutlierResult>) -> Self {
        Self { results }
    }

    /// Result for a single column.
    pub fn get(&self, column: &str) -> Option<&OutlierResult> {
        self.results.iter().find(|r| r.column == column)
    }

    /// Sum of outlier counts across columns.
    pub fn total_outliers(&self) -> usize {
        self.results.iter().map(OutlierResult::outlier_count).sum()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        self.results.iter().map(OutlierResult::summary_line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(column: &str, flags: Vec<bool>) -> OutlierResult {
        let scores = vec![0.0; flags.len()];
        OutlierResult {
            column: column.to_string(),
            method: DetectionMethod::Iqr,
            is_outlier: flags,
            scores,
            threshold: 1.5,
            bounds: Some(Bounds::new(-1.0, 8.5)),
        }
    }

    #[test]
    fn test_indices_and_count() {
        let r = result("GPA", vec![false, true, false, true]);
        assert_eq!(r.outlier_indices(), vec![1, 3]);
        assert_eq!(r.outlier_count(), 2);
    }

    #[test]
    fn test_summary_line_with_outliers() {
        let r = result("Anxiety_Score", vec![true, false, false]);
        assert_eq!(r.summary_line(), "Column: Anxiety_Score - Outliers (IQR): 1 found");
    }

    #[test]
    fn test_summary_line_without_outliers() {
        let mut r = result("Age", vec![false, false]);
        r.method = DetectionMethod::ZScore;
        assert_eq!(r.summary_line(), "Column: Age - No outliers found (Z-Score)");
    }

    #[test]
    fn test_report_totals() {
        let report = OutlierReport::new(vec![
            result("Age", vec![true, false]),
            result("GPA", vec![true, true]),
        ]);
        assert_eq!(report.total_outliers(), 3);
        assert_eq!(report.summary_lines().len(), 2);
        assert_eq!(report.get("GPA").unwrap().outlier_count(), 2);
        assert!(report.get("Major").is_none());
    }

    #[test]
    fn test_result_serializes_method_lowercase() {
        let json = serde_json::to_value(result("Age", vec![false])).unwrap();
        assert_eq!(json["method"], "iqr");
        assert_eq!(json["bounds"]["upper"], 8.5);
    }
}
