//! End-to-end tests for the outlier module
//!
//! Generate, detect, treat, and re-detect on the synthetic student dataset.

use dataset_facade::{DataSource, Dataset, SyntheticConfig, SyntheticStudentSource, CATEGORICAL_COLUMNS};
use outlier_facade::{
    resolve_columns, treat_dataset, IqrCapper, IqrDetector, OutlierScanner, ZScoreDetector,
};

fn students(rows: usize, seed: u64, outlier_fraction: f64) -> Dataset {
    let config = SyntheticConfig {
        rows,
        seed,
        outlier_fraction,
    };
    SyntheticStudentSource::new(config).load().unwrap()
}

#[test]
fn e2e_injected_outliers_are_detected_by_both_methods() {
    let ds = students(500, 42, 0.02);
    let columns = resolve_columns(&ds, None).unwrap();

    let zscore = OutlierScanner::new(ZScoreDetector::default())
        .scan(&ds, &columns)
        .unwrap();
    let iqr = OutlierScanner::new(IqrDetector::default())
        .scan(&ds, &columns)
        .unwrap();

    assert_eq!(zscore.results.len(), columns.len());
    assert!(zscore.total_outliers() > 0);
    assert!(iqr.total_outliers() > 0);
}

#[test]
fn e2e_capping_removes_iqr_outliers() {
    let ds = students(500, 42, 0.02);
    let columns = resolve_columns(&ds, None).unwrap();
    let scanner = OutlierScanner::new(IqrDetector::default());

    let before = scanner.scan(&ds, &columns).unwrap();
    let treated = treat_dataset(&ds, &columns, &IqrCapper::default()).unwrap();
    let after = scanner.scan(&treated, &columns).unwrap();

    assert!(before.total_outliers() > 0);
    assert_eq!(after.total_outliers(), 0, "{:?}", after.summary_lines());

    assert_eq!(treated.n_rows(), ds.n_rows());
    assert_eq!(treated.n_columns(), ds.n_columns());
    for name in CATEGORICAL_COLUMNS {
        assert_eq!(treated.categorical(name).unwrap(), ds.categorical(name).unwrap());
    }
}

#[test]
fn e2e_clean_normal_data_flags_few_zscore_outliers() {
    let ds = students(500, 7, 0.0);
    let columns = resolve_columns(&ds, None).unwrap();
    let report = OutlierScanner::new(ZScoreDetector::default())
        .scan(&ds, &columns)
        .unwrap();

    for result in &report.results {
        // at most 2% of 500 rows
        assert!(result.outlier_count() <= 10, "{}", result.summary_line());
    }
}

#[test]
fn e2e_parallel_scan_matches_sequential() {
    let ds = students(1_000, 3, 0.03);
    let columns = resolve_columns(&ds, None).unwrap();

    let sequential = OutlierScanner::new(IqrDetector::default())
        .scan(&ds, &columns)
        .unwrap();
    let parallel = OutlierScanner::new(IqrDetector::default())
        .with_parallel(true)
        .scan(&ds, &columns)
        .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn e2e_same_seed_same_report() {
    let columns = vec!["GPA".to_string(), "Anxiety_Score".to_string()];
    let a = OutlierScanner::new(ZScoreDetector::default())
        .scan(&students(300, 9, 0.05), &columns)
        .unwrap();
    let b = OutlierScanner::new(ZScoreDetector::default())
        .scan(&students(300, 9, 0.05), &columns)
        .unwrap();
    assert_eq!(a, b);
}
