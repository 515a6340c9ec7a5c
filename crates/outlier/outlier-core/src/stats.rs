//! Column statistics.
//!
//! Every function here works on a borrowed slice and returns fresh values.
//! Empty input and non-finite values are rejected with an error naming the
//! column instead of producing a misleading default.

use outlier_spi::{ColumnStats, OutlierError, Result};

/// Standard deviations at or below this are treated as zero variance.
pub const ZERO_VARIANCE_EPSILON: f64 = 1e-12;

/// Fail on empty input or on the first non-finite value.
pub fn check_values(column: &str, values: &[f64], required: usize) -> Result<()> {
    if values.len() < required {
        return Err(OutlierError::InsufficientData {
            column: column.to_string(),
            required,
            got: values.len(),
        });
    }
    if let Some((row, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(OutlierError::NonFinite {
            column: column.to_string(),
            row,
            value,
        });
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(column: &str, values: &[f64]) -> Result<f64> {
    check_values(column, values, 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with `ddof` delta degrees of freedom.
pub fn std_dev(column: &str, values: &[f64], ddof: usize) -> Result<f64> {
    check_values(column, values, ddof + 1)?;
    let m = values.iter().sum::<f64>() / values.len() as f64;
    let sum_sq = values.iter().map(|x| (x - m).powi(2)).sum::<f64>();
    Ok((sum_sq / (values.len() - ddof) as f64).sqrt())
}

/// Sorted copy of finite values.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Quantile of sorted data by linear interpolation between order statistics.
///
/// Position `h = (n - 1) * p`; the result interpolates between the values at
/// `floor(h)` and `floor(h) + 1`. Returns `None` for empty input or `p`
/// outside `[0, 1]`.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

/// First and third quartiles of a column.
pub fn quartiles(column: &str, values: &[f64]) -> Result<(f64, f64)> {
    check_values(column, values, 1)?;
    let sorted = sorted(values);
    let q1 = quantile(&sorted, 0.25).unwrap_or(f64::NAN);
    let q3 = quantile(&sorted, 0.75).unwrap_or(f64::NAN);
    Ok((q1, q3))
}

/// Full summary statistics of a column.
///
/// With `ddof = 1` and a single value the standard deviation is undefined;
/// it is reported as zero here since only the z-score detector depends on
/// it and that detector enforces its own minimum.
pub fn describe(column: &str, values: &[f64], ddof: usize) -> Result<ColumnStats> {
    check_values(column, values, 1)?;
    let sorted = sorted(values);
    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std_dev = if n > ddof {
        (sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - ddof) as f64).sqrt()
    } else {
        0.0
    };
    let q = |p: f64| quantile(&sorted, p).unwrap_or(f64::NAN);

    Ok(ColumnStats {
        column: column.to_string(),
        count: n,
        mean,
        std_dev,
        min: sorted[0],
        q1: q(0.25),
        median: q(0.5),
        q3: q(0.75),
        max: sorted[n - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_quantile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        assert!((quantile(&sorted, 0.25).unwrap() - 2.25).abs() < EPS);
        assert!((quantile(&sorted, 0.75).unwrap() - 4.75).abs() < EPS);
        assert!((quantile(&sorted, 0.5).unwrap() - 3.5).abs() < EPS);
        assert_eq!(quantile(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile(&sorted, 1.0), Some(100.0));
    }

    #[test]
    fn test_quantile_edge_cases() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[7.0], 0.25), Some(7.0));
        assert_eq!(quantile(&[1.0, 2.0], 1.5), None);
    }

    #[test]
    fn test_std_dev_sample_and_population() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev("x", &values, 0).unwrap() - 2.0).abs() < EPS);
        assert!((std_dev("x", &values, 1).unwrap() - (32.0f64 / 7.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn test_std_dev_needs_more_points_than_ddof() {
        let err = std_dev("x", &[1.0], 1).unwrap_err();
        assert!(matches!(err, OutlierError::InsufficientData { required: 2, got: 1, .. }));
    }

    #[test]
    fn test_mean_empty_is_insufficient_data() {
        let err = mean("GPA", &[]).unwrap_err();
        assert_eq!(
            err,
            OutlierError::InsufficientData {
                column: "GPA".to_string(),
                required: 1,
                got: 0,
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = mean("Age", &[1.0, f64::INFINITY, 3.0]).unwrap_err();
        assert!(matches!(err, OutlierError::NonFinite { row: 1, .. }));
    }

    #[test]
    fn test_describe() {
        let stats = describe("x", &[5.0, 1.0, 100.0, 3.0, 2.0, 4.0], 1).unwrap();
        assert_eq!(stats.count, 6);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 100.0);
        assert!((stats.q1 - 2.25).abs() < EPS);
        assert!((stats.q3 - 4.75).abs() < EPS);
        assert!((stats.iqr() - 2.5).abs() < EPS);
        assert!((stats.mean - 115.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_describe_does_not_reorder_input() {
        let values = vec![3.0, 1.0, 2.0];
        describe("x", &values, 0).unwrap();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }
}
