//! Per-column statistics and bounds.

use serde::{Deserialize, Serialize};

/// Summary statistics of one numeric column.
///
/// Always derived from the column's current values; never stored
/// alongside the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Interquartile range, Q3 - Q1.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Closed interval of acceptable values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// True when `value` lies inside the bounds (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamp `value` into the bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.upper {
            self.upper
        } else if value < self.lower {
            self.lower
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        let bounds = Bounds::new(-1.0, 8.5);
        assert!(bounds.contains(8.5));
        assert!(bounds.contains(-1.0));
        assert!(!bounds.contains(8.51));
        assert!(!bounds.contains(-1.01));
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::new(-1.0, 8.5);
        assert_eq!(bounds.clamp(100.0), 8.5);
        assert_eq!(bounds.clamp(-7.0), -1.0);
        assert_eq!(bounds.clamp(3.0), 3.0);
    }

    #[test]
    fn test_iqr() {
        let stats = ColumnStats {
            column: "x".to_string(),
            count: 6,
            mean: 0.0,
            std_dev: 0.0,
            min: 1.0,
            q1: 2.25,
            median: 3.5,
            q3: 4.75,
            max: 100.0,
        };
        assert!((stats.iqr() - 2.5).abs() < 1e-12);
    }
}
