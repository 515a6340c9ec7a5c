//! Text box plots.

use outlier_spi::Result;
use serde::{Deserialize, Serialize};

use crate::iqr::iqr_bounds;
use crate::stats;

const MIN_WIDTH: usize = 10;

/// Five-number summary of a column with Tukey whiskers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSummary {
    pub column: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value not below the lower fence.
    pub lower_whisker: f64,
    /// Largest value not above the upper fence.
    pub upper_whisker: f64,
    /// Values outside the fences, in row order.
    pub outliers: Vec<f64>,
}

/// Summarize a column for a box plot with fences at `multiplier * IQR`.
pub fn box_plot_summary(column: &str, values: &[f64], multiplier: f64) -> Result<BoxPlotSummary> {
    let bounds = iqr_bounds(column, values, multiplier)?;
    let described = stats::describe(column, values, 0)?;

    let inside = || values.iter().copied().filter(|&v| bounds.contains(v));
    let lower_whisker = inside().fold(f64::INFINITY, f64::min);
    let upper_whisker = inside().fold(f64::NEG_INFINITY, f64::max);

    Ok(BoxPlotSummary {
        column: column.to_string(),
        min: described.min,
        q1: described.q1,
        median: described.median,
        q3: described.q3,
        max: described.max,
        lower_whisker: if lower_whisker.is_finite() { lower_whisker } else { described.q1 },
        upper_whisker: if upper_whisker.is_finite() { upper_whisker } else { described.q3 },
        outliers: values.iter().copied().filter(|&v| !bounds.contains(v)).collect(),
    })
}

/// Render one box plot per line, each scaled to its own column range.
///
/// ```text
/// Age  |---[==|===]-----|      o  [18.00, 64.00] 1 outlier(s)
/// ```
pub fn render_box_plots(summaries: &[BoxPlotSummary], width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let label_width = summaries
        .iter()
        .map(|s| s.column.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for summary in summaries {
        out.push_str(&format!(
            "{:<label_width$}  {}  [{:.2}, {:.2}] {} outlier(s)\n",
            summary.column,
            render_line(summary, width),
            summary.min,
            summary.max,
            summary.outliers.len(),
        ));
    }
    out
}

fn render_line(summary: &BoxPlotSummary, width: usize) -> String {
    let span = summary.max - summary.min;
    let position = |v: f64| -> usize {
        if span <= 0.0 {
            return width / 2;
        }
        let scaled = ((v - summary.min) / span * (width - 1) as f64).round();
        (scaled.max(0.0) as usize).min(width - 1)
    };

    let mut cells = vec![' '; width];
    let (lw, q1, med, q3, uw) = (
        position(summary.lower_whisker),
        position(summary.q1),
        position(summary.median),
        position(summary.q3),
        position(summary.upper_whisker),
    );
    cells[lw..=uw.max(lw)].fill('-');
    cells[q1..=q3.max(q1)].fill('=');
    cells[lw] = '|';
    cells[uw] = '|';
    cells[q1] = '[';
    cells[q3] = ']';
    cells[med] = '|';
    for &v in &summary.outliers {
        cells[position(v)] = 'o';
    }
    cells.into_iter().collect()
}
