//! Outlier Detection Core
//!
//! Implementations for outlier detection, capping, dataset scans, and
//! box-plot summaries.

pub mod stats;

mod boxplot;
mod capping;
mod iqr;
mod scan;
mod zscore;

pub use boxplot::{box_plot_summary, render_box_plots, BoxPlotSummary};
pub use capping::{cap_values, treat_dataset, IqrCapper};
pub use iqr::{iqr_bounds, IqrDetector};
pub use scan::{resolve_columns, OutlierScanner};
pub use stats::{describe, quantile};
pub use zscore::ZScoreDetector;
