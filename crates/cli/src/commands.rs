//! Subcommand implementations.

use std::fs::File;
use std::path::{Path, PathBuf};

use dataset_facade::{
    student_schema, write_csv, CsvSource, DataSource, Dataset, SyntheticConfigBuilder,
    SyntheticStudentSource,
};
use outlier_facade::{
    box_plot_summary, render_box_plots, resolve_columns, treat_dataset, BoxPlotSummary,
    DetectionMethod, IqrCapper, IqrConfig, IqrDetector, OutlierDetector, OutlierReport,
    OutlierScanner, ZScoreConfig, ZScoreDetector,
};
use pipeline_facade::{FeatureFrame, FeaturePreparer, ScalerKind};
use serde::Serialize;

use crate::config::RunConfig;
use crate::CliResult;

/// Load a CSV dataset, or the seeded synthetic student dataset without one.
///
/// A file carrying every student column is loaded against the student
/// schema; any other file has its column kinds inferred.
fn load_dataset(input: Option<&Path>) -> CliResult<Dataset> {
    match input {
        Some(path) => load_csv(path),
        None => {
            let dataset = SyntheticStudentSource::default()
                .load()
                .map_err(|e| e.to_string())?;
            println!(
                "Using synthetic student dataset ({} rows x {} columns)",
                dataset.n_rows(),
                dataset.n_columns()
            );
            Ok(dataset)
        }
    }
}

fn load_csv(path: &Path) -> CliResult<Dataset> {
    let schema = student_schema().map_err(|e| e.to_string())?;
    let mut source = CsvSource::new(path);
    if source.matches(&schema).map_err(|e| e.to_string())? {
        source = source.with_schema(schema);
    }
    let dataset = source.load().map_err(|e| e.to_string())?;
    println!(
        "Loaded {} rows x {} columns from {:?}",
        dataset.n_rows(),
        dataset.n_columns(),
        path.file_name().unwrap_or_default()
    );
    Ok(dataset)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> CliResult<()> {
    let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
    serde_json::to_writer_pretty(&mut file, value)
        .map_err(|e| format!("Failed to write JSON: {}", e))
}

fn scan<D: OutlierDetector>(
    detector: D,
    dataset: &Dataset,
    columns: &[String],
    parallel: bool,
) -> CliResult<OutlierReport> {
    OutlierScanner::new(detector)
        .with_parallel(parallel)
        .scan(dataset, columns)
        .map_err(|e| e.to_string())
}

fn print_report(title: &str, report: &OutlierReport) {
    println!("\n{}", title);
    for line in report.summary_lines() {
        println!("{}", line);
    }
}

fn box_plots(dataset: &Dataset, columns: &[String], multiplier: f64) -> CliResult<Vec<BoxPlotSummary>> {
    columns
        .iter()
        .map(|name| {
            let values = dataset.numeric(name).map_err(|e| e.to_string())?;
            box_plot_summary(name, values, multiplier).map_err(|e| e.to_string())
        })
        .collect()
}

/// Run the synthetic dataset generation command
pub fn run_generate(rows: usize, seed: u64, outlier_fraction: f64, output: PathBuf) -> CliResult<()> {
    let config = SyntheticConfigBuilder::new()
        .rows(rows)
        .seed(seed)
        .outlier_fraction(outlier_fraction)
        .build()
        .map_err(|e| e.to_string())?;
    let dataset = SyntheticStudentSource::new(config)
        .load()
        .map_err(|e| e.to_string())?;

    write_csv(&dataset, &output).map_err(|e| e.to_string())?;
    println!(
        "Generated {} rows x {} columns (seed {}), written to {:?}",
        dataset.n_rows(),
        dataset.n_columns(),
        seed,
        output
    );
    Ok(())
}

/// Run the outlier detection command
pub fn run_detect(
    input: Option<PathBuf>,
    method: String,
    threshold: Option<f64>,
    columns: Option<Vec<String>>,
    parallel: bool,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let method: DetectionMethod = method.parse().map_err(|e: outlier_facade::OutlierError| e.to_string())?;
    let dataset = load_dataset(input.as_deref())?;
    let columns = resolve_columns(&dataset, columns.as_deref()).map_err(|e| e.to_string())?;

    let report = match method {
        DetectionMethod::ZScore => {
            let config = ZScoreConfig::new(threshold.unwrap_or(3.0));
            let detector = ZScoreDetector::from_config(config).map_err(|e| e.to_string())?;
            scan(detector, &dataset, &columns, parallel)?
        }
        DetectionMethod::Iqr => {
            let config = IqrConfig::new(threshold.unwrap_or(1.5));
            let detector = IqrDetector::from_config(config).map_err(|e| e.to_string())?;
            scan(detector, &dataset, &columns, parallel)?
        }
    };

    print_report(&format!("Outlier detection ({})", method), &report);
    println!("Total outliers: {}", report.total_outliers());

    if let Some(path) = output {
        write_json(&path, &report)?;
        println!("\nResults written to {:?}", path);
    }
    Ok(())
}

/// Run the IQR capping command
pub fn run_treat(
    input: Option<PathBuf>,
    multiplier: f64,
    columns: Option<Vec<String>>,
    output: PathBuf,
) -> CliResult<()> {
    let dataset = load_dataset(input.as_deref())?;
    let columns = resolve_columns(&dataset, columns.as_deref()).map_err(|e| e.to_string())?;
    let config = IqrConfig::new(multiplier);

    let detector = IqrDetector::from_config(config.clone()).map_err(|e| e.to_string())?;
    let before = scan(detector.clone(), &dataset, &columns, false)?;
    let capper = IqrCapper::from_config(config).map_err(|e| e.to_string())?;
    let treated = treat_dataset(&dataset, &columns, &capper).map_err(|e| e.to_string())?;
    let after = scan(detector, &treated, &columns, false)?;

    print_report("Before capping", &before);
    print_report("After capping", &after);

    write_csv(&treated, &output).map_err(|e| e.to_string())?;
    println!("\nTreated dataset written to {:?}", output);
    Ok(())
}

/// Run the box plot command
pub fn run_boxplot(input: Option<PathBuf>, width: usize, multiplier: f64) -> CliResult<()> {
    let dataset = load_dataset(input.as_deref())?;
    let columns = resolve_columns(&dataset, None).map_err(|e| e.to_string())?;
    let summaries = box_plots(&dataset, &columns, multiplier)?;
    print!("\n{}", render_box_plots(&summaries, width));
    Ok(())
}

/// Run the feature preparation command
pub fn run_prepare(input: Option<PathBuf>, scaler: String, output: Option<PathBuf>) -> CliResult<()> {
    let scaler: ScalerKind = scaler.parse().map_err(|e: pipeline_facade::PipelineError| e.to_string())?;
    let dataset = load_dataset(input.as_deref())?;
    let frame = prepare(&dataset, scaler)?;

    if let Some(path) = output {
        write_json(&path, &frame)?;
        println!("Features written to {:?}", path);
    }
    Ok(())
}

fn prepare(dataset: &Dataset, scaler: ScalerKind) -> CliResult<FeatureFrame> {
    let frame = FeaturePreparer::new(scaler)
        .prepare(dataset)
        .map_err(|e| e.to_string())?;
    println!(
        "\nPrepared {} features x {} rows ({} scaling)",
        frame.n_features(),
        frame.n_rows(),
        scaler
    );
    Ok(frame)
}

/// Run the full flow: generate or load, plot, detect, treat, re-detect, prepare
///
/// `input` takes precedence over the config file's `input`.
pub fn run_all(config: Option<PathBuf>, input: Option<PathBuf>) -> CliResult<()> {
    let mut config = match config {
        Some(path) => RunConfig::load(&path)?,
        None => RunConfig::default(),
    };
    if input.is_some() {
        config.input = input;
    }
    tracing::info!(?config, "starting run");

    let dataset = match &config.input {
        Some(path) => load_csv(path)?,
        None => {
            let dataset = SyntheticStudentSource::new(config.synthetic.clone())
                .load()
                .map_err(|e| e.to_string())?;
            println!(
                "Generated synthetic student dataset: {} rows x {} columns",
                dataset.n_rows(),
                dataset.n_columns()
            );
            dataset
        }
    };

    let outlier = &config.outlier;
    let columns = resolve_columns(&dataset, outlier.columns.as_deref()).map_err(|e| e.to_string())?;

    let summaries = box_plots(&dataset, &columns, outlier.iqr.multiplier)?;
    print!("\n{}", render_box_plots(&summaries, config.plot_width.unwrap_or(60)));

    let zscore = ZScoreDetector::from_config(outlier.zscore.clone()).map_err(|e| e.to_string())?;
    let iqr = IqrDetector::from_config(outlier.iqr.clone()).map_err(|e| e.to_string())?;

    let zscore_report = scan(zscore, &dataset, &columns, outlier.parallel)?;
    print_report("Z-Score detection", &zscore_report);
    let iqr_report = scan(iqr.clone(), &dataset, &columns, outlier.parallel)?;
    print_report("IQR detection", &iqr_report);

    let capper = IqrCapper::from_config(outlier.iqr.clone()).map_err(|e| e.to_string())?;
    let treated = treat_dataset(&dataset, &columns, &capper).map_err(|e| e.to_string())?;
    let treated_report = scan(iqr, &treated, &columns, outlier.parallel)?;
    print_report("IQR detection after capping", &treated_report);

    prepare(&treated, config.scaler)?;
    Ok(())
}
