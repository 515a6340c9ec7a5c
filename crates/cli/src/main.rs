//! # rustful-clean
//!
//! Command-line interface for outlier detection, outlier treatment, and
//! feature preparation on tabular datasets.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{run_all, run_boxplot, run_detect, run_generate, run_prepare, run_treat};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "rustful-clean")]
#[command(about = "Outlier detection and data cleaning CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the seeded synthetic student dataset as CSV
    Generate {
        /// Number of rows
        #[arg(short, long, default_value = "500")]
        rows: usize,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Fraction of rows receiving an injected extreme value
        #[arg(long, default_value = "0.02")]
        outlier_fraction: f64,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Detect outliers in numeric columns
    Detect {
        /// Input CSV file (default: synthetic student dataset)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Detection method (zscore, iqr)
        #[arg(short, long, default_value = "zscore")]
        method: String,

        /// Z-score threshold or IQR multiplier (default: 3.0 / 1.5)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Comma-separated columns (default: all numeric columns)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Scan columns in parallel
        #[arg(long)]
        parallel: bool,

        /// Output JSON file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cap outliers at the IQR fences and write the treated dataset
    Treat {
        /// Input CSV file (default: synthetic student dataset)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// IQR multiplier
        #[arg(short, long, default_value = "1.5")]
        multiplier: f64,

        /// Comma-separated columns (default: all numeric columns)
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print text box plots of every numeric column
    Boxplot {
        /// Input CSV file (default: synthetic student dataset)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Plot width in characters
        #[arg(short, long, default_value = "60")]
        width: usize,

        /// IQR multiplier for the whiskers
        #[arg(short, long, default_value = "1.5")]
        multiplier: f64,
    },

    /// Scale numeric and one-hot encode categorical columns
    Prepare {
        /// Input CSV file (default: synthetic student dataset)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Numeric scaler (standard, minmax)
        #[arg(short, long, default_value = "standard")]
        scaler: String,

        /// Output JSON file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the full flow: generate or load, plot, detect, cap, re-detect, prepare
    Run {
        /// JSON config file with `input`, `synthetic`, `outlier`, and `scaler` sections
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input CSV file, overriding the config's `input`
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rustful_clean=info,dataset_core=info,outlier_core=info,pipeline_api=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            rows,
            seed,
            outlier_fraction,
            output,
        } => run_generate(rows, seed, outlier_fraction, output),

        Commands::Detect {
            input,
            method,
            threshold,
            columns,
            parallel,
            output,
        } => run_detect(input, method, threshold, columns, parallel, output),

        Commands::Treat {
            input,
            multiplier,
            columns,
            output,
        } => run_treat(input, multiplier, columns, output),

        Commands::Boxplot {
            input,
            width,
            multiplier,
        } => run_boxplot(input, width, multiplier),

        Commands::Prepare {
            input,
            scaler,
            output,
        } => run_prepare(input, scaler, output),

        Commands::Run { config, input } => run_all(config, input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_detect_columns() {
        let cli = Cli::parse_from([
            "rustful-clean",
            "detect",
            "--method",
            "iqr",
            "--columns",
            "Age,GPA",
            "--parallel",
        ]);
        match cli.command {
            Commands::Detect {
                method,
                columns,
                parallel,
                threshold,
                ..
            } => {
                assert_eq!(method, "iqr");
                assert_eq!(columns, Some(vec!["Age".to_string(), "GPA".to_string()]));
                assert!(parallel);
                assert_eq!(threshold, None);
            }
            _ => panic!("expected detect"),
        }
    }

    #[test]
    fn test_parse_run_input() {
        let cli = Cli::parse_from(["rustful-clean", "run", "-i", "students.csv"]);
        match cli.command {
            Commands::Run { config, input } => {
                assert_eq!(config, None);
                assert_eq!(input, Some(PathBuf::from("students.csv")));
            }
            _ => panic!("expected run"),
        }
    }
}
