//! fitpipe Command Line Interface
//!
//! Prepares workout-feedback datasets (validate, filter, balance, split),
//! profiles them, exports numeric encodings, and scores prediction
//! outcomes.

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use fitpipe::api::{quick, Pipeline};
use fitpipe::core::Result;
use fitpipe::data::{csv, FeedbackDataset};
use fitpipe::pipeline::{clean_and_normalize, encode_all, remove_outliers, DEFAULT_TEST_RATIO};
use fitpipe::report::{PipelineReport, StageCounts};
use fitpipe::stats;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "fitpipe")]
#[command(about = "Workout-feedback dataset pipeline and evaluation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare a feedback file into train/test CSVs
    Prepare(PrepareArgs),
    /// Profile a feedback file
    Stats(StatsArgs),
    /// Export a feedback file as an all-numeric encoded CSV
    Export(ExportArgs),
    /// Score an outcome-pair file
    Evaluate(EvaluateArgs),
}

#[derive(Args)]
struct PrepareArgs {
    /// Feedback data file (CSV or JSON format)
    #[arg(long)]
    data: PathBuf,

    /// Output file for the training subset
    #[arg(long)]
    train_output: PathBuf,

    /// Output file for the test subset
    #[arg(long)]
    test_output: PathBuf,

    /// Data format: auto, csv, or json
    #[arg(short, long, default_value = "auto")]
    format: String,

    /// RNG seed for reproducible balancing and splitting
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of samples reserved for the test set
    #[arg(long, default_value_t = DEFAULT_TEST_RATIO)]
    test_ratio: f64,

    /// Skip class balancing
    #[arg(long)]
    no_balance: bool,

    /// Skip outlier filtering
    #[arg(long)]
    no_outlier_filter: bool,

    /// Write a JSON report of the run
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args)]
struct StatsArgs {
    /// Feedback data file (CSV or JSON format)
    #[arg(long)]
    data: PathBuf,

    /// Data format: auto, csv, or json
    #[arg(short, long, default_value = "auto")]
    format: String,

    /// Write the profile as a JSON report
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args)]
struct ExportArgs {
    /// Feedback data file (CSV or JSON format)
    #[arg(long)]
    data: PathBuf,

    /// Output file for the encoded CSV
    #[arg(short, long)]
    output: PathBuf,

    /// Data format: auto, csv, or json
    #[arg(short, long, default_value = "auto")]
    format: String,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Outcome-pair CSV file (actual,predicted flags)
    #[arg(long)]
    data: PathBuf,

    /// Write the metrics as a JSON report
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Prepare(args) => prepare_command(args),
        Commands::Stats(args) => stats_command(args),
        Commands::Export(args) => export_command(args),
        Commands::Evaluate(args) => evaluate_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn prepare_command(args: PrepareArgs) -> Result<()> {
    info!("Preparing dataset from {:?}", args.data);

    let dataset = load_feedback(&args.data, &args.format)?;
    info!("Loaded {} feedback records", dataset.len());

    let mut pipeline = Pipeline::new()
        .with_test_ratio(args.test_ratio)
        .with_balancing(!args.no_balance)
        .with_outlier_filtering(!args.no_outlier_filter);

    if let Some(seed) = args.seed {
        pipeline = pipeline.with_seed(seed);
    }

    let prepared = pipeline.prepare(dataset.records())?;

    let counts = &prepared.stage_counts;
    info!(
        "Stage counts: raw {} -> validated {} -> filtered {} -> balanced {}",
        counts.raw, counts.validated, counts.filtered, counts.balanced
    );

    csv::write_samples_file(&args.train_output, &prepared.train)?;
    csv::write_samples_file(&args.test_output, &prepared.test)?;

    println!(
        "Prepared {} training and {} test samples",
        prepared.train.len(),
        prepared.test.len()
    );
    println!("Train written to: {:?}", args.train_output);
    println!("Test written to: {:?}", args.test_output);

    if let Some(report_path) = args.report {
        let report = prepared.report()?;
        report.save_to_file(&report_path)?;
        info!("Report saved to: {report_path:?}");
    }

    Ok(())
}

fn stats_command(args: StatsArgs) -> Result<()> {
    info!("Profiling dataset from {:?}", args.data);

    let dataset = load_feedback(&args.data, &args.format)?;
    let samples = clean_and_normalize(dataset.records());
    info!(
        "Validated {} of {} records",
        samples.len(),
        dataset.len()
    );

    let profile = stats::profile(&samples)?;

    println!("=== Dataset Profile ===");
    println!("{}", profile.summary());
    println!("\nField statistics:");
    print_field_stats("Age", &profile.age_stats);
    print_field_stats("Weight", &profile.weight_stats);
    print_field_stats("Height", &profile.height_stats);
    print_field_stats("Completion rate", &profile.completion_rate_stats);

    if let Some(report_path) = args.report {
        let counts = StageCounts {
            raw: dataset.len(),
            validated: samples.len(),
            ..StageCounts::default()
        };
        let report = PipelineReport::new(profile, None, counts);
        report.save_to_file(&report_path)?;
        info!("Report saved to: {report_path:?}");
    }

    Ok(())
}

fn print_field_stats(name: &str, stats: &fitpipe::stats::Statistics) {
    println!(
        "  {name}: mean {:.2}, median {:.2}, min {:.2}, max {:.2}, std dev {:.2}",
        stats.mean, stats.median, stats.min, stats.max, stats.std_dev
    );
}

fn export_command(args: ExportArgs) -> Result<()> {
    info!("Exporting encoded dataset from {:?}", args.data);

    let dataset = load_feedback(&args.data, &args.format)?;
    let samples = remove_outliers(&clean_and_normalize(dataset.records()));
    let encoded = encode_all(&samples);

    csv::write_encoded_file(&args.output, &encoded)?;

    println!(
        "Exported {} encoded samples to {:?}",
        encoded.len(),
        args.output
    );

    Ok(())
}

fn evaluate_command(args: EvaluateArgs) -> Result<()> {
    info!("Evaluating outcomes from {:?}", args.data);

    let evaluation = quick::evaluate_outcomes_csv(&args.data)?;

    println!("=== Evaluation Results ===");
    println!("Samples:   {}", evaluation.total_samples);
    println!("Accuracy:  {:.4}", evaluation.accuracy);
    println!("Precision: {:.4}", evaluation.precision);
    println!("Recall:    {:.4}", evaluation.recall);
    println!("F1 Score:  {:.4}", evaluation.f1_score);
    println!("\nConfusion matrix [[TP, FP], [FN, TN]]:");
    println!(
        "  [[{}, {}], [{}, {}]]",
        evaluation.true_positives(),
        evaluation.false_positives(),
        evaluation.false_negatives(),
        evaluation.true_negatives()
    );

    if let Some(report_path) = args.report {
        // Metrics-only report: profile a placeholder is not meaningful here,
        // so serialize just the evaluation.
        let json = serde_json::to_string_pretty(&evaluation)
            .map_err(fitpipe::PipelineError::SerializationError)?;
        std::fs::write(&report_path, json).map_err(fitpipe::PipelineError::IoError)?;
        info!("Report saved to: {report_path:?}");
    }

    Ok(())
}

fn load_feedback(path: &Path, format: &str) -> Result<FeedbackDataset> {
    let format = if format == "auto" {
        detect_format(path)
    } else {
        format.to_string()
    };

    info!("Loading feedback as {format} format");

    match format.as_str() {
        "csv" => FeedbackDataset::from_file(path),
        "json" => FeedbackDataset::from_json_file(path),
        _ => Err(fitpipe::PipelineError::InvalidParameter(format!(
            "Unsupported format: {format}. Use 'csv' or 'json'"
        ))),
    }
}

fn detect_format(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => "csv".to_string(),
        Some("json") => "json".to_string(),
        _ => {
            warn!("Unknown file extension, assuming CSV format");
            "csv".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(detect_format(&PathBuf::from("test.csv")), "csv");
        assert_eq!(detect_format(&PathBuf::from("test.json")), "json");
        assert_eq!(detect_format(&PathBuf::from("test.txt")), "csv");
        assert_eq!(detect_format(&PathBuf::from("test")), "csv");
    }
}
