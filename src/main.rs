/// Auto Review - automated review report for test files
///
/// The main entry point for the review tool. It parses command-line arguments,
/// reviews every given path in order and prints a Markdown report.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{info, LevelFilter};

use auto_review::app::collect_reports;
use auto_review::config::load_config;
use auto_review::utils::output_formatter;
use auto_review::DEFAULT_PATH;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "auto_review",
    version,
    about = "Generate an automated review report for test files.",
    long_about = "Scans test files and reports simple review signals:
- empty files
- TODO/FIXME markers
- missing assertions
- print statements
- skipped tests"
)]
struct Args {
    /// Paths to test files (defaults to ./test file)
    #[arg(default_value = DEFAULT_PATH)]
    paths: Vec<PathBuf>,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Print a findings summary to stderr
    #[arg(long = "summary", action = ArgAction::SetTrue)]
    summary: bool,

    /// Path to configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write log output to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let config = load_config(args.config.as_deref())?;
    let json_path = args.json.clone().or(config.json);
    let show_summary = args.summary || config.summary;

    let reports = collect_reports(&args.paths);
    info!("Reviewed {} file(s)", reports.len());

    println!("{}", output_formatter::format_document(&reports));

    if let Some(json_path) = json_path {
        output_formatter::export_reports_json(&reports, &json_path)?;
        info!("Wrote JSON report to {}", json_path.display());
    }

    if show_summary {
        eprint!("{}", output_formatter::create_summary(&reports));
    }

    Ok(())
}

/// Set up logging to stderr or to the requested log file
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        match File::create(log_file) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!(
                    "{} cannot open log file {}: {}",
                    "Warning:".yellow().bold(),
                    log_file.display(),
                    e
                );
            }
        }
    }

    builder.init();
}
