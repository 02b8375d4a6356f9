// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use finance_analyzer::{write_csv, AnalysisConfig, Generator, DEFAULT_TRANSACTION_COUNT};
use std::io;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Sectioned plain-text report
    Text,
    /// Structured report as pretty JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset and print the spending report
    Report {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Generate a dataset and write it as CSV to stdout
    Export,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Personal finance ledger simulator and spending analyzer",
    long_about = "Generates a synthetic one-year transaction ledger and reports monthly, \
                  per-category and per-weekday spending along with unusually large expenses.\n\n\
                  Run without a subcommand to open the interactive report viewer."
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Number of transactions to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRANSACTION_COUNT as i64, allow_negative_numbers = true)]
    count: i64,

    /// Log level (trace, debug, info, warn, error, off); RUST_LOG takes precedence
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The viewer owns the terminal, so it stays quiet unless asked otherwise
    let default_level = if args.command.is_none() { "off" } else { "info" };
    init_logging(args.log_level.as_deref().unwrap_or(default_level));

    let config = AnalysisConfig::new(args.count).context("Invalid --count")?;
    debug!(?config, "Parsed configuration");

    match args.command {
        Some(Command::Report { format }) => run_report(&config, format),
        Some(Command::Export) => run_export(&config),
        None => run_ui_mode(&config),
    }
}

fn run_report(config: &AnalysisConfig, format: OutputFormat) -> Result<()> {
    let report = finance_analyzer::run_analysis_with(config);

    match format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json().context("Failed to serialize report")?),
    }

    Ok(())
}

fn run_export(config: &AnalysisConfig) -> Result<()> {
    let transactions = Generator::from_entropy().generate(config.transaction_count);

    let stdout = io::stdout();
    let written = write_csv(&transactions, stdout.lock()).context("Failed to write CSV")?;
    info!(rows = written, "Exported transactions");

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &AnalysisConfig) -> Result<()> {
    let mut app = ui::App::new(*config);
    ui::run_ui(&mut app)
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &AnalysisConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print the report: finance-analyzer report");
    std::process::exit(1);
}
