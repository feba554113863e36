use analytics::{AggregateResult, AggregationEngine};
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{InputSettings, OutputFormat, Settings, load_settings};
use ingest::{CsvRecordSource, validate_input};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod report;

/// The main entry point for the supply-demand application.
fn main() -> anyhow::Result<()> {
    // Pick up SUPPLY_DEMAND_* and RUST_LOG from a .env file, if one exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    init_logging(&settings.logging.level)?;
    log_settings(&settings);

    // Execute the appropriate command
    match cli.command {
        Commands::Build(args) => handle_build(args, settings),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Builds a demand and supply summary from a price/quantity schedule.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file to load instead of ./supply-demand.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "debug").
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the equilibrium point and column ranges of a CSV schedule.
    Build(BuildArgs),
}

#[derive(Parser)]
struct BuildArgs {
    /// CSV file with rows of `price,quantity demanded,quantity supplied`.
    file: PathBuf,

    /// How to print the results.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print the demand/supply schedule.
    #[arg(long)]
    schedule: bool,

    /// Also draw the demand and supply curves as a text chart.
    #[arg(long)]
    chart: bool,

    /// Field delimiter (a single ASCII character).
    #[arg(long)]
    delimiter: Option<String>,

    /// Accept files that do not end in `.csv`.
    #[arg(long)]
    no_extension_check: bool,
}

impl BuildArgs {
    /// Layers the command-line flags over the loaded settings.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.output.format = format;
        }
        if self.schedule {
            settings.output.show_schedule = true;
        }
        if self.chart {
            settings.output.show_chart = true;
        }
        if let Some(delimiter) = &self.delimiter {
            settings.input.delimiter = delimiter.clone();
        }
        if self.no_extension_check {
            settings.input.require_csv_extension = false;
        }
    }
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level '{level}'"))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Emitted once the subscriber exists, so the loaded values are visible at `debug`.
fn log_settings(settings: &Settings) {
    tracing::debug!(?settings, "configuration loaded");
}

// ==============================================================================
// Build Command Logic
// ==============================================================================

/// Handles the orchestration of the build process.
fn handle_build(args: BuildArgs, mut settings: Settings) -> anyhow::Result<()> {
    args.apply_to(&mut settings);
    settings.validate()?;

    let result = aggregate_file(&args.file, &settings.input)?;

    let rendered = report::render(&result, settings.output.format)?;
    println!("{rendered}");
    if settings.output.show_schedule {
        println!("{}", report::render_schedule(&result));
    }
    if settings.output.show_chart {
        println!("{}", report::render_chart(&result));
    }
    Ok(())
}

/// Gates, reads, normalizes and aggregates one input file.
///
/// The engine only runs once the gate has accepted the file.
fn aggregate_file(path: &Path, input: &InputSettings) -> anyhow::Result<AggregateResult> {
    validate_input(path, input).context("Insert a correct CSV file please")?;

    let source = CsvRecordSource::open(path, input)?;
    let mut engine = AggregationEngine::new();
    for record in source.normalized() {
        let record = record.with_context(|| format!("Failed while reading '{}'", path.display()))?;
        engine.process(&record)?;
    }
    let result = engine.finalize();

    tracing::info!(
        path = %path.display(),
        records = result.records_processed(),
        malformed = result.records_malformed(),
        "schedule aggregated"
    );
    Ok(result)
}
