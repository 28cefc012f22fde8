// scholar-stats CLI - researcher profile statistics, headless
// Reads profile JSON, prints engine results as JSON on stdout.

mod exit_codes;
mod stats;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use scholar_stats::{Metric, StatsError};
use tracing_subscriber::EnvFilter;

use exit_codes::{EXIT_ERROR, EXIT_INVALID_CONFIG, EXIT_IO, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "scholar-stats")]
#[command(about = "Aggregate researcher profiles into dashboard statistics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every statistical view and print a single JSON report
    #[command(after_help = "\
Examples:
  scholar-stats report researchers.json --taxonomy categories.json
  scholar-stats report researchers.json --taxonomy categories.json --strict-taxonomy
  scholar-stats report researchers.json --config stats.toml --limit 5
  scholar-stats report researchers.json --output report.json")]
    Report {
        /// JSON array of researcher profiles
        records: PathBuf,

        /// Research-track taxonomy JSON (track name -> interest labels)
        #[arg(long)]
        taxonomy: Option<PathBuf>,

        /// Fail on a taxonomy file that is not valid JSON instead of ignoring it
        #[arg(long, requires = "taxonomy")]
        strict_taxonomy: bool,

        /// TOML file overriding keyword lists, buckets, tracks or top limit
        #[arg(long)]
        config: Option<PathBuf>,

        /// Length of the top-researcher lists (overrides the config)
        #[arg(long)]
        limit: Option<usize>,

        /// Write JSON to file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Rank researchers by h-index or citation count
    #[command(after_help = "\
Examples:
  scholar-stats top researchers.json
  scholar-stats top researchers.json --by citations --limit 25")]
    Top {
        /// JSON array of researcher profiles
        records: PathBuf,

        /// Ranking metric
        #[arg(long, value_enum, default_value = "hindex")]
        by: RankBy,

        /// Number of researchers to return
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Validate an engine config override without running
    #[command(after_help = "\
Examples:
  scholar-stats validate-config stats.toml")]
    ValidateConfig {
        /// Path to the TOML override file
        config: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RankBy {
    Hindex,
    Citations,
}

impl From<RankBy> for Metric {
    fn from(by: RankBy) -> Self {
        match by {
            RankBy::Hindex => Metric::HIndex,
            RankBy::Citations => Metric::Citations,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SCHOLAR_STATS_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // Also bridges the engine's `log` records.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Report { records, taxonomy, strict_taxonomy, config, limit, output, compact } => {
            stats::cmd_report(records, taxonomy, strict_taxonomy, config, limit, output, compact)
        }
        Commands::Top { records, by, limit, compact } => {
            stats::cmd_top(records, by.into(), limit, compact)
        }
        Commands::ValidateConfig { config } => stats::cmd_validate_config(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INVALID_CONFIG, message: msg.into(), hint: None }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<StatsError> for CliError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::ConfigParse(_) | StatsError::ConfigValidation(_) => {
                CliError::config(err.to_string())
            }
            StatsError::RecordParse(_) => CliError::parse(err.to_string())
                .with_hint("records must be a JSON array of researcher profiles"),
            StatsError::TaxonomyParse(_) => CliError::parse(err.to_string())
                .with_hint("drop --strict-taxonomy to report zero research areas instead"),
        }
    }
}
