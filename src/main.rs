// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use corpus_validator::app_config::{Config, LogLevel};
use corpus_validator::validation::Validator;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for corpus-validator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// corpus-validator - structural checks for line-delimited JSON corpus data
///
/// Parses every record file, checks required fields and sentence id
/// uniqueness, then prints a report of all errors and warnings.
#[derive(Parser, Debug)]
#[command(name = "corpus-validator")]
#[command(version)]
#[command(about = "Validate line-delimited JSON corpus data")]
#[command(long_about = "corpus-validator checks sentences, annotations, variants and dictionary
entries of a corpus data tree and reports every problem it finds.

EXAMPLES:
    corpus-validator                            # Validate ./data
    corpus-validator --data-dir /srv/corpus     # Validate another tree
    corpus-validator -l debug                   # Log every scanned file
    corpus-validator completions bash > cv.bash # Generate bash completions

LAYOUT:
    versions/<version>/*.jsonl   chapter sentence files
    annotations/zhipan.jsonl     annotations (optional)
    variants/variants.jsonl      textual variants (optional)
    dictionary/*.jsonl           dictionary entries

CONFIGURATION:
    Settings are read from validator.json when it exists. You can specify a
    different file with --config. The file is never created.

Validation problems do not change the exit status; only a fatal condition
such as a missing dictionary directory does.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root of the corpus data tree (defaults to ./data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH", default_value = "validator.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("ℹ️ ", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is applied
    // through the global max level once the config is known.
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "corpus-validator", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    info!("Validating corpus data in {:?}", config.data_dir);

    let mut validator = Validator::new(config);
    validator
        .validate_all()
        .context("Validation aborted")?;

    Ok(())
}

// Config file first, then command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config_path)
        .with_context(|| format!("Failed to load config file: {:?}", cli.config_path))?;

    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    Ok(config)
}
