// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{error, warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use asstxt::app_config::{self, Config};
use asstxt::errors::AppError;
use asstxt::{Controller, Separator};

/// CLI Wrapper for Separator to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSeparator {
    Tab,
    Dash,
}

impl From<CliSeparator> for Separator {
    fn from(cli_separator: CliSeparator) -> Self {
        match cli_separator {
            CliSeparator::Tab => Separator::Tab,
            CliSeparator::Dash => Separator::Dash,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for asstxt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// asstxt - bilingual dialogue extraction from ASS subtitles
///
/// Scans a directory for .ass files and writes the dialogue of each one to a
/// .txt file next to it, one numbered line per event with both languages.
#[derive(Parser, Debug)]
#[command(name = "asstxt")]
#[command(version)]
#[command(about = "Extract bilingual dialogue from ASS subtitles")]
#[command(long_about = "asstxt extracts the dialogue lines of every .ass file in a directory and writes them as numbered text.

EXAMPLES:
    asstxt                          # Process the current directory
    asstxt ~/subs                   # Process another directory
    asstxt -s tab ~/subs            # Tab separated output
    asstxt -r ~/subs                # Include subdirectories
    asstxt completions bash > asstxt.bash

OUTPUT:
    Each line reads '<index><sep><source><sep><target>'. The separator is
    ' - ' by default or a tab with '-s tab'.

CONFIGURATION:
    Settings are read from conf.json when it exists; otherwise defaults apply.
    Use --config-path for another file and --no-config to ignore it. Nothing
    besides the .txt output is written unless --write-config is given, which
    saves the effective settings to the config path.

NOTE:
    A directory literally named 'completions' is taken as the subcommand;
    pass it as ./completions instead.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the subtitle files
    #[arg(value_name = "INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Separator between index, source and target
    #[arg(short, long, value_enum)]
    separator: Option<CliSeparator>,

    /// Also process subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Ignore the configuration file and use defaults
    #[arg(long)]
    no_config: bool,

    /// Save the effective settings to the configuration file
    #[arg(long)]
    write_config: bool,

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
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
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
    // The logger accepts everything; the max level filters
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "asstxt", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config);
    match controller.run_folder(&cli.input_dir) {
        Ok(summary) => {
            if summary.written == 0 {
                warn!("No output files were written");
            }
            info!("Done.");
            Ok(())
        }
        Err(AppError::NoInputFiles(message)) => {
            error!("No subtitle files found: {}", message);
            std::process::exit(1);
        }
        Err(e) => Err(anyhow!(e)),
    }
}

/// Load the configuration, then apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = Path::new(&cli.config_path);

    let mut config = if cli.no_config {
        Config::default()
    } else {
        Config::load_or_default(config_path)?
    };

    if let Some(separator) = &cli.separator {
        config.separator = separator.clone().into();
    }

    if cli.recursive {
        config.recursive = true;
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()
        .map_err(|e| anyhow!(AppError::Config(e.to_string())))?;

    if cli.write_config {
        config.save(config_path)?;
        info!("Saved configuration to {}", config_path.display());
    }

    Ok(config)
}
