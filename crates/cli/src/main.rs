//! Data quality scorer CLI
//!
//! Scores a CSV or Excel file on usability, metadata, freshness,
//! completeness and accessibility.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use dataquality_cli::commands::score::ScoreOptions;
use dataquality_cli::commands::{definitions, score, CommandContext};
use dataquality_cli::config::Config;
use dataquality_cli::output::{colors, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};
use dataquality_common::{init_tracing, AppConfig};

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dq-score")]
#[command(author, version, about = "Data quality scorer for tabular datasets")]
#[command(long_about = "Scores a CSV or Excel dataset on five quality metrics.\n\n\
    Usability and completeness are computed from the data; metadata, freshness and \
    accessibility use fixed placeholder values.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (overrides preferences)
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<CliOutputFormat>,

    /// Application configuration file
    #[arg(long, global = true, env = "DATAQUALITY_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a CSV or Excel file
    #[command(alias = "s")]
    Score {
        /// Path to the dataset (.csv, .xls, .xlsx, ...)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Worksheet to read (defaults to the first sheet)
        #[arg(long)]
        sheet: Option<String>,

        /// CSV field delimiter
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Number of rows shown in the preview (0 hides it)
        #[arg(short, long)]
        preview: Option<usize>,

        /// Show the usability breakdown
        #[arg(long)]
        detailed: bool,

        /// Do not print the feature definitions
        #[arg(long)]
        no_definitions: bool,
    },

    /// Show what each metric measures
    #[command(alias = "defs")]
    Definitions,

    /// Manage CLI preferences
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current preferences
    Show,
    /// Set a preference
    Set {
        /// Preference key
        key: String,
        /// Preference value
        value: String,
    },
    /// Get a preference
    Get {
        /// Preference key
        key: String,
    },
    /// Reset preferences to defaults
    Reset,
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "dq-score", &mut std::io::stdout());
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let verbose = cli.verbose;
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if verbose {
            eprintln!("\n{}", "Backtrace:".dimmed());
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions need no configuration
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let mut config = Config::load()?;
    if !config.colored {
        colored::control::set_override(false);
    }
    if let Some(format) = cli.format {
        config.output_format = format.into();
    }

    let app_config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let log_level = if cli.verbose || config.debug {
        "debug"
    } else {
        app_config.telemetry.log_level.as_str()
    };
    init_tracing(log_level, app_config.telemetry.json_logging)?;

    let mut ctx = CommandContext::new(config, app_config);

    match cli.command {
        Commands::Score {
            file,
            sheet,
            delimiter,
            preview,
            detailed,
            no_definitions,
        } => score::run(
            &ctx,
            ScoreOptions {
                file,
                sheet,
                delimiter,
                preview,
                detailed,
                no_definitions,
            },
        ),

        Commands::Definitions => definitions::show(&ctx),

        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => show_config(&ctx),
            Some(ConfigCommands::Set { key, value }) => {
                ctx.config.set(&key, &value)?;
                println!("{} {} = {}", colors::success("Saved"), key, value);
                Ok(())
            }
            Some(ConfigCommands::Get { key }) => {
                let value = ctx
                    .config
                    .get(&key)
                    .with_context(|| format!("Unknown configuration key: {}", key))?;
                println!("{}", value);
                Ok(())
            }
            Some(ConfigCommands::Reset) => {
                ctx.config.reset()?;
                println!("{}", colors::success("Preferences reset to defaults"));
                Ok(())
            }
        },

        // Handled before configuration is loaded
        Commands::Completions { .. } => Ok(()),
    }
}

fn show_config(ctx: &CommandContext) -> Result<()> {
    match ctx.output_format() {
        OutputFormat::Json => println!("{}", JsonFormatter::format(&ctx.config)?),
        OutputFormat::Plain => println!("{}", PlainFormatter::format(&ctx.config)?),
        OutputFormat::Table => {
            let items = Config::KEYS
                .iter()
                .map(|key| (*key, ctx.config.get(key).unwrap_or_default()))
                .collect();
            println!("{}", TableFormatter::key_value(items));
            println!(
                "{}",
                colors::dim(&format!("File: {}", Config::config_file()?.display()))
            );
        }
    }
    Ok(())
}
