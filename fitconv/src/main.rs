use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use fitsheet_core::{ConvertConfig, Converter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod formatter;

#[derive(Parser)]
#[command(name = "fitconv")]
#[command(about = "Convert a weekly workout spreadsheet into a day-keyed JSON program", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the workout spreadsheet (overrides input.path)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output JSON file (overrides output.path)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,

    /// Number of caption rows above the exercises
    #[arg(long, value_name = "N")]
    header_rows: Option<usize>,

    /// Print the JSON program instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error converting data:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;

    if let Some(file) = &cli.file {
        config.input.path = Some(file.clone());
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.clone());
    }
    if let Some(sheet) = &cli.sheet {
        config.input.sheet = Some(sheet.clone());
    }
    if let Some(header_rows) = cli.header_rows {
        config.input.header_rows = header_rows;
    }

    // Nothing is written with --stdout, so the output path cannot clobber the input
    let checked = if cli.stdout {
        config.validate_input()
    } else {
        config.validate()
    };
    checked.context("Invalid configuration")?;
    let converter = Converter::with_config(config);

    if cli.stdout {
        let input = converter.config().input_path()?;
        let mut stdout = io::stdout().lock();
        converter.convert_to_writer(input, &mut stdout)?;
        writeln!(stdout)?;
    } else {
        let program = converter.run()?;
        formatter::print_summary(&converter.config().output_path(), &program);
    }

    Ok(())
}

/// Explicit config file, else `fitsheet.toml` in the working directory, else defaults
fn load_config(path: Option<&Path>) -> Result<ConvertConfig> {
    if let Some(config_path) = path {
        return ConvertConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    let default_config_path = PathBuf::from("fitsheet.toml");
    if default_config_path.exists() {
        ConvertConfig::from_file(&default_config_path).with_context(|| {
            format!(
                "Failed to load config from {}",
                default_config_path.display()
            )
        })
    } else {
        Ok(ConvertConfig::default())
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
