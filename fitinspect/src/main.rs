use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::*;
use fitsheet_core::config::InputConfig;
use fitsheet_core::normalize::forward_fill;
use fitsheet_core::reader::{self, SheetTable};
use fitsheet_core::{Column, Field, Row};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fitinspect")]
#[command(about = "Show the columns and forward-filled rows of a workout spreadsheet")]
#[command(version)]
struct Cli {
    /// Path to the workout spreadsheet
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,

    /// Number of caption rows above the exercises
    #[arg(long, value_name = "N", default_value_t = 1)]
    header_rows: usize,

    /// Number of rows to show
    #[arg(short = 'n', long, default_value_t = 50)]
    rows: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON output
    Json,
}

#[derive(Serialize)]
struct Inspection<'a> {
    sheet: &'a str,
    columns: &'a [String],
    rows: &'a [Row],
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error reading excel:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = InputConfig {
        path: Some(cli.file.clone()),
        sheet: cli.sheet.clone(),
        header_rows: cli.header_rows,
    };
    let table = reader::read_table(&cli.file, &options)?;
    let rows: Vec<Row> = forward_fill(table.rows.iter().cloned())
        .take(cli.rows)
        .collect();

    match cli.format {
        OutputFormat::Human => print_human(&table, &rows),
        OutputFormat::Json => {
            let output = Inspection {
                sheet: &table.sheet_name,
                columns: &table.columns,
                rows: &rows,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_human(table: &SheetTable, rows: &[Row]) {
    println!("{} {:?}", "Columns:".bold(), table.columns);
    println!("{}", format!("First {} rows:", rows.len()).bold());

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| Column::ALL.iter().map(|&c| display_cell(row.get(c))).collect())
        .collect();

    let index_width = rows.len().saturating_sub(1).to_string().len();
    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, caption)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(caption.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut header = " ".repeat(index_width);
    for (caption, width) in table.columns.iter().zip(&widths) {
        header.push_str("  ");
        header.push_str(&pad_left(caption, *width));
    }
    println!("{}", header.cyan());

    for (index, row) in cells.iter().enumerate() {
        let mut line = pad_left(&index.to_string(), index_width);
        for (value, width) in row.iter().zip(&widths) {
            line.push_str("  ");
            line.push_str(&pad_left(value, *width));
        }
        println!("{}", line);
    }
}

fn display_cell(field: &Field) -> String {
    if field.is_blank() {
        "NaN".to_string()
    } else {
        field.to_string()
    }
}

// Right-aligns by character count so Turkish captions line up
fn pad_left(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", " ".repeat(width.saturating_sub(len)), value)
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
