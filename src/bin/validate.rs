//! TDI17 Validate - CLI tool for parsing a TDI17 file and reporting errors.

use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io;
use tdi17::{Result, Tdi17File};

#[derive(Parser)]
#[command(name = "tdi17_validate")]
#[command(about = "Parse a TDI17 deposit file and report validation errors", long_about = None)]
struct Cli {
    /// Input file path (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Write the error list as CSV to this path
    #[arg(long = "errors-csv")]
    errors_csv: Option<String>,
}

/// One row of the CSV error report.
#[derive(Serialize)]
struct ErrorRow<'a> {
    line: usize,
    code: String,
    message: &'a str,
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let parsed = if let Some(ref input_path) = cli.input {
        let mut file = File::open(input_path)?;
        Tdi17File::from_read(&mut file)?
    } else {
        let mut stdin = io::stdin();
        Tdi17File::from_read(&mut stdin)?
    };

    print_summary(&parsed);

    if let Some(ref csv_path) = cli.errors_csv {
        write_errors_csv(&parsed, csv_path)?;
    }

    Ok(!parsed.has_errors())
}

fn print_summary(parsed: &Tdi17File) {
    match parsed.header {
        Some(ref header) => {
            println!("header: creation {:?}", header.creation_datetime);
            println!(
                "        deposits {:?} to {:?}",
                header.starting_deposit_date, header.ending_deposit_date
            );
        }
        None => println!("header: missing"),
    }

    println!("detail records: {}", parsed.records.len());

    match parsed.trailer {
        Some(ref trailer) => println!(
            "trailer: {:?} details, total {:?}",
            trailer.number_of_details, trailer.total_deposit_amount
        ),
        None => println!("trailer: missing"),
    }

    let errors = parsed.errors();
    if errors.is_empty() {
        println!("no validation errors");
    } else {
        println!("{} validation error(s):", errors.len());
        for error in errors {
            println!("  line {}: {}", error.index.map(|i| i + 1).unwrap_or(0), error.message);
        }
    }
}

fn write_errors_csv(parsed: &Tdi17File, path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_writer(File::create(path)?);

    for error in parsed.errors() {
        writer.serialize(ErrorRow {
            line: error.index.map(|i| i + 1).unwrap_or(0),
            code: format!("{:?}", error.error),
            message: &error.message,
        })?;
    }

    writer.flush()?;
    Ok(())
}
