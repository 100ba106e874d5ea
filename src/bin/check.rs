//! TDI17 Check - CLI tool for verifying trailer totals against detail records.

use clap::Parser;
use std::fs::File;
use std::io;
use tdi17::{Result, Tdi17File};

#[derive(Parser)]
#[command(name = "tdi17_check")]
#[command(about = "Verify a TDI17 file's trailer count and CAD total against its detail records", long_about = None)]
struct Cli {
    /// Input file path (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,
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

    let mut ok = true;

    if parsed.has_errors() {
        println!("{} validation error(s); run tdi17_validate for details", parsed.errors().len());
        ok = false;
    }

    match parsed.detail_count_matches_trailer() {
        Some(true) => println!("detail count matches trailer ({})", parsed.records.len()),
        Some(false) => {
            println!(
                "detail count mismatch: trailer declares {:?}, file has {}",
                parsed.trailer.as_ref().and_then(|t| t.number_of_details),
                parsed.records.len()
            );
            ok = false;
        }
        None => {
            println!("detail count unknown: trailer missing or unparseable");
            ok = false;
        }
    }

    match parsed.total_matches_trailer() {
        Some(true) => println!("CAD total matches trailer ({})", parsed.total_deposit_amount_cad()),
        Some(false) => {
            println!(
                "CAD total mismatch: trailer declares {:?}, details sum to {}",
                parsed.trailer.as_ref().and_then(|t| t.total_deposit_amount),
                parsed.total_deposit_amount_cad()
            );
            ok = false;
        }
        None => {
            println!("CAD total unknown: trailer missing or unparseable");
            ok = false;
        }
    }

    Ok(ok)
}
