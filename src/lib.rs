//! TDI17 EFT Parsing Library
//!
//! A library for parsing and validating TDI17 bank deposit files, the
//! fixed-width format produced by the Corporate Accounting System for
//! electronic funds transfer reconciliation.
//!
//! # File structure
//!
//! - **Header** (record type "1"): file creation timestamp and deposit
//!   date range
//! - **Detail** (record type "2"): one bank deposit per line, including
//!   amounts, GL posting references and a free-text description that
//!   encodes the payment channel (EFT, wire, PAD, federal payment)
//! - **Trailer** (record type "7"): declared detail count and CAD total
//!
//! # Error model
//!
//! Malformed lines are data, not failures: every record parses to
//! completion and accumulates its validation problems in an error list, so
//! a batch job can report every bad line in a file at once instead of
//! stopping at the first. See [`error::EftParseError`].
//!
//! # Examples
//!
//! ## Parsing a TDI17 file
//!
//! ```no_run
//! use std::fs::File;
//! use tdi17::Tdi17File;
//!
//! let mut file = File::open("deposits.tdi17")?;
//! let parsed = Tdi17File::from_read(&mut file)?;
//! for error in parsed.errors() {
//!     eprintln!("line {}: {}", error.index.unwrap_or(0) + 1, error.message);
//! }
//! # Ok::<(), tdi17::Error>(())
//! ```
//!
//! ## Parsing a single detail line
//!
//! ```no_run
//! use tdi17::{EftRecord, ShortNameType};
//!
//! let line = std::fs::read_to_string("detail_line.txt")?;
//! let record = EftRecord::parse(line.trim_end_matches('\n'), 4);
//! if record.short_name_type == Some(ShortNameType::Wire) {
//!     println!("wire deposit from {}", record.transaction_description);
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod base;
pub mod error;
pub mod file;
pub mod header;
pub mod record;
pub mod trailer;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use base::{EftBase, Tdi17Record};
pub use error::{EftError, EftParseError, Error, Result};
pub use file::Tdi17File;
pub use header::EftHeader;
pub use record::EftRecord;
pub use trailer::EftTrailer;
pub use types::ShortNameType;
