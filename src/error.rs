//! Error types for the TDI17 parsing library.
//!
//! Two layers of errors exist here. [`Error`] is the hard failure type for
//! operations that can genuinely fail (I/O, CSV output). [`EftError`] and
//! [`EftParseError`] describe malformed *data* inside a TDI17 line: they are
//! accumulated on the owning record and never propagated as failures, so a
//! batch job can report every bad line in a file instead of stopping at the
//! first one.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures: conditions outside the data itself.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing a CSV error report.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Validation failure categories for a TDI17 line.
///
/// The `Display` text is the human-readable message surfaced in error
/// reports and operational notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EftError {
    #[error("Invalid line length")]
    InvalidLineLength,

    #[error("Invalid record type")]
    InvalidRecordType,

    #[error("Invalid file creation date time")]
    InvalidCreationDatetime,

    #[error("Invalid deposit start date")]
    InvalidDepositStartDate,

    #[error("Invalid deposit end date")]
    InvalidDepositEndDate,

    #[error("Invalid deposit date time")]
    InvalidDepositDatetime,

    #[error("Invalid deposit amount")]
    InvalidDepositAmount,

    #[error("Invalid exchange adjustment amount")]
    InvalidExchangeAdjAmount,

    #[error("Invalid deposit amount in CAD")]
    InvalidDepositAmountCad,

    #[error("Invalid transaction date")]
    InvalidTransactionDate,

    #[error("Invalid number of details")]
    InvalidNumberOfDetails,

    #[error("Invalid total deposit amount")]
    InvalidTotalDepositAmount,

    #[error("Account short name is required")]
    AccountShortNameRequired,
}

/// A single validation failure, tied to the source line that produced it.
///
/// Created the moment a field fails to parse or a structural invariant is
/// violated; immutable once added to a record. The line index is stamped by
/// the owning record so every error correlates back to its line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EftParseError {
    /// The failure category.
    pub error: EftError,

    /// 0-based line number in the source file, set when the error is added
    /// to its owning record.
    pub index: Option<usize>,

    /// Human-readable message.
    pub message: String,
}

impl EftParseError {
    /// Create a parse error with no line index yet; `EftBase::add_error`
    /// stamps the index of the owning record.
    pub fn new(error: EftError) -> Self {
        EftParseError {
            error,
            index: None,
            message: error.to_string(),
        }
    }
}
