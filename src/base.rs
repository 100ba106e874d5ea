//! Shared line-record state and fixed-width field parsing primitives.
//!
//! Every TDI17 record type (header, detail, trailer) embeds an [`EftBase`]
//! that owns the raw line, its position in the source file, and the list of
//! validation failures found while parsing it. The parsing helpers never
//! panic and never return a hard error: a failed field parse records an
//! [`EftParseError`] and yields `None`, so a single malformed line produces
//! a complete error report rather than just its first problem.

use crate::error::{EftError, EftParseError};
use crate::types::{DATE_FORMAT, DATE_TIME_FORMAT, EXPECTED_LINE_LENGTH};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Common state of one parsed TDI17 line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EftBase {
    /// The raw, unmodified line.
    pub content: String,

    /// 0-based position of the line in the source file.
    pub index: usize,

    /// Record type tag from column 0; "1" header, "2" detail, "7" trailer.
    pub record_type: String,

    /// Validation failures in the order they were encountered.
    pub errors: Vec<EftParseError>,
}

impl EftBase {
    /// Wrap a raw line. Field extraction and validation are driven by the
    /// concrete record type, not here.
    pub fn new(content: &str, index: usize) -> Self {
        EftBase {
            content: content.to_string(),
            index,
            record_type: String::new(),
            errors: Vec::new(),
        }
    }

    /// True if the line is exactly the expected length. Checked before any
    /// field extraction; a wrong-length line is abandoned with a single
    /// length error.
    pub fn is_valid_length(&self) -> bool {
        self.content.chars().count() == EXPECTED_LINE_LENGTH
    }

    /// Record an error if the record type tag does not match the expected
    /// value. Does not stop further field parsing: a line with the wrong
    /// tag may still have parseable fields worth reporting.
    pub fn validate_record_type(&mut self, expected: &str) {
        if self.record_type != expected {
            self.add_error(EftParseError::new(EftError::InvalidRecordType));
        }
    }

    /// Extract the column range `[start, end)` with surrounding whitespace
    /// stripped. Out-of-range indexes yield whatever substring is available,
    /// possibly empty; this never panics.
    pub fn extract_value(&self, start: usize, end: usize) -> String {
        let end = end.min(self.content.len());
        if start >= end {
            return String::new();
        }
        match self.content.get(start..end) {
            Some(slice) => slice.trim().to_string(),
            None => String::new(),
        }
    }

    /// Parse a TDI17 money field. The rightmost character of a money field
    /// is either blank (positive) or a literal minus sign; a trailing minus
    /// is moved in front of the digits before conversion. Returns `None`
    /// and records `error` on failure.
    pub fn parse_decimal(&mut self, value: &str, error: EftError) -> Option<Decimal> {
        let normalized = match value.strip_suffix('-') {
            Some(digits) => format!("-{}", digits),
            None => value.to_string(),
        };

        match Decimal::from_str(&normalized) {
            Ok(result) => Some(result),
            Err(_) => {
                self.add_error(EftParseError::new(error));
                None
            }
        }
    }

    /// Parse an integer field; `None` plus a recorded error on failure.
    pub fn parse_int(&mut self, value: &str, error: EftError) -> Option<i64> {
        match value.parse::<i64>() {
            Ok(result) => Some(result),
            Err(_) => {
                self.add_error(EftParseError::new(error));
                None
            }
        }
    }

    /// Parse a YYYYMMDD date field; `None` plus a recorded error on failure.
    pub fn parse_date(&mut self, value: &str, error: EftError) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(result) => Some(result),
            Err(_) => {
                self.add_error(EftParseError::new(error));
                None
            }
        }
    }

    /// Parse a YYYYMMDDHHMM date/time field; `None` plus a recorded error
    /// on failure.
    pub fn parse_datetime(&mut self, value: &str, error: EftError) -> Option<NaiveDateTime> {
        match NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT) {
            Ok(result) => Some(result),
            Err(_) => {
                self.add_error(EftParseError::new(error));
                None
            }
        }
    }

    /// Return the first pattern that `value` starts with. Pattern order
    /// matters when prefixes overlap: first match wins.
    pub fn find_matching_pattern(patterns: &[&'static str], value: &str) -> Option<&'static str> {
        patterns.iter().find(|pattern| value.starts_with(*pattern)).copied()
    }

    /// Append a validation failure, stamping it with this record's line
    /// index. All error accumulation funnels through here so every error is
    /// consistently correlated to its owning line.
    pub fn add_error(&mut self, mut error: EftParseError) {
        error.index = Some(self.index);
        self.errors.push(error);
    }

    /// True if any validation failure was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The human-readable messages, in the order the failures were found.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.message.clone()).collect()
    }
}

/// Accessor seam shared by all TDI17 record types.
pub trait Tdi17Record {
    /// The common line state of this record.
    fn base(&self) -> &EftBase;

    /// 0-based source line number.
    fn index(&self) -> usize {
        self.base().index
    }

    /// True if parsing this line recorded any validation failure.
    fn has_errors(&self) -> bool {
        self.base().has_errors()
    }

    /// Validation failures in the order encountered.
    fn errors(&self) -> &[EftParseError] {
        &self.base().errors
    }
}
