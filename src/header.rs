//! TDI17 header record (record type "1").
//!
//! The single header line carries the file creation timestamp and the
//! deposit date range covered by the file. Layout (0-based, end-exclusive):
//!
//! | Field          | Columns  |
//! |----------------|----------|
//! | record type    | [0,1)    |
//! | creation date  | [16,24)  |
//! | creation time  | [41,45)  |
//! | deposit from   | [69,77)  |
//! | deposit to     | [89,97)  |
//!
//! The literal label text between fields is not validated.

use crate::base::{EftBase, Tdi17Record};
use crate::error::{EftError, EftParseError};
use crate::types::HEADER_RECORD_TYPE;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The parsed header line of a TDI17 file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EftHeader {
    /// Raw line, index, record type and accumulated errors.
    pub base: EftBase,

    /// File creation date and time.
    pub creation_datetime: Option<NaiveDateTime>,

    /// Start of the deposit date range.
    pub starting_deposit_date: Option<NaiveDate>,

    /// End of the deposit date range.
    pub ending_deposit_date: Option<NaiveDate>,
}

impl EftHeader {
    /// Parse a header line. Always returns a header; malformed input is
    /// reported through the record's error list, never as a failure.
    pub fn parse(content: &str, index: usize) -> Self {
        let mut header = EftHeader {
            base: EftBase::new(content, index),
            creation_datetime: None,
            starting_deposit_date: None,
            ending_deposit_date: None,
        };
        header.process();
        header
    }

    fn process(&mut self) {
        if !self.base.is_valid_length() {
            self.base.add_error(EftParseError::new(EftError::InvalidLineLength));
            return;
        }

        self.base.record_type = self.base.extract_value(0, 1);
        self.base.validate_record_type(HEADER_RECORD_TYPE);

        let creation_date = self.base.extract_value(16, 24);
        let creation_time = self.base.extract_value(41, 45);
        self.creation_datetime = self.base.parse_datetime(
            &format!("{}{}", creation_date, creation_time),
            EftError::InvalidCreationDatetime,
        );

        let start_date = self.base.extract_value(69, 77);
        self.starting_deposit_date = self.base.parse_date(&start_date, EftError::InvalidDepositStartDate);

        let end_date = self.base.extract_value(89, 97);
        self.ending_deposit_date = self.base.parse_date(&end_date, EftError::InvalidDepositEndDate);
    }
}

impl Tdi17Record for EftHeader {
    fn base(&self) -> &EftBase {
        &self.base
    }
}
