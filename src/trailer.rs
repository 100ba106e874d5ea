//! TDI17 trailer record (record type "7").
//!
//! The single trailer line declares the number of detail records and the
//! total deposit amount in CAD, both right justified and left zero filled.
//! Layout (0-based, end-exclusive): record type [0,1), number of details
//! [1,7), total deposit amount [7,21).

use crate::base::{EftBase, Tdi17Record};
use crate::error::{EftError, EftParseError};
use crate::types::TRAILER_RECORD_TYPE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The parsed trailer line of a TDI17 file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EftTrailer {
    /// Raw line, index, record type and accumulated errors.
    pub base: EftBase,

    /// Declared count of detail records in the file.
    pub number_of_details: Option<i64>,

    /// Declared total deposit amount in CAD, in cents.
    pub total_deposit_amount: Option<Decimal>,
}

impl EftTrailer {
    /// Parse a trailer line. Always returns a trailer; malformed input is
    /// reported through the record's error list, never as a failure.
    pub fn parse(content: &str, index: usize) -> Self {
        let mut trailer = EftTrailer {
            base: EftBase::new(content, index),
            number_of_details: None,
            total_deposit_amount: None,
        };
        trailer.process();
        trailer
    }

    fn process(&mut self) {
        if !self.base.is_valid_length() {
            self.base.add_error(EftParseError::new(EftError::InvalidLineLength));
            return;
        }

        self.base.record_type = self.base.extract_value(0, 1);
        self.base.validate_record_type(TRAILER_RECORD_TYPE);

        let number_of_details = self.base.extract_value(1, 7);
        self.number_of_details = self.base.parse_int(&number_of_details, EftError::InvalidNumberOfDetails);

        let total_deposit_amount = self.base.extract_value(7, 21);
        self.total_deposit_amount = self
            .base
            .parse_decimal(&total_deposit_amount, EftError::InvalidTotalDepositAmount);
    }
}

impl Tdi17Record for EftTrailer {
    fn base(&self) -> &EftBase {
        &self.base
    }
}
