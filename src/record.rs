//! TDI17 detail record (record type "2") and payment channel classification.
//!
//! A detail line describes one bank deposit. Layout (0-based, end-exclusive,
//! against a 139-character line):
//!
//! | Field                   | Columns   |
//! |-------------------------|-----------|
//! | record type             | [0,1)     |
//! | ministry code           | [1,3)     |
//! | program code            | [3,7)     |
//! | deposit date            | [7,15)    |
//! | location id             | [15,20)   |
//! | deposit time            | [20,24)   |
//! | transaction sequence    | [24,27)   |
//! | transaction description | [27,67)   |
//! | deposit amount          | [67,80)   |
//! | currency                | [80,82)   |
//! | exchange adj amount     | [82,95)   |
//! | deposit amount CAD      | [95,108)  |
//! | dest bank number        | [108,112) |
//! | batch number            | [112,121) |
//! | jv type                 | [121,122) |
//! | jv number               | [122,131) |
//! | transaction date        | [131,139) |
//!
//! The file carries no structured payment-channel indicator, so the channel
//! (EFT, wire, PAD, federal payment) is recovered from the description's
//! leading text during parsing.

use crate::base::{EftBase, Tdi17Record};
use crate::error::{EftError, EftParseError};
use crate::types::{ShortNameType, CURRENCY_CAD, TRANSACTION_RECORD_TYPE};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Description prefix of a federal payment deposit. These carry no usable
/// short name, so one is generated downstream.
pub const FEDERAL_PAYMENT_DESCRIPTION_PATTERN: &str = "FEDERAL PAYMENT CANADA";

/// Description prefix of a wire transfer deposit.
pub const WIRE_DESCRIPTION_PATTERN: &str = "FUNDS TRANSFER CR TT";

/// Description prefix of a generic EFT deposit.
pub const EFT_DESCRIPTION_PATTERN: &str = "MISC PAYMENT";

/// Description prefix of a PAD deposit. A literal extension of the generic
/// EFT prefix; PAD lines are matched downstream by account number instead.
pub const PAD_DESCRIPTION_PATTERN: &str = "MISC PAYMENT BCONLINE";

/// Patterns whose match means a short name must be synthesized downstream.
pub const GENERATE_SHORT_NAME_PATTERNS: &[&str] = &[FEDERAL_PAYMENT_DESCRIPTION_PATTERN];

/// Wire transfer description patterns, most specific first.
pub const EFT_WIRE_PATTERNS: &[&str] = &[WIRE_DESCRIPTION_PATTERN];

/// Generic EFT description patterns.
pub const EFT_PATTERNS: &[&str] = &[EFT_DESCRIPTION_PATTERN];

/// PAD description patterns, excluded from generic EFT classification.
pub const EFT_PAD_PATTERNS: &[&str] = &[PAD_DESCRIPTION_PATTERN];

/// The parsed detail (transaction) line of a TDI17 file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EftRecord {
    /// Raw line, index, record type and accumulated errors.
    pub base: EftBase,

    /// Ministry code.
    pub ministry_code: String,

    /// Program code.
    pub program_code: String,

    /// Deposit date and time; time defaults to 00:00 when blank.
    pub deposit_datetime: Option<NaiveDateTime>,

    /// Location ID.
    pub location_id: String,

    /// Transaction sequence number (optional).
    pub transaction_sequence: String,

    /// Free-text description; also the classification input. A recognized
    /// channel prefix is stripped from it during classification.
    pub transaction_description: String,

    /// Deposit amount in the specified currency, in cents.
    pub deposit_amount: Option<Decimal>,

    /// Currency code; blank in the file means CAD.
    pub currency: String,

    /// Exchange adjustment amount, in cents.
    pub exchange_adj_amount: Option<Decimal>,

    /// Deposit amount in CAD, in cents.
    pub deposit_amount_cad: Option<Decimal>,

    /// Destination bank number.
    pub dest_bank_number: String,

    /// Batch number; populated only when the deposit was posted to the GL.
    pub batch_number: String,

    /// JV type, "I" intra or "J" inter; mandatory if a batch is specified.
    pub jv_type: String,

    /// JV number; mandatory if a batch is specified.
    pub jv_number: String,

    /// Transaction date (optional).
    pub transaction_date: Option<NaiveDate>,

    /// Payment channel derived from the description prefix; `None` for PAD
    /// and unrecognized descriptions.
    pub short_name_type: Option<ShortNameType>,

    /// True only for federal payments, where no pre-existing short name can
    /// match and one must be generated downstream.
    pub generate_short_name: bool,
}

impl EftRecord {
    /// Parse a detail line. Always returns a record; malformed input is
    /// reported through the record's error list, never as a failure.
    pub fn parse(content: &str, index: usize) -> Self {
        let mut record = EftRecord {
            base: EftBase::new(content, index),
            ministry_code: String::new(),
            program_code: String::new(),
            deposit_datetime: None,
            location_id: String::new(),
            transaction_sequence: String::new(),
            transaction_description: String::new(),
            deposit_amount: None,
            currency: String::new(),
            exchange_adj_amount: None,
            deposit_amount_cad: None,
            dest_bank_number: String::new(),
            batch_number: String::new(),
            jv_type: String::new(),
            jv_number: String::new(),
            transaction_date: None,
            short_name_type: None,
            generate_short_name: false,
        };
        record.process();
        record
    }

    /// Resolve the exchange currency: a blank field means CAD, anything
    /// else passes through verbatim.
    pub fn resolve_currency(currency: &str) -> String {
        if currency.trim().is_empty() {
            return CURRENCY_CAD.to_string();
        }
        currency.to_string()
    }

    fn process(&mut self) {
        // A wrong-length line is abandoned with a single length error.
        if !self.base.is_valid_length() {
            self.base.add_error(EftParseError::new(EftError::InvalidLineLength));
            return;
        }

        self.base.record_type = self.base.extract_value(0, 1);
        self.base.validate_record_type(TRANSACTION_RECORD_TYPE);

        self.ministry_code = self.base.extract_value(1, 3);
        self.program_code = self.base.extract_value(3, 7);

        // Deposit time is optional; default to 0000 when not provided.
        let mut deposit_time = self.base.extract_value(20, 24);
        if deposit_time.is_empty() {
            deposit_time = "0000".to_string();
        }

        let deposit_date = self.base.extract_value(7, 15);
        self.deposit_datetime = self.base.parse_datetime(
            &format!("{}{}", deposit_date, deposit_time),
            EftError::InvalidDepositDatetime,
        );
        self.location_id = self.base.extract_value(15, 20);
        self.transaction_sequence = self.base.extract_value(24, 27);

        // The description is where the short name for matching comes from,
        // so it is required.
        self.transaction_description = self.base.extract_value(27, 67);
        if self.transaction_description.is_empty() {
            self.base.add_error(EftParseError::new(EftError::AccountShortNameRequired));
        }
        self.classify_transaction_description();

        let deposit_amount = self.base.extract_value(67, 80);
        self.deposit_amount = self.base.parse_decimal(&deposit_amount, EftError::InvalidDepositAmount);
        self.currency = Self::resolve_currency(&self.base.extract_value(80, 82));
        let exchange_adj_amount = self.base.extract_value(82, 95);
        self.exchange_adj_amount = self
            .base
            .parse_decimal(&exchange_adj_amount, EftError::InvalidExchangeAdjAmount);
        let deposit_amount_cad = self.base.extract_value(95, 108);
        self.deposit_amount_cad = self
            .base
            .parse_decimal(&deposit_amount_cad, EftError::InvalidDepositAmountCad);
        self.dest_bank_number = self.base.extract_value(108, 112);
        self.batch_number = self.base.extract_value(112, 121);
        self.jv_type = self.base.extract_value(121, 122);
        self.jv_number = self.base.extract_value(122, 131);

        // Transaction date is optional; parse only when present.
        let transaction_date = self.base.extract_value(131, 139);
        if !transaction_date.is_empty() {
            self.transaction_date = self.base.parse_date(&transaction_date, EftError::InvalidTransactionDate);
        }
    }

    /// Classify the payment channel from the description prefix.
    ///
    /// Evaluated in strict priority order; the first matching rule wins.
    /// Wire and federal prefixes are checked before the generic EFT prefix
    /// because they are more specific, and the PAD prefix (a literal
    /// extension of the generic EFT prefix) is excluded from rule 3 so PAD
    /// lines stay unclassified for the downstream account-number matcher.
    /// Invoked exactly once, from `process`: it strips the matched prefix
    /// from the description, so a second invocation would no longer find it.
    fn classify_transaction_description(&mut self) {
        if self.transaction_description.is_empty() {
            return;
        }

        if let Some(pattern) =
            EftBase::find_matching_pattern(GENERATE_SHORT_NAME_PATTERNS, &self.transaction_description)
        {
            self.short_name_type = Some(ShortNameType::Eft);
            self.transaction_description = pattern.trim().to_string();
            self.generate_short_name = true;
            return;
        }

        if let Some(pattern) = EftBase::find_matching_pattern(EFT_WIRE_PATTERNS, &self.transaction_description) {
            self.short_name_type = Some(ShortNameType::Wire);
            self.transaction_description = self.transaction_description[pattern.len()..].trim().to_string();
            return;
        }

        let is_pad = EftBase::find_matching_pattern(EFT_PAD_PATTERNS, &self.transaction_description).is_some();
        if !is_pad {
            if let Some(pattern) = EftBase::find_matching_pattern(EFT_PATTERNS, &self.transaction_description) {
                self.short_name_type = Some(ShortNameType::Eft);
                self.transaction_description = self.transaction_description[pattern.len()..].trim().to_string();
            }
        }
        // PAD and unrecognized descriptions are left untouched for the
        // downstream matcher.
    }
}

impl Tdi17Record for EftRecord {
    fn base(&self) -> &EftBase {
        &self.base
    }
}
