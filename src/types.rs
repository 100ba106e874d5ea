//! Common constants and types shared by the TDI17 record parsers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Every well-formed TDI17 line is exactly this many characters.
pub const EXPECTED_LINE_LENGTH: usize = 139;

/// Date fields are formatted as YYYYMMDD.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Combined date/time fields are formatted as YYYYMMDDHHMM.
pub const DATE_TIME_FORMAT: &str = "%Y%m%d%H%M";

/// Record type tag of the single header line.
pub const HEADER_RECORD_TYPE: &str = "1";

/// Record type tag of a detail (transaction) line.
pub const TRANSACTION_RECORD_TYPE: &str = "2";

/// Record type tag of the single trailer line.
pub const TRAILER_RECORD_TYPE: &str = "7";

/// Default currency when the currency field is blank.
pub const CURRENCY_CAD: &str = "CAD";

/// Payment channel derived from the transaction description prefix.
///
/// The bank file carries no structured channel indicator; the channel is
/// recovered from the free-text description during classification. PAD and
/// unrecognized descriptions carry no short name type at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortNameType {
    /// Electronic funds transfer deposit.
    Eft,
    /// Wire transfer deposit.
    Wire,
}

impl ShortNameType {
    /// String representation as stored by the downstream matcher.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortNameType::Eft => "EFT",
            ShortNameType::Wire => "WIRE",
        }
    }
}

impl FromStr for ShortNameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EFT" => Ok(ShortNameType::Eft),
            "WIRE" => Ok(ShortNameType::Wire),
            _ => Err(format!("Invalid short name type: {}", s)),
        }
    }
}
