//! Whole-file TDI17 parsing.
//!
//! A TDI17 file is one header line, zero or more detail lines, and one
//! trailer line. Lines are dispatched by position: first line to the
//! header, last line to the trailer, everything between to detail records.
//! Parsing a file never fails on malformed data; every line's validation
//! failures are collected on its record and surfaced through
//! [`Tdi17File::errors`]. What happens to matched records afterwards
//! (short-name matching, persistence) is the caller's concern.

use crate::base::Tdi17Record;
use crate::error::{EftParseError, Result};
use crate::header::EftHeader;
use crate::record::EftRecord;
use crate::trailer::EftTrailer;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A fully parsed TDI17 file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tdi17File {
    /// The header line; `None` only for an empty input.
    pub header: Option<EftHeader>,

    /// The trailer line; `None` when the input has fewer than two lines.
    pub trailer: Option<EftTrailer>,

    /// The detail records, in file order.
    pub records: Vec<EftRecord>,
}

impl Tdi17File {
    /// Read and parse a TDI17 file from any source implementing `Read`.
    ///
    /// Fails only on I/O; malformed content is reported per line through
    /// [`Tdi17File::errors`].
    pub fn from_read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::parse(&content))
    }

    /// Parse TDI17 file content. Infallible: any input yields a file whose
    /// per-line problems are available through [`Tdi17File::errors`].
    pub fn parse(content: &str) -> Self {
        let lines: Vec<&str> = content.lines().collect();

        let mut header = None;
        let mut trailer = None;
        let mut records = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if index == 0 {
                header = Some(EftHeader::parse(line, index));
            } else if index == lines.len() - 1 {
                trailer = Some(EftTrailer::parse(line, index));
            } else {
                records.push(EftRecord::parse(line, index));
            }
        }

        Tdi17File { header, trailer, records }
    }

    /// True if any line in the file recorded a validation failure.
    pub fn has_errors(&self) -> bool {
        self.header.as_ref().map(|h| h.has_errors()).unwrap_or(false)
            || self.trailer.as_ref().map(|t| t.has_errors()).unwrap_or(false)
            || self.records.iter().any(|r| r.has_errors())
    }

    /// All validation failures in line order.
    pub fn errors(&self) -> Vec<&EftParseError> {
        let mut errors: Vec<&EftParseError> = Vec::new();
        if let Some(ref header) = self.header {
            errors.extend(header.errors());
        }
        for record in &self.records {
            errors.extend(record.errors());
        }
        if let Some(ref trailer) = self.trailer {
            errors.extend(trailer.errors());
        }
        errors
    }

    /// Sum of the CAD deposit amounts of all detail records that parsed.
    pub fn total_deposit_amount_cad(&self) -> Decimal {
        self.records
            .iter()
            .filter_map(|record| record.deposit_amount_cad)
            .sum()
    }

    /// True if the trailer's declared detail count matches the number of
    /// detail lines; `None` when the count did not parse.
    pub fn detail_count_matches_trailer(&self) -> Option<bool> {
        let declared = self.trailer.as_ref()?.number_of_details?;
        Some(declared == self.records.len() as i64)
    }

    /// True if the trailer's declared CAD total matches the sum of the
    /// parsed detail amounts; `None` when the total did not parse.
    pub fn total_matches_trailer(&self) -> Option<bool> {
        let declared = self.trailer.as_ref()?.total_deposit_amount?;
        Some(declared == self.total_deposit_amount_cad())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EftError;
    use crate::testutil::{factory_eft_header, factory_eft_record, factory_eft_trailer, EftRecordArgs};
    use crate::types::{HEADER_RECORD_TYPE, TRAILER_RECORD_TYPE};
    use pretty_assertions::assert_eq;

    fn sample_file(amounts: &[&'static str]) -> String {
        let mut lines = vec![factory_eft_header(
            HEADER_RECORD_TYPE,
            "20230814",
            "1601",
            "20230810",
            "20230810",
        )];
        for &amount in amounts {
            lines.push(factory_eft_record(EftRecordArgs {
                deposit_amount_cad: amount,
                ..EftRecordArgs::default()
            }));
        }
        let total: i64 = amounts.len() as i64 * 13500;
        lines.push(factory_eft_trailer(
            TRAILER_RECORD_TYPE,
            &amounts.len().to_string(),
            &total.to_string(),
        ));
        lines.join("\n")
    }

    #[test]
    fn test_parse_file() {
        let content = sample_file(&["13500", "13500"]);
        let file = Tdi17File::parse(&content);

        assert!(!file.has_errors());
        let header = file.header.as_ref().unwrap();
        let trailer = file.trailer.as_ref().unwrap();
        assert_eq!(header.base.record_type, "1");
        assert_eq!(trailer.base.record_type, "7");
        assert_eq!(trailer.index(), 3);
        assert_eq!(file.records.len(), 2);
        assert_eq!(file.records[0].index(), 1);
        assert_eq!(file.records[1].index(), 2);
    }

    #[test]
    fn test_parse_empty_file() {
        let file = Tdi17File::parse("");

        assert_eq!(file.header, None);
        assert_eq!(file.trailer, None);
        assert!(file.records.is_empty());
        assert!(!file.has_errors());
    }

    #[test]
    fn test_parse_file_aggregates_errors_in_line_order() {
        let lines = vec![
            factory_eft_header("X", "20230814", "1601", "20230810", "20230810"),
            " ".to_string(),
            factory_eft_trailer(TRAILER_RECORD_TYPE, "B", "13500"),
        ];
        let file = Tdi17File::parse(&lines.join("\n"));

        assert!(file.has_errors());
        let errors = file.errors();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].error, EftError::InvalidRecordType);
        assert_eq!(errors[0].index, Some(0));
        assert_eq!(errors[1].error, EftError::InvalidLineLength);
        assert_eq!(errors[1].index, Some(1));
        assert_eq!(errors[2].error, EftError::InvalidNumberOfDetails);
        assert_eq!(errors[2].index, Some(2));
    }

    #[test]
    fn test_from_read() {
        let content = sample_file(&["13500"]);
        let mut reader = content.as_bytes();
        let file = Tdi17File::from_read(&mut reader).unwrap();

        assert!(!file.has_errors());
        assert_eq!(file.records.len(), 1);
    }

    #[test]
    fn test_trailer_integrity_matches() {
        let file = Tdi17File::parse(&sample_file(&["13500", "13500"]));

        assert_eq!(file.total_deposit_amount_cad(), Decimal::new(27000, 0));
        assert_eq!(file.detail_count_matches_trailer(), Some(true));
        assert_eq!(file.total_matches_trailer(), Some(true));
    }

    #[test]
    fn test_trailer_integrity_mismatch() {
        let lines = vec![
            factory_eft_header(HEADER_RECORD_TYPE, "20230814", "1601", "20230810", "20230810"),
            factory_eft_record(EftRecordArgs::default()),
            factory_eft_trailer(TRAILER_RECORD_TYPE, "2", "99999"),
        ];
        let file = Tdi17File::parse(&lines.join("\n"));

        assert_eq!(file.detail_count_matches_trailer(), Some(false));
        assert_eq!(file.total_matches_trailer(), Some(false));
    }

    #[test]
    fn test_trailer_integrity_unknown_when_trailer_invalid() {
        let lines = vec![
            factory_eft_header(HEADER_RECORD_TYPE, "20230814", "1601", "20230810", "20230810"),
            factory_eft_record(EftRecordArgs::default()),
            factory_eft_trailer(TRAILER_RECORD_TYPE, "B", "ABC"),
        ];
        let file = Tdi17File::parse(&lines.join("\n"));

        assert_eq!(file.detail_count_matches_trailer(), None);
        assert_eq!(file.total_matches_trailer(), None);
    }
}
