//! Test factories producing TDI17-formatted lines.

use crate::types::EXPECTED_LINE_LENGTH;

/// Arguments for [`factory_eft_record`]; defaults form a valid detail line.
pub struct EftRecordArgs {
    pub record_type: &'static str,
    pub ministry_code: &'static str,
    pub program_code: &'static str,
    pub deposit_date: &'static str,
    pub deposit_time: &'static str,
    pub location_id: &'static str,
    pub transaction_sequence: &'static str,
    pub transaction_description: &'static str,
    pub deposit_amount: &'static str,
    pub currency: &'static str,
    pub exchange_adj_amount: &'static str,
    pub deposit_amount_cad: &'static str,
    pub destination_bank_number: &'static str,
    pub batch_number: &'static str,
    pub jv_type: &'static str,
    pub jv_number: &'static str,
    pub transaction_date: &'static str,
}

impl Default for EftRecordArgs {
    fn default() -> Self {
        EftRecordArgs {
            record_type: "2",
            ministry_code: "AT",
            program_code: "0146",
            deposit_date: "20230810",
            deposit_time: "0000",
            location_id: "85004",
            transaction_sequence: "001",
            transaction_description: "DEPOSIT          26",
            deposit_amount: "13500",
            currency: "",
            exchange_adj_amount: "0",
            deposit_amount_cad: "13500",
            destination_bank_number: "0003",
            batch_number: "002400986",
            jv_type: "I",
            jv_number: "002425669",
            transaction_date: "",
        }
    }
}

/// Produce a TDI17-formatted header line.
pub fn factory_eft_header(
    record_type: &str,
    file_creation_date: &str,
    file_creation_time: &str,
    deposit_start_date: &str,
    deposit_end_date: &str,
) -> String {
    let line = format!(
        "{}CREATION DATE: {}CREATION TIME:   {}DEPOSIT DATE(S) FROM:   {} TO DATE :  {}",
        record_type, file_creation_date, file_creation_time, deposit_start_date, deposit_end_date
    );
    pad_line_length(&line)
}

/// Produce a TDI17-formatted trailer line.
pub fn factory_eft_trailer(record_type: &str, number_of_details: &str, total_deposit_amount: &str) -> String {
    let total_deposit_amount = transform_money_string(total_deposit_amount);
    let line = format!(
        "{}{}{}",
        record_type,
        left_pad_zero(number_of_details, 6),
        left_pad_zero(&total_deposit_amount, 14)
    );
    pad_line_length(&line)
}

/// Produce a TDI17-formatted detail (transaction) line.
pub fn factory_eft_record(args: EftRecordArgs) -> String {
    let deposit_amount = transform_money_string(args.deposit_amount);
    let exchange_adj_amount = transform_money_string(args.exchange_adj_amount);
    let deposit_amount_cad = transform_money_string(args.deposit_amount_cad);

    let line = format!(
        "{}{}{}{}{}{}{}{}{}{}{}{}{}{}{}{}{}",
        args.record_type,
        args.ministry_code,
        args.program_code,
        args.deposit_date,
        args.location_id,
        right_pad_space(args.deposit_time, 4),
        args.transaction_sequence,
        right_pad_space(args.transaction_description, 40),
        left_pad_zero(&deposit_amount, 13),
        right_pad_space(args.currency, 2),
        left_pad_zero(&exchange_adj_amount, 13),
        left_pad_zero(&deposit_amount_cad, 13),
        args.destination_bank_number,
        args.batch_number,
        args.jv_type,
        args.jv_number,
        args.transaction_date,
    );
    pad_line_length(&line)
}

/// Money values end with a blank (positive) or a minus sign (negative).
fn transform_money_string(money: &str) -> String {
    let money = money.trim();
    if money.ends_with('-') {
        money.to_string()
    } else {
        format!("{} ", money)
    }
}

fn left_pad_zero(value: &str, width: usize) -> String {
    format!("{:0>width$}", value, width = width)
}

fn right_pad_space(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

fn pad_line_length(value: &str) -> String {
    format!("{:<width$}", value, width = EXPECTED_LINE_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_factory_lines_are_expected_length() {
        let header = factory_eft_header("1", "20230814", "1601", "20230810", "20230810");
        let trailer = factory_eft_trailer("7", "5", "3733750");
        let record = factory_eft_record(EftRecordArgs::default());

        assert_eq!(header.len(), EXPECTED_LINE_LENGTH);
        assert_eq!(trailer.len(), EXPECTED_LINE_LENGTH);
        assert_eq!(record.len(), EXPECTED_LINE_LENGTH);
    }

    #[test]
    fn test_transform_money_string() {
        assert_eq!(transform_money_string("13500"), "13500 ");
        assert_eq!(transform_money_string("13500-"), "13500-");
    }
}
