//! `:61:` statement line and `:60F:` opening balance grammars.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::{
    DebitCredit, FieldParseError, OpeningBalance, Transaction, infer_entry_date, parse_amount,
    parse_yymmdd, sentinel_date,
};

// value date, optional MMDD entry date, mark, amount, optional type letter, reference
static COMPACT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<value>[0-9]{6})",
        r"(?P<entry>[0-9]{4})?",
        r"(?P<mark>[DC])",
        r"(?P<amount>[0-9]+(?:[,.][0-9]{0,2})?)",
        r"(?P<kind>[A-Z])?",
        r"(?P<rest>.*)$"
    ))
    .expect("statement line pattern is valid")
});

/// Minimum `:60F:` payload: mark (1) + date (6) + currency (3) + one amount digit.
const MIN_BALANCE_LEN: usize = 11;

/// Decode a `:61:` payload.
///
/// Returns `None` if the payload does not follow the statement line grammar
/// at all. If it does but a component cannot be parsed, the transaction is
/// still produced with a sentinel value date, a debit mark, a zero amount,
/// and the parse error recorded in the reference.
pub fn decode_compact(payload: &str) -> Option<Transaction> {
    let payload = payload.trim();
    let caps = COMPACT_LINE.captures(payload)?;

    match compact_fields(&caps) {
        Ok(tx) => Some(tx),
        Err(err) => {
            warn!(payload, error = %err, "statement line kept with placeholder values");
            Some(Transaction::new(
                sentinel_date(),
                DebitCredit::Debit,
                Decimal::ZERO,
                format!("PARSE_ERROR: {payload} - {err}"),
            ))
        }
    }
}

fn compact_fields(caps: &Captures<'_>) -> Result<Transaction, FieldParseError> {
    let value_date = parse_yymmdd(&caps["value"])?;
    let mark = &caps["mark"];
    let debit_credit = mark
        .chars()
        .next()
        .and_then(DebitCredit::from_mark)
        .ok_or_else(|| FieldParseError::new("debit_credit", mark, "expected D or C"))?;
    let amount = parse_amount(&caps["amount"])?;

    let mut tx = Transaction::new(value_date, debit_credit, amount, caps["rest"].trim());
    tx.entry_date = caps
        .name("entry")
        .and_then(|m| infer_entry_date(value_date, m.as_str()));
    tx.type_code = caps.name("kind").and_then(|m| m.as_str().chars().next());
    Ok(tx)
}

/// Decode a `:60F:` payload such as `C250706PLN585,42`.
///
/// Any malformation yields `None`; a statement without an opening balance
/// still decodes.
pub fn decode_opening_balance(payload: &str) -> Option<OpeningBalance> {
    match opening_balance_fields(payload.trim_end()) {
        Ok(balance) => Some(balance),
        Err(err) => {
            debug!(payload, error = %err, "opening balance ignored");
            None
        }
    }
}

fn opening_balance_fields(payload: &str) -> Result<OpeningBalance, FieldParseError> {
    if payload.chars().count() < MIN_BALANCE_LEN {
        return Err(FieldParseError::new(
            "opening_balance",
            payload,
            format!("expected at least {MIN_BALANCE_LEN} characters"),
        ));
    }

    let debit_credit = payload
        .chars()
        .next()
        .and_then(DebitCredit::from_mark)
        .ok_or_else(|| FieldParseError::new("debit_credit", payload, "expected D or C"))?;

    let date_part = payload
        .get(1..7)
        .ok_or_else(|| FieldParseError::new("date", payload, "date is not ASCII"))?;
    let date = parse_yymmdd(date_part)?;

    let currency = payload
        .get(7..10)
        .filter(|c| c.bytes().all(|b| b.is_ascii_alphabetic()))
        .ok_or_else(|| FieldParseError::new("currency", payload, "expected 3 letters"))?;

    let amount_part = payload
        .get(10..)
        .ok_or_else(|| FieldParseError::new("amount", payload, "amount is not ASCII"))?;
    let amount = parse_amount(amount_part)?;

    Ok(OpeningBalance {
        debit_credit,
        date,
        currency: currency.to_string(),
        amount,
    })
}
