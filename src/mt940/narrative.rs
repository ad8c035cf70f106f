//! `:86:` narrative block decoding for the Polish `~NN` subfield layout.
//!
//! A block looks like:
//!
//! ```text
//! :86:073
//! ~00VE02~20Płatność kartą 03.07.2025
//! ~21Nr karty 4246xx1115
//! ~32JMP S.A. BIEDRONKA 123~33Warszawa
//! ```
//!
//! The first line carries the info code; every following line is split on
//! `~` into two-digit subfields routed by [`route`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::scanner::{CONTINUATION_MARKER, lines};
use crate::core::{Transaction, append_text};

static MASKED_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}[xX*]*[0-9]{4}").expect("masked card pattern is valid")
});

/// Labels banks put in front of the card number in `~21`.
const CARD_LABELS: &[&str] = &["Nr karty", "Karta", "Card"];

const NARRATIVE_TAG: &str = ":86:";

/// Transaction attribute a subfield code feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Description,
    CardNumber,
    BankCode,
    BankReference,
    CounterpartyName,
    CounterpartyCity,
    CounterpartyAccount,
    CounterpartyFullAddress,
    /// `~34`: appended to additional info as-is.
    AdditionalInfo,
    /// Appended to additional info prefixed with `~NN:`.
    Tagged,
}

/// Subfield code table.
pub fn route(code: &str) -> Target {
    match code {
        "20" => Target::Description,
        "21" => Target::CardNumber,
        "30" => Target::BankCode,
        "31" => Target::BankReference,
        "32" => Target::CounterpartyName,
        "33" => Target::CounterpartyCity,
        "34" => Target::AdditionalInfo,
        "38" => Target::CounterpartyAccount,
        "62" | "60" | "61" | "63" | "64" | "65" => Target::CounterpartyFullAddress,
        _ => Target::Tagged,
    }
}

/// Decode a raw `:86:` block into `tx`.
///
/// `block` starts with the `:86:<payload>` line; the payload (trimmed)
/// becomes the info code. Fields already set on `tx` are extended, never
/// replaced.
pub fn decode_narrative(tx: &mut Transaction, block: &str) {
    let mut block_lines = lines(block);

    if let Some(first) = block_lines.next() {
        let info_code = first.strip_prefix(NARRATIVE_TAG).unwrap_or(first).trim();
        tx.info_code = (!info_code.is_empty()).then(|| info_code.to_string());
    }

    for line in block_lines {
        let line = line.trim();
        if line.starts_with(CONTINUATION_MARKER) {
            decode_subfields(tx, line);
        } else if !line.is_empty() {
            trace!(line, "non-subfield narrative line kept as additional info");
            append_text(&mut tx.additional_info, line);
        }
    }

    let raw = block.trim_end();
    if !raw.is_empty() {
        match &mut tx.raw_narrative {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(raw);
            }
            None => tx.raw_narrative = Some(raw.to_string()),
        }
    }
}

fn decode_subfields(tx: &mut Transaction, line: &str) {
    for part in line
        .split(CONTINUATION_MARKER)
        .filter(|part| !part.is_empty())
    {
        let Some((code, value)) = split_code(part) else {
            let part = part.trim();
            if !part.is_empty() {
                append_text(&mut tx.additional_info, &format!("~UNPARSED:{part}"));
            }
            continue;
        };

        let field = match route(code) {
            Target::Description => &mut tx.description,
            Target::CardNumber => {
                append_text(&mut tx.card_number, &extract_card_number(value));
                continue;
            }
            Target::BankCode => &mut tx.bank_code,
            Target::BankReference => &mut tx.bank_reference,
            Target::CounterpartyName => &mut tx.counterparty_name,
            Target::CounterpartyCity => &mut tx.counterparty_city,
            Target::CounterpartyAccount => &mut tx.counterparty_account,
            Target::CounterpartyFullAddress => &mut tx.counterparty_full_address,
            Target::AdditionalInfo => &mut tx.additional_info,
            Target::Tagged => {
                if !value.is_empty() {
                    append_text(&mut tx.additional_info, &format!("~{code}:{value}"));
                }
                continue;
            }
        };
        append_text(field, value);
    }
}

/// Split `NNvalue` into the two-digit code and the trimmed value.
fn split_code(part: &str) -> Option<(&str, &str)> {
    let bytes = part.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return None;
    }
    Some((&part[..2], part[2..].trim()))
}

/// Pull the masked card number out of a `~21` value.
///
/// Looks for `dddd`, masking characters, `dddd` (e.g. `4246xx1115`). Without
/// such a run the known card labels are stripped and the remainder returned;
/// if nothing remains the input is returned unchanged.
pub fn extract_card_number(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    if let Some(m) = MASKED_CARD.find(value) {
        return m.as_str().to_string();
    }

    let cleaned = CARD_LABELS
        .iter()
        .fold(value.to_string(), |acc, label| acc.replace(label, ""));
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        value.to_string()
    } else {
        cleaned.to_string()
    }
}
