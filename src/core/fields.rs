//! Field-level primitives shared by the `:60F:` and `:61:` grammars and the
//! narrative decoder.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::error::FieldParseError;

/// Two-digit years below this value belong to the 2000s, the rest to the 1900s.
pub const CENTURY_PIVOT: i32 = 70;

/// Value date substituted when a `:61:` line matches the grammar but one of
/// its components cannot be parsed (0001-01-01).
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse a `YYMMDD` date.
///
/// Years `00`-`69` map to 2000-2069 and `70`-`99` to 1970-1999.
pub fn parse_yymmdd(s: &str) -> Result<NaiveDate, FieldParseError> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldParseError::new(
            "date",
            s,
            "expected 6 digits (YYMMDD)",
        ));
    }

    let yy = two_digits(&s[0..2]);
    let month = two_digits(&s[2..4]) as u32;
    let day = two_digits(&s[4..6]) as u32;
    let year = if yy < CENTURY_PIVOT { 2000 + yy } else { 1900 + yy };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| FieldParseError::new("date", s, "no such calendar date"))
}

/// Infer the booking date from its `MMDD` form and the transaction's value date.
///
/// The year is taken from `value_date`, corrected across the year boundary:
/// a December booking of a January value date belongs to the previous year,
/// a January booking of a December value date to the next one.
///
/// Returns `None` for anything that does not name a real calendar date.
pub fn infer_entry_date(value_date: NaiveDate, mmdd: &str) -> Option<NaiveDate> {
    if mmdd.len() != 4 || !mmdd.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month = two_digits(&mmdd[0..2]) as u32;
    let day = two_digits(&mmdd[2..4]) as u32;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let mut year = value_date.year();
    if month == 12 && value_date.month() == 1 {
        year -= 1;
    }
    if month == 1 && value_date.month() == 12 {
        year += 1;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse an MT940 amount.
///
/// The decimal separator is a comma; a dot is accepted and treated the same
/// way. Grouping separators and signs are rejected.
pub fn parse_amount(s: &str) -> Result<Decimal, FieldParseError> {
    let raw = s.trim();
    let normalized = raw.replace('.', ",");
    let (int_part, frac_part) = normalized
        .split_once(',')
        .unwrap_or((normalized.as_str(), ""));

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldParseError::new(
            "amount",
            raw,
            "expected digits before the decimal separator",
        ));
    }
    if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldParseError::new(
            "amount",
            raw,
            "expected digits after the decimal separator",
        ));
    }

    let canonical = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };

    Decimal::from_str_exact(&canonical)
        .map_err(|e| FieldParseError::new("amount", raw, e.to_string()))
}

/// Append-or-set accumulation for narrative attributes.
///
/// A blank `value` leaves the target untouched. A blank or absent target is
/// replaced; otherwise the value is joined with a single space.
pub fn append_text(target: &mut Option<String>, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    match target {
        Some(existing) if !existing.trim().is_empty() => {
            existing.push(' ');
            existing.push_str(value);
        }
        _ => *target = Some(value.to_string()),
    }
}

// Callers guarantee two ASCII digits.
fn two_digits(s: &str) -> i32 {
    s.bytes().fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn yymmdd_century_pivot() {
        assert_eq!(parse_yymmdd("250706").unwrap(), date(2025, 7, 6));
        assert_eq!(parse_yymmdd("000101").unwrap(), date(2000, 1, 1));
        assert_eq!(parse_yymmdd("691231").unwrap(), date(2069, 12, 31));
        assert_eq!(parse_yymmdd("700101").unwrap(), date(1970, 1, 1));
        assert_eq!(parse_yymmdd("991231").unwrap(), date(1999, 12, 31));
    }

    #[test]
    fn yymmdd_rejects_bad_input() {
        assert!(parse_yymmdd("25070").is_err());
        assert!(parse_yymmdd("2507061").is_err());
        assert!(parse_yymmdd("25O706").is_err());
        assert!(parse_yymmdd("251301").is_err());
        assert!(parse_yymmdd("250230").is_err());

        let err = parse_yymmdd("250230").unwrap_err();
        assert_eq!(err.field, "date");
        assert_eq!(err.value, "250230");
    }

    #[test]
    fn yymmdd_leap_day() {
        assert_eq!(parse_yymmdd("240229").unwrap(), date(2024, 2, 29));
        assert!(parse_yymmdd("250229").is_err());
    }

    #[test]
    fn entry_date_same_year() {
        assert_eq!(
            infer_entry_date(date(2025, 7, 6), "0707"),
            Some(date(2025, 7, 7))
        );
    }

    #[test]
    fn entry_date_is_month_then_day() {
        assert_eq!(
            infer_entry_date(date(2025, 3, 1), "0302"),
            Some(date(2025, 3, 2))
        );
        // "1303" would be day 13 of month 03 if read as DDMM
        assert_eq!(infer_entry_date(date(2025, 3, 1), "1303"), None);
    }

    #[test]
    fn entry_date_year_rollover() {
        assert_eq!(
            infer_entry_date(date(2025, 1, 2), "1231"),
            Some(date(2024, 12, 31))
        );
        assert_eq!(
            infer_entry_date(date(2024, 12, 31), "0102"),
            Some(date(2025, 1, 2))
        );
    }

    #[test]
    fn entry_date_invalid_is_absent() {
        let value = date(2025, 2, 10);
        assert_eq!(infer_entry_date(value, "0230"), None);
        assert_eq!(infer_entry_date(value, "0001"), None);
        assert_eq!(infer_entry_date(value, "0132"), None);
        assert_eq!(infer_entry_date(value, "02"), None);
        assert_eq!(infer_entry_date(value, "02a1"), None);
    }

    #[test]
    fn amount_comma_and_dot() {
        assert_eq!(parse_amount("585,42").unwrap(), dec!(585.42));
        assert_eq!(parse_amount("585.42").unwrap(), dec!(585.42));
        assert_eq!(parse_amount("1200,00").unwrap(), dec!(1200));
        assert_eq!(parse_amount("0,5").unwrap(), dec!(0.5));
        assert_eq!(parse_amount("100").unwrap(), dec!(100));
        assert_eq!(parse_amount("100,").unwrap(), dec!(100));
        assert_eq!(parse_amount(" 7,01 ").unwrap(), dec!(7.01));
    }

    #[test]
    fn amount_keeps_scale() {
        assert_eq!(parse_amount("1200,00").unwrap().scale(), 2);
    }

    #[test]
    fn amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount(",50").is_err());
        assert!(parse_amount("-5,00").is_err());
        assert!(parse_amount("1 200,00").is_err());
        assert!(parse_amount("1.200,00").is_err());
        assert!(parse_amount("12a").is_err());
    }

    #[test]
    fn append_sets_then_joins() {
        let mut field = None;
        append_text(&mut field, "Card");
        assert_eq!(field.as_deref(), Some("Card"));
        append_text(&mut field, "payment");
        assert_eq!(field.as_deref(), Some("Card payment"));
    }

    #[test]
    fn append_ignores_blank_values() {
        let mut field = Some("kept".to_string());
        append_text(&mut field, "   ");
        append_text(&mut field, "");
        assert_eq!(field.as_deref(), Some("kept"));

        let mut empty = None;
        append_text(&mut empty, " ");
        assert_eq!(empty, None);
    }

    #[test]
    fn append_replaces_blank_target() {
        let mut field = Some("  ".to_string());
        append_text(&mut field, "value");
        assert_eq!(field.as_deref(), Some("value"));
    }

    #[test]
    fn append_never_deduplicates() {
        let mut field = None;
        append_text(&mut field, "x");
        append_text(&mut field, "x");
        assert_eq!(field.as_deref(), Some("x x"));
    }

    #[test]
    fn sentinel_is_year_one() {
        assert_eq!(sentinel_date(), date(1, 1, 1));
    }
}
