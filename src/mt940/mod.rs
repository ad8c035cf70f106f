//! Polish MT940 (`.sta`) statement decoding.
//!
//! Supported tags: `:20:`, `:25:`, `:28C:`, `:60F:`, `:61:` and `:86:` with
//! `~NN` subfields. Every other tag is skipped so bank-specific additions
//! never break decoding.
//!
//! # Example
//!
//! ```
//! use mt940_pl::mt940::decode_statement;
//! use mt940_pl::DebitCredit;
//!
//! let text = "\
//! :20:ST250706
//! :25:PL27114020040000330212345678
//! :28C:00042/001
//! :60F:C250706PLN585,42
//! :61:2507060707D1200,00S REF123
//! :86:073
//! ~20Płatność kartą
//! ~21Nr karty 4246xx1115
//! ~32BIEDRONKA~33Warszawa
//! -";
//!
//! let statement = decode_statement(text);
//! let tx = &statement.transactions[0];
//! assert_eq!(tx.debit_credit, DebitCredit::Debit);
//! assert_eq!(tx.card_number.as_deref(), Some("4246xx1115"));
//! assert_eq!(tx.counterparty_city.as_deref(), Some("Warszawa"));
//! ```

mod assembler;
mod compact;
mod narrative;
mod scanner;

pub use assembler::decode_statement;
pub use compact::{decode_compact, decode_opening_balance};
pub use narrative::{Target, decode_narrative, extract_card_number, route};
pub use scanner::{CONTINUATION_MARKER, Line, TagLine, classify, lines, tag_line};
