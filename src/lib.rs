//! # mt940-pl
//!
//! Decoder for Polish MT940 bank statements (`.sta` files): code page
//! detection for legacy encodings, the `:61:` statement line grammar, and
//! the `~NN` subfield layout of `:86:` narratives.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Decoding is lenient: only an undecodable byte stream is an error, every
//! malformed line degrades locally so one bad entry cannot hide the rest
//! of the statement.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mt940_pl::*;
//! use rust_decimal_macros::dec;
//!
//! let bytes = b":20:ST250706\n:60F:C250706PLN585,42\n:61:2507060707D1200,00S REF123\n";
//! let statement = decode_bytes(bytes).unwrap();
//!
//! let balance = statement.opening_balance.as_ref().unwrap();
//! assert_eq!(balance.amount, dec!(585.42));
//!
//! let tx = &statement.transactions[0];
//! assert_eq!(tx.value_date, NaiveDate::from_ymd_opt(2025, 7, 6).unwrap());
//! assert_eq!(tx.entry_date, NaiveDate::from_ymd_opt(2025, 7, 7));
//! assert_eq!(tx.signed_amount(), dec!(-1200.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Statement types, field parsing, errors |
//! | `mt940` | Statement text decoding |
//! | `encoding` | Code page detection |
//! | `import` | Bytes-to-statement pipeline with handlers |
//! | `all` | Everything (same as default) |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "mt940")]
pub mod mt940;

#[cfg(feature = "encoding")]
pub mod encoding;

#[cfg(feature = "import")]
pub mod import;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "mt940")]
pub use crate::mt940::decode_statement;

#[cfg(feature = "encoding")]
pub use crate::encoding::resolve_text;

#[cfg(feature = "import")]
pub use crate::import::decode_bytes;
