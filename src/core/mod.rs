//! Statement types, field primitives, and errors.
//!
//! Everything here is format-agnostic plumbing used by the [`crate::mt940`]
//! decoder: the `Statement`/`Transaction` model, `YYMMDD` and comma-decimal
//! parsing, and the append-or-set accumulation used for narrative fields.

mod error;
pub mod fields;
mod types;

pub use error::*;
pub use fields::{append_text, infer_entry_date, parse_amount, parse_yymmdd, sentinel_date};
pub use types::*;
