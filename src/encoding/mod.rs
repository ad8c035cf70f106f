//! Code page detection for statement files.
//!
//! Polish banks ship `.sta` files in DOS, Windows, ISO, or UTF-8 encodings
//! without declaring which. Every configured candidate decodes the whole
//! input, and the text with the most Polish letters and banking vocabulary
//! (and the fewest U+FFFD replacements) wins.
//!
//! # Example
//!
//! ```
//! use mt940_pl::encoding::{Codepage, ResolverConfig, resolve};
//!
//! // "Przelew ł" written by Windows software
//! let bytes = b"Przelew \xB3";
//! let resolution = resolve(bytes, &ResolverConfig::default()).unwrap();
//! assert_eq!(resolution.codepage, Codepage::Windows1250);
//! assert_eq!(resolution.text, "Przelew ł");
//! ```

mod codepage;
mod resolver;
mod score;

pub use codepage::{Codepage, POLISH_CANDIDATES, UnknownCodepage};
pub use resolver::{Resolution, ResolverConfig, ResolverConfigBuilder, resolve, resolve_text};
pub use score::Vocabulary;
