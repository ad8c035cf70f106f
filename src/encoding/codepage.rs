//! Candidate code pages for statement files.

use std::fmt;
use std::str::FromStr;

use encoding_rs::{ISO_8859_2, UTF_8, WINDOWS_1250, WINDOWS_1252};
use oem_cp::code_table::DECODING_TABLE_CP852;
use oem_cp::decode_string_complete_table;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A character encoding a statement file may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Codepage {
    /// IBM 852, DOS Central European. Common in exports from older
    /// Polish banking software.
    #[serde(rename = "cp852")]
    Cp852,
    /// Windows Central European.
    #[serde(rename = "windows-1250")]
    Windows1250,
    /// UTF-8; malformed sequences become U+FFFD and a leading BOM is dropped.
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-8 that refuses malformed input instead of substituting.
    #[serde(rename = "utf-8-strict")]
    Utf8Strict,
    /// Latin-2.
    #[serde(rename = "iso-8859-2")]
    Iso8859_2,
    /// Windows Western European.
    #[serde(rename = "windows-1252")]
    Windows1252,
}

/// Candidate order used for Polish statements, most likely first.
pub const POLISH_CANDIDATES: [Codepage; 5] = [
    Codepage::Cp852,
    Codepage::Windows1250,
    Codepage::Utf8,
    Codepage::Iso8859_2,
    Codepage::Windows1252,
];

impl Codepage {
    /// Canonical label, as used in configuration files.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cp852 => "cp852",
            Self::Windows1250 => "windows-1250",
            Self::Utf8 => "utf-8",
            Self::Utf8Strict => "utf-8-strict",
            Self::Iso8859_2 => "iso-8859-2",
            Self::Windows1252 => "windows-1252",
        }
    }

    /// Decode the whole input. `None` means this code page cannot represent
    /// the bytes; only [`Codepage::Utf8Strict`] ever refuses.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Cp852 => Some(decode_string_complete_table(bytes, &DECODING_TABLE_CP852)),
            Self::Windows1250 => Some(WINDOWS_1250.decode_without_bom_handling(bytes).0.into_owned()),
            Self::Iso8859_2 => Some(ISO_8859_2.decode_without_bom_handling(bytes).0.into_owned()),
            Self::Windows1252 => Some(WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned()),
            Self::Utf8 => Some(UTF_8.decode_with_bom_removal(bytes).0.into_owned()),
            Self::Utf8Strict => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(body)
                    .map(|text| text.into_owned())
            }
        }
    }
}

impl fmt::Display for Codepage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a code page label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown code page '{0}'")]
pub struct UnknownCodepage(pub String);

impl FromStr for Codepage {
    type Err = UnknownCodepage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cp852" | "ibm852" | "852" => Ok(Self::Cp852),
            "windows-1250" | "cp1250" | "1250" => Ok(Self::Windows1250),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-8-strict" | "utf8-strict" => Ok(Self::Utf8Strict),
            "iso-8859-2" | "latin2" | "28592" => Ok(Self::Iso8859_2),
            "windows-1252" | "cp1252" | "1252" => Ok(Self::Windows1252),
            _ => Err(UnknownCodepage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "łąść" in each encoding
    const CP852: &[u8] = &[0x88, 0xA5, 0x98, 0x86];
    const WIN1250: &[u8] = &[0xB3, 0xB9, 0x9C, 0xE6];
    const LATIN2: &[u8] = &[0xB3, 0xB1, 0xB6, 0xE6];

    #[test]
    fn single_byte_tables() {
        assert_eq!(Codepage::Cp852.decode(CP852).unwrap(), "łąść");
        assert_eq!(Codepage::Windows1250.decode(WIN1250).unwrap(), "łąść");
        assert_eq!(Codepage::Iso8859_2.decode(LATIN2).unwrap(), "łąść");
    }

    #[test]
    fn ascii_is_identical_everywhere() {
        for cp in POLISH_CANDIDATES {
            assert_eq!(cp.decode(b":20:ST1").unwrap(), ":20:ST1", "{cp}");
        }
    }

    #[test]
    fn utf8_bom_is_dropped() {
        let bytes = [0xEF, 0xBB, 0xBF, b'a'];
        assert_eq!(Codepage::Utf8.decode(&bytes).unwrap(), "a");
        assert_eq!(Codepage::Utf8Strict.decode(&bytes).unwrap(), "a");
    }

    #[test]
    fn lossy_and_strict_utf8() {
        let bytes = [b'a', 0xFF, b'b'];
        assert_eq!(Codepage::Utf8.decode(&bytes).unwrap(), "a\u{FFFD}b");
        assert_eq!(Codepage::Utf8Strict.decode(&bytes), None);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for cp in POLISH_CANDIDATES.into_iter().chain([Codepage::Utf8Strict]) {
            assert_eq!(cp.label().parse::<Codepage>().unwrap(), cp);
        }
        assert_eq!("IBM852".parse::<Codepage>().unwrap(), Codepage::Cp852);
        assert_eq!(" latin2 ".parse::<Codepage>().unwrap(), Codepage::Iso8859_2);
        assert!("koi8-r".parse::<Codepage>().is_err());
    }
}
