//! Best-guess decoding of statement bytes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::codepage::{Codepage, POLISH_CANDIDATES};
use super::score::Vocabulary;
use crate::core::Mt940Error;

/// Configuration for [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Code pages to try, in priority order. Ties go to the earlier entry.
    pub candidates: Vec<Codepage>,
    /// Scoring hints for the expected language.
    pub vocabulary: Vocabulary,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            candidates: POLISH_CANDIDATES.to_vec(),
            vocabulary: Vocabulary::polish(),
        }
    }
}

/// Builder for [`ResolverConfig`].
///
/// # Example
///
/// ```
/// use mt940_pl::encoding::{Codepage, ResolverConfigBuilder};
///
/// let config = ResolverConfigBuilder::new()
///     .candidates([Codepage::Utf8Strict, Codepage::Windows1250])
///     .word("opłata")
///     .build();
/// assert_eq!(config.candidates.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    /// Start from the Polish defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidate list.
    pub fn candidates(mut self, candidates: impl IntoIterator<Item = Codepage>) -> Self {
        self.config.candidates = candidates.into_iter().collect();
        self
    }

    /// Append a candidate with the lowest priority.
    pub fn candidate(mut self, codepage: Codepage) -> Self {
        self.config.candidates.push(codepage);
        self
    }

    /// Replace the whole vocabulary.
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.config.vocabulary = vocabulary;
        self
    }

    /// Add a characteristic letter.
    pub fn letter(mut self, letter: char) -> Self {
        self.config.vocabulary.letters.push(letter);
        self
    }

    /// Add a vocabulary word.
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.config.vocabulary.words.push(word.into());
        self
    }

    pub fn build(self) -> ResolverConfig {
        self.config
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The winning code page.
    pub codepage: Codepage,
    /// Its score under the configured vocabulary.
    pub score: i64,
    /// The decoded text.
    pub text: String,
}

/// Decode `bytes` with every candidate and keep the best-scoring text.
///
/// Candidates are tried in order; a later candidate replaces the current
/// best only with a strictly higher score. Fails only if no candidate can
/// decode the input at all (or the candidate list is empty).
pub fn resolve(bytes: &[u8], config: &ResolverConfig) -> Result<Resolution, Mt940Error> {
    let mut best: Option<Resolution> = None;

    for &codepage in &config.candidates {
        let Some(text) = codepage.decode(bytes) else {
            debug!(%codepage, "candidate cannot decode input");
            continue;
        };
        let score = config.vocabulary.score(&text);
        debug!(%codepage, score, "candidate scored");

        if best.as_ref().is_none_or(|current| score > current.score) {
            best = Some(Resolution {
                codepage,
                score,
                text,
            });
        }
    }

    match best {
        Some(resolution) => {
            debug!(codepage = %resolution.codepage, score = resolution.score, "encoding resolved");
            Ok(resolution)
        }
        None => Err(Mt940Error::Decode {
            tried: tried_labels(&config.candidates),
        }),
    }
}

/// Decode `bytes` with the default Polish configuration.
pub fn resolve_text(bytes: &[u8]) -> Result<String, Mt940Error> {
    resolve(bytes, &ResolverConfig::default()).map(|resolution| resolution.text)
}

fn tried_labels(candidates: &[Codepage]) -> String {
    if candidates.is_empty() {
        return "none".into();
    }
    candidates
        .iter()
        .map(Codepage::label)
        .collect::<Vec<_>>()
        .join(", ")
}
