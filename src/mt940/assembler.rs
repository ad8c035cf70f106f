//! Two-state line machine that turns statement text into a [`Statement`].

use tracing::{debug, trace, warn};

use super::compact::{decode_compact, decode_opening_balance};
use super::narrative::decode_narrative;
use super::scanner::{Line, TagLine, classify, lines};
use crate::core::Statement;

/// Decode MT940 statement text.
///
/// Never fails: unknown tags are skipped, malformed `:61:` lines are dropped
/// or kept with placeholder values, and a broken `:60F:` only leaves the
/// opening balance empty.
///
/// ```
/// use mt940_pl::mt940::decode_statement;
///
/// let text = ":20:ST1\n:25:PL61109010140000071219812874\n\
///             :61:2507060707D12,50S REF1\n:86:073\n~20Opłata";
/// let statement = decode_statement(text);
/// assert_eq!(statement.transactions.len(), 1);
/// assert_eq!(statement.transactions[0].description.as_deref(), Some("Opłata"));
/// ```
pub fn decode_statement(text: &str) -> Statement {
    let mut assembler = Assembler::default();
    for line in lines(text) {
        assembler.feed(line);
    }
    assembler.finish()
}

/// Open `:86:` block being collected.
#[derive(Debug)]
struct NarrativeBuffer<'a> {
    lines: Vec<&'a str>,
}

#[derive(Debug, Default)]
struct Assembler<'a> {
    statement: Statement,
    /// Index of the transaction that narrative blocks attach to.
    current: Option<usize>,
    narrative: Option<NarrativeBuffer<'a>>,
}

impl<'a> Assembler<'a> {
    fn feed(&mut self, raw: &'a str) {
        let line = classify(raw);

        if let Some(buffer) = self.narrative.as_mut() {
            match line {
                Line::Tag(_) => self.flush_narrative(),
                Line::Continuation(text) | Line::Other(text) => {
                    buffer.lines.push(text);
                    return;
                }
            }
        }

        match line {
            Line::Tag(tag) => self.on_tag(tag),
            Line::Continuation(text) | Line::Other(text) => {
                if !text.trim().is_empty() {
                    trace!(line = text, "untagged line outside a narrative block ignored");
                }
            }
        }
    }

    fn on_tag(&mut self, TagLine { tag, payload }: TagLine<'a>) {
        match tag {
            "20" => self.statement.transaction_reference = non_blank(payload),
            "25" => self.statement.account_id = non_blank(payload),
            "28C" => self.statement.statement_number = non_blank(payload),
            "60F" => self.statement.opening_balance = decode_opening_balance(payload),
            "61" => {
                self.flush_narrative();
                self.current = match decode_compact(payload) {
                    Some(tx) => {
                        self.statement.transactions.push(tx);
                        Some(self.statement.transactions.len() - 1)
                    }
                    None => {
                        warn!(payload, "statement line does not match the :61: grammar");
                        None
                    }
                };
            }
            "86" => {
                self.narrative = Some(NarrativeBuffer {
                    lines: vec![payload],
                });
            }
            other => trace!(tag = other, "tag ignored"),
        }
    }

    /// Decode the open narrative block into the most recent transaction.
    fn flush_narrative(&mut self) {
        let Some(buffer) = self.narrative.take() else {
            return;
        };

        let mut block = String::from(":86:");
        block.push_str(&buffer.lines.join("\n"));

        match self
            .current
            .and_then(|idx| self.statement.transactions.get_mut(idx))
        {
            Some(tx) => decode_narrative(tx, &block),
            None => warn!(
                block = block.trim_end(),
                "narrative block without a preceding transaction discarded"
            ),
        }
    }

    fn finish(mut self) -> Statement {
        self.flush_narrative();
        debug!(
            account = self.statement.account_id.as_deref().unwrap_or(""),
            transactions = self.statement.transactions.len(),
            "statement decoded"
        );
        self.statement
    }
}

fn non_blank(payload: &str) -> Option<String> {
    let trimmed = payload.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
