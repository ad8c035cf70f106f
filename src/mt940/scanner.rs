//! Line splitting and `:TAG:payload` recognition.

use std::sync::LazyLock;

use regex::Regex;

static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:(?P<tag>[0-9]{2}[A-Z]?):(?P<payload>.*)$").expect("tag line pattern is valid")
});

/// Marker that introduces narrative subfields in the Polish `:86:` variant.
pub const CONTINUATION_MARKER: char = '~';

/// A recognized `:TAG:payload` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLine<'a> {
    /// Two digits plus an optional upper-case letter, e.g. `"61"` or `"28C"`.
    pub tag: &'a str,
    /// Everything after the second colon, untrimmed.
    pub payload: &'a str,
}

/// How a physical line is treated by the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Tag(TagLine<'a>),
    /// Starts with `~`.
    Continuation(&'a str),
    /// Anything else, including blank lines.
    Other(&'a str),
}

/// Match a single line against the tag grammar.
pub fn tag_line(line: &str) -> Option<TagLine<'_>> {
    let caps = TAG_LINE.captures(line)?;
    let tag = caps.name("tag")?.as_str();
    let payload = caps.name("payload")?.as_str();
    Some(TagLine { tag, payload })
}

pub fn classify(line: &str) -> Line<'_> {
    if let Some(tag) = tag_line(line) {
        Line::Tag(tag)
    } else if line.starts_with(CONTINUATION_MARKER) {
        Line::Continuation(line)
    } else {
        Line::Other(line)
    }
}

/// Split decoded text into physical lines.
///
/// `\r\n`, `\n` and a lone `\r` all end a line. A terminator at the very
/// end does not start an extra empty line.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_plain_and_lettered_tags() {
        assert_eq!(
            tag_line(":20:ST250706"),
            Some(TagLine {
                tag: "20",
                payload: "ST250706"
            })
        );
        assert_eq!(
            tag_line(":28C:00042/001"),
            Some(TagLine {
                tag: "28C",
                payload: "00042/001"
            })
        );
        assert_eq!(
            tag_line(":86:"),
            Some(TagLine {
                tag: "86",
                payload: ""
            })
        );
    }

    #[test]
    fn payload_is_untrimmed() {
        assert_eq!(tag_line(":25: PL123 ").unwrap().payload, " PL123 ");
    }

    #[test]
    fn rejects_non_tags() {
        assert_eq!(tag_line("~20Płatność"), None);
        assert_eq!(tag_line(":6:x"), None);
        assert_eq!(tag_line(":610:x"), None);
        assert_eq!(tag_line(":28c:x"), None);
        assert_eq!(tag_line(" :20:x"), None);
        assert_eq!(tag_line("-"), None);
        assert_eq!(tag_line(""), None);
    }

    #[test]
    fn classify_lines() {
        assert!(matches!(classify(":61:250706D1,00"), Line::Tag(_)));
        assert!(matches!(classify("~21Nr karty"), Line::Continuation(_)));
        assert!(matches!(classify("stray"), Line::Other("stray")));
        assert!(matches!(classify(""), Line::Other("")));
    }

    #[test]
    fn splits_crlf_and_lf() {
        let text = ":20:A\r\n:25:B\n\r\n:28C:C";
        let collected: Vec<&str> = lines(text).collect();
        assert_eq!(collected, vec![":20:A", ":25:B", "", ":28C:C"]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let collected: Vec<&str> = lines(":20:A\r:25:B\r\r~20x\r").collect();
        assert_eq!(collected, vec![":20:A", ":25:B", "", "~20x"]);
    }

    #[test]
    fn mixed_terminators() {
        let collected: Vec<&str> = lines("a\r\nb\rc\nd\n\re").collect();
        assert_eq!(collected, vec!["a", "b", "c", "d", "", "e"]);
    }

    #[test]
    fn trailing_terminator_adds_no_line() {
        assert_eq!(lines("a\n").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(lines("a\r").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(lines("").count(), 0);
        assert_eq!(lines("\r\n").collect::<Vec<_>>(), vec![""]);
    }
}
