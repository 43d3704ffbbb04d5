//! Mention trigger detection
//!
//! Decides, from the text of a surface and its cursor, whether an `@mention`
//! is being typed and what has been typed after the `@` so far.
//!
//! All offsets are character offsets, matching the column model of the
//! textarea.

mod mention_format;

pub use mention_format::{MentionRef, extract_mentions, format_mention};

/// An in-progress mention found before the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionContext {
    /// Character offset of the `@` that opened the mention
    pub start: usize,
    /// Text typed after the `@`, without a leading quote
    pub query: String,
}

/// Detect an active mention ending at `cursor`
///
/// Returns `None` when there is no `@` before the cursor, when that `@` does
/// not start a token, or when the quoted name after it is already closed.
/// An empty query is valid and means "show every candidate".
pub fn detect(text: &str, cursor: usize) -> Option<MentionContext> {
    let before = &text[..byte_offset(text, cursor)];

    // '@' is ASCII, so a byte search never lands inside a multi-byte char
    let at = memchr::memrchr(b'@', before.as_bytes())?;
    if at > 0 && !starts_token(before.as_bytes()[at - 1]) {
        return None;
    }

    let typed = &before[at + 1..];
    if let Some(open) = typed.find('"')
        && typed[open + 1..].contains('"')
    {
        return None;
    }

    let query = typed.strip_prefix('"').unwrap_or(typed);

    Some(MentionContext {
        start: before[..at].chars().count(),
        query: query.to_string(),
    })
}

/// Convert a character offset into a byte offset, clamped to the text length
pub fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Whether the byte before an `@` lets it open a mention
fn starts_token(prev: u8) -> bool {
    prev == b' ' || prev == b'\n'
}

#[cfg(test)]
#[path = "trigger/trigger_tests.rs"]
mod trigger_tests;
