//! The textual mention format
//!
//! Selected candidates are written into the text as `@"<name>" `. Consumers of
//! the posted text resolve mentions back to entities by parsing this exact form.

use std::ops::Range;

/// A completed mention found in posted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionRef {
    pub name: String,
    /// Byte range of the whole `@"<name>"` literal
    pub span: Range<usize>,
}

/// Build the insertion string for a selected candidate, trailing space included
pub fn format_mention(name: &str) -> String {
    format!("@\"{}\" ", name)
}

/// Find every completed `@"<name>"` mention, in text order
///
/// Only an `@` at the start of the text or after a space or newline opens a
/// mention. An unterminated quote or an empty name is skipped.
pub fn extract_mentions(text: &str) -> Vec<MentionRef> {
    let bytes = text.as_bytes();
    let mut mentions = Vec::new();
    let mut pos = 0;

    while let Some(found) = memchr::memchr(b'@', &bytes[pos..]) {
        let at = pos + found;
        pos = at + 1;

        if at > 0 && bytes[at - 1] != b' ' && bytes[at - 1] != b'\n' {
            continue;
        }
        if bytes.get(at + 1) != Some(&b'"') {
            continue;
        }

        let name_start = at + 2;
        let Some(len) = memchr::memchr(b'"', &bytes[name_start..]) else {
            break;
        };
        let name_end = name_start + len;
        if len == 0 {
            pos = name_end + 1;
            continue;
        }

        mentions.push(MentionRef {
            name: text[name_start..name_end].to_string(),
            span: at..name_end + 1,
        });
        pos = name_end + 1;
    }

    mentions
}
