//! Escaping of candidate names for display
//!
//! Names come from the lookup service and are treated as untrusted text.

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Make text safe to draw in a terminal cell row
///
/// Control characters (escape sequences, newlines, tabs) are replaced with
/// U+FFFD so a name can neither move the cursor nor break the row.
pub fn display_safe(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { '\u{FFFD}' } else { ch })
        .collect()
}
