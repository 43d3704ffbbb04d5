//! Tests for trigger detection and the mention format

use super::*;
use proptest::prelude::*;

fn ctx(start: usize, query: &str) -> Option<MentionContext> {
    Some(MentionContext {
        start,
        query: query.to_string(),
    })
}

#[test]
fn test_bare_trailing_at_triggers_with_empty_query() {
    assert_eq!(detect("Hello @", 7), ctx(6, ""));
}

#[test]
fn test_at_text_start_triggers() {
    assert_eq!(detect("@ad", 3), ctx(0, "ad"));
}

#[test]
fn test_at_after_newline_triggers() {
    assert_eq!(detect("first line\n@bo", 14), ctx(11, "bo"));
}

#[test]
fn test_at_inside_word_is_rejected() {
    assert_eq!(detect("mail me at bob@example", 22), None);
}

#[test]
fn test_no_at_is_rejected() {
    assert_eq!(detect("no mention here", 15), None);
}

#[test]
fn test_empty_text_is_rejected() {
    assert_eq!(detect("", 0), None);
}

#[test]
fn test_closed_quote_is_rejected() {
    assert_eq!(detect("Hi @\"Bob\" ok", 9), None);
}

#[test]
fn test_closed_quote_stays_rejected_while_typing_after_it() {
    assert_eq!(detect("Hi @\"Bob\" ok", 12), None);
}

#[test]
fn test_open_quote_is_stripped() {
    assert_eq!(detect("Hi @\"Ada Lo", 11), ctx(3, "Ada Lo"));
}

#[test]
fn test_lone_open_quote_gives_empty_query() {
    assert_eq!(detect("@\"", 2), ctx(0, ""));
}

#[test]
fn test_query_stops_at_cursor() {
    assert_eq!(detect("@alice and more", 3), ctx(0, "al"));
}

#[test]
fn test_cursor_before_at_is_rejected() {
    assert_eq!(detect("hello @bob", 3), None);
}

#[test]
fn test_new_at_after_closed_mention_triggers_again() {
    let text = "@\"Bob\" and @ca";
    assert_eq!(detect(text, text.chars().count()), ctx(11, "ca"));
}

#[test]
fn test_offsets_are_characters_not_bytes() {
    // "héllo " is 6 chars but 7 bytes
    assert_eq!(detect("héllo @zoë", 10), ctx(6, "zoë"));
}

#[test]
fn test_cursor_past_end_is_clamped() {
    assert_eq!(detect("@ab", 99), ctx(0, "ab"));
}

#[test]
fn test_tab_before_at_does_not_start_token() {
    assert_eq!(detect("a\t@b", 4), None);
}

#[test]
fn test_byte_offset_conversion() {
    assert_eq!(byte_offset("aé b", 0), 0);
    assert_eq!(byte_offset("aé b", 2), 3);
    assert_eq!(byte_offset("aé b", 10), 5);
}

mod mention_format_tests {
    use super::*;

    #[test]
    fn test_format_mention_quotes_and_adds_space() {
        assert_eq!(format_mention("Ada Lovelace"), "@\"Ada Lovelace\" ");
    }

    #[test]
    fn test_extract_single_mention() {
        let mentions = extract_mentions("@\"Jane Smith\" has reviewed this");
        assert_eq!(
            mentions,
            vec![MentionRef {
                name: "Jane Smith".to_string(),
                span: 0..13,
            }]
        );
    }

    #[test]
    fn test_extract_multiple_mentions_in_order() {
        let names: Vec<String> = extract_mentions("cc @\"Bob\" and\n@\"Ann Lee\" please")
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Bob", "Ann Lee"]);
    }

    #[test]
    fn test_extract_skips_mid_word_at() {
        assert!(extract_mentions("foo@\"Bob\"").is_empty());
    }

    #[test]
    fn test_extract_skips_unquoted_and_unterminated() {
        assert!(extract_mentions("@bob and @\"Ann").is_empty());
    }

    #[test]
    fn test_extract_skips_empty_name() {
        let names: Vec<String> = extract_mentions("@\"\" @\"Cy\"")
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Cy"]);
    }

    #[test]
    fn test_formatted_mention_is_extracted_back() {
        let text = format!("Hey {}there", format_mention("Zoë Ünal"));
        let mentions = extract_mentions(&text);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].name, "Zoë Ünal");
        assert_eq!(&text[mentions[0].span.clone()], "@\"Zoë Ünal\"");
    }
}

// Property: an '@' glued to a preceding alphanumeric never opens a mention
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_at_after_alphanumeric_never_triggers(
        prefix in "[a-z ]{0,10}",
        glue in "[a-zA-Z0-9]",
        tail in "[a-zA-Z ]{0,10}",
    ) {
        let text = format!("{}{}@{}", prefix, glue, tail);
        let cursor = text.chars().count();
        prop_assert_eq!(detect(&text, cursor), None);
    }

    #[test]
    fn prop_closed_quote_never_triggers(
        lead in "[a-z]{0,5}",
        name in "[a-zA-Z ]{0,10}",
        rest in "[a-zA-Z \"]{0,10}",
    ) {
        let text = format!("{} @\"{}\"{}", lead, name, rest);
        let cursor = text.chars().count();
        prop_assert_eq!(detect(&text, cursor), None);
    }

    #[test]
    fn prop_unquoted_query_is_text_after_at(
        lead in "[a-z]{0,8}",
        query in "[a-zA-Z0-9 ]{0,12}",
    ) {
        let text = format!("{} @{}", lead, query);
        let cursor = text.chars().count();
        let found = detect(&text, cursor);
        prop_assert_eq!(found, Some(MentionContext {
            start: lead.chars().count() + 1,
            query,
        }));
    }
}
