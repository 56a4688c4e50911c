//! Property-based tests for inkmark using proptest.

use inkmark::{
    escape_html, substitute, transform, Parser, StyledText, SubstitutionMode, TransformOptions,
    Variables,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Text with no tag introducer and no placeholder marker.
fn inert_text() -> impl Strategy<Value = String> {
    "[^@%]{0,60}"
}

/// Delimited content: anything but the closing brace.
fn tag_content() -> impl Strategy<Value = String> {
    "[^}]{0,30}"
}

fn builtin_chain() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['b', 'i', 'u']), 1..5)
}

fn wrap_builtin(text: StyledText, code: char) -> StyledText {
    match code {
        'b' => text.bold(),
        'i' => text.italic(),
        _ => text.underline(),
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Text without markup comes back unchanged.
    #[test]
    fn inert_text_is_identity(text in inert_text()) {
        prop_assert_eq!(transform(&text, &Variables::new()).into_content(), text);
    }

    #[test]
    fn concat_is_content_additive(a in ".{0,20}", b in ".{0,20}") {
        let joined = StyledText::new(a.as_str()).concat(&StyledText::new(b.as_str()));
        prop_assert_eq!(joined.into_content(), format!("{a}{b}"));
    }

    #[test]
    fn concat_is_associative(a in ".{0,10}", b in ".{0,10}", c in ".{0,10}") {
        let (a, b, c) = (StyledText::new(a), StyledText::new(b), StyledText::new(c));
        prop_assert_eq!(a.concat(&b).concat(&c), a.concat(&b.concat(&c)));
    }

    #[test]
    fn bold_wraps_any_content(content in ".{0,20}") {
        prop_assert_eq!(
            StyledText::new(content.as_str()).bold().into_content(),
            format!("<b>{content}</b>")
        );
    }

    #[test]
    fn delimited_tag_styles_content(content in tag_content()) {
        let out = Parser::new().parse(&format!("@u{{{content}}}"));
        prop_assert_eq!(out.into_content(), format!("<u>{content}</u>"));
    }

    /// The first code in a chain is the innermost wrapper.
    #[test]
    fn chain_applies_left_to_right(codes in builtin_chain(), content in tag_content()) {
        let chain: String = codes.iter().collect();
        let expected = codes
            .iter()
            .fold(StyledText::new(content.as_str()), |text, code| wrap_builtin(text, *code));

        let out = Parser::new().parse(&format!("@{chain}{{{content}}}"));
        prop_assert_eq!(out, expected);
    }

    /// An unclosed delimiter keeps every consumed character.
    #[test]
    fn unterminated_tag_is_verbatim(codes in builtin_chain(), content in tag_content()) {
        let chain: String = codes.iter().collect();
        let input = format!("@{chain}{{{content}");
        prop_assert_eq!(Parser::new().parse(&input).into_content(), input);
    }

    /// Parsing any input terminates without panicking.
    #[test]
    fn parse_total(text in "\\PC{0,80}") {
        let _ = Parser::new().parse(&text);
    }

    /// Escaped text never contains markup characters.
    #[test]
    fn escaped_text_is_inert(text in ".{0,40}") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }

    /// With marker-free values both substitution modes agree.
    #[test]
    fn modes_agree_without_reentrant_values(
        name in "[a-z_][a-z0-9_]{0,8}",
        value in "[A-Za-z0-9 ]{1,12}",
        prefix in "[^%]{0,10}",
        suffix in "[^%A-Za-z0-9_]{0,10}",
    ) {
        let vars = Variables::new().with(name.as_str(), value.as_str());
        let text = format!("{prefix}%{name}{suffix}");
        let single = TransformOptions::new().substitution(SubstitutionMode::SinglePass);

        let rescan = substitute(&text, &vars, &TransformOptions::default());
        let once = substitute(&text, &vars, &single);
        prop_assert_eq!(&rescan.text, &once.text);
        prop_assert_eq!(rescan.text, format!("{prefix}{value}{suffix}"));
    }

    /// The substitution cap bounds the work even for self-referencing values.
    #[test]
    fn substitution_respects_cap(cap in 0usize..50, copies in 1usize..4) {
        let vars = Variables::new().with("x", "%x".repeat(copies));
        let options = TransformOptions::new().max_substitutions(cap);
        let result = substitute("%x", &vars, &options);
        prop_assert!(result.count <= cap);
        prop_assert!(result.truncated);
    }
}
