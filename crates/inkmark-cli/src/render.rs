//! Output rendering for transformed text.
//!
//! The transformer produces HTML-style content: `<b>`, `<i>` and `<u>` tags
//! around entity-escaped text. This module hands that content to the output
//! surface in one of three forms.

use clap::ValueEnum;
use console::Style;
use inkmark::unescape_html;

/// How the transformed content is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Content as produced, tags and entities intact.
    #[default]
    Html,
    /// Tags turned into terminal styles, entities decoded.
    Term,
    /// Tags removed, entities decoded.
    Plain,
}

/// The tags the transformer emits for the built-in codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    Bold,
    Italic,
    Underline,
}

impl Markup {
    fn apply(self, style: Style) -> Style {
        match self {
            Markup::Bold => style.bold(),
            Markup::Italic => style.italic(),
            Markup::Underline => style.underlined(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Open(Markup),
    Close(Markup),
}

/// Splits content into text runs and recognized tags. Any `<` that does not
/// start one of the six known tags stays in the text.
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

const TAGS: [(&str, Token<'static>); 6] = [
    ("<b>", Token::Open(Markup::Bold)),
    ("</b>", Token::Close(Markup::Bold)),
    ("<i>", Token::Open(Markup::Italic)),
    ("</i>", Token::Close(Markup::Italic)),
    ("<u>", Token::Open(Markup::Underline)),
    ("</u>", Token::Close(Markup::Underline)),
];

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn tag_at(rest: &str) -> Option<(&'static str, Token<'static>)> {
        TAGS.iter().copied().find(|(tag, _)| rest.starts_with(tag))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        let remaining = &self.input[self.pos..];

        if let Some((tag, token)) = Self::tag_at(remaining) {
            self.pos += tag.len();
            return Some(token);
        }

        // Text runs to the next '<' that starts a known tag
        let mut end = remaining.len();
        for (i, _) in remaining.match_indices('<').filter(|(i, _)| *i > 0) {
            if Self::tag_at(&remaining[i..]).is_some() {
                end = i;
                break;
            }
        }
        self.pos += end;
        Some(Token::Text(&remaining[..end]))
    }
}

/// Renders transformed content for the given format.
///
/// `force_styling` makes [`OutputFormat::Term`] emit escape codes even when
/// `console` decides the output is not a terminal.
pub fn render(content: &str, format: OutputFormat, force_styling: bool) -> String {
    match format {
        OutputFormat::Html => content.to_string(),
        OutputFormat::Plain => Tokenizer::new(content)
            .filter_map(|token| match token {
                Token::Text(text) => Some(unescape_html(text)),
                _ => None,
            })
            .collect(),
        OutputFormat::Term => render_term(content, force_styling),
    }
}

fn render_term(content: &str, force_styling: bool) -> String {
    let mut output = String::with_capacity(content.len());
    let mut stack: Vec<Markup> = Vec::new();

    for token in Tokenizer::new(content) {
        match token {
            Token::Text(text) => append_styled(&mut output, text, &stack, force_styling),
            Token::Open(markup) => stack.push(markup),
            Token::Close(markup) => {
                // Only the innermost open tag can close; anything else is stray
                if stack.last() == Some(&markup) {
                    stack.pop();
                } else {
                    tracing::debug!(?markup, "unbalanced closing tag ignored");
                }
            }
        }
    }

    output
}

fn append_styled(output: &mut String, text: &str, stack: &[Markup], force_styling: bool) {
    let text = unescape_html(text);
    if stack.is_empty() {
        output.push_str(&text);
        return;
    }
    let style = stack
        .iter()
        .fold(Style::new(), |style, markup| markup.apply(style));
    let style = if force_styling {
        style.force_styling(true)
    } else {
        style
    };
    output.push_str(&style.apply_to(text).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    mod tokenizer {
        use super::*;

        #[test]
        fn plain_text() {
            let tokens: Vec<_> = Tokenizer::new("hello").collect();
            assert_eq!(tokens, vec![Token::Text("hello")]);
        }

        #[test]
        fn nested_tags() {
            let tokens: Vec<_> = Tokenizer::new("a<i><b>x</b></i>").collect();
            assert_eq!(
                tokens,
                vec![
                    Token::Text("a"),
                    Token::Open(Markup::Italic),
                    Token::Open(Markup::Bold),
                    Token::Text("x"),
                    Token::Close(Markup::Bold),
                    Token::Close(Markup::Italic),
                ]
            );
        }

        #[test]
        fn unknown_angle_brackets_are_text() {
            let tokens: Vec<_> = Tokenizer::new("<s>x</s><u>y</u>").collect();
            assert_eq!(
                tokens,
                vec![
                    Token::Text("<s>x</s>"),
                    Token::Open(Markup::Underline),
                    Token::Text("y"),
                    Token::Close(Markup::Underline),
                ]
            );
        }

        #[test]
        fn empty_input() {
            assert_eq!(Tokenizer::new("").count(), 0);
        }
    }

    #[test]
    fn html_is_untouched() {
        assert_eq!(
            render("<b>a</b> &amp;", OutputFormat::Html, false),
            "<b>a</b> &amp;"
        );
    }

    #[test]
    fn plain_strips_tags_and_decodes() {
        assert_eq!(
            render("<i><b>a</b></i> &lt;3", OutputFormat::Plain, false),
            "a <3"
        );
    }

    #[test]
    fn term_applies_styles() {
        let output = render("<b>hi</b> there", OutputFormat::Term, true);
        assert!(output.contains("\x1b[1m"));
        assert!(output.contains("hi"));
        assert!(output.ends_with(" there"));
    }

    #[test]
    fn term_nested_styles() {
        let output = render("<u><i>x</i></u>", OutputFormat::Term, true);
        assert!(output.contains("\x1b[3m"));
        assert!(output.contains("\x1b[4m"));
    }

    #[test]
    fn term_wraps_whole_runs() {
        let output = render("<b>text</b>", OutputFormat::Term, true);
        assert!(output.matches("\x1b[").count() <= 2, "{output:?}");
    }

    #[test]
    fn term_without_styles_is_plain_text() {
        assert_eq!(render("a &amp; b", OutputFormat::Term, true), "a & b");
    }

    #[test]
    fn term_ignores_stray_close() {
        let output = render("a</b>b", OutputFormat::Term, true);
        assert_eq!(output, "ab");
    }
}
