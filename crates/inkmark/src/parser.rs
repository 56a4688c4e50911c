//! Tag lexer and parser.
//!
//! The parser reads the (already substituted) text left to right. Plain runs
//! up to the next `@` become literal text. At an `@`, a chain of registered
//! tag codes is read; the first character that is not a code ends the chain
//! and is consumed. What happens next depends on that terminator:
//!
//! - `{` starts delimited mode: everything up to the next `}` is the content.
//! - Anything else is a separator and is dropped; the one character after it
//!   is the content (single-character mode).
//!
//! Modifiers are applied in the order their codes appear, so the first code
//! ends up innermost.
//!
//! ```rust
//! use inkmark::Parser;
//!
//! let parser = Parser::new();
//! assert_eq!(parser.parse("@bi{hi}").content(), "<i><b>hi</b></i>");
//! assert_eq!(parser.parse("@b y").content(), "<b>y</b>");
//! ```
//!
//! Malformed tags never fail. A chain with no known code emits the `@` and the
//! character after it verbatim; a delimited tag with no closing `}` emits
//! everything it consumed verbatim.

use crate::options::TransformOptions;
use crate::registry::{Modifier, TagRegistry};
use crate::styled::StyledText;
use crate::substitute::substitute;
use crate::variables::Variables;
use crate::{DELIMITER_CLOSE, DELIMITER_OPEN, PAST_END_FALLBACK, TAG_INTRODUCER};

/// Read position into one input string.
///
/// Created fresh for every [`Parser::parse`] call and never stored on the
/// parser, so a single parser can serve concurrent callers.
#[derive(Debug)]
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Consumes one character. Past the end this yields
    /// [`PAST_END_FALLBACK`] and leaves the position alone.
    fn take(&mut self) -> char {
        match self.peek() {
            Some(c) => {
                self.pos += c.len_utf8();
                c
            }
            None => PAST_END_FALLBACK,
        }
    }

    /// Consumes everything up to, not including, the next `stop` (or the end).
    fn take_until(&mut self, stop: char) -> &'a str {
        let rest = &self.text[self.pos..];
        let len = rest.find(stop).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Text consumed since byte offset `start`.
    fn since(&self, start: usize) -> &'a str {
        &self.text[start..self.pos]
    }
}

/// Inline markup parser.
///
/// Holds the tag registry and transform options. Both are configuration:
/// [`parse`](Parser::parse) and [`transform`](Parser::transform) take `&self`
/// and keep their state in a call-local cursor.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    registry: TagRegistry,
    options: TransformOptions,
}

impl Parser {
    /// Creates a parser with the built-in tags and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the tag registry.
    pub fn with_registry(mut self, registry: TagRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the transform options.
    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers a tag code, replacing any previous registration.
    pub fn add_tag<F>(&mut self, code: char, modifier: F)
    where
        F: Fn(StyledText) -> StyledText + Send + Sync + 'static,
    {
        self.registry.add_tag(code, modifier);
    }

    /// Builder form of [`add_tag`](Self::add_tag).
    pub fn with_tag<F>(mut self, code: char, modifier: F) -> Self
    where
        F: Fn(StyledText) -> StyledText + Send + Sync + 'static,
    {
        self.add_tag(code, modifier);
        self
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Substitutes placeholders in `text`, then parses the result.
    pub fn transform(&self, text: &str, variables: &Variables) -> StyledText {
        let substituted = substitute(text, variables, &self.options);
        self.parse(&substituted.text)
    }

    /// Parses tags in `text`. Placeholders are not touched.
    pub fn parse(&self, text: &str) -> StyledText {
        let mut cursor = Cursor::new(text);
        let mut result = StyledText::empty();

        while !cursor.is_at_end() {
            if cursor.peek() == Some(TAG_INTRODUCER) {
                result = result + self.handle_tag(&mut cursor);
                continue;
            }
            result = result + StyledText::new(cursor.take_until(TAG_INTRODUCER));
        }

        result
    }

    /// Handles one tag. The cursor must be on the introducer.
    fn handle_tag(&self, cursor: &mut Cursor<'_>) -> StyledText {
        let start = cursor.pos;
        cursor.take();

        let mut modifiers: Vec<&Modifier> = Vec::new();
        let mut delimited = false;
        while let Some(c) = cursor.peek() {
            cursor.take();
            match self.registry.get(c) {
                Some(modifier) => modifiers.push(modifier),
                None => {
                    delimited = c == DELIMITER_OPEN;
                    break;
                }
            }
        }

        if modifiers.is_empty() {
            log::debug!("no tag code after '{TAG_INTRODUCER}' at byte {start}, keeping literal");
            return StyledText::new(cursor.since(start));
        }

        let content = if delimited {
            let content = cursor.take_until(DELIMITER_CLOSE);
            if cursor.is_at_end() {
                log::debug!("unterminated tag at byte {start}, keeping literal");
                return StyledText::new(cursor.since(start));
            }
            cursor.take();
            content.to_string()
        } else {
            cursor.take().to_string()
        };

        modifiers
            .into_iter()
            .fold(StyledText::new(content), |text, modifier| modifier(text))
    }
}
