//! The styled-text value produced by parsing.
//!
//! [`StyledText`] is an immutable wrapper around a content string. Styling is
//! expressed by wrapping the content in inline tags (`<b>`, `<i>`, `<u>`), and
//! every operation returns a new value rather than mutating in place.

use std::fmt;
use std::ops::Add;

/// Immutable styled text.
///
/// # Example
///
/// ```rust
/// use inkmark::StyledText;
///
/// let text = StyledText::new("hi").bold().italic();
/// assert_eq!(text.content(), "<i><b>hi</b></i>");
///
/// let joined = StyledText::new("a") + StyledText::new("b");
/// assert_eq!(joined.content(), "ab");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyledText {
    content: String,
}

impl StyledText {
    /// Creates styled text from a literal content string.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Creates styled text with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the content string.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the value, returning its content string.
    pub fn into_content(self) -> String {
        self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns a new value whose content is `self` followed by `other`.
    pub fn concat(&self, other: &StyledText) -> StyledText {
        let mut content = String::with_capacity(self.content.len() + other.content.len());
        content.push_str(&self.content);
        content.push_str(&other.content);
        StyledText { content }
    }

    /// Wraps the content between `open` and `close`.
    ///
    /// This is the building block for the built-in styles and for custom
    /// tags registered on a [`TagRegistry`](crate::TagRegistry).
    pub fn wrap(&self, open: &str, close: &str) -> StyledText {
        let mut content = String::with_capacity(open.len() + self.content.len() + close.len());
        content.push_str(open);
        content.push_str(&self.content);
        content.push_str(close);
        StyledText { content }
    }

    /// Wraps the content in `<b>…</b>`.
    pub fn bold(&self) -> StyledText {
        self.wrap("<b>", "</b>")
    }

    /// Wraps the content in `<i>…</i>`.
    pub fn italic(&self) -> StyledText {
        self.wrap("<i>", "</i>")
    }

    /// Wraps the content in `<u>…</u>`.
    pub fn underline(&self) -> StyledText {
        self.wrap("<u>", "</u>")
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for StyledText {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for StyledText {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl From<StyledText> for String {
    fn from(text: StyledText) -> Self {
        text.content
    }
}

impl Add for StyledText {
    type Output = StyledText;

    fn add(mut self, rhs: StyledText) -> StyledText {
        self.content.push_str(&rhs.content);
        self
    }
}

impl Add<&StyledText> for StyledText {
    type Output = StyledText;

    fn add(mut self, rhs: &StyledText) -> StyledText {
        self.content.push_str(&rhs.content);
        self
    }
}
