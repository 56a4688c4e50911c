//! Inline tag markup and placeholder substitution into styled text.
//!
//! inkmark turns a plain string with embedded tags and `%name` placeholders
//! into a [`StyledText`] value whose content carries `<b>`, `<i>` and `<u>`
//! markup. A transformation runs in two steps:
//!
//! 1. **Substitution**: every `%identifier` is replaced with the matching
//!    variable, or with `???` when it is unset.
//! 2. **Parsing**: tags are applied left to right, producing one
//!    [`StyledText`] by concatenation.
//!
//! # Example
//!
//! ```rust
//! use inkmark::{transform, Variables};
//!
//! let vars = Variables::new().with("num_preguntas", 200);
//! let out = transform("@b{%num_preguntas} preguntas@i:!", &vars);
//! assert_eq!(out.content(), "<b>200</b> preguntas<i>!</i>");
//! ```
//!
//! # Markup
//!
//! | Form | Meaning |
//! |------|---------|
//! | `@<codes>{text}` | style `text` with every code in the chain |
//! | `@<codes><sep><c>` | drop the separator `<sep>`, style the single character `<c>` |
//! | `%name` | value of variable `name`, or `???` |
//!
//! Built-in codes are `b` (bold), `i` (italic) and `u` (underline). Chained
//! codes apply left to right, so `@bi{x}` yields `<i><b>x</b></i>`. More codes
//! can be registered with [`Parser::add_tag`].
//!
//! Malformed markup is never an error. An unknown code after `@` keeps the `@`
//! and that character as literal text, and a `{` that is never closed keeps
//! the whole tag as literal text.
//!
//! # Input sanitization
//!
//! The parser does not escape its input. Raw user text should go through
//! [`escape_html`] first so that the only markup in the result is the markup
//! the parser inserts.

mod error;
mod options;
mod parser;
mod registry;
mod sanitize;
mod styled;
mod substitute;
mod variables;

pub use error::{Result, VariablesError};
pub use options::{SubstitutionMode, TransformOptions, DEFAULT_MAX_SUBSTITUTIONS};
pub use parser::Parser;
pub use registry::{Modifier, TagRegistry};
pub use sanitize::{escape_html, unescape_html};
pub use styled::StyledText;
pub use substitute::{is_identifier, substitute, Substitution};
pub use variables::{is_truthy, Variables};

/// Character that starts a tag.
pub const TAG_INTRODUCER: char = '@';

/// Character that opens delimited tag content.
pub const DELIMITER_OPEN: char = '{';

/// Character that closes delimited tag content.
pub const DELIMITER_CLOSE: char = '}';

/// Character that starts a placeholder.
pub const IDENTIFIER_MARKER: char = '%';

/// Substituted for placeholders with no set value.
pub const MISSING_IDENTIFIER: &str = "???";

/// Produced when a tag reads past the end of the text, e.g. `@b` at the end.
pub const PAST_END_FALLBACK: char = '?';

/// Transforms `text` with the built-in tags and default options.
///
/// Equivalent to `Parser::new().transform(text, variables)`.
pub fn transform(text: &str, variables: &Variables) -> StyledText {
    Parser::new().transform(text, variables)
}
