//! Placeholder substitution.
//!
//! Runs once over the raw input, before tag parsing. A placeholder is the
//! marker `%` followed by an identifier matching `[A-Za-z_][A-Za-z0-9_]*`.
//! When the character after the marker cannot start an identifier, only the
//! marker is consumed and the lookup uses the empty name.
//!
//! A set variable substitutes its string form; anything else substitutes
//! [`MISSING_IDENTIFIER`].
//!
//! # Modes
//!
//! In [`SubstitutionMode::Rescan`] the pass always resolves the leftmost
//! marker still present in the buffer. Text to the left of a splice never
//! holds a marker, so the search resumes at the splice point, which gives the
//! same result as rescanning the whole buffer. Markers carried in by an
//! inserted value are therefore resolved too:
//!
//! ```rust
//! use inkmark::{substitute, SubstitutionMode, TransformOptions, Variables};
//!
//! let vars = Variables::new().with("greeting", "hi %name").with("name", "Ada");
//!
//! let rescan = substitute("%greeting", &vars, &TransformOptions::default());
//! assert_eq!(rescan.text, "hi Ada");
//!
//! let single = TransformOptions::new().substitution(SubstitutionMode::SinglePass);
//! assert_eq!(substitute("%greeting", &vars, &single).text, "hi %name");
//! ```
//!
//! Both modes stop after [`TransformOptions::max_substitutions`] splices and
//! leave the remaining text as it is.

use crate::options::{SubstitutionMode, TransformOptions};
use crate::variables::Variables;
use crate::{IDENTIFIER_MARKER, MISSING_IDENTIFIER};

/// Result of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The substituted text.
    pub text: String,
    /// Number of placeholders replaced.
    pub count: usize,
    /// `true` if the pass stopped at the substitution cap with markers left.
    pub truncated: bool,
}

/// Replaces every placeholder in `text`.
pub fn substitute(text: &str, variables: &Variables, options: &TransformOptions) -> Substitution {
    let result = match options.substitution {
        SubstitutionMode::Rescan => rescan(text, variables, options.max_substitutions),
        SubstitutionMode::SinglePass => single_pass(text, variables, options.max_substitutions),
    };
    if result.truncated {
        log::warn!(
            "placeholder substitution stopped after {} replacements; remaining markers left as-is",
            result.count
        );
    }
    result
}

fn rescan(text: &str, variables: &Variables, max: usize) -> Substitution {
    let mut buffer = text.to_string();
    let mut from = 0;
    let mut count = 0;
    let mut truncated = false;

    while let Some(offset) = buffer[from..].find(IDENTIFIER_MARKER) {
        if count == max {
            truncated = true;
            break;
        }
        let at = from + offset;
        let name_start = at + IDENTIFIER_MARKER.len_utf8();
        let name = leading_identifier(&buffer[name_start..]);
        let name_end = name_start + name.len();
        let value = resolve(name, variables);

        buffer.replace_range(at..name_end, &value);
        from = at;
        count += 1;
    }

    Substitution {
        text: buffer,
        count,
        truncated,
    }
}

fn single_pass(text: &str, variables: &Variables, max: usize) -> Substitution {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    let mut count = 0;
    let mut truncated = false;

    while let Some(at) = rest.find(IDENTIFIER_MARKER) {
        if count == max {
            truncated = true;
            break;
        }
        output.push_str(&rest[..at]);
        let after = &rest[at + IDENTIFIER_MARKER.len_utf8()..];
        let name = leading_identifier(after);
        output.push_str(&resolve(name, variables));
        rest = &after[name.len()..];
        count += 1;
    }
    output.push_str(rest);

    Substitution {
        text: output,
        count,
        truncated,
    }
}

fn resolve(name: &str, variables: &Variables) -> String {
    variables.resolve(name).unwrap_or_else(|| {
        log::debug!("no value for placeholder '{name}'");
        MISSING_IDENTIFIER.to_string()
    })
}

/// Returns the longest identifier at the start of `s` (possibly empty).
fn leading_identifier(s: &str) -> &str {
    let mut end = 0;
    for (i, c) in s.char_indices() {
        let valid = if i == 0 {
            is_identifier_start(c)
        } else {
            is_identifier_char(c)
        };
        if !valid {
            break;
        }
        end = i + c.len_utf8();
    }
    &s[..end]
}

/// Returns `true` if `c` may start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Returns `true` if `c` may continue an identifier.
pub fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Returns `true` if `s` is a non-empty identifier.
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && leading_identifier(s).len() == s.len()
}
