//! HTML entity escaping for raw user input.
//!
//! Callers escape user text before handing it to the parser, so that the only
//! real markup in the output is the `<b>`, `<i>` and `<u>` the parser itself
//! inserts. The parser never escapes on its own.

const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#039;"),
];

/// Replaces `&`, `<`, `>`, `"` and `'` with entity forms.
///
/// ```rust
/// use inkmark::escape_html;
///
/// assert_eq!(escape_html("<b>&'\""), "&lt;b&gt;&amp;&#039;&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ENTITIES.iter().find(|(raw, _)| *raw == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Reverses [`escape_html`].
///
/// Only the five entities `escape_html` produces are recognized; any other
/// `&` sequence is copied through unchanged.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match ENTITIES.iter().find(|(_, entity)| rest.starts_with(*entity)) {
            Some((raw, entity)) => {
                out.push(*raw);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
