//! Mapping from single-character tag codes to style modifiers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::styled::StyledText;

/// A style modifier applied to tag content.
pub type Modifier = Arc<dyn Fn(StyledText) -> StyledText + Send + Sync>;

/// Registry of tag codes.
///
/// [`TagRegistry::new`] registers the three built-in codes:
///
/// | Code | Style |
/// |------|-------|
/// | `b` | [`StyledText::bold`] |
/// | `i` | [`StyledText::italic`] |
/// | `u` | [`StyledText::underline`] |
///
/// Further codes can be added (or built-ins replaced) with
/// [`add_tag`](TagRegistry::add_tag). Registration needs `&mut self`, so it can
/// never overlap a parse, which only borrows the registry.
///
/// # Example
///
/// ```rust
/// use inkmark::{StyledText, TagRegistry};
///
/// let registry = TagRegistry::new().with_tag('s', |t: StyledText| t.wrap("<s>", "</s>"));
/// assert!(registry.contains('s'));
/// assert_eq!(registry.codes(), vec!['b', 'i', 's', 'u']);
/// ```
#[derive(Clone)]
pub struct TagRegistry {
    modifiers: HashMap<char, Modifier>,
}

impl TagRegistry {
    /// Creates a registry with the built-in `b`, `i` and `u` codes.
    pub fn new() -> Self {
        Self::empty()
            .with_tag('b', |t: StyledText| t.bold())
            .with_tag('i', |t: StyledText| t.italic())
            .with_tag('u', |t: StyledText| t.underline())
    }

    /// Creates a registry with no codes at all.
    pub fn empty() -> Self {
        Self {
            modifiers: HashMap::new(),
        }
    }

    /// Registers `modifier` for `code`, replacing any previous registration.
    pub fn add_tag<F>(&mut self, code: char, modifier: F)
    where
        F: Fn(StyledText) -> StyledText + Send + Sync + 'static,
    {
        if self.modifiers.insert(code, Arc::new(modifier)).is_some() {
            log::debug!("tag code '{code}' re-registered");
        }
    }

    /// Builder form of [`add_tag`](Self::add_tag).
    pub fn with_tag<F>(mut self, code: char, modifier: F) -> Self
    where
        F: Fn(StyledText) -> StyledText + Send + Sync + 'static,
    {
        self.add_tag(code, modifier);
        self
    }

    /// Returns the modifier registered for `code`.
    pub fn get(&self, code: char) -> Option<&Modifier> {
        self.modifiers.get(&code)
    }

    pub fn contains(&self, code: char) -> bool {
        self.modifiers.contains_key(&code)
    }

    /// Returns all registered codes in sorted order.
    pub fn codes(&self) -> Vec<char> {
        let mut codes: Vec<char> = self.modifiers.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("codes", &self.codes())
            .finish()
    }
}
