//! Transformation settings.

use serde::{Deserialize, Serialize};

/// Default cap on the number of placeholder substitutions per call.
pub const DEFAULT_MAX_SUBSTITUTIONS: usize = 1024;

/// How inserted variable values are treated by the substitution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionMode {
    /// Resolve the leftmost remaining marker after every splice, including
    /// markers that arrived inside an inserted value.
    #[default]
    Rescan,

    /// One left-to-right scan. Inserted values are copied verbatim and never
    /// looked at again.
    SinglePass,
}

/// Settings for a [`Parser`](crate::Parser).
///
/// Can be deserialized from a config file:
///
/// ```rust
/// use inkmark::{SubstitutionMode, TransformOptions};
///
/// let options: TransformOptions =
///     serde_json::from_str(r#"{"substitution": "single_pass"}"#).unwrap();
/// assert_eq!(options.substitution, SubstitutionMode::SinglePass);
/// assert_eq!(options.max_substitutions, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub substitution: SubstitutionMode,

    /// Upper bound on substitutions per call. In [`SubstitutionMode::Rescan`]
    /// a value that keeps inserting markers would otherwise never terminate;
    /// once the cap is hit the rest of the text is left untouched.
    pub max_substitutions: usize,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn substitution(mut self, mode: SubstitutionMode) -> Self {
        self.substitution = mode;
        self
    }

    pub fn max_substitutions(mut self, max: usize) -> Self {
        self.max_substitutions = max;
        self
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            substitution: SubstitutionMode::default(),
            max_substitutions: DEFAULT_MAX_SUBSTITUTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = TransformOptions::default();
        assert_eq!(options.substitution, SubstitutionMode::Rescan);
        assert_eq!(options.max_substitutions, DEFAULT_MAX_SUBSTITUTIONS);
    }

    #[test]
    fn builder_setters() {
        let options = TransformOptions::new()
            .substitution(SubstitutionMode::SinglePass)
            .max_substitutions(8);
        assert_eq!(options.substitution, SubstitutionMode::SinglePass);
        assert_eq!(options.max_substitutions, 8);
    }

    #[test]
    fn deserialize_partial_yaml() {
        let options: TransformOptions = serde_yaml::from_str("max_substitutions: 5\n").unwrap();
        assert_eq!(options.substitution, SubstitutionMode::Rescan);
        assert_eq!(options.max_substitutions, 5);
    }
}
