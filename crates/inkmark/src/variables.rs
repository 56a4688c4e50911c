//! Caller-supplied values for `%name` placeholders.
//!
//! Values are stored as [`serde_json::Value`] so that mappings can be built in
//! code, or loaded from JSON and YAML documents. A value only substitutes when
//! it is *set*: null, `false`, zero and the empty string count as unset, the
//! same as a missing entry.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, VariablesError};
use crate::substitute::is_identifier;

/// Variables mapping for one transformation.
///
/// # Example
///
/// ```rust
/// use inkmark::Variables;
///
/// let vars = Variables::new()
///     .with("num_preguntas", 200)
///     .with("empty", "");
///
/// assert_eq!(vars.resolve("num_preguntas").as_deref(), Some("200"));
/// assert!(!vars.is_set("empty"));
/// assert!(!vars.is_set("missing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: BTreeMap<String, Value>,
}

impl Variables {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the raw value stored for `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns `true` if `name` holds a truthy value.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(is_truthy)
    }

    /// Returns the string form of `name` if it is set.
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .filter(|value| is_truthy(value))
            .map(format_value)
    }

    /// Returns a mapping where every set value is replaced by `f` applied to
    /// its string form. Unset values are kept as they are, so they stay unset.
    ///
    /// ```rust
    /// use inkmark::{escape_html, Variables};
    ///
    /// let vars = Variables::new().with("who", "<script>").with("n", 0);
    /// let escaped = vars.map_resolved(escape_html);
    /// assert_eq!(escaped.resolve("who").as_deref(), Some("&lt;script&gt;"));
    /// assert!(!escaped.is_set("n"));
    /// ```
    pub fn map_resolved(&self, f: impl Fn(&str) -> String) -> Variables {
        let values = self
            .values
            .iter()
            .map(|(name, value)| {
                let mapped = if is_truthy(value) {
                    Value::String(f(&format_value(value)))
                } else {
                    value.clone()
                };
                (name.clone(), mapped)
            })
            .collect();
        Variables { values }
    }

    /// Copies every entry of `other` over this mapping.
    pub fn extend(&mut self, other: Variables) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parses a JSON document whose top level is an object.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Parses a YAML document whose top level is a mapping.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value)
    }

    /// Builds a mapping from a JSON object value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            // a document holding only `~` or comments
            Value::Null => Ok(Self::new()),
            other => Err(VariablesError::NotAMapping {
                found: value_kind(&other),
            }),
        }
    }

    /// Parses a `NAME=VALUE` assignment.
    ///
    /// The value is kept as a string; everything after the first `=` belongs
    /// to it, so `a=b=c` assigns `"b=c"` to `a`.
    pub fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| VariablesError::InvalidAssignment(assignment.to_string()))?;
        let name = name.trim();
        if !is_identifier(name) {
            return Err(VariablesError::InvalidName(name.to_string()));
        }
        Ok((name.to_string(), Value::String(value.to_string())))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Truthiness of a variable value.
///
/// Null, `false`, numeric zero and the empty string are falsy. Arrays and
/// objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Formats a value as substitution text.
///
/// Floats go through `f64`'s `Display`, so an integral float such as `200.0`
/// renders as `200`.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
