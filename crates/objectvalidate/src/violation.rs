use std::fmt;

use objectvalidate_types::{ApiProblem, Arguments};

/// Segment used for findings attributed to a whole collection rather than
/// one of its elements.
pub const ALL_SEGMENT: &str = "_all";

/// A single validation finding: where it happened, what failed, and the
/// arguments describing the failure. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    path: String,
    key: String,
    arguments: Arguments,
}

impl Violation {
    /// Create a finding without arguments.
    pub fn new(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::with_arguments(path, key, Arguments::new())
    }

    /// Create a finding with arguments.
    pub fn with_arguments(
        path: impl Into<String>,
        key: impl Into<String>,
        arguments: Arguments,
    ) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            arguments,
        }
    }

    /// Returns the path where this finding occurred.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the machine-readable finding key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the finding arguments.
    #[must_use]
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Convert into the API problem shape.
    #[must_use]
    pub fn to_api_problem(&self) -> ApiProblem {
        ApiProblem {
            name: self.path.clone(),
            reason: self.key.clone(),
            details: self.arguments.clone(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            write!(f, "{}: ", self.path)?;
        }
        write!(f, "[{}]", self.key)
    }
}

/// Build an [`Arguments`] map from `(name, value)` pairs.
pub(crate) fn arguments<const N: usize>(pairs: [(&str, serde_json::Value); N]) -> Arguments {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Path of the property `name` below `base`.
#[must_use]
pub fn property_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}.{name}")
    }
}

/// Path of the element at `key` within the collection at `base`.
///
/// `[`, `]` and `\` inside `key` are escaped with a backslash so any map
/// key survives [`NestedMessages`](crate::NestedMessages) splitting intact.
#[must_use]
pub fn element_path(base: &str, key: &str) -> String {
    let mut path = String::with_capacity(base.len() + key.len() + 2);
    path.push_str(base);
    path.push('[');
    for ch in key.chars() {
        if matches!(ch, '[' | ']' | '\\') {
            path.push('\\');
        }
        path.push(ch);
    }
    path.push(']');
    path
}

/// Split a path into its tree keys.
///
/// Dotted segments become successive keys; every `[token]` following a
/// segment name becomes a further key holding the unescaped token.
/// `collection[0].field1` yields `["collection", "0", "field1"]`. The empty
/// path yields a single empty key.
pub(crate) fn path_keys(path: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for segment in split_segments(path) {
        let (name, subscripts) = split_name_and_subscripts(segment);
        if !name.is_empty() || subscripts.is_empty() {
            keys.push(name);
        }
        keys.extend(subscripts);
    }
    keys
}

fn split_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut depth = 0usize;
    let mut escaped = false;

    for (idx, ch) in path.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&path[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    segments.push(&path[start..]);
    segments
}

fn split_name_and_subscripts(segment: &str) -> (String, Vec<String>) {
    let name_end = segment.find('[').unwrap_or(segment.len());
    let name = segment[..name_end].to_string();
    let mut subscripts = Vec::new();
    let mut current: Option<String> = None;
    let mut chars = segment[name_end..].chars();

    while let Some(ch) = chars.next() {
        match ch {
            '[' if current.is_none() => current = Some(String::new()),
            ']' => subscripts.extend(current.take()),
            '\\' => {
                if let Some(token) = current.as_mut() {
                    token.extend(chars.next());
                }
            }
            _ => {
                if let Some(token) = current.as_mut() {
                    token.push(ch);
                }
            }
        }
    }

    (name, subscripts)
}
