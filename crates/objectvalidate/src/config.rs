use std::collections::HashMap;
use std::sync::Arc;

use objectvalidate_types::Value;

use crate::event::{EventSink, TracingSink};

/// Options for configuring the `Validator` at construction time.
#[non_exhaustive]
pub enum ValidatorOption {
    /// Send validation events to this sink instead of `tracing`.
    EventSink(Arc<dyn EventSink>),

    /// Groups applied when `validate` is called without an explicit context.
    DefaultGroups(Vec<String>),
}

/// Request-scoped state passed through a single validation run.
///
/// Holds the active validation groups and a free-form attribute bag that
/// constraints may read and write to share state during the run.
#[derive(Debug, Clone, Default)]
pub struct ValidatorContext {
    groups: Vec<String>,
    attributes: HashMap<String, Value>,
}

impl ValidatorContext {
    /// Create a context without groups or attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict validation to mappings belonging to one of `groups`.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the active validation groups. Empty means "all mappings".
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Set an attribute, consuming and returning the context.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Returns the attribute called `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns true when a mapping tagged with `groups` applies to this run.
    pub(crate) fn is_within_groups(&self, groups: &[String]) -> bool {
        self.groups.is_empty() || groups.iter().any(|group| self.groups.contains(group))
    }
}

/// Construction-time configuration of a `Validator`.
pub(crate) struct ValidatorConfig {
    pub sink: Arc<dyn EventSink>,
    pub default_groups: Vec<String>,
}

impl ValidatorConfig {
    pub(crate) fn from_options(options: &[ValidatorOption]) -> Self {
        let mut cfg = Self::default();
        for option in options {
            match option {
                ValidatorOption::EventSink(sink) => cfg.sink = Arc::clone(sink),
                ValidatorOption::DefaultGroups(groups) => cfg.default_groups.clone_from(groups),
            }
        }
        cfg
    }

    pub(crate) fn default_context(&self) -> ValidatorContext {
        ValidatorContext::new().with_groups(self.default_groups.iter().cloned())
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            sink: Arc::new(TracingSink),
            default_groups: Vec::new(),
        }
    }
}
