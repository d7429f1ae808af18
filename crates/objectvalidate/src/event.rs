use std::sync::{Mutex, MutexGuard, PoisonError};

use objectvalidate_types::Arguments;

use crate::violation::Violation;

const PATH_TEMPLATE: &str = "validation: path {path}";
const VIOLATION_TEMPLATE: &str = "validation: path {path}, key {key}, arguments {arguments}";

/// Severity of a validation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A path was processed.
    Info,
    /// A finding was produced.
    Notice,
}

/// A structured event emitted by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationEvent {
    /// Event severity.
    pub severity: Severity,
    /// Message template with `{path}`, `{key}` and `{arguments}` placeholders.
    pub template: &'static str,
    /// The processed path.
    pub path: String,
    /// The finding key, for [`Severity::Notice`] events.
    pub key: Option<String>,
    /// The finding arguments, for [`Severity::Notice`] events.
    pub arguments: Option<Arguments>,
}

impl ValidationEvent {
    pub(crate) fn path(path: &str) -> Self {
        Self {
            severity: Severity::Info,
            template: PATH_TEMPLATE,
            path: path.to_string(),
            key: None,
            arguments: None,
        }
    }

    pub(crate) fn violation(violation: &Violation) -> Self {
        Self {
            severity: Severity::Notice,
            template: VIOLATION_TEMPLATE,
            path: violation.path().to_string(),
            key: Some(violation.key().to_string()),
            arguments: Some(violation.arguments().clone()),
        }
    }

    /// Returns the template with its placeholders filled in.
    #[must_use]
    pub fn message(&self) -> String {
        let arguments = self
            .arguments
            .as_ref()
            .map(|args| serde_json::Value::Object(args.clone()).to_string())
            .unwrap_or_default();
        self.template
            .replace("{path}", &self.path)
            .replace("{key}", self.key.as_deref().unwrap_or_default())
            .replace("{arguments}", &arguments)
    }
}

/// Receives structured events from the validator.
pub trait EventSink: Send + Sync {
    /// Accept one event.
    fn emit(&self, event: ValidationEvent);
}

/// Default sink forwarding events to `tracing`.
///
/// Path events are logged at `DEBUG`, finding events at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: ValidationEvent) {
        match event.severity {
            Severity::Info => {
                tracing::debug!(path = %event.path, "{}", event.message());
            }
            Severity::Notice => {
                let arguments = event
                    .arguments
                    .as_ref()
                    .map(|args| serde_json::Value::Object(args.clone()))
                    .unwrap_or_default();
                tracing::info!(
                    path = %event.path,
                    key = event.key.as_deref().unwrap_or_default(),
                    arguments = %arguments,
                    "{}",
                    event.message()
                );
            }
        }
    }
}

/// Sink that keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ValidationEvent>>,
}

impl RecordingSink {
    fn lock(&self) -> MutexGuard<'_, Vec<ValidationEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<ValidationEvent> {
        self.lock().clone()
    }

    /// Remove and return the recorded events.
    pub fn take(&self) -> Vec<ValidationEvent> {
        std::mem::take(&mut *self.lock())
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: ValidationEvent) {
        self.lock().push(event);
    }
}
