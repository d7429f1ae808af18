/// Top-level error type for configuration and programming defects.
///
/// Validation findings are never reported through this type: they are
/// returned as [`Violation`](crate::Violation) values. An `Error` means the
/// validator was wired incorrectly and the caller has to fix the setup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A lookup that must succeed for a correctly configured validator failed.
    #[error(transparent)]
    Logic(#[from] LogicError),

    /// A property could not be read from an object.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A constraint was used before a required collaborator was supplied.
    #[error(transparent)]
    NotConfigured(#[from] NotConfiguredError),

    /// A constraint received a value lacking a required capability.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// The injected repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Returned when a mapping or service lookup fails.
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct LogicError {
    /// Description of the failed lookup.
    pub cause: String,
}

impl LogicError {
    pub(crate) fn missing_mapping(class: &str) -> Self {
        Self {
            cause: format!("no mapping for class: \"{class}\""),
        }
    }

    pub(crate) fn missing_service(id: &str) -> Self {
        Self {
            cause: format!("no service registered for id: \"{id}\""),
        }
    }

    pub(crate) fn invalid_format(format: &str) -> Self {
        Self {
            cause: format!("invalid date/time format: \"{format}\""),
        }
    }

    pub(crate) fn not_an_object(type_name: &str) -> Self {
        Self {
            cause: format!("only objects can be validated, {type_name} given"),
        }
    }
}

/// Returned when none of the conventional read operations exist on an object.
#[derive(Debug, thiserror::Error)]
#[error(
    "there are no accessible method(s) {}, within class: \"{class}\"",
    quoted_list(.methods)
)]
pub struct ConfigurationError {
    /// The method names that were tried, in resolution order.
    pub methods: Vec<String>,
    /// Class identifier of the inspected object.
    pub class: String,
}

/// Returned when a constraint needs a collaborator that was never supplied.
#[derive(Debug, thiserror::Error)]
#[error("constraint {constraint} needs a {dependency}, supply it before validating")]
pub struct NotConfiguredError {
    /// The constraint that was used.
    pub constraint: &'static str,
    /// The missing collaborator.
    pub dependency: &'static str,
}

/// Returned when a constraint receives a value without the capability it requires.
#[derive(Debug, thiserror::Error)]
#[error("the value to validate needs to implement {expected}, {given} given")]
pub struct InvalidArgumentError {
    /// The required capability.
    pub expected: &'static str,
    /// Type name of the received value.
    pub given: String,
}

/// Returned when the repository backing a constraint fails.
#[derive(Debug, thiserror::Error)]
#[error("repository lookup failed: {source}")]
pub struct RepositoryError {
    /// The repository's own error.
    #[source]
    pub source: anyhow::Error,
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
