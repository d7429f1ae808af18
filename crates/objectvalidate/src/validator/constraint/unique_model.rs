use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use objectvalidate_types::{ValidatableModel, Value};

use super::Constraint;
use crate::config::ValidatorContext;
use crate::error::{Error, InvalidArgumentError, NotConfiguredError, RepositoryError};
use crate::validator::ObjectValidator;
use crate::validator::accessor::{Accessor, MethodAccessor};
use crate::violation::{Violation, arguments};

/// Lookup capability backing [`UniqueModelConstraint`].
///
/// Calls are synchronous from the validator's point of view; timeouts and
/// retries belong to the implementation.
pub trait Repository: Send + Sync {
    /// Returns one stored model whose fields equal `criteria`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be queried.
    fn find_one_by(
        &self,
        criteria: &[(String, Value)],
    ) -> anyhow::Result<Option<Arc<dyn ValidatableModel>>>;
}

/// Requires a model to be unique in its store over a set of fields.
///
/// A stored match only counts as a conflict when its identity differs from
/// the validated model, so re-validating an already stored model passes.
pub struct UniqueModelConstraint {
    properties: Vec<String>,
    accessors: Vec<MethodAccessor>,
    repository: RwLock<Option<Arc<dyn Repository>>>,
}

impl UniqueModelConstraint {
    /// Create a constraint over the ordered `properties` forming the
    /// uniqueness key. A repository must be supplied before validating.
    pub fn new<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let properties: Vec<String> = properties.into_iter().map(Into::into).collect();
        let accessors = properties
            .iter()
            .map(|property| MethodAccessor::new(property))
            .collect();
        Self {
            properties,
            accessors,
            repository: RwLock::new(None),
        }
    }

    /// Supply the repository, consuming and returning the constraint.
    #[must_use]
    pub fn with_repository(self, repository: Arc<dyn Repository>) -> Self {
        self.set_repository(repository);
        self
    }

    /// Supply or replace the repository.
    ///
    /// Takes `&self` so a constraint already shared by a mapping can be wired
    /// late.
    pub fn set_repository(&self, repository: Arc<dyn Repository>) {
        *self
            .repository
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(repository);
    }

    fn repository(&self) -> Option<Arc<dyn Repository>> {
        self.repository
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl fmt::Debug for UniqueModelConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueModelConstraint")
            .field("properties", &self.properties)
            .field("has_repository", &self.repository().is_some())
            .finish()
    }
}

impl Constraint for UniqueModelConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        if value.is_null() {
            return Ok(Vec::new());
        }

        let Some((object, model)) = value
            .as_object()
            .and_then(|object| object.as_model().map(|model| (object, model)))
        else {
            return Err(InvalidArgumentError {
                expected: "ValidatableModel",
                given: value.type_name(),
            }
            .into());
        };

        let repository = self.repository().ok_or(NotConfiguredError {
            constraint: "UniqueModelConstraint",
            dependency: "repository",
        })?;

        let mut criteria = Vec::with_capacity(self.properties.len());
        for (property, accessor) in self.properties.iter().zip(&self.accessors) {
            criteria.push((property.clone(), accessor.get_value(&**object)?));
        }

        let found = repository
            .find_one_by(&criteria)
            .map_err(|source| RepositoryError { source })?;

        match found {
            Some(stored) if stored.id() != model.id() => Ok(vec![Violation::with_arguments(
                path,
                "constraint.uniquemodel.notunique",
                arguments([(
                    "uniqueProperties",
                    serde_json::Value::String(self.properties.join(", ")),
                )]),
            )]),
            _ => Ok(Vec::new()),
        }
    }
}
