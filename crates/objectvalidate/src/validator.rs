use std::sync::Arc;

use objectvalidate_types::{Object, Value};

use crate::config::{ValidatorConfig, ValidatorContext, ValidatorOption};
use crate::error::{Error, LogicError};
use crate::event::ValidationEvent;
use crate::violation::{Violation, property_path};

mod accessor;
mod constraint;
mod mapping;
mod registry;

pub use accessor::{Accessor, MethodAccessor};
pub use constraint::Constraint;
pub use constraint::all::AllConstraint;
pub use constraint::callback::CallbackConstraint;
pub use constraint::choice::ChoiceConstraint;
pub use constraint::collection::CollectionConstraint;
pub use constraint::count::CountConstraint;
pub use constraint::datetime::DateTimeConstraint;
pub use constraint::email::EmailConstraint;
pub use constraint::not_blank::NotBlankConstraint;
pub use constraint::not_null::NotNullConstraint;
pub use constraint::numeric::NumericConstraint;
pub use constraint::type_check::TypeConstraint;
pub use constraint::unique_model::{Repository, UniqueModelConstraint};
pub use constraint::valid::ValidConstraint;
pub use mapping::{
    ClassMapping, LazyMappingProvider, MappingProvider, PropertyMapping, ServiceLocator,
    ServiceMap, StaticMappingProvider,
};
pub use registry::MappingRegistry;

/// Callback handed to constraints so they can validate nested objects with
/// the running validator.
pub trait ObjectValidator {
    /// Validate `object` at the base `path`.
    ///
    /// Findings of the nested object are prefixed with `path`.
    ///
    /// # Errors
    ///
    /// Returns an error for configuration defects, such as an object whose
    /// class has no registered mapping.
    fn validate_with(
        &self,
        object: &Value,
        context: &mut ValidatorContext,
        path: &str,
    ) -> Result<Vec<Violation>, Error>;
}

/// Validates objects against the mappings of a [`MappingRegistry`].
///
/// A run never stops at the first finding: every applicable constraint is
/// evaluated and all findings are returned. Property findings come first, in
/// declared property then constraint order, followed by class-level findings.
///
/// The validator holds no per-run state and can be shared between threads.
pub struct Validator {
    registry: Arc<MappingRegistry>,
    config: ValidatorConfig,
}

impl Validator {
    /// Create a `Validator` with default options.
    #[must_use]
    pub fn new(registry: Arc<MappingRegistry>) -> Self {
        Self {
            registry,
            config: ValidatorConfig::default(),
        }
    }

    /// Create a `Validator` with the given options.
    #[must_use]
    pub fn with_options(registry: Arc<MappingRegistry>, options: &[ValidatorOption]) -> Self {
        Self {
            registry,
            config: ValidatorConfig::from_options(options),
        }
    }

    /// Validate `object` at the root path with the default context.
    ///
    /// # Errors
    ///
    /// Returns an error when `object` is not an object, when a class on the
    /// way has no mapping, or when a constraint is misconfigured. Findings
    /// are never reported as errors.
    pub fn validate(&self, object: &Value) -> Result<Vec<Violation>, Error> {
        let mut context = self.config.default_context();
        self.validate_with(object, &mut context, "")
    }

    /// Validate `object` at the root path with the default context.
    ///
    /// # Errors
    ///
    /// See [`Validator::validate`].
    pub fn validate_object(&self, object: Arc<dyn Object>) -> Result<Vec<Violation>, Error> {
        self.validate(&Value::Object(object))
    }

    /// Validate `object` at the base `path` using `context`.
    ///
    /// # Errors
    ///
    /// See [`Validator::validate`].
    pub fn validate_with(
        &self,
        object: &Value,
        context: &mut ValidatorContext,
        path: &str,
    ) -> Result<Vec<Violation>, Error> {
        let violations = self.walk(object, context, path)?;
        for violation in &violations {
            self.config.sink.emit(ValidationEvent::violation(violation));
        }
        Ok(violations)
    }

    /// Apply property then class mappings to `object`, emitting one path
    /// event per processed property and one for the object itself.
    fn walk(
        &self,
        value: &Value,
        context: &mut ValidatorContext,
        path: &str,
    ) -> Result<Vec<Violation>, Error> {
        let Some(object) = value.as_object() else {
            return Err(LogicError::not_an_object(&value.type_name()).into());
        };

        let provider = self.registry.provide_mapping_for(&**object)?;
        let nested = Nested(self);
        let mut violations = Vec::new();

        for mapping in provider.property_mappings(path)? {
            if !context.is_within_groups(mapping.groups()) {
                continue;
            }

            let property_path = property_path(path, mapping.name());
            let property_value = mapping.accessor().get_value(&**object)?;
            for constraint in mapping.constraints() {
                violations.extend(constraint.validate(
                    &property_path,
                    &property_value,
                    context,
                    Some(&nested),
                )?);
            }

            self.config.sink.emit(ValidationEvent::path(&property_path));
        }

        if let Some(mapping) = provider.class_mapping(path)? {
            if context.is_within_groups(mapping.groups()) {
                for constraint in mapping.constraints() {
                    violations.extend(constraint.validate(path, value, context, Some(&nested))?);
                }
            }
        }

        self.config.sink.emit(ValidationEvent::path(path));

        Ok(violations)
    }
}

impl ObjectValidator for Validator {
    fn validate_with(
        &self,
        object: &Value,
        context: &mut ValidatorContext,
        path: &str,
    ) -> Result<Vec<Violation>, Error> {
        Validator::validate_with(self, object, context, path)
    }
}

/// Callback used for nested runs. Finding events are left to the outermost
/// run so each finding is reported once.
struct Nested<'a>(&'a Validator);

impl ObjectValidator for Nested<'_> {
    fn validate_with(
        &self,
        object: &Value,
        context: &mut ValidatorContext,
        path: &str,
    ) -> Result<Vec<Violation>, Error> {
        self.0.walk(object, context, path)
    }
}
