//! Validation of in-memory object graphs against programmatically registered
//! rules.
//!
//! A [`MappingRegistry`] tells the [`Validator`] which constraints apply to a
//! class and to each of its properties. Validating an object walks those
//! mappings and collects every finding as a [`Violation`]: a path, a
//! machine-readable key and a map of arguments. Nothing stops at the first
//! finding.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use objectvalidate::types::{Object, Value};
//! use objectvalidate::{
//!     EmailConstraint, MappingProvider, MappingRegistry, NotNullConstraint, PropertyMapping,
//!     StaticMappingProvider, Validator,
//! };
//!
//! #[derive(Debug)]
//! struct User {
//!     email: Option<String>,
//! }
//!
//! impl Object for User {
//!     fn class(&self) -> &str {
//!         "app.User"
//!     }
//!
//!     fn invoke(&self, method: &str) -> Option<Value> {
//!         match method {
//!             "getEmail" => Some(Value::from(self.email.clone())),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let provider = StaticMappingProvider::new("app.User").with_property(PropertyMapping::new(
//!     "email",
//!     vec![Arc::new(NotNullConstraint::new()), Arc::new(EmailConstraint::new())],
//! ));
//! let registry = MappingRegistry::new([Arc::new(provider) as Arc<dyn MappingProvider>]);
//! let validator = Validator::new(Arc::new(registry));
//!
//! let violations = validator
//!     .validate(&Value::object(User { email: Some("nope".into()) }))
//!     .expect("mapping is registered");
//! assert_eq!(violations[0].key(), "constraint.email.invalidformat");
//! ```
//!
//! # Errors and findings
//!
//! Findings are data, returned as `Vec<Violation>`. An [`Error`] is only
//! returned for wiring defects:
//!
//! | Type | When |
//! |------|------|
//! | [`LogicError`] | No mapping for a class, unknown lazy service, non-object input |
//! | [`ConfigurationError`] | A property has no `get`/`has`/`is` read operation |
//! | [`NotConfiguredError`] | A constraint misses a collaborator such as its repository |
//! | [`InvalidArgumentError`] | A constraint received a value lacking a required capability |
//! | [`RepositoryError`] | The injected repository failed |
//!
//! # Rendering
//!
//! [`ApiProblemMessages`] renders findings as flat `{name, reason, details}`
//! records; [`NestedMessages`] groups rendered messages into a tree keyed by
//! path segments.
//!
//! # Observability
//!
//! Each run emits a [`ValidationEvent`] per processed path and per finding.
//! By default events go to `tracing` through [`TracingSink`].

#![warn(missing_docs)]

mod config;
mod error;
mod event;
mod messages;
mod validator;
mod violation;

/// Re-export of the value and object model.
pub use objectvalidate_types as types;

pub use config::{ValidatorContext, ValidatorOption};
pub use error::{
    ConfigurationError, Error, InvalidArgumentError, LogicError, NotConfiguredError,
    RepositoryError,
};
pub use event::{EventSink, RecordingSink, Severity, TracingSink, ValidationEvent};
pub use messages::{ApiProblemMessages, MessageNode, NestedMessages};
pub use validator::{
    Accessor, AllConstraint, CallbackConstraint, ChoiceConstraint, ClassMapping,
    CollectionConstraint, Constraint, CountConstraint, DateTimeConstraint, EmailConstraint,
    LazyMappingProvider, MappingProvider, MappingRegistry, MethodAccessor, NotBlankConstraint,
    NotNullConstraint, NumericConstraint, ObjectValidator, PropertyMapping, Repository,
    ServiceLocator, ServiceMap, StaticMappingProvider, TypeConstraint, UniqueModelConstraint,
    ValidConstraint, Validator,
};
pub use violation::{ALL_SEGMENT, Violation, element_path, property_path};
