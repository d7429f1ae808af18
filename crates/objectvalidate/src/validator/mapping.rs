use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::accessor::{Accessor, MethodAccessor};
use super::constraint::Constraint;
use crate::error::{Error, LogicError};

/// Constraints applying to one property of a class.
#[derive(Clone)]
pub struct PropertyMapping {
    name: String,
    constraints: Vec<Arc<dyn Constraint>>,
    groups: Vec<String>,
    accessor: Arc<dyn Accessor>,
}

impl PropertyMapping {
    /// Map `constraints` to the property `name`, read through the
    /// conventional `get/has/is` accessor.
    pub fn new(name: impl Into<String>, constraints: Vec<Arc<dyn Constraint>>) -> Self {
        let name = name.into();
        let accessor = Arc::new(MethodAccessor::new(&name));
        Self {
            name,
            constraints,
            groups: Vec::new(),
            accessor,
        }
    }

    /// Restrict this mapping to the given validation groups.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Read the property with `accessor` instead of the method accessor.
    #[must_use]
    pub fn with_accessor(mut self, accessor: Arc<dyn Accessor>) -> Self {
        self.accessor = accessor;
        self
    }

    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the constraints, in declared order.
    #[must_use]
    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }

    /// Returns the validation groups this mapping belongs to.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Returns the accessor reading the property.
    #[must_use]
    pub fn accessor(&self) -> &dyn Accessor {
        self.accessor.as_ref()
    }
}

impl fmt::Debug for PropertyMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMapping")
            .field("name", &self.name)
            .field("constraints", &self.constraints.len())
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}

/// Constraints applying to an object as a whole.
#[derive(Clone, Default)]
pub struct ClassMapping {
    constraints: Vec<Arc<dyn Constraint>>,
    groups: Vec<String>,
}

impl ClassMapping {
    /// Create a class mapping from `constraints`.
    #[must_use]
    pub fn new(constraints: Vec<Arc<dyn Constraint>>) -> Self {
        Self {
            constraints,
            groups: Vec::new(),
        }
    }

    /// Restrict this mapping to the given validation groups.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the constraints, in declared order.
    #[must_use]
    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }

    /// Returns the validation groups this mapping belongs to.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

impl fmt::Debug for ClassMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassMapping")
            .field("constraints", &self.constraints.len())
            .field("groups", &self.groups)
            .finish()
    }
}

/// Supplies the validation rules for one class.
///
/// `path` is the base path the object is validated at, so providers may
/// vary their rules with the position in the object graph.
pub trait MappingProvider: Send + Sync {
    /// Class identifier this provider describes.
    fn class(&self) -> &str;

    /// Returns the class-level mapping, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider cannot be resolved.
    fn class_mapping(&self, path: &str) -> Result<Option<Arc<ClassMapping>>, Error>;

    /// Returns the property mappings, in declared order.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider cannot be resolved.
    fn property_mappings(&self, path: &str) -> Result<Vec<Arc<PropertyMapping>>, Error>;
}

/// A provider holding fixed mappings built in-process.
#[derive(Debug, Clone)]
pub struct StaticMappingProvider {
    class: String,
    class_mapping: Option<Arc<ClassMapping>>,
    property_mappings: Vec<Arc<PropertyMapping>>,
}

impl StaticMappingProvider {
    /// Create a provider for `class` without any rules.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            class_mapping: None,
            property_mappings: Vec::new(),
        }
    }

    /// Set the class-level mapping.
    #[must_use]
    pub fn with_class_mapping(mut self, mapping: ClassMapping) -> Self {
        self.class_mapping = Some(Arc::new(mapping));
        self
    }

    /// Append a property mapping.
    #[must_use]
    pub fn with_property(mut self, mapping: PropertyMapping) -> Self {
        self.property_mappings.push(Arc::new(mapping));
        self
    }
}

impl MappingProvider for StaticMappingProvider {
    fn class(&self) -> &str {
        &self.class
    }

    fn class_mapping(&self, _path: &str) -> Result<Option<Arc<ClassMapping>>, Error> {
        Ok(self.class_mapping.clone())
    }

    fn property_mappings(&self, _path: &str) -> Result<Vec<Arc<PropertyMapping>>, Error> {
        Ok(self.property_mappings.clone())
    }
}

/// Resolves providers by service id.
pub trait ServiceLocator: Send + Sync {
    /// Returns the provider registered under `id`.
    fn get(&self, id: &str) -> Option<Arc<dyn MappingProvider>>;
}

/// Thread-safe [`ServiceLocator`] backed by a map.
///
/// Services can be registered after lazy providers referencing them were
/// created, which lets mappings refer to each other.
#[derive(Default)]
pub struct ServiceMap {
    services: RwLock<HashMap<String, Arc<dyn MappingProvider>>>,
}

impl ServiceMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` under `id`, replacing any previous one.
    pub fn register(&self, id: impl Into<String>, provider: Arc<dyn MappingProvider>) {
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), provider);
    }
}

impl ServiceLocator for ServiceMap {
    fn get(&self, id: &str) -> Option<Arc<dyn MappingProvider>> {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}

/// A provider deferring to a service resolved from a [`ServiceLocator`] on
/// every call. Nothing is cached.
pub struct LazyMappingProvider {
    locator: Arc<dyn ServiceLocator>,
    service_id: String,
    class: String,
}

impl LazyMappingProvider {
    /// Create a provider for `class` resolving `service_id` from `locator`.
    pub fn new(
        locator: Arc<dyn ServiceLocator>,
        service_id: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            locator,
            service_id: service_id.into(),
            class: class.into(),
        }
    }

    fn resolve(&self) -> Result<Arc<dyn MappingProvider>, Error> {
        self.locator
            .get(&self.service_id)
            .ok_or_else(|| LogicError::missing_service(&self.service_id).into())
    }
}

impl fmt::Debug for LazyMappingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyMappingProvider")
            .field("service_id", &self.service_id)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

impl MappingProvider for LazyMappingProvider {
    fn class(&self) -> &str {
        &self.class
    }

    fn class_mapping(&self, path: &str) -> Result<Option<Arc<ClassMapping>>, Error> {
        self.resolve()?.class_mapping(path)
    }

    fn property_mappings(&self, path: &str) -> Result<Vec<Arc<PropertyMapping>>, Error> {
        self.resolve()?.property_mappings(path)
    }
}
