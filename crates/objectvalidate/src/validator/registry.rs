use std::collections::HashMap;
use std::sync::Arc;

use objectvalidate_types::Object;

use super::mapping::MappingProvider;
use crate::error::{Error, LogicError};

/// Resolves the [`MappingProvider`] applying to a class.
///
/// Registration happens once at construction; the registry is read-only
/// afterwards and safe to share between threads.
pub struct MappingRegistry {
    providers: HashMap<String, Arc<dyn MappingProvider>>,
    proxies: HashMap<String, String>,
}

impl MappingRegistry {
    /// Register `providers` by their class. When two providers describe the
    /// same class the later one wins.
    pub fn new<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn MappingProvider>>,
    {
        let mut registered: HashMap<String, Arc<dyn MappingProvider>> = HashMap::new();
        for provider in providers {
            let class = provider.class().to_string();
            if registered.contains_key(&class) {
                tracing::warn!(class = %class, "replacing previously registered mapping");
            }
            registered.insert(class, provider);
        }

        Self {
            providers: registered,
            proxies: HashMap::new(),
        }
    }

    /// Declare `proxy_class` as a lazy-loading placeholder for `real_class`.
    ///
    /// Lookups by class identifier substitute the real class. Objects
    /// exposing [`Object::as_proxy`] are unwrapped without a declaration.
    #[must_use]
    pub fn with_proxy(
        mut self,
        proxy_class: impl Into<String>,
        real_class: impl Into<String>,
    ) -> Self {
        self.proxies.insert(proxy_class.into(), real_class.into());
        self
    }

    /// Returns the provider registered for `class`.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError`] when no provider is registered for the class.
    pub fn provide_mapping(&self, class: &str) -> Result<Arc<dyn MappingProvider>, Error> {
        let class = self.proxies.get(class).map_or(class, String::as_str);
        self.providers
            .get(class)
            .cloned()
            .ok_or_else(|| LogicError::missing_mapping(class).into())
    }

    /// Returns the provider for the runtime class of `object`.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError`] when no provider is registered for the class.
    pub fn provide_mapping_for(
        &self,
        object: &dyn Object,
    ) -> Result<Arc<dyn MappingProvider>, Error> {
        match object.as_proxy() {
            Some(proxy) => self.provide_mapping(proxy.real_class()),
            None => self.provide_mapping(object.class()),
        }
    }
}

impl std::fmt::Debug for MappingRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut classes: Vec<&String> = self.providers.keys().collect();
        classes.sort();
        f.debug_struct("MappingRegistry")
            .field("classes", &classes)
            .field("proxies", &self.proxies)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use objectvalidate_types::{Object, Proxy, Value};
    use pretty_assertions::assert_eq;

    use super::MappingRegistry;
    use crate::error::Error;
    use crate::validator::{MappingProvider, PropertyMapping, StaticMappingProvider};

    #[derive(Debug)]
    struct Model;

    impl Object for Model {
        fn class(&self) -> &str {
            "app.Model"
        }

        fn invoke(&self, _method: &str) -> Option<Value> {
            None
        }
    }

    #[derive(Debug)]
    struct ModelProxy;

    impl Object for ModelProxy {
        fn class(&self) -> &str {
            "proxies.__CG__.app.Model"
        }

        fn invoke(&self, _method: &str) -> Option<Value> {
            None
        }

        fn as_proxy(&self) -> Option<&dyn Proxy> {
            Some(self)
        }
    }

    impl Proxy for ModelProxy {
        fn real_class(&self) -> &str {
            "app.Model"
        }
    }

    fn registry() -> MappingRegistry {
        MappingRegistry::new([
            Arc::new(StaticMappingProvider::new("app.Model")) as Arc<dyn MappingProvider>
        ])
    }

    #[test]
    fn registered_classes_resolve() {
        let provider = registry().provide_mapping_for(&Model).expect("registered");
        assert_eq!(provider.class(), "app.Model");
    }

    #[test]
    fn proxies_resolve_to_their_real_class() {
        let provider = registry().provide_mapping_for(&ModelProxy).expect("proxy unwraps");
        assert_eq!(provider.class(), "app.Model");

        let provider = registry()
            .with_proxy("proxies.Model", "app.Model")
            .provide_mapping("proxies.Model")
            .expect("declared proxy unwraps");
        assert_eq!(provider.class(), "app.Model");
    }

    #[test]
    fn unknown_classes_are_logic_errors() {
        let Err(err) = registry().provide_mapping("app.Unknown") else {
            panic!("nothing registered for app.Unknown");
        };
        assert!(matches!(err, Error::Logic(_)));
        assert_eq!(err.to_string(), "no mapping for class: \"app.Unknown\"");
    }

    #[test]
    fn later_registrations_win() {
        let first: Arc<dyn MappingProvider> = Arc::new(StaticMappingProvider::new("app.Model"));
        let second: Arc<dyn MappingProvider> = Arc::new(
            StaticMappingProvider::new("app.Model")
                .with_property(PropertyMapping::new("name", Vec::new())),
        );
        let registry = MappingRegistry::new([first, second]);

        let provider = registry.provide_mapping("app.Model").expect("registered");
        assert_eq!(provider.property_mappings("").expect("static").len(), 1);
    }
}
