use std::fmt;

use crate::value::Value;

/// A validatable object as seen by the engine.
///
/// Implementations expose their runtime class identifier and a set of
/// zero-argument read operations addressed by name. Everything else is an
/// optional capability with a default of "not supported".
pub trait Object: Send + Sync + fmt::Debug {
    /// Fully qualified type identifier used for mapping lookup.
    fn class(&self) -> &str;

    /// Invoke a zero-argument read operation such as `getName`.
    ///
    /// Returns `None` when the object does not expose `method`; an exposed
    /// operation that yields nothing returns `Some(Value::Null)`.
    fn invoke(&self, method: &str) -> Option<Value>;

    /// Returns true when this object satisfies `capability` as a class or
    /// interface. Defaults to an exact class match.
    fn implements(&self, capability: &str) -> bool {
        self.class() == capability
    }

    /// Returns the proxy capability when this object is a placeholder for
    /// another (persisted) type.
    fn as_proxy(&self) -> Option<&dyn Proxy> {
        None
    }

    /// Returns the model capability when this object has a storage identity.
    fn as_model(&self) -> Option<&dyn ValidatableModel> {
        None
    }

    /// Returns the text form of this object, if it has one.
    fn to_text(&self) -> Option<String> {
        None
    }
}

/// Marker capability for lazy-loading placeholders: unwraps to the declared
/// real type whose mapping should be used.
pub trait Proxy {
    /// Class identifier of the real type behind the placeholder.
    fn real_class(&self) -> &str;
}

/// Capability of objects that carry a storage identity.
pub trait ValidatableModel: Send + Sync {
    /// The identity of this model, unique within its store.
    fn id(&self) -> String;
}
