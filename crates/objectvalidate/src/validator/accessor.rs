use objectvalidate_types::{Object, Value};

use crate::error::{ConfigurationError, Error};

const METHOD_PREFIXES: [&str; 3] = ["get", "has", "is"];

/// Reads a named logical property from an object.
pub trait Accessor: Send + Sync {
    /// Returns the property value.
    ///
    /// # Errors
    ///
    /// Returns an error when the object does not expose the property.
    fn get_value(&self, object: &dyn Object) -> Result<Value, Error>;
}

/// Accessor resolving a property `p` through the first read operation the
/// object exposes among `getP`, `hasP` and `isP`.
#[derive(Debug, Clone)]
pub struct MethodAccessor {
    methods: [String; 3],
}

impl MethodAccessor {
    /// Create an accessor for `property`.
    #[must_use]
    pub fn new(property: &str) -> Self {
        let suffix = upper_first(property);
        Self {
            methods: METHOD_PREFIXES.map(|prefix| format!("{prefix}{suffix}")),
        }
    }

    /// Returns the candidate method names, in resolution order.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }
}

impl Accessor for MethodAccessor {
    fn get_value(&self, object: &dyn Object) -> Result<Value, Error> {
        self.methods
            .iter()
            .find_map(|method| object.invoke(method))
            .ok_or_else(|| {
                ConfigurationError {
                    methods: self.methods.to_vec(),
                    class: object.class().to_string(),
                }
                .into()
            })
    }
}

fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use objectvalidate_types::{Object, Value};
    use pretty_assertions::assert_eq;

    use super::{Accessor, MethodAccessor};
    use crate::error::Error;

    #[derive(Debug)]
    struct Getter;

    impl Object for Getter {
        fn class(&self) -> &str {
            "tests.Getter"
        }

        fn invoke(&self, method: &str) -> Option<Value> {
            match method {
                "getName" => Some(Value::from("Name")),
                "isName" => Some(Value::Bool(false)),
                _ => None,
            }
        }
    }

    #[derive(Debug)]
    struct Flags;

    impl Object for Flags {
        fn class(&self) -> &str {
            "tests.Flags"
        }

        fn invoke(&self, method: &str) -> Option<Value> {
            match method {
                "hasChildren" => Some(Value::Bool(true)),
                "isActive" => Some(Value::Bool(true)),
                _ => None,
            }
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl Object for Opaque {
        fn class(&self) -> &str {
            "tests.Opaque"
        }

        fn invoke(&self, _method: &str) -> Option<Value> {
            None
        }
    }

    #[test]
    fn get_takes_precedence_over_later_prefixes() {
        let value = MethodAccessor::new("name")
            .get_value(&Getter)
            .expect("getName is exposed");
        assert_eq!(value, Value::from("Name"));
    }

    #[test]
    fn falls_back_to_has_and_is() {
        assert_eq!(
            MethodAccessor::new("children")
                .get_value(&Flags)
                .expect("hasChildren is exposed"),
            Value::Bool(true)
        );
        assert_eq!(
            MethodAccessor::new("active")
                .get_value(&Flags)
                .expect("isActive is exposed"),
            Value::Bool(true)
        );
    }

    #[test]
    fn missing_methods_fail_naming_every_candidate() {
        let err = MethodAccessor::new("name")
            .get_value(&Opaque)
            .expect_err("no read operation is exposed");
        match err {
            Error::Configuration(err) => {
                assert_eq!(err.methods, vec!["getName", "hasName", "isName"]);
                assert_eq!(err.class, "tests.Opaque");
            }
            other => panic!("unexpected error type: {other}"),
        }
    }

    #[test]
    fn only_the_first_letter_is_capitalized() {
        assert_eq!(
            MethodAccessor::new("firstName").methods(),
            ["getFirstName", "hasFirstName", "isFirstName"]
        );
    }
}
