use objectvalidate_types::Value;

use super::Constraint;
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::{Violation, arguments};

/// Requires the value to be of a given kind.
///
/// The wished type is either a [`Value::kind`] name (`"string"`, `"int"`,
/// `"list"`, ...) or, for objects, a class or capability the object
/// [`implements`](objectvalidate_types::Object::implements).
#[derive(Debug, Clone)]
pub struct TypeConstraint {
    wished_type: String,
}

impl TypeConstraint {
    /// Create a constraint requiring `wished_type`.
    pub fn new(wished_type: impl Into<String>) -> Self {
        Self {
            wished_type: wished_type.into(),
        }
    }

    fn matches(&self, value: &Value) -> bool {
        if value.kind() == self.wished_type {
            return true;
        }
        value
            .as_object()
            .is_some_and(|object| object.implements(&self.wished_type))
    }
}

impl Constraint for TypeConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        if value.is_null() || self.matches(value) {
            return Ok(Vec::new());
        }

        Ok(vec![Violation::with_arguments(
            path,
            "constraint.type.invalidtype",
            arguments([
                ("type", serde_json::Value::String(value.type_name())),
                ("wishedType", serde_json::Value::String(self.wished_type.clone())),
            ]),
        )])
    }
}

#[cfg(test)]
mod tests {
    use objectvalidate_types::{Object, Value};
    use pretty_assertions::assert_eq;

    use super::TypeConstraint;
    use crate::config::ValidatorContext;
    use crate::validator::Constraint;
    use crate::violation::{Violation, arguments};

    #[derive(Debug)]
    struct Order;

    impl Object for Order {
        fn class(&self) -> &str {
            "shop.Order"
        }

        fn invoke(&self, _method: &str) -> Option<Value> {
            None
        }

        fn implements(&self, capability: &str) -> bool {
            matches!(capability, "shop.Order" | "shop.Identifiable")
        }
    }

    fn check(wished: &str, value: &Value) -> Vec<Violation> {
        TypeConstraint::new(wished)
            .validate("field", value, &mut ValidatorContext::new(), None)
            .expect("type never fails loudly")
    }

    #[test]
    fn matching_kinds_pass() {
        assert!(check("string", &Value::Null).is_empty());
        assert!(check("string", &Value::from("x")).is_empty());
        assert!(check("int", &Value::Int(1)).is_empty());
        assert!(check("list", &Value::from(vec![1_i64])).is_empty());
    }

    #[test]
    fn objects_match_their_class_and_capabilities() {
        let order = Value::object(Order);
        assert!(check("object", &order).is_empty());
        assert!(check("shop.Order", &order).is_empty());
        assert!(check("shop.Identifiable", &order).is_empty());
        assert_eq!(check("shop.Invoice", &order).len(), 1);
    }

    #[test]
    fn mismatches_report_actual_and_wished_types() {
        assert_eq!(
            check("int", &Value::Float(1.0)),
            vec![Violation::with_arguments(
                "field",
                "constraint.type.invalidtype",
                arguments([
                    ("type", serde_json::json!("float")),
                    ("wishedType", serde_json::json!("int")),
                ]),
            )]
        );
        assert_eq!(
            check("string", &Value::object(Order))[0].arguments()["type"],
            serde_json::json!("shop.Order")
        );
    }
}
