use objectvalidate_types::Value;

use super::{Constraint, invalid_type};
use crate::config::ValidatorContext;
use crate::error::{Error, NotConfiguredError};
use crate::validator::ObjectValidator;
use crate::violation::{Violation, element_path};

/// Validates a nested object, or every object of a collection, with the
/// running validator.
///
/// Nested findings keep the caller's path as prefix: an object at `owner`
/// reports its properties at `owner.<name>`, collection elements report at
/// `items[<key>].<name>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidConstraint;

impl ValidConstraint {
    /// Create the constraint.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn validate_nested(
        path: &str,
        value: &Value,
        context: &mut ValidatorContext,
        validator: &dyn ObjectValidator,
    ) -> Result<Vec<Violation>, Error> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Object(_) => validator.validate_with(value, context, path),
            Value::List(_) | Value::Map(_) => {
                let mut violations = Vec::new();
                for (key, element) in value.entries().unwrap_or_default() {
                    violations.extend(Self::validate_nested(
                        &element_path(path, &key),
                        element,
                        context,
                        validator,
                    )?);
                }
                Ok(violations)
            }
            other => Ok(vec![invalid_type(path, "constraint.valid.invalidtype", other)]),
        }
    }
}

impl Constraint for ValidConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        context: &mut ValidatorContext,
        validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        if value.is_null() {
            return Ok(Vec::new());
        }
        let validator = validator.ok_or(NotConfiguredError {
            constraint: "ValidConstraint",
            dependency: "validator",
        })?;
        Self::validate_nested(path, value, context, validator)
    }
}

#[cfg(test)]
mod tests {
    use objectvalidate_types::{Object, Value};
    use pretty_assertions::assert_eq;

    use super::ValidConstraint;
    use crate::config::ValidatorContext;
    use crate::error::Error;
    use crate::validator::{Constraint, ObjectValidator};
    use crate::violation::{Violation, arguments, property_path};

    #[derive(Debug)]
    struct Child;

    impl Object for Child {
        fn class(&self) -> &str {
            "tests.Child"
        }

        fn invoke(&self, _method: &str) -> Option<Value> {
            None
        }
    }

    /// Reports one finding per validated object at `<path>.name`.
    struct Stub;

    impl ObjectValidator for Stub {
        fn validate_with(
            &self,
            _object: &Value,
            _context: &mut ValidatorContext,
            path: &str,
        ) -> Result<Vec<Violation>, Error> {
            Ok(vec![Violation::new(
                property_path(path, "name"),
                "constraint.notnull.null",
            )])
        }
    }

    fn check(value: &Value) -> Result<Vec<Violation>, Error> {
        ValidConstraint::new().validate(
            "children",
            value,
            &mut ValidatorContext::new(),
            Some(&Stub),
        )
    }

    #[test]
    fn objects_are_delegated_at_the_same_path() {
        let paths: Vec<String> = check(&Value::object(Child))
            .expect("no defects")
            .iter()
            .map(|v| v.path().to_string())
            .collect();
        assert_eq!(paths, vec!["children.name"]);
    }

    #[test]
    fn collection_elements_are_validated_at_their_keys() {
        let children = Value::Map(vec![
            ("first".to_string(), Value::object(Child)),
            ("rest".to_string(), Value::List(vec![Value::object(Child), Value::Null])),
        ]);
        let paths: Vec<String> = check(&children)
            .expect("no defects")
            .iter()
            .map(|v| v.path().to_string())
            .collect();
        assert_eq!(paths, vec!["children[first].name", "children[rest][0].name"]);
    }

    #[test]
    fn scalars_report_their_type() {
        assert_eq!(
            check(&Value::from(vec![3_i64])).expect("no defects"),
            vec![Violation::with_arguments(
                "children[0]",
                "constraint.valid.invalidtype",
                arguments([("type", serde_json::json!("int"))]),
            )]
        );
    }

    #[test]
    fn missing_validator_is_a_defect() {
        let err = ValidConstraint::new()
            .validate("child", &Value::object(Child), &mut ValidatorContext::new(), None)
            .expect_err("no validator supplied");
        assert!(matches!(err, Error::NotConfigured(_)));
        assert!(
            ValidConstraint::new()
                .validate("child", &Value::Null, &mut ValidatorContext::new(), None)
                .expect("absent values pass")
                .is_empty()
        );
    }
}
