use objectvalidate_types::Value;

use super::Constraint;
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::Violation;

/// Rejects empty strings, lists and maps. Absent values pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBlankConstraint;

impl NotBlankConstraint {
    /// Create the constraint.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for NotBlankConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        let blank = match value {
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            _ => false,
        };
        if blank {
            return Ok(vec![Violation::new(path, "constraint.notblank.blank")]);
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use objectvalidate_types::Value;
    use pretty_assertions::assert_eq;

    use super::NotBlankConstraint;
    use crate::config::ValidatorContext;
    use crate::validator::Constraint;
    use crate::violation::Violation;

    fn check(value: &Value) -> Vec<Violation> {
        NotBlankConstraint::new()
            .validate("title", value, &mut ValidatorContext::new(), None)
            .expect("no defects")
    }

    #[test]
    fn empty_text_and_collections_fail() {
        let blank = vec![Violation::new("title", "constraint.notblank.blank")];
        assert_eq!(check(&Value::from("")), blank);
        assert_eq!(check(&Value::List(Vec::new())), blank);
        assert_eq!(check(&Value::Map(Vec::new())), blank);
    }

    #[test]
    fn absent_and_filled_values_pass() {
        assert!(check(&Value::Null).is_empty());
        assert!(check(&Value::from(" ")).is_empty());
        assert!(check(&Value::Int(0)).is_empty());
        assert!(check(&Value::from(vec!["a"])).is_empty());
    }
}
