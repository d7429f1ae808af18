use objectvalidate_types::Value;

use super::Constraint;
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::{Violation, arguments};

/// Requires the value to be one of a fixed set of choices.
///
/// Membership uses strict equality: `Int(1)` is not a member of `["1"]`.
#[derive(Debug, Clone)]
pub struct ChoiceConstraint {
    choices: Vec<Value>,
}

impl ChoiceConstraint {
    /// Create a constraint accepting exactly `choices`.
    pub fn new<I, V>(choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the accepted values, in configured order.
    #[must_use]
    pub fn choices(&self) -> &[Value] {
        &self.choices
    }

    fn rendered_choices(&self) -> String {
        self.choices
            .iter()
            .map(|choice| choice.to_text().unwrap_or_else(|| choice.type_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Constraint for ChoiceConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        if value.is_null() || self.choices.contains(value) {
            return Ok(Vec::new());
        }

        Ok(vec![Violation::with_arguments(
            path,
            "constraint.choice.invalidvalue",
            arguments([
                ("value", value.to_json()),
                ("choices", serde_json::Value::String(self.rendered_choices())),
            ]),
        )])
    }
}

#[cfg(test)]
mod tests {
    use objectvalidate_types::Value;
    use pretty_assertions::assert_eq;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use super::ChoiceConstraint;
    use crate::config::ValidatorContext;
    use crate::validator::Constraint;
    use crate::violation::{Violation, arguments};

    fn check(constraint: &ChoiceConstraint, value: &Value) -> Vec<Violation> {
        constraint
            .validate("status", value, &mut ValidatorContext::new(), None)
            .expect("choice never fails loudly")
    }

    #[test]
    fn members_and_absent_values_pass() {
        let constraint = ChoiceConstraint::new(["active", "inactive"]);
        assert!(check(&constraint, &Value::Null).is_empty());
        assert!(check(&constraint, &Value::from("inactive")).is_empty());
    }

    #[test]
    fn membership_is_strict() {
        let constraint = ChoiceConstraint::new(["1", "2"]);
        assert_eq!(
            check(&constraint, &Value::Int(1)),
            vec![Violation::with_arguments(
                "status",
                "constraint.choice.invalidvalue",
                arguments([
                    ("value", serde_json::json!(1)),
                    ("choices", serde_json::json!("1, 2")),
                ]),
            )]
        );
    }

    proptest! {
        #[test]
        fn passes_iff_member(
            choices in vec("[a-d]{1,2}", 1..6),
            candidate in "[a-d]{1,2}",
        ) {
            let constraint = ChoiceConstraint::new(choices.iter().map(String::as_str));
            let violations = check(&constraint, &Value::from(candidate.as_str()));

            prop_assert_eq!(violations.is_empty(), choices.contains(&candidate));
            if let Some(violation) = violations.first() {
                prop_assert_eq!(
                    &violation.arguments()["choices"],
                    &serde_json::json!(choices.join(", "))
                );
            }
        }
    }
}
