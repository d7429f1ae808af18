use std::sync::OnceLock;

use objectvalidate_types::ApiProblem;

use crate::violation::Violation;

/// Renders findings as a flat list of [`ApiProblem`] records, in input
/// order. The rendering is computed once and cached.
#[derive(Debug)]
pub struct ApiProblemMessages {
    violations: Vec<Violation>,
    messages: OnceLock<Vec<ApiProblem>>,
}

impl ApiProblemMessages {
    /// Wrap `violations` for rendering.
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        Self {
            violations,
            messages: OnceLock::new(),
        }
    }

    /// Returns one record per finding.
    pub fn messages(&self) -> &[ApiProblem] {
        self.messages
            .get_or_init(|| self.violations.iter().map(Violation::to_api_problem).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ApiProblemMessages;
    use crate::violation::{Violation, arguments};

    #[test]
    fn renders_name_reason_and_details_in_order() {
        let messages = ApiProblemMessages::new(vec![
            Violation::new("name", "constraint.notnull.null"),
            Violation::with_arguments(
                "email",
                "constraint.email.invalidformat",
                arguments([("value", serde_json::json!("x"))]),
            ),
        ]);

        assert_eq!(
            serde_json::to_value(messages.messages()).expect("serializable"),
            serde_json::json!([
                {"name": "name", "reason": "constraint.notnull.null", "details": {}},
                {
                    "name": "email",
                    "reason": "constraint.email.invalidformat",
                    "details": {"value": "x"},
                },
            ])
        );
        assert!(std::ptr::eq(messages.messages(), messages.messages()));
    }

    #[test]
    fn no_findings_render_nothing() {
        assert!(ApiProblemMessages::new(Vec::new()).messages().is_empty());
    }
}
