use std::sync::Arc;

use objectvalidate_types::Value;

use super::Constraint;
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::Violation;

/// Runs every inner constraint against the same value and concatenates
/// their findings in configured order. Never short-circuits.
#[derive(Clone, Default)]
pub struct AllConstraint {
    constraints: Vec<Arc<dyn Constraint>>,
}

impl AllConstraint {
    /// Create a composition of `constraints`.
    #[must_use]
    pub fn new(constraints: Vec<Arc<dyn Constraint>>) -> Self {
        Self { constraints }
    }

    /// Append a constraint.
    #[must_use]
    pub fn with(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Arc::new(constraint));
        self
    }
}

impl Constraint for AllConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        context: &mut ValidatorContext,
        validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        let mut violations = Vec::new();
        for constraint in &self.constraints {
            violations.extend(constraint.validate(path, value, context, validator)?);
        }
        Ok(violations)
    }
}
