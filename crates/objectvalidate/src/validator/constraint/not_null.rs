use objectvalidate_types::Value;

use super::Constraint;
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::Violation;

/// Requires a value to be present. The only constraint failing on
/// [`Value::Null`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNullConstraint;

impl NotNullConstraint {
    /// Create the constraint.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for NotNullConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        if value.is_null() {
            return Ok(vec![Violation::new(path, "constraint.notnull.null")]);
        }
        Ok(Vec::new())
    }
}
