use objectvalidate_types::Value;

use super::{Constraint, invalid_type};
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::{Violation, arguments};

/// Bounds the number of elements of a list or map.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountConstraint {
    min: Option<usize>,
    max: Option<usize>,
}

impl CountConstraint {
    /// Create a constraint with inclusive bounds; `None` leaves a side open.
    #[must_use]
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Require at least `min` elements.
    #[must_use]
    pub fn min(min: usize) -> Self {
        Self::new(Some(min), None)
    }

    /// Require at most `max` elements.
    #[must_use]
    pub fn max(max: usize) -> Self {
        Self::new(None, Some(max))
    }

    fn in_range(&self, count: usize) -> bool {
        self.min.is_none_or(|min| count >= min) && self.max.is_none_or(|max| count <= max)
    }
}

impl Constraint for CountConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        let count = match value {
            Value::Null => return Ok(Vec::new()),
            Value::List(items) => items.len(),
            Value::Map(entries) => entries.len(),
            other => {
                return Ok(vec![invalid_type(
                    path,
                    "constraint.count.invalidtype",
                    other,
                )]);
            }
        };

        if self.in_range(count) {
            return Ok(Vec::new());
        }

        Ok(vec![Violation::with_arguments(
            path,
            "constraint.count.outofrange",
            arguments([
                ("count", serde_json::Value::from(count)),
                ("min", self.min.map_or(serde_json::Value::Null, serde_json::Value::from)),
                ("max", self.max.map_or(serde_json::Value::Null, serde_json::Value::from)),
            ]),
        )])
    }
}
