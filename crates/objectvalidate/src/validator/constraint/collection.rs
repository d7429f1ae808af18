use std::sync::Arc;

use objectvalidate_types::Value;

use super::{Constraint, invalid_type};
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::{ALL_SEGMENT, Violation, element_path};

/// Applies constraints to every element of a list or map.
///
/// Each element at key `k` is checked at `base[k]`. Findings about the
/// collection as a whole, including a value that is not a collection at
/// all, are reported at `base[_all]`.
#[derive(Clone, Default)]
pub struct CollectionConstraint {
    collection_constraints: Vec<Arc<dyn Constraint>>,
    element_constraints: Vec<Arc<dyn Constraint>>,
}

impl CollectionConstraint {
    /// Create a constraint applying `element_constraints` to each element.
    #[must_use]
    pub fn new(element_constraints: Vec<Arc<dyn Constraint>>) -> Self {
        Self {
            collection_constraints: Vec::new(),
            element_constraints,
        }
    }

    /// Also run `constraints` against the whole collection, at `base[_all]`,
    /// before any element is checked.
    #[must_use]
    pub fn with_collection_constraints(mut self, constraints: Vec<Arc<dyn Constraint>>) -> Self {
        self.collection_constraints = constraints;
        self
    }
}

impl Constraint for CollectionConstraint {
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

        let all_path = element_path(path, ALL_SEGMENT);
        let Some(entries) = value.entries() else {
            return Ok(vec![invalid_type(
                &all_path,
                "constraint.collection.invalidtype",
                value,
            )]);
        };

        let mut violations = Vec::new();
        for constraint in &self.collection_constraints {
            violations.extend(constraint.validate(&all_path, value, context, validator)?);
        }

        for (key, element) in entries {
            let item_path = element_path(path, &key);
            for constraint in &self.element_constraints {
                violations.extend(constraint.validate(&item_path, element, context, validator)?);
            }
        }

        Ok(violations)
    }
}
