use std::fmt;

use objectvalidate_types::Value;

use super::Constraint;
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::Violation;

type CallbackFn = dyn Fn(
        &str,
        &Value,
        &mut ValidatorContext,
        Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error>
    + Send
    + Sync;

/// Adapts a closure to the [`Constraint`] contract.
///
/// Use it for one-off rules that do not deserve their own type.
pub struct CallbackConstraint {
    callback: Box<CallbackFn>,
}

impl CallbackConstraint {
    /// Wrap `callback`.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(
                &str,
                &Value,
                &mut ValidatorContext,
                Option<&dyn ObjectValidator>,
            ) -> Result<Vec<Violation>, Error>
            + Send
            + Sync
            + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for CallbackConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackConstraint").finish_non_exhaustive()
    }
}

impl Constraint for CallbackConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        context: &mut ValidatorContext,
        validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        (self.callback)(path, value, context, validator)
    }
}
