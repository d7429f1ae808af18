pub(crate) mod all;
pub(crate) mod callback;
pub(crate) mod choice;
pub(crate) mod collection;
pub(crate) mod count;
pub(crate) mod datetime;
pub(crate) mod email;
pub(crate) mod not_blank;
pub(crate) mod not_null;
pub(crate) mod numeric;
pub(crate) mod type_check;
pub(crate) mod unique_model;
pub(crate) mod valid;

use objectvalidate_types::Value;

use crate::config::ValidatorContext;
use crate::error::Error;
use crate::violation::{Violation, arguments};

use super::ObjectValidator;

/// A unit of validation logic applied to one value at one path.
///
/// Findings are returned as data; an `Err` is reserved for configuration
/// defects. Unless documented otherwise, a constraint passes on
/// [`Value::Null`]: presence is checked by `NotNullConstraint`.
pub trait Constraint: Send + Sync {
    /// Judge `value`, located at `path`.
    ///
    /// `validator` is a callback into the running validator for constraints
    /// that validate nested objects.
    ///
    /// # Errors
    ///
    /// Returns an error only for configuration or programming defects.
    fn validate(
        &self,
        path: &str,
        value: &Value,
        context: &mut ValidatorContext,
        validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error>;
}

/// Outcome of coercing a value to text ahead of a format check.
pub(crate) enum TextInput {
    /// Absent or empty: nothing to check.
    Empty,
    /// Text to check.
    Text(String),
    /// Not representable as text.
    Invalid(Violation),
}

/// Coerce `value` to text, reporting non-representable values under
/// `invalid_type_key`.
pub(crate) fn text_input(path: &str, value: &Value, invalid_type_key: &str) -> TextInput {
    match value {
        Value::Null => return TextInput::Empty,
        Value::String(s) if s.is_empty() => return TextInput::Empty,
        _ => {}
    }

    match value.to_text() {
        Some(text) => TextInput::Text(text),
        None => TextInput::Invalid(invalid_type(path, invalid_type_key, value)),
    }
}

/// Finding reporting the runtime type of a value a constraint cannot judge.
pub(crate) fn invalid_type(path: &str, key: &str, value: &Value) -> Violation {
    Violation::with_arguments(
        path,
        key,
        arguments([("type", serde_json::Value::String(value.type_name()))]),
    )
}
