use std::sync::LazyLock;

use objectvalidate_types::Value;
use regex::Regex;

use super::{Constraint, TextInput, text_input};
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::{Violation, arguments};

// Decimal notation only: optional sign, mantissa and exponent, surrounding whitespace allowed.
static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?\s*$")
        .expect("numeric regex must compile")
});

/// Requires a value parseable as a number.
///
/// Absent and empty values pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericConstraint;

impl NumericConstraint {
    /// Create the constraint.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for NumericConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        let text = match text_input(path, value, "constraint.numeric.invalidtype") {
            TextInput::Empty => return Ok(Vec::new()),
            TextInput::Invalid(violation) => return Ok(vec![violation]),
            TextInput::Text(text) => text,
        };

        if is_numeric(&text) {
            return Ok(Vec::new());
        }

        Ok(vec![Violation::with_arguments(
            path,
            "constraint.numeric.notnumeric",
            arguments([("value", serde_json::Value::String(text))]),
        )])
    }
}

fn is_numeric(s: &str) -> bool {
    NUMERIC_REGEX.is_match(s)
}
