use std::sync::LazyLock;

use objectvalidate_types::Value;
use regex::Regex;

use super::{Constraint, TextInput, text_input};
use crate::config::ValidatorContext;
use crate::error::Error;
use crate::validator::ObjectValidator;
use crate::violation::{Violation, arguments};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("email regex must compile")
});

/// Requires a syntactically valid email address.
///
/// Absent and empty values pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailConstraint;

impl EmailConstraint {
    /// Create the constraint.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for EmailConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        let text = match text_input(path, value, "constraint.email.invalidtype") {
            TextInput::Empty => return Ok(Vec::new()),
            TextInput::Invalid(violation) => return Ok(vec![violation]),
            TextInput::Text(text) => text,
        };

        if is_email(&text) {
            return Ok(Vec::new());
        }

        Ok(vec![Violation::with_arguments(
            path,
            "constraint.email.invalidformat",
            arguments([("value", serde_json::Value::String(text))]),
        )])
    }
}

pub(crate) fn is_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}
