use chrono::format::{Item, ParseErrorKind, Parsed, StrftimeItems, parse_and_remainder};
use objectvalidate_types::Value;

use super::{Constraint, TextInput, text_input};
use crate::config::ValidatorContext;
use crate::error::{Error, LogicError};
use crate::validator::ObjectValidator;
use crate::violation::{Violation, arguments};

const DEFAULT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
];

/// Requires text parseable as a date or date/time.
///
/// Values that already are [`Value::DateTime`] pass. Without an explicit
/// format, the common ISO-like layouts are tried in turn; the zoned layout
/// accepts both `Z` and numeric offsets.
///
/// When parsing fails the finding carries the parser diagnostic and, under
/// `positions`, the byte offset where the input stopped matching. Parsing
/// stops at the first break, so `positions` holds exactly one offset: the
/// furthest one reached by any candidate layout.
#[derive(Debug, Clone)]
pub struct DateTimeConstraint {
    formats: Vec<String>,
}

impl Default for DateTimeConstraint {
    fn default() -> Self {
        Self::new()
    }
}

impl DateTimeConstraint {
    /// Create a constraint accepting the default layouts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            formats: DEFAULT_FORMATS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Create a constraint accepting exactly one `strftime` layout.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError`] if `format` contains an unknown specifier.
    pub fn with_format(format: &str) -> Result<Self, Error> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(LogicError::invalid_format(format).into());
        }
        Ok(Self {
            formats: vec![format.to_string()],
        })
    }
}

impl Constraint for DateTimeConstraint {
    fn validate(
        &self,
        path: &str,
        value: &Value,
        _context: &mut ValidatorContext,
        _validator: Option<&dyn ObjectValidator>,
    ) -> Result<Vec<Violation>, Error> {
        if matches!(value, Value::DateTime(_)) {
            return Ok(Vec::new());
        }

        let text = match text_input(path, value, "constraint.date.invalidtype") {
            TextInput::Empty => return Ok(Vec::new()),
            TextInput::Invalid(violation) => return Ok(vec![violation]),
            TextInput::Text(text) => text,
        };

        let mut furthest: Option<Breakage> = None;
        for format in &self.formats {
            let Some(breakage) = breakage(format, &text) else {
                return Ok(Vec::new());
            };
            if furthest
                .as_ref()
                .is_none_or(|best| breakage.position > best.position)
            {
                furthest = Some(breakage);
            }
        }

        let Some(breakage) = furthest else {
            return Ok(Vec::new());
        };

        Ok(vec![Violation::with_arguments(
            path,
            "constraint.date.error",
            arguments([
                ("message", serde_json::json!(breakage.message)),
                ("positions", serde_json::json!([breakage.position])),
                ("value", serde_json::Value::String(text)),
            ]),
        )])
    }
}

/// Where and why a parse stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Breakage {
    message: &'static str,
    position: usize,
}

/// Parse `input` against `format`, one item at a time so the offset of the
/// failing item is known. Returns `None` on success.
fn breakage(format: &str, input: &str) -> Option<Breakage> {
    let mut parsed = Parsed::new();
    let mut rest = input;

    for item in StrftimeItems::new(format) {
        let position = input.len() - rest.len();
        match parse_and_remainder(&mut parsed, rest, std::iter::once(&item)) {
            Ok(remainder) => rest = remainder,
            Err(err) => {
                let message = match err.kind() {
                    ParseErrorKind::OutOfRange => "The parsed value is out of range",
                    ParseErrorKind::TooShort => "Unexpected end of input",
                    _ => "Unexpected character",
                };
                return Some(Breakage { message, position });
            }
        }
    }

    if !rest.is_empty() {
        return Some(Breakage {
            message: "Trailing data",
            position: input.len() - rest.len(),
        });
    }

    match parsed.to_naive_date() {
        // Time-only layouts never form a date.
        Err(err) if err.kind() != ParseErrorKind::NotEnough => Some(Breakage {
            message: "The parsed date was invalid",
            position: input.len(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use objectvalidate_types::Value;
    use pretty_assertions::assert_eq;

    use super::DateTimeConstraint;
    use crate::config::ValidatorContext;
    use crate::error::Error;
    use crate::validator::Constraint;
    use crate::violation::{Violation, arguments};

    fn check(constraint: &DateTimeConstraint, value: &Value) -> Vec<Violation> {
        constraint
            .validate("date", value, &mut ValidatorContext::new(), None)
            .expect("datetime never fails loudly")
    }

    fn date_error(message: &str, position: usize, value: &str) -> Vec<Violation> {
        vec![Violation::with_arguments(
            "date",
            "constraint.date.error",
            arguments([
                ("message", serde_json::json!(message)),
                ("positions", serde_json::json!([position])),
                ("value", serde_json::json!(value)),
            ]),
        )]
    }

    fn ymd() -> DateTimeConstraint {
        DateTimeConstraint::with_format("%Y-%m-%d").expect("valid format")
    }

    #[test]
    fn absent_and_parsed_values_pass() {
        let constraint = DateTimeConstraint::new();
        assert!(check(&constraint, &Value::Null).is_empty());

        let parsed = DateTime::parse_from_rfc3339("2017-01-01T07:00:00+00:00")
            .expect("valid rfc3339");
        assert!(check(&constraint, &Value::DateTime(parsed)).is_empty());
    }

    #[test]
    fn non_text_values_report_their_type() {
        assert_eq!(
            check(&DateTimeConstraint::new(), &Value::List(Vec::new())),
            vec![Violation::with_arguments(
                "date",
                "constraint.date.invalidtype",
                arguments([("type", serde_json::json!("list"))]),
            )]
        );
    }

    #[test]
    fn explicit_format_accepts_matching_text() {
        assert!(check(&ymd(), &Value::from("2017-01-01")).is_empty());
    }

    #[test]
    fn out_of_range_month_points_at_the_month() {
        assert_eq!(
            check(&ymd(), &Value::from("2017-13-01")),
            date_error("The parsed value is out of range", 5, "2017-13-01")
        );
    }

    #[test]
    fn impossible_calendar_dates_are_invalid() {
        assert_eq!(
            check(&ymd(), &Value::from("2017-02-30")),
            date_error("The parsed date was invalid", 10, "2017-02-30")
        );
    }

    #[test]
    fn short_and_garbled_input_point_at_the_break() {
        assert_eq!(
            check(&ymd(), &Value::from("2017-01")),
            date_error("Unexpected end of input", 7, "2017-01")
        );
        assert_eq!(
            check(&ymd(), &Value::from("abc")),
            date_error("Unexpected character", 0, "abc")
        );
    }

    #[test]
    fn default_layouts_accept_dates_and_datetimes() {
        let constraint = DateTimeConstraint::new();
        for text in [
            "2017-01-01",
            "2017-01-01 07:00",
            "2017-01-01 07:00:00",
            "2017-01-01T07:00:00+02:00",
            "2017-01-01T07:00:00.250+02:00",
            "2017-01-01T07:00:00Z",
            "2017-01-01T07:00:00.250Z",
        ] {
            assert!(check(&constraint, &Value::from(text)).is_empty(), "{text}");
        }
    }

    #[test]
    fn default_layouts_report_the_furthest_diagnostic() {
        assert_eq!(
            check(&DateTimeConstraint::new(), &Value::from("2017-12-01 07:00:00:00")),
            date_error("Trailing data", 19, "2017-12-01 07:00:00:00")
        );
    }

    #[test]
    fn trailing_characters_report_a_single_position() {
        assert_eq!(
            check(&ymd(), &Value::from("2017-01-01abc")),
            date_error("Trailing data", 10, "2017-01-01abc")
        );
    }

    #[test]
    fn unknown_specifiers_are_rejected_up_front() {
        assert!(matches!(
            DateTimeConstraint::with_format("%Q"),
            Err(Error::Logic(_))
        ));
    }
}
