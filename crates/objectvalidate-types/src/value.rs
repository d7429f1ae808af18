use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::object::Object;

/// A dynamically typed value read from an object graph.
///
/// Property accessors return `Value`s and constraints judge them. It covers
/// scalars, ordered collections, date/time values and references to other
/// objects.
#[derive(Clone, Default)]
pub enum Value {
    /// An absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A text value.
    String(String),
    /// An ordered sequence; element keys are their indexes.
    List(Vec<Value>),
    /// An ordered keyed collection. Keys keep their insertion order.
    Map(Vec<(String, Value)>),
    /// An already parsed date/time.
    DateTime(DateTime<FixedOffset>),
    /// A reference to another object.
    Object(Arc<dyn Object>),
}

impl Value {
    /// Wrap an object into a value.
    pub fn object<O: Object + 'static>(object: O) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Returns true for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the runtime kind name of this value.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::DateTime(_) => "datetime",
            Self::Object(_) => "object",
        }
    }

    /// Returns the kind name, or the class identifier for objects.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Object(object) => object.class().to_string(),
            other => other.kind().to_string(),
        }
    }

    /// Returns the text form of this value when it has one.
    ///
    /// Scalars are always representable (`true` renders as `"1"`, `false` as
    /// the empty string). Objects are representable only when they expose a
    /// text form through [`Object::to_text`].
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) => Some(String::new()),
            Self::Int(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::String(v) => Some(v.clone()),
            Self::Object(object) => object.to_text(),
            Self::Null | Self::List(_) | Self::Map(_) | Self::DateTime(_) => None,
        }
    }

    /// Returns the string slice for [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the referenced object for [`Value::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&Arc<dyn Object>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the `(key, element)` pairs of a list or map, in order.
    ///
    /// List keys are the element indexes rendered as text.
    #[must_use]
    pub fn entries(&self) -> Option<Vec<(String, &Value)>> {
        match self {
            Self::List(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), item))
                    .collect(),
            ),
            Self::Map(entries) => Some(entries.iter().map(|(k, v)| (k.clone(), v)).collect()),
            _ => None,
        }
    }

    /// Convert into a JSON value suitable for error arguments.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(v) => serde_json::Value::Bool(*v),
            Self::Int(v) => serde_json::Value::from(*v),
            Self::Float(v) => serde_json::Number::from_f64(*v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::String(v) => serde_json::Value::String(v.clone()),
            Self::List(items) => items.iter().map(Self::to_json).collect(),
            Self::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::DateTime(v) => serde_json::Value::String(v.to_rfc3339()),
            Self::Object(object) => serde_json::Value::String(
                object
                    .to_text()
                    .unwrap_or_else(|| object.class().to_string()),
            ),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(v) => write!(f, "Bool({v})"),
            Self::Int(v) => write!(f, "Int({v})"),
            Self::Float(v) => write!(f, "Float({v})"),
            Self::String(v) => write!(f, "String({v:?})"),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::DateTime(v) => write!(f, "DateTime({v})"),
            Self::Object(object) => write!(f, "Object({})", object.class()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<Arc<dyn Object>> for Value {
    fn from(v: Arc<dyn Object>) -> Self {
        Self::Object(v)
    }
}
