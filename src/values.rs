use serde_json::Value;

use crate::locale::Locale;

/// A single untyped scalar as a value source stores it, before any
/// stringification happens.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Locale-aware textual form. A stored string is taken verbatim; other
    /// kinds go through locale formatting.
    pub fn to_locale_string(&self, locale: &Locale) -> String {
        match self {
            Scalar::Str(s) => s.clone(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => locale.format_decimal(*f),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Raw entry payload: resolved into scalar vs array shape up front instead of
/// inspecting types at lookup time.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Scalar(Scalar),
    Array(Vec<Scalar>),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Scalar(Scalar::Str(s))
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Scalar(Scalar::Int(i))
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Scalar(Scalar::Float(f))
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Scalar(Scalar::Bool(b))
    }
}

impl<T> From<Vec<T>> for RawValue
where
    T: Into<Scalar>,
{
    fn from(items: Vec<T>) -> Self {
        RawValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// JSON interop: scalars map directly, arrays element-wise. Nested arrays and
/// objects have no scalar identity, so they keep their JSON text.
impl From<Value> for RawValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => RawValue::Null,
            Value::Array(items) => {
                RawValue::Array(items.into_iter().map(json_scalar).collect())
            }
            other => RawValue::Scalar(json_scalar(other)),
        }
    }
}

fn json_scalar(v: Value) -> Scalar {
    match v {
        Value::String(s) => Scalar::Str(s),
        Value::Bool(b) => Scalar::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Scalar::Int(i)
            } else {
                Scalar::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        other => Scalar::Str(other.to_string()),
    }
}
