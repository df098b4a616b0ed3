/// Errors that can occur when coercing a raw boundary value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// No value was supplied (absent, `false`, zero or empty text)
    #[error("no value supplied")]
    NotSupplied,
    /// The value is numeric but not integer-valued
    #[error("expected an integer, got {0}")]
    NotInteger(String),
    /// The value is text, which is never coerced to a number
    #[error("expected a number, got text {0:?}")]
    Text(String),
}

/// A loosely typed value as collected at a boundary (form, flag, JSON document).
///
/// Callers hand these to the estimation engine unchanged so that the engine, not the
/// boundary, decides what counts as well formed. The variants mirror what a JSON value
/// can hold for a scalar field, with `null` (or a missing field) mapping to `Absent`.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Nothing supplied.
    #[default]
    Absent,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// Returns `true` when the value carries information.
    ///
    /// Absent values, `false`, zero and empty text all mean "no data". This deliberately
    /// folds an explicit zero into the same bucket as an unanswered question.
    pub fn is_supplied(&self) -> bool {
        match self {
            RawValue::Absent => false,
            RawValue::Bool(b) => *b,
            RawValue::Integer(i) => *i != 0,
            RawValue::Float(f) => *f != 0.0,
            RawValue::Text(s) => !s.is_empty(),
        }
    }

    /// Coerces the value to an integer.
    ///
    /// Integers pass through, booleans count as `0`/`1`, and floats are accepted only when
    /// finite with no fractional part (`1980.0` becomes `1980`). Text is never parsed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NotSupplied` for `Absent`, `ValueError::Text` for text, and
    /// `ValueError::NotInteger` for fractional, non-finite or out-of-range floats.
    pub fn as_integer(&self) -> Result<i64, ValueError> {
        match self {
            RawValue::Absent => Err(ValueError::NotSupplied),
            RawValue::Bool(b) => Ok(i64::from(*b)),
            RawValue::Integer(i) => Ok(*i),
            RawValue::Float(f) => {
                // i64::MAX is not representable as f64, so compare against 2^63.
                const LIMIT: f64 = 9_223_372_036_854_775_808.0;
                if f.is_finite() && f.fract() == 0.0 && *f >= -LIMIT && *f < LIMIT {
                    Ok(*f as i64)
                } else {
                    Err(ValueError::NotInteger(f.to_string()))
                }
            }
            RawValue::Text(s) => Err(ValueError::Text(s.clone())),
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Absent => write!(f, "<absent>"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Integer(i) => write!(f, "{i}"),
            RawValue::Float(x) => write!(f, "{x:?}"),
            RawValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Integer(i64::from(value))
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Integer(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Absent, Into::into)
    }
}
