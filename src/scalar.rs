//! Leaf values: strings, integers, doubles, booleans, null, and the
//! not-yet-set `Empty` marker.

use crate::error::Error;
use std::fmt;

/// The kind of a [`Scalar`]. `Empty` means "not yet set" (only reachable via
/// `Scalar::default()`/`Node::default()`); `Null` means "present, explicit
/// null" (what a parsed `null` literal produces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Integer,
    Double,
    Boolean,
    Null,
    Empty,
}

impl ScalarKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Double => "double",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Null => "null",
            ScalarKind::Empty => "none",
        }
    }
}

/// A leaf value. The variant tag *is* the kind, so "kind disagrees with
/// payload" is not representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Null,
    #[doc(hidden)]
    Empty,
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Empty
    }
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::String(_) => ScalarKind::String,
            Scalar::Integer(_) => ScalarKind::Integer,
            Scalar::Double(_) => ScalarKind::Double,
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::Null => ScalarKind::Null,
            Scalar::Empty => ScalarKind::Empty,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Scalar::String(_))
    }
    pub fn is_integer(&self) -> bool {
        matches!(self, Scalar::Integer(_))
    }
    pub fn is_double(&self) -> bool {
        matches!(self, Scalar::Double(_))
    }
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_double()
    }
    pub fn is_boolean(&self) -> bool {
        matches!(self, Scalar::Boolean(_))
    }
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Empty)
    }

    pub fn set(&mut self, value: impl Into<Scalar>) {
        *self = value.into();
    }

    pub fn try_as_str(&self) -> Result<&str, Error> {
        match self {
            Scalar::String(s) => Ok(s.as_str()),
            other => Err(Error::wrong_type("string", other.type_name())),
        }
    }

    pub fn try_as_i64(&self) -> Result<i64, Error> {
        match self {
            Scalar::Integer(i) => Ok(*i),
            other => Err(Error::wrong_type("integer", other.type_name())),
        }
    }

    pub fn try_as_f64(&self) -> Result<f64, Error> {
        match self {
            Scalar::Double(d) => Ok(*d),
            other => Err(Error::wrong_type("double", other.type_name())),
        }
    }

    /// `number` succeeds for both Integer and Double, promoting Integer to
    /// f64.
    pub fn try_as_number(&self) -> Result<f64, Error> {
        match self {
            Scalar::Integer(i) => Ok(*i as f64),
            Scalar::Double(d) => Ok(*d),
            other => Err(Error::wrong_type("number", other.type_name())),
        }
    }

    pub fn try_as_bool(&self) -> Result<bool, Error> {
        match self {
            Scalar::Boolean(b) => Ok(*b),
            other => Err(Error::wrong_type("boolean", other.type_name())),
        }
    }

    pub fn try_as_null(&self) -> Result<(), Error> {
        match self {
            Scalar::Null => Ok(()),
            other => Err(Error::wrong_type("null", other.type_name())),
        }
    }

    pub fn as_str(&self) -> &str {
        self.try_as_str().expect("Scalar::as_str: wrong type")
    }
    pub fn as_i64(&self) -> i64 {
        self.try_as_i64().expect("Scalar::as_i64: wrong type")
    }
    pub fn as_f64(&self) -> f64 {
        self.try_as_f64().expect("Scalar::as_f64: wrong type")
    }
    pub fn as_number(&self) -> f64 {
        self.try_as_number().expect("Scalar::as_number: wrong type")
    }
    pub fn as_bool(&self) -> bool {
        self.try_as_bool().expect("Scalar::as_bool: wrong type")
    }

    /// Canonical textual form. Doubles use a fixed-precision decimal with
    /// trailing zeros stripped, retaining at least one digit after the
    /// point (`5.0`, not `5`).
    pub fn stringify(&self) -> String {
        match self {
            Scalar::String(s) => s.clone(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Double(d) => stringify_double(*d),
            Scalar::Boolean(b) => b.to_string(),
            Scalar::Null => "null".to_string(),
            Scalar::Empty => String::new(),
        }
    }
}

/// Fixed-precision decimal, trailing zeros stripped, `<n>.0` retained.
pub(crate) fn stringify_double(value: f64) -> String {
    let mut repr = format!("{:.12}", value);
    if let Some(dot) = repr.find('.') {
        let last_nonzero = repr
            .rfind(|c: char| c != '0')
            .unwrap_or(dot);
        repr.truncate(last_nonzero + 1);
        if repr.ends_with('.') {
            repr.push('0');
        }
        let _ = dot;
    }
    repr
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            Scalar::Double(d) => serializer.serialize_f64(*d),
            Scalar::Boolean(b) => serializer.serialize_bool(*b),
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Empty => serializer.serialize_none(),
        }
    }
}

// ---- Foreign scalar ingestion ----

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}
impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}
impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}
impl From<f64> for Scalar {
    fn from(d: f64) -> Self {
        Scalar::Double(d)
    }
}
impl From<f32> for Scalar {
    fn from(d: f32) -> Self {
        Scalar::Double(d as f64)
    }
}
/// The unit type stands in for the source language's "null marker".
impl From<()> for Scalar {
    fn from(_: ()) -> Self {
        Scalar::Null
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::Integer(v as i64)
                }
            }
        )+
    };
}
impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_stringify_strips_trailing_zeros() {
        assert_eq!(stringify_double(5.0), "5.0");
        assert_eq!(stringify_double(5.5), "5.5");
        assert_eq!(stringify_double(0.1), "0.1");
        assert_eq!(stringify_double(3.140000), "3.14");
    }

    #[test]
    fn number_promotes_integer_to_double() {
        let s = Scalar::Integer(7);
        assert_eq!(s.try_as_number().unwrap(), 7.0);
        assert!(Scalar::String("x".into()).try_as_number().is_err());
    }

    #[test]
    fn wrong_type_never_mutates() {
        let s = Scalar::String("hi".into());
        assert!(s.try_as_i64().is_err());
        assert_eq!(s, Scalar::String("hi".into()));
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(Scalar::default(), Scalar::Empty);
        assert!(Scalar::default().is_empty());
    }
}
