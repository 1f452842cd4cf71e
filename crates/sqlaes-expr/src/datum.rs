//! Scalar values passed into and out of SQL functions.

use std::borrow::Cow;

/// A nullable SQL scalar value.
///
/// `Null` is distinct from an empty string or empty byte string.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Datum {
    /// SQL `NULL`.
    #[default]
    Null,
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Double precision float.
    Float(f64),
    /// Character string.
    String(String),
    /// Binary string.
    Bytes(Vec<u8>),
}

impl Datum {
    /// Returns true for `NULL`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// Coerces the value to a byte string, or `None` for `NULL`.
    ///
    /// Numbers coerce to their decimal text, as MySQL does for string
    /// function arguments.
    pub fn to_bytes(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            Datum::Null => None,
            Datum::Int(v) => Some(Cow::Owned(v.to_string().into_bytes())),
            Datum::UInt(v) => Some(Cow::Owned(v.to_string().into_bytes())),
            Datum::Float(v) => Some(Cow::Owned(v.to_string().into_bytes())),
            Datum::String(s) => Some(Cow::Borrowed(s.as_bytes())),
            Datum::Bytes(b) => Some(Cow::Borrowed(b)),
        }
    }

    /// Returns the bytes of a `Bytes` or `String` value without coercion.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Datum::String(s) => Some(s.as_bytes()),
            Datum::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Renders the coerced bytes as uppercase hex, the way `HEX(x)` displays
    /// binary results.
    pub fn to_hex_upper(&self) -> Option<String> {
        self.to_bytes().map(hex::encode_upper)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::String(value.to_owned())
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Datum::String(value)
    }
}

impl From<&[u8]> for Datum {
    fn from(value: &[u8]) -> Self {
        Datum::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Datum {
    fn from(value: Vec<u8>) -> Self {
        Datum::Bytes(value)
    }
}

impl From<i64> for Datum {
    fn from(value: i64) -> Self {
        Datum::Int(value)
    }
}

impl From<u64> for Datum {
    fn from(value: u64) -> Self {
        Datum::UInt(value)
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Datum::Float(value)
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(value: Option<T>) -> Self {
        value.map_or(Datum::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_not_empty() {
        assert!(Datum::Null.is_null());
        assert!(!Datum::Bytes(Vec::new()).is_null());
        assert_eq!(Datum::Null.to_bytes(), None);
        assert_eq!(Datum::from("").to_bytes().as_deref(), Some(&b""[..]));
    }

    #[test]
    fn numbers_coerce_to_decimal_text() {
        assert_eq!(Datum::Int(-42).to_bytes().as_deref(), Some(&b"-42"[..]));
        assert_eq!(Datum::UInt(7).to_bytes().as_deref(), Some(&b"7"[..]));
        assert_eq!(Datum::Float(1.5).to_bytes().as_deref(), Some(&b"1.5"[..]));
        assert_eq!(Datum::Int(1).as_bytes(), None);
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Datum::from(None::<&str>), Datum::Null);
        assert_eq!(Datum::from(Some(3i64)), Datum::Int(3));
    }

    #[test]
    fn hex_upper() {
        assert_eq!(
            Datum::Bytes(vec![0xab, 0x01]).to_hex_upper().as_deref(),
            Some("AB01")
        );
        assert_eq!(Datum::Null.to_hex_upper(), None);
    }
}
