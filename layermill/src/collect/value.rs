//! Typed attribute values and the setter input wrapper.

use serde::Serialize;
use std::fmt;

/// A typed attribute value on an output feature.
///
/// Serializes untagged, so a JSON encoder writes `"path"`, `3999`, or
/// `1219.2` rather than a variant wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Free text.
    Text(String),
    /// Whole number, e.g. a truncated unit conversion.
    Integer(i64),
    /// Floating point measurement.
    Double(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(v) => write!(f, "{}", v),
            AttrValue::Integer(v) => write!(f, "{}", v),
            AttrValue::Double(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! attr_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(v: $ty) -> Self {
                    AttrValue::$variant(v.into())
                }
            }
        )*
    };
}

attr_value_from!(
    &str => Text,
    String => Text,
    i64 => Integer,
    i32 => Integer,
    u32 => Integer,
    u8 => Integer,
    f64 => Double,
);

/// Argument to [`set_attr`](super::OutputFeature::set_attr).
///
/// Wraps an optional value so call sites can pass raw values, `Option`s
/// straight from tag lookups, or derivation results without unwrapping.
/// A `None` input means the attribute is not set at all.
#[derive(Debug)]
pub struct AttrInput(Option<AttrValue>);

impl AttrInput {
    pub(crate) fn into_value(self) -> Option<AttrValue> {
        self.0
    }
}

impl From<AttrValue> for AttrInput {
    fn from(v: AttrValue) -> Self {
        AttrInput(Some(v))
    }
}

impl From<Option<AttrValue>> for AttrInput {
    fn from(v: Option<AttrValue>) -> Self {
        AttrInput(v)
    }
}

macro_rules! attr_input_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrInput {
                fn from(v: $ty) -> Self {
                    AttrInput(Some(v.into()))
                }
            }

            impl From<Option<$ty>> for AttrInput {
                fn from(v: Option<$ty>) -> Self {
                    AttrInput(v.map(AttrValue::from))
                }
            }
        )*
    };
}

attr_input_from!(&str, String, i64, i32, u32, u8, f64);
