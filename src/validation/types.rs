//! Record introspection types
//!
//! A record describes itself as an ordered list of field descriptors. Each
//! descriptor carries the field name, its visibility, the raw annotation and
//! the value reduced to one of the shapes the rule engine understands.
//!
//! Supported value shapes:
//! - int: any Rust integer, widened to `i128` (`u128` above `i128::MAX` saturates)
//! - text: UTF-8 string
//! - int sequence / text sequence: slices, vectors and arrays of the above
//!
//! Everything else is `Unsupported` and passes validation untouched.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Field visibility as declared on the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Plain `pub`
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in path)`
    Restricted,
    /// No visibility modifier
    Private,
}

impl Visibility {
    /// Classifies the stringified visibility token of a field declaration.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            Visibility::Private
        } else if token == "pub" {
            Visibility::Public
        } else {
            Visibility::Restricted
        }
    }

    /// Only plain `pub` fields are externally visible
    pub fn is_exported(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Runtime value of a field, reduced to a shape the rule engine can check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Int(i128),
    Text(&'a str),
    IntSeq(Vec<i128>),
    TextSeq(Vec<&'a str>),
    Unsupported,
}

/// One field of a record, produced per validation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    /// Field name as declared
    pub name: &'a str,
    /// Declared visibility
    pub visibility: Visibility,
    /// Raw annotation; empty when the field has none
    pub annotation: &'a str,
    /// Current field value
    pub value: FieldValue<'a>,
}

impl<'a> FieldDescriptor<'a> {
    pub fn new(name: &'a str, visibility: Visibility, annotation: &'a str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            visibility,
            annotation,
            value,
        }
    }

    /// Returns whether the field carries any rules
    pub fn is_annotated(&self) -> bool {
        !self.annotation.is_empty()
    }
}

/// Introspected shape of a value passed to the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// Aggregate with named fields, in declaration order
    Record {
        type_name: &'static str,
        fields: Vec<FieldDescriptor<'a>>,
    },
    /// Anything that is not a record
    Other { type_name: &'static str },
}

/// Introspection capability: enumerate the fields of a value.
///
/// Implemented by the `record!` macro for annotated structs and by this
/// module for common non-record types.
pub trait Reflect {
    fn shape(&self) -> Shape<'_>;
}

/// Reduces a field's value to a [`FieldValue`].
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_int_field {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i128::from(*self))
                }
            }
        )*
    };
}

impl_int_field!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

macro_rules! impl_wide_int_field {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                fn as_field_value(&self) -> FieldValue<'_> {
                    // Only u128 can overflow; it still fails any i64 `max` or `in`.
                    FieldValue::Int(i128::try_from(*self).unwrap_or(i128::MAX))
                }
            }
        )*
    };
}

impl_wide_int_field!(u128, isize, usize);

macro_rules! impl_unsupported_field {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Unsupported
                }
            }
        )*
    };
}

impl_unsupported_field!(bool, char, f32, f64, (), serde_json::Value);

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for Cow<'_, str> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_ref())
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue> AsFieldValue for [T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        let mut ints = Vec::new();
        let mut texts = Vec::new();

        for item in self {
            match item.as_field_value() {
                FieldValue::Int(n) if texts.is_empty() => ints.push(n),
                FieldValue::Text(s) if ints.is_empty() => texts.push(s),
                _ => return FieldValue::Unsupported,
            }
        }

        if texts.is_empty() {
            FieldValue::IntSeq(ints)
        } else {
            FieldValue::TextSeq(texts)
        }
    }
}

impl<T: AsFieldValue> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_slice().as_field_value()
    }
}

impl<T: AsFieldValue, const N: usize> AsFieldValue for [T; N] {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_slice().as_field_value()
    }
}

// Optional and boxed values are not dereferenced.
impl<T> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsupported
    }
}

impl<T: ?Sized> AsFieldValue for Box<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsupported
    }
}

impl<K, V, S> AsFieldValue for HashMap<K, V, S> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsupported
    }
}

impl<K, V> AsFieldValue for BTreeMap<K, V> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsupported
    }
}

macro_rules! impl_not_a_record {
    ($($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn shape(&self) -> Shape<'_> {
                    Shape::Other { type_name: std::any::type_name::<$t>() }
                }
            }
        )*
    };
}

impl_not_a_record!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, f32, f64, (),
    String, serde_json::Value
);

impl Reflect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Other { type_name: "str" }
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other { type_name: std::any::type_name::<Self>() }
    }
}

impl<T> Reflect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other { type_name: "slice" }
    }
}

impl<T> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other { type_name: std::any::type_name::<Self>() }
    }
}

// A box is a pointer, even when it points at a record.
impl<T: ?Sized> Reflect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other { type_name: "Box" }
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other { type_name: "HashMap" }
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other { type_name: "BTreeMap" }
    }
}
