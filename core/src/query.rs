//! Default-value query projector.
//!
//! # Overview
//! Every request object doubles as a source of query parameters. Each request
//! type carries an explicit field-descriptor table (generated by
//! [`query_params!`](crate::query_params)) listing, in declaration order, the
//! wire name of each field, an optional default literal, and how to read the
//! field's live value. Projection walks that table:
//!
//! - sequence fields emit one entry per element under the same key;
//! - scalar and nested fields are stringified, and a value of `""` or `"0"`
//!   is replaced by the declared default, or dropped when there is none.
//!
//! The `"0"` check is type-unaware: a numeric zero that was set on purpose is
//! indistinguishable from an unset field.
//!
//! # Zero-value shortcut
//! [`project`] has value semantics. A request equal to its type's
//! `Default` projects to nothing, and answering that question needs value
//! equality over every field. Types holding a `Vec` (directly or through a
//! nested struct) are treated as not comparable and fail with
//! [`ProjectError::NotComparable`] instead of projecting.
//!
//! [`QueryPairs::from_request`] has reference semantics and is what the client
//! core uses: `None` projects to nothing, `Some` always projects its fields.

use std::fmt;

use crate::error::ProjectError;

/// Stringified live value of one request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    Sequence(Vec<String>),
    /// A nested struct rendered with its `Debug` form. Never projected
    /// recursively.
    Nested(String),
}

impl FieldValue {
    pub fn scalar(value: impl fmt::Display) -> Self {
        FieldValue::Scalar(value.to_string())
    }

    pub fn nested(value: &impl fmt::Debug) -> Self {
        FieldValue::Nested(format!("{value:?}"))
    }
}

/// How a field type reads itself for projection.
pub trait QueryValue {
    fn query_value(&self) -> FieldValue;

    /// Whether the type supports the value equality the zero-value check
    /// relies on.
    fn is_comparable(&self) -> bool {
        true
    }
}

macro_rules! display_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn query_value(&self) -> FieldValue {
                    FieldValue::scalar(self)
                }
            }
        )*
    };
}

display_query_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl<T: QueryValue> QueryValue for Option<T> {
    fn query_value(&self) -> FieldValue {
        match self {
            Some(value) => value.query_value(),
            None => FieldValue::Scalar(String::new()),
        }
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn query_value(&self) -> FieldValue {
        FieldValue::Sequence(self.iter().map(element_string).collect())
    }

    fn is_comparable(&self) -> bool {
        false
    }
}

impl<T: QueryValue, const N: usize> QueryValue for [T; N] {
    fn query_value(&self) -> FieldValue {
        FieldValue::Sequence(self.iter().map(element_string).collect())
    }

    fn is_comparable(&self) -> bool {
        self.iter().all(QueryValue::is_comparable)
    }
}

/// Sequence elements are emitted as-is, without default substitution.
fn element_string<T: QueryValue>(element: &T) -> String {
    match element.query_value() {
        FieldValue::Scalar(value) | FieldValue::Nested(value) => value,
        FieldValue::Sequence(items) => format!("[{}]", items.join(" ")),
    }
}

/// One row of a request type's field-descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryField {
    pub wire_name: &'static str,
    pub default: Option<&'static str>,
    pub value: FieldValue,
}

impl QueryField {
    pub fn new(wire_name: &'static str, default: Option<&'static str>, value: FieldValue) -> Self {
        Self {
            wire_name,
            default,
            value,
        }
    }
}

/// A request object that can be projected into query parameters.
///
/// Implement with [`query_params!`](crate::query_params) rather than by hand.
pub trait QueryParams {
    /// Field descriptors with live values, in declaration order.
    fn query_fields(&self) -> Vec<QueryField>;

    fn is_comparable(&self) -> bool;

    /// Whether `self` equals the type's default value.
    fn is_zero(&self) -> bool;
}

/// Ordered multi-map of query parameters. Repeated keys accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a request through a reference. `None` yields no pairs.
    pub fn from_request<P: QueryParams>(request: Option<&P>) -> Self {
        let mut pairs = Self::new();
        if let Some(request) = request {
            pairs.extend_from_fields(request.query_fields());
        }
        pairs
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn extend_from_fields(&mut self, fields: Vec<QueryField>) {
        for field in fields {
            match field.value {
                FieldValue::Sequence(items) => {
                    for item in items {
                        self.push(field.wire_name, item);
                    }
                }
                FieldValue::Scalar(value) | FieldValue::Nested(value) => {
                    if let Some(value) = with_default(value, field.default) {
                        self.push(field.wire_name, value);
                    }
                }
            }
        }
    }
}

impl IntoIterator for QueryPairs {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// `""` and `"0"` both mean "unset".
fn with_default(value: String, default: Option<&'static str>) -> Option<String> {
    if value.is_empty() || value == "0" {
        default.map(str::to_string)
    } else {
        Some(value)
    }
}

/// Project a request object by value.
///
/// Returns no pairs when `request` equals its type's default, and fails when
/// the type cannot answer that question.
pub fn project<P: QueryParams>(request: &P) -> Result<QueryPairs, ProjectError> {
    if !request.is_comparable() {
        return Err(ProjectError::NotComparable {
            type_name: std::any::type_name::<P>(),
        });
    }
    if request.is_zero() {
        return Ok(QueryPairs::new());
    }
    let mut pairs = QueryPairs::new();
    pairs.extend_from_fields(request.query_fields());
    Ok(pairs)
}

/// Placeholder request type for calls that send no body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct NoParams;

crate::query_params!(NoParams {});

/// Implement [`QueryParams`] for request structs.
///
/// Each row names a struct field, its wire name, and optionally a default
/// literal. The type must implement `Default` and `PartialEq`, and every
/// listed field must implement [`QueryValue`].
///
/// ```
/// use seller_core::{query_params, query::project};
///
/// #[derive(Default, PartialEq)]
/// struct ListParams {
///     limit: i64,
///     offset: i64,
/// }
///
/// query_params!(ListParams {
///     limit => "limit" = "100",
///     offset => "offset",
/// });
///
/// let pairs = project(&ListParams { limit: 0, offset: 20 }).unwrap();
/// assert_eq!(pairs.get("limit"), Some("100"));
/// assert_eq!(pairs.get("offset"), Some("20"));
/// ```
#[macro_export]
macro_rules! query_params {
    (@default) => {
        ::core::option::Option::None
    };
    (@default $default:literal) => {
        ::core::option::Option::Some($default)
    };
    ($($ty:ty { $($field:ident => $wire:literal $(= $default:literal)?),* $(,)? });+ $(;)?) => {
        $(
            impl $crate::query::QueryParams for $ty {
                fn query_fields(&self) -> ::std::vec::Vec<$crate::query::QueryField> {
                    ::std::vec![
                        $(
                            $crate::query::QueryField::new(
                                $wire,
                                $crate::query_params!(@default $($default)?),
                                $crate::query::QueryValue::query_value(&self.$field),
                            ),
                        )*
                    ]
                }

                fn is_comparable(&self) -> bool {
                    true $(&& $crate::query::QueryValue::is_comparable(&self.$field))*
                }

                fn is_zero(&self) -> bool {
                    *self == <$ty as ::core::default::Default>::default()
                }
            }
        )+
    };
}

/// Implement [`QueryValue`] for domain types used as request fields.
///
/// `display` types stringify through `Display` (enums with wire names);
/// `nested` types must also implement [`QueryParams`] and `Debug`, render with
/// `Debug`, and are comparable only when all of their own fields are.
#[macro_export]
macro_rules! query_value {
    (display $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::query::QueryValue for $ty {
                fn query_value(&self) -> $crate::query::FieldValue {
                    $crate::query::FieldValue::scalar(self)
                }
            }
        )+
    };
    (nested $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::query::QueryValue for $ty {
                fn query_value(&self) -> $crate::query::FieldValue {
                    $crate::query::FieldValue::nested(self)
                }

                fn is_comparable(&self) -> bool {
                    $crate::query::QueryParams::is_comparable(self)
                }
            }
        )+
    };
}
