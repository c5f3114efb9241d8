//! Bridges between static Rust types and [`Value`].
//!
//! `Option<T>` plays the part of a nullable reference: `None` is a null
//! element and `Some` is dereferenced by the converter. `Box`, `Rc`, `Arc`
//! and plain references are transparent. Sequences and maps are
//! deliberately not reflected, so nested slice conversion is rejected at
//! compile time.

use crate::types::{FieldInfo, Kind, TypeInfo};
use crate::value::Value;
use std::rc::Rc;
use std::sync::Arc;

/// Describes a static type and lowers its values into [`Value`].
pub trait Reflect {
    /// Runtime descriptor of the implementing type.
    fn type_info() -> TypeInfo;

    /// Lowers the value.
    fn to_value(&self) -> Value;
}

/// Rebuilds a static value from a [`Value`] of exactly its type.
pub trait FromValue: Sized {
    /// Returns `None` if `value` does not have the shape of `Self`.
    fn from_value(value: Value) -> Option<Self>;
}

/// Builds the descriptor of a record field from an accessor closure, so
/// the field type never has to be spelled out.
pub fn field_info<R, F, A>(name: &'static str, _accessor: A) -> FieldInfo
where
    F: Reflect,
    A: Fn(&R) -> &F,
{
    FieldInfo::new(name, F::type_info())
}

macro_rules! reflect_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::primitive(Kind::$variant)
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

reflect_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::pointer(T::type_info())
    }

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => Value::Ptr(Box::new(inner.to_value())),
            None => Value::Nil,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Nil => Some(None),
            Value::Ptr(inner) => T::from_value(*inner).map(Some),
            _ => None,
        }
    }
}

macro_rules! reflect_transparent {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Reflect> Reflect for $wrapper<T> {
                fn type_info() -> TypeInfo {
                    T::type_info()
                }

                fn to_value(&self) -> Value {
                    (**self).to_value()
                }
            }

            impl<T: FromValue> FromValue for $wrapper<T> {
                fn from_value(value: Value) -> Option<Self> {
                    T::from_value(value).map($wrapper::new)
                }
            }
        )*
    };
}

reflect_transparent!(Box, Rc, Arc);

impl<T: Reflect> Reflect for &T {
    fn type_info() -> TypeInfo {
        T::type_info()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// `Value` is the dynamic "any" type: elements of a `Vec<Value>` behave
/// like values held in a dynamic container.
impl Reflect for Value {
    fn type_info() -> TypeInfo {
        TypeInfo::any()
    }

    fn to_value(&self) -> Value {
        match self {
            Value::Nil | Value::Dyn(_) => self.clone(),
            other => Value::Dyn(Box::new(other.clone())),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Dyn(inner) => Some(*inner),
            other => Some(other),
        }
    }
}

/// Implements [`Reflect`] and [`FromValue`] for a struct with named
/// fields. Every field must be listed and its type must itself be
/// reflected.
///
/// ```
/// use toolkit_core::impl_record;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl_record!(User { id, name });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn type_info() -> $crate::TypeInfo {
                $crate::TypeInfo::record(
                    stringify!($ty),
                    vec![
                        $( $crate::reflect::field_info(stringify!($field), |r: &$ty| &r.$field), )*
                    ],
                )
            }

            fn to_value(&self) -> $crate::Value {
                $crate::Value::Record($crate::Record::new(
                    <Self as $crate::Reflect>::type_info(),
                    vec![ $( $crate::Reflect::to_value(&self.$field), )* ],
                ))
            }
        }

        impl $crate::FromValue for $ty {
            #[allow(unused_mut)]
            fn from_value(value: $crate::Value) -> Option<Self> {
                let mut record = match value {
                    $crate::Value::Record(record)
                        if record.type_info().name() == stringify!($ty) => record,
                    _ => return None,
                };
                Some(Self {
                    $( $field: $crate::FromValue::from_value(record.take(stringify!($field))?)?, )*
                })
            }
        }
    };
}

/// Implements [`Reflect`] and [`FromValue`] for a single-field tuple
/// struct wrapping a scalar, making it a named scalar type.
///
/// ```
/// use toolkit_core::impl_newtype;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Celsius(f64);
///
/// impl_newtype!(Celsius(f64));
/// ```
#[macro_export]
macro_rules! impl_newtype {
    ($ty:ident($inner:ty)) => {
        impl $crate::Reflect for $ty {
            fn type_info() -> $crate::TypeInfo {
                $crate::TypeInfo::named(
                    stringify!($ty),
                    <$inner as $crate::Reflect>::type_info().kind(),
                )
            }

            fn to_value(&self) -> $crate::Value {
                $crate::Value::Named(
                    <Self as $crate::Reflect>::type_info(),
                    Box::new($crate::Reflect::to_value(&self.0)),
                )
            }
        }

        impl $crate::FromValue for $ty {
            fn from_value(value: $crate::Value) -> Option<Self> {
                match value {
                    $crate::Value::Named(ty, inner)
                        if ty == <Self as $crate::Reflect>::type_info() =>
                    {
                        <$inner as $crate::FromValue>::from_value(*inner).map($ty)
                    }
                    _ => None,
                }
            }
        }
    };
}
