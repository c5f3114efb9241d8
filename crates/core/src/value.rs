//! Dynamic values.
//!
//! This module provides the tagged union the converter works on. Static
//! Rust values enter it through [`Reflect`](crate::Reflect) and leave it
//! through [`FromValue`](crate::FromValue).

use crate::types::{FieldInfo, Kind, TypeInfo};
use num_traits::AsPrimitive;

/// Represents a value of any supported type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A null reference or an empty dynamic container.
    Nil,

    /// `bool` scalar.
    Bool(bool),
    /// `i8` scalar.
    I8(i8),
    /// `i16` scalar.
    I16(i16),
    /// `i32` scalar.
    I32(i32),
    /// `i64` scalar.
    I64(i64),
    /// `isize` scalar.
    Isize(isize),
    /// `u8` scalar.
    U8(u8),
    /// `u16` scalar.
    U16(u16),
    /// `u32` scalar.
    U32(u32),
    /// `u64` scalar.
    U64(u64),
    /// `usize` scalar.
    Usize(usize),
    /// `f32` scalar.
    F32(f32),
    /// `f64` scalar.
    F64(f64),
    /// `String` scalar.
    String(String),

    /// A scalar of a named type, holding the underlying scalar.
    Named(TypeInfo, Box<Value>),

    /// A record with named fields.
    Record(Record),

    /// A non-null reference to a value.
    Ptr(Box<Value>),

    /// A dynamic container holding a concrete value.
    Dyn(Box<Value>),

    /// A sequence of dynamic values.
    Seq(Vec<Value>),

    /// A value the converter cannot look into.
    Opaque(TypeInfo),
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil
    }
}

impl Value {
    /// Returns true if the value is a null reference.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the runtime type of the value.
    pub fn type_info(&self) -> TypeInfo {
        match self {
            Value::Nil | Value::Dyn(_) => TypeInfo::any(),
            Value::Bool(_) => TypeInfo::primitive(Kind::Bool),
            Value::I8(_) => TypeInfo::primitive(Kind::I8),
            Value::I16(_) => TypeInfo::primitive(Kind::I16),
            Value::I32(_) => TypeInfo::primitive(Kind::I32),
            Value::I64(_) => TypeInfo::primitive(Kind::I64),
            Value::Isize(_) => TypeInfo::primitive(Kind::Isize),
            Value::U8(_) => TypeInfo::primitive(Kind::U8),
            Value::U16(_) => TypeInfo::primitive(Kind::U16),
            Value::U32(_) => TypeInfo::primitive(Kind::U32),
            Value::U64(_) => TypeInfo::primitive(Kind::U64),
            Value::Usize(_) => TypeInfo::primitive(Kind::Usize),
            Value::F32(_) => TypeInfo::primitive(Kind::F32),
            Value::F64(_) => TypeInfo::primitive(Kind::F64),
            Value::String(_) => TypeInfo::primitive(Kind::String),
            Value::Named(ty, _) => ty.clone(),
            Value::Record(record) => record.type_info().clone(),
            Value::Ptr(inner) => TypeInfo::pointer(inner.type_info()),
            Value::Seq(_) => TypeInfo::seq(),
            Value::Opaque(ty) => ty.clone(),
        }
    }

    /// Strips a named scalar down to its underlying value.
    pub fn into_underlying(self) -> Value {
        match self {
            Value::Named(_, inner) => *inner,
            other => other,
        }
    }

    /// Wraps an underlying scalar in `ty` when `ty` is a named scalar.
    pub(crate) fn retag(self, ty: &TypeInfo) -> Value {
        if ty.is_named_scalar() {
            Value::Named(ty.clone(), Box::new(self))
        } else {
            self
        }
    }

    /// Converts the value into `dest`, following the rules of
    /// [`TypeInfo::is_convertible_to`]. Returns `None` when the types are
    /// not convertible.
    pub fn convert_to(self, dest: &TypeInfo) -> Option<Value> {
        let from = self.type_info();
        if dest.kind().is_numeric() && from.kind().is_numeric() {
            return cast_numeric(self.into_underlying(), dest.kind()).map(|v| v.retag(dest));
        }
        if !from.same_underlying(dest) {
            return None;
        }
        match self.into_underlying() {
            Value::Record(record) => Some(Value::Record(Record {
                ty: dest.clone(),
                values: record.values,
            })),
            Value::Ptr(inner) => {
                let elem = dest.elem()?;
                inner.convert_to(elem).map(|v| Value::Ptr(Box::new(v)))
            }
            scalar => Some(scalar.retag(dest)),
        }
    }
}

macro_rules! cast_into {
    ($v:expr, $kind:expr) => {{
        let v = $v;
        match $kind {
            Kind::I8 => Some(Value::I8(v.as_())),
            Kind::I16 => Some(Value::I16(v.as_())),
            Kind::I32 => Some(Value::I32(v.as_())),
            Kind::I64 => Some(Value::I64(v.as_())),
            Kind::Isize => Some(Value::Isize(v.as_())),
            Kind::U8 => Some(Value::U8(v.as_())),
            Kind::U16 => Some(Value::U16(v.as_())),
            Kind::U32 => Some(Value::U32(v.as_())),
            Kind::U64 => Some(Value::U64(v.as_())),
            Kind::Usize => Some(Value::Usize(v.as_())),
            Kind::F32 => Some(Value::F32(v.as_())),
            Kind::F64 => Some(Value::F64(v.as_())),
            _ => None,
        }
    }};
}

/// Numeric cast with `as` semantics: integers wrap, floats truncate and
/// saturate.
fn cast_numeric(value: Value, kind: Kind) -> Option<Value> {
    match value {
        Value::I8(v) => cast_into!(v, kind),
        Value::I16(v) => cast_into!(v, kind),
        Value::I32(v) => cast_into!(v, kind),
        Value::I64(v) => cast_into!(v, kind),
        Value::Isize(v) => cast_into!(v, kind),
        Value::U8(v) => cast_into!(v, kind),
        Value::U16(v) => cast_into!(v, kind),
        Value::U32(v) => cast_into!(v, kind),
        Value::U64(v) => cast_into!(v, kind),
        Value::Usize(v) => cast_into!(v, kind),
        Value::F32(v) => cast_into!(v, kind),
        Value::F64(v) => cast_into!(v, kind),
        _ => None,
    }
}

/// A record value: field values laid out in the order of its type's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    ty: TypeInfo,
    values: Vec<Value>,
}

impl Record {
    /// Creates a record. Missing trailing values are filled with the zero
    /// value of their field; surplus values are dropped.
    pub fn new(ty: TypeInfo, mut values: Vec<Value>) -> Self {
        let fields = ty.fields();
        values.truncate(fields.len());
        for field in &fields[values.len()..] {
            values.push(field.ty().zero_value());
        }
        Self { ty, values }
    }

    /// Record type.
    pub fn type_info(&self) -> &TypeInfo {
        &self.ty
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.ty.fields().iter().position(|f| f.name() == name)
    }

    /// Field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|i| &self.values[i])
    }

    /// Replaces a field value. Returns false if there is no such field.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.position(name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Moves a field value out, leaving `Nil` behind.
    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.position(name)
            .map(|i| std::mem::take(&mut self.values[i]))
    }

    /// Iterates over `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldInfo, &Value)> {
        self.ty.fields().iter().zip(self.values.iter())
    }

    /// Consumes the record into owned `(field, value)` pairs.
    pub fn into_fields(self) -> Vec<(FieldInfo, Value)> {
        self.ty.fields().iter().cloned().zip(self.values).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_casts() {
        let f64_ty = TypeInfo::primitive(Kind::F64);
        assert_eq!(Value::I32(3).convert_to(&f64_ty), Some(Value::F64(3.0)));

        let u8_ty = TypeInfo::primitive(Kind::U8);
        assert_eq!(Value::I32(300).convert_to(&u8_ty), Some(Value::U8(44)));
        assert_eq!(Value::F64(2.9).convert_to(&u8_ty), Some(Value::U8(2)));
    }

    #[test]
    fn test_named_round_trip() {
        let celsius = TypeInfo::named("Celsius", Kind::F64);
        let named = Value::I32(21).convert_to(&celsius);
        assert_eq!(
            named,
            Some(Value::Named(celsius.clone(), Box::new(Value::F64(21.0))))
        );

        let back = named
            .and_then(|v| v.convert_to(&TypeInfo::primitive(Kind::I64)))
            .map(Value::into_underlying);
        assert_eq!(back, Some(Value::I64(21)));
    }

    #[test]
    fn test_string_does_not_take_numbers() {
        let text = TypeInfo::primitive(Kind::String);
        assert_eq!(Value::I32(65).convert_to(&text), None);
        assert_eq!(
            Value::String("a".into()).convert_to(&text),
            Some(Value::String("a".into()))
        );
    }

    #[test]
    fn test_record_fill_and_access() {
        let ty = TypeInfo::record(
            "Pair",
            vec![
                FieldInfo::new("a", TypeInfo::primitive(Kind::I64)),
                FieldInfo::new("b", TypeInfo::primitive(Kind::String)),
            ],
        );
        let mut record = Record::new(ty, vec![Value::I64(7)]);
        assert_eq!(record.get("a"), Some(&Value::I64(7)));
        assert_eq!(record.get("b"), Some(&Value::String(String::new())));
        assert!(record.set("b", Value::String("x".into())));
        assert!(!record.set("c", Value::Nil));
        assert_eq!(record.take("b"), Some(Value::String("x".into())));
        assert_eq!(record.get("b"), Some(&Value::Nil));
    }

    #[test]
    fn test_pointer_type_info() {
        let ptr = Value::Ptr(Box::new(Value::I32(1)));
        let ty = ptr.type_info();
        assert_eq!(ty.kind(), Kind::Pointer);
        assert_eq!(ty.name(), "Option<i32>");
        assert_eq!(Value::Nil.type_info().kind(), Kind::Any);
    }
}
