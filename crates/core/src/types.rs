//! Runtime type descriptors.
//!
//! A [`TypeInfo`] describes the shape of a value well enough for the
//! converter to decide whether two types are identical, convertible or
//! assignable. Scalars carry their underlying [`Kind`] plus a name, which
//! differs from the builtin name for newtypes registered with
//! [`impl_newtype!`](crate::impl_newtype).

use crate::value::{Record, Value};
use std::borrow::Cow;
use std::fmt;

/// Underlying kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`.
    Bool,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `isize`.
    Isize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `usize`.
    Usize,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// `String`.
    String,
    /// Record with named fields.
    Record,
    /// Nullable reference to a value of the element type.
    Pointer,
    /// Dynamic container that may hold any value.
    Any,
    /// Sequence of dynamic values.
    Seq,
    /// Anything the converter cannot look into.
    Opaque,
}

impl Kind {
    /// Returns true for signed and unsigned integer kinds.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Kind::I8
                | Kind::I16
                | Kind::I32
                | Kind::I64
                | Kind::Isize
                | Kind::U8
                | Kind::U16
                | Kind::U32
                | Kind::U64
                | Kind::Usize
        )
    }

    /// Returns true for floating point kinds.
    pub fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    /// Returns true for every integer or float kind.
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Returns true for kinds that hold text.
    pub fn is_textual(self) -> bool {
        self == Kind::String
    }

    /// Returns true for kinds that can back a named scalar.
    pub fn is_scalar(self) -> bool {
        self == Kind::Bool || self.is_numeric() || self.is_textual()
    }

    /// Rust spelling of the builtin type for scalar kinds.
    pub fn builtin_name(self) -> Option<&'static str> {
        let name = match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::String => "String",
            Kind::Record | Kind::Pointer | Kind::Any | Kind::Seq | Kind::Opaque => return None,
        };
        Some(name)
    }
}

/// A named field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    name: Cow<'static, str>,
    ty: TypeInfo,
}

impl FieldInfo {
    /// Creates a field descriptor.
    pub fn new(name: impl Into<Cow<'static, str>>, ty: TypeInfo) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Field name.
    /// Type name as written in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field type.
    pub fn ty(&self) -> &TypeInfo {
        &self.ty
    }
}

/// Describes a type at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    name: Cow<'static, str>,
    kind: Kind,
    fields: Vec<FieldInfo>,
    elem: Option<Box<TypeInfo>>,
}

impl TypeInfo {
    fn bare(name: impl Into<Cow<'static, str>>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            elem: None,
        }
    }

    /// Builtin scalar type. Non-scalar kinds get an opaque descriptor.
    pub fn primitive(kind: Kind) -> Self {
        match kind.builtin_name() {
            Some(name) => Self::bare(name, kind),
            None => Self::opaque(format!("{:?}", kind)),
        }
    }

    /// Named scalar backed by `kind`.
    pub fn named(name: impl Into<Cow<'static, str>>, kind: Kind) -> Self {
        if kind.is_scalar() {
            Self::bare(name, kind)
        } else {
            Self::opaque(name)
        }
    }

    /// Record type with the given ordered fields.
    pub fn record(name: impl Into<Cow<'static, str>>, fields: Vec<FieldInfo>) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Record,
            fields,
            elem: None,
        }
    }

    /// Nullable reference to `elem`.
    pub fn pointer(elem: TypeInfo) -> Self {
        Self {
            name: format!("Option<{}>", elem.name).into(),
            kind: Kind::Pointer,
            fields: Vec::new(),
            elem: Some(Box::new(elem)),
        }
    }

    /// The dynamic "any" type.
    pub fn any() -> Self {
        Self::bare("Value", Kind::Any)
    }

    /// Sequence of dynamic values.
    pub fn seq() -> Self {
        Self {
            name: "Vec<Value>".into(),
            kind: Kind::Seq,
            fields: Vec::new(),
            elem: Some(Box::new(Self::any())),
        }
    }

    /// A type the converter treats as a black box.
    pub fn opaque(name: impl Into<Cow<'static, str>>) -> Self {
        Self::bare(name, Kind::Opaque)
    }

    /// Type name as written in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Ordered fields; empty for anything but records.
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Looks a record field up by name.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Element type of pointers and sequences.
    pub fn elem(&self) -> Option<&TypeInfo> {
        self.elem.as_deref()
    }

    /// True for scalars whose name is not the builtin one.
    pub fn is_named_scalar(&self) -> bool {
        self.kind.is_scalar() && self.kind.builtin_name() != Some(self.name())
    }

    /// Identical layout ignoring the outer type name.
    ///
    /// Scalars match on kind, records on field names and identical field
    /// types, pointers and sequences on their element types.
    pub fn same_underlying(&self, other: &TypeInfo) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match self.kind {
            Kind::Record => {
                self.fields.len() == other.fields.len()
                    && self
                        .fields
                        .iter()
                        .zip(&other.fields)
                        .all(|(a, b)| a.name == b.name && a.ty == b.ty)
            }
            Kind::Pointer | Kind::Seq => match (self.elem(), other.elem()) {
                (Some(a), Some(b)) => a.same_underlying(b),
                _ => false,
            },
            Kind::Opaque => self == other,
            _ => true,
        }
    }

    /// Whether a value of this type may be used as `dest` without conversion.
    pub fn is_assignable_to(&self, dest: &TypeInfo) -> bool {
        self == dest || dest.kind == Kind::Any
    }

    /// Whether a value of this type can be converted into `dest`.
    pub fn is_convertible_to(&self, dest: &TypeInfo) -> bool {
        (self.kind.is_numeric() && dest.kind.is_numeric()) || self.same_underlying(dest)
    }

    /// Zero value of this type.
    pub fn zero_value(&self) -> Value {
        let scalar = match self.kind {
            Kind::Bool => Value::Bool(false),
            Kind::I8 => Value::I8(0),
            Kind::I16 => Value::I16(0),
            Kind::I32 => Value::I32(0),
            Kind::I64 => Value::I64(0),
            Kind::Isize => Value::Isize(0),
            Kind::U8 => Value::U8(0),
            Kind::U16 => Value::U16(0),
            Kind::U32 => Value::U32(0),
            Kind::U64 => Value::U64(0),
            Kind::Usize => Value::Usize(0),
            Kind::F32 => Value::F32(0.0),
            Kind::F64 => Value::F64(0.0),
            Kind::String => Value::String(String::new()),
            Kind::Record => {
                let values = self.fields.iter().map(|f| f.ty.zero_value()).collect();
                return Value::Record(Record::new(self.clone(), values));
            }
            Kind::Pointer | Kind::Any | Kind::Seq | Kind::Opaque => return Value::Nil,
        };
        scalar.retag(self)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
