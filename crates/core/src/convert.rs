//! Element-wise slice conversion.
//!
//! [`convert_slice`] is the statically typed entry point: source and
//! destination element types are known at the call site and only the
//! per-element conversion runs on [`Value`]s. [`convert_value_slice`] is
//! the dynamically typed fallback for heterogeneous data, where the source
//! itself may turn out not to be a sequence at all.
//!
//! Each element is unwrapped (null references become the destination zero
//! value, pointers are dereferenced, dynamic containers are opened) and
//! then converted, assigned, or copied field by field. The first failure
//! aborts the whole call.

use crate::error::{ConversionFailure, ConvertError, ConvertResult};
use crate::reflect::{FromValue, Reflect};
use crate::types::{Kind, TypeInfo};
use crate::value::{Record, Value};
use log::debug;

/// Converts every element of `source` into the type of `sample`.
///
/// `None` stands for a nil source and is an error; an empty slice yields
/// an empty vector. Only the type of `sample` is used.
///
/// ```
/// use toolkit_core::convert_slice;
///
/// let floats = convert_slice(&[1i32, 2, 3][..], &0f64).unwrap();
/// assert_eq!(floats, vec![1.0, 2.0, 3.0]);
/// assert!(convert_slice(None::<&[i32]>, &0f64).is_err());
/// ```
pub fn convert_slice<'a, T, Y, S>(source: S, _sample: &Y) -> ConvertResult<Vec<Y>>
where
    S: Into<Option<&'a [T]>>,
    T: Reflect + 'a,
    Y: Reflect + FromValue + Default,
{
    let source = source.into().ok_or(ConvertError::NilSource)?;
    let dest = Y::type_info();

    let mut converted = Vec::with_capacity(source.len());
    for (index, element) in source.iter().enumerate() {
        let item = match convert_element(index, element.to_value(), &dest)? {
            None => Y::default(),
            Some(value) => {
                let from = value.type_info();
                Y::from_value(value).ok_or_else(|| {
                    ConvertError::element(index, from, &dest, ConversionFailure::NoStrategy)
                })?
            }
        };
        converted.push(item);
    }
    Ok(converted)
}

/// Dynamically typed variant of [`convert_slice`].
///
/// `source` must be a [`Value::Seq`]; [`Value::Nil`] is a nil source and
/// anything else is not a slice. The destination type is the runtime type
/// of `sample`. Null elements become the zero value of that type.
pub fn convert_value_slice(source: &Value, sample: &Value) -> ConvertResult<Vec<Value>> {
    let elements = match source {
        Value::Seq(elements) => elements,
        Value::Nil => return Err(ConvertError::NilSource),
        other => {
            return Err(ConvertError::NotASlice {
                found: other.type_info().to_string(),
            })
        }
    };
    let dest = sample.type_info();

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            Ok(convert_element(index, element.clone(), &dest)?
                .unwrap_or_else(|| dest.zero_value()))
        })
        .collect()
}

/// Converts a single element. `Ok(None)` means the element was null.
fn convert_element(index: usize, element: Value, dest: &TypeInfo) -> ConvertResult<Option<Value>> {
    let Some(value) = unwrap_element(element) else {
        return Ok(None);
    };
    let from = value.type_info();

    if (from.kind().is_numeric() || from.kind() == Kind::Bool) && dest.kind().is_textual() {
        debug!("element {} of type {} refused as {}", index, from, dest);
        return Err(ConvertError::element(
            index,
            &from,
            dest,
            ConversionFailure::TextualTarget,
        ));
    }

    if from.is_convertible_to(dest) {
        if let Some(converted) = value.clone().convert_to(dest) {
            return Ok(Some(converted));
        }
    }

    if from.is_assignable_to(dest) {
        return Ok(Some(value));
    }

    if let (Value::Record(record), Kind::Record) = (&value, dest.kind()) {
        return copy_fields(index, record, dest).map(|r| Some(Value::Record(r)));
    }

    Err(ConvertError::element(
        index,
        &from,
        dest,
        ConversionFailure::NoStrategy,
    ))
}

/// Strips null references, pointers and dynamic containers: one container
/// layer, then one pointer, then the container the pointer may lead to.
fn unwrap_element(element: Value) -> Option<Value> {
    let mut value = open_dyn(element);
    if let Value::Ptr(inner) = value {
        value = open_dyn(*inner);
    }
    match value {
        Value::Nil => None,
        value => Some(value),
    }
}

fn open_dyn(value: Value) -> Value {
    match value {
        Value::Dyn(inner) => *inner,
        other => other,
    }
}

/// Copies same-named fields of `source` into a zero record of `dest`.
fn copy_fields(index: usize, source: &Record, dest: &TypeInfo) -> ConvertResult<Record> {
    let mut target = match dest.zero_value() {
        Value::Record(record) => record,
        _ => {
            return Err(ConvertError::element(
                index,
                source.type_info(),
                dest,
                ConversionFailure::NoStrategy,
            ))
        }
    };

    for (field, value) in source.iter() {
        let Some(slot) = dest.field(field.name()) else {
            continue;
        };
        if !field.ty().is_assignable_to(slot.ty()) {
            return Err(ConvertError::FieldTypeMismatch {
                index,
                field: field.name().to_string(),
                from: field.ty().to_string(),
                to: slot.ty().to_string(),
            });
        }
        target.set(field.name(), value.clone());
    }
    Ok(target)
}
