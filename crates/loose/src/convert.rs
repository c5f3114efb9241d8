use crate::bridge::CatchableError;
use toolkit_core::{FromValue, Reflect, Value};

/// Converts every element of `source` to the type of `sample`, raising a
/// catchable panic on the first element that cannot be converted.
///
/// ```rust
/// let floats = toolkit_loose::convert_slice(&[1i32, 2][..], &0f64);
/// assert_eq!(floats, vec![1.0, 2.0]);
///
/// let err = toolkit_loose::catch(|| toolkit_loose::convert_slice(&[1i32][..], &String::new()));
/// assert!(err.unwrap_err().message().starts_with("ConvertSlice failed: "));
/// ```
pub fn convert_slice<'a, T, Y, S>(source: S, sample: &Y) -> Vec<Y>
where
    S: Into<Option<&'a [T]>>,
    T: Reflect + 'a,
    Y: Reflect + FromValue + Default,
{
    match toolkit_safe::convert_slice(source, sample) {
        Ok(converted) => converted,
        Err(err) => {
            CatchableError::with_source(format!("ConvertSlice failed: {}", err), err).raise()
        }
    }
}

/// Dynamic counterpart of [`convert_slice`].
pub fn convert_value_slice(source: &Value, sample: &Value) -> Vec<Value> {
    match toolkit_safe::convert_value_slice(source, sample) {
        Ok(converted) => converted,
        Err(err) => {
            CatchableError::with_source(format!("ConvertSlice failed: {}", err), err).raise()
        }
    }
}
