//! Zero-value and membership helpers.
//!
//! A type's zero value is its [`Default`].

/// Reports whether `needle` occurs in `haystack`.
pub fn is_in<T: PartialEq>(needle: &T, haystack: &[T]) -> bool {
    haystack.contains(needle)
}

/// Returns the first value that is not zero, or zero if there is none.
pub fn non_zero<T>(values: &[T]) -> T
where
    T: Default + PartialEq + Clone,
{
    values
        .iter()
        .find(|v| !is_zero(*v))
        .cloned()
        .unwrap_or_default()
}

pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

pub fn zero<T: Default>() -> T {
    T::default()
}

/// Returns the zero value of the type of `value`.
pub fn zero_val<T: Default>(_value: &T) -> T {
    T::default()
}

/// Dereferences an optional value, yielding zero for `None`.
pub fn value_or_zero<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

/// Wraps `value` unless it is zero.
pub fn some_if_non_zero<T: Default + PartialEq>(value: T) -> Option<T> {
    if is_zero(&value) {
        None
    } else {
        Some(value)
    }
}
