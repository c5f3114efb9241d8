//! Loose forms of the safe operations: failures are logged and muted, or
//! raised as catchable panics.

use crate::bridge::CatchableError;
use crate::logger;
use num_traits::{PrimInt, Signed};
use rand::distributions::uniform::SampleUniform;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::time::Duration;
use toolkit_core::{RetryPolicy, Varchar};

/// Random integer in `[min, max)`. Panics with a [`CatchableError`] when
/// the range is empty or the OS generator fails.
pub fn rand_int<N>(min: N, max: N) -> N
where
    N: PrimInt + Signed + SampleUniform + Display,
{
    match toolkit_safe::rand_int(min, max) {
        Ok(n) => n,
        Err(err) => CatchableError::from_error(err).raise(),
    }
}

/// Calls `f` up to `attempts + 1` times, logging every failure that is
/// retried. A negative `attempts` retries until success.
pub fn retry_func<N, E, F>(attempts: N, sleep: Duration, f: F) -> Result<(), E>
where
    N: Into<i64>,
    E: Display,
    F: FnMut() -> Result<(), E>,
{
    RetryPolicy::new(attempts.into(), sleep).retry_with(f, |err, _| {
        logger::log_error(err, &["retrying after error"]);
    })
}

/// JSON form of `value`, or an empty [`Varchar`] if it cannot be
/// serialized.
pub fn jsonify<T: Serialize + ?Sized>(value: &T) -> Varchar {
    toolkit_safe::jsonify(value).unwrap_or_else(|err| {
        logger::log_error(&err, &[]);
        Varchar::default()
    })
}

/// Parses JSON text or bytes, yielding `None` if it does not fit `T`.
pub fn objectify<T, I>(input: I) -> Option<T>
where
    T: DeserializeOwned,
    I: AsRef<[u8]>,
{
    toolkit_safe::objectify(input)
        .map_err(|err| logger::log_error(&err, &[]))
        .ok()
}

/// Renders `template` against `vars`, or returns an empty string on any
/// failure, including a reference to a missing variable.
pub fn exec_template<T: Serialize + ?Sized>(template: &str, vars: &T) -> String {
    toolkit_safe::exec_template(template, vars).unwrap_or_default()
}
