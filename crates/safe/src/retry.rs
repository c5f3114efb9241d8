use std::fmt::Display;
use std::time::Duration;
use toolkit_core::RetryPolicy;

/// Calls `f` up to `attempts + 1` times, sleeping `sleep` between calls,
/// and returns the last error if none succeeds. A negative `attempts`
/// retries until success.
pub fn retry_func<N, E, F>(attempts: N, sleep: Duration, f: F) -> Result<(), E>
where
    N: Into<i64>,
    E: Display,
    F: FnMut() -> Result<(), E>,
{
    RetryPolicy::new(attempts.into(), sleep).retry(f)
}
