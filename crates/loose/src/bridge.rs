//! Bridging between `Result` values and catchable panics.
//!
//! [`must`] and friends turn an error into a panic whose payload is a
//! [`CatchableError`]. [`catch`] turns exactly those panics back into an
//! `Err`; any other panic keeps unwinding.

use crate::logger;
use once_cell::sync::Lazy;
use std::any::Any;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Boxed error carried as the source of a [`CatchableError`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Payload of a panic raised by the loose API.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct CatchableError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl CatchableError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps `err`, keeping it as the source.
    pub fn from_error(err: impl Into<BoxError>) -> Self {
        let err = err.into();
        Self {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Uses `message` for display while keeping `err` as the source.
    pub fn with_source(message: impl Into<String>, err: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(err.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error, if any.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }

    /// Raises `self` as a panic that [`catch`] recovers.
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }
}

/// Reports whether `result` holds an error, logging it when `verbose`.
pub fn try_err<T, E: Display>(result: &Result<T, E>, verbose: bool) -> bool {
    match result {
        Ok(_) => false,
        Err(err) => {
            if verbose {
                logger::log_error(err, &[]);
            }
            true
        }
    }
}

/// Panics with a [`CatchableError`] if `result` is an error.
pub fn must<E: Into<BoxError>>(result: Result<(), E>) {
    if let Err(err) = result {
        CatchableError::from_error(err).raise();
    }
}

/// Like [`must`], logging the error before panicking.
pub fn must_verbose<E: Into<BoxError>>(result: Result<(), E>) {
    if let Err(err) = result {
        let err = CatchableError::from_error(err);
        logger::log_error(&err, &[]);
        err.raise();
    }
}

/// Returns the value, or panics with a [`CatchableError`].
pub fn must_return<T, E: Into<BoxError>>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => CatchableError::from_error(err).raise(),
    }
}

/// Discards the error, returning the zero value in its place.
pub fn mute<T: Default, E>(result: Result<T, E>) -> T {
    result.unwrap_or_default()
}

/// Runs `f`, turning a [`CatchableError`] panic into `Err`.
///
/// Panics with any other payload are resumed unchanged.
pub fn catch<T, F: FnOnce() -> T>(f: F) -> Result<T, CatchableError> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<CatchableError>() {
            Ok(err) => Err(*err),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

thread_local! {
    static PANIC_LOCATION: RefCell<Option<String>> = RefCell::new(None);
}

static LOCATION_HOOK: Lazy<()> = Lazy::new(|| {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Some(location) = info.location() {
            let at = format!("{}:{}", location.file(), location.line());
            PANIC_LOCATION.with(|slot| *slot.borrow_mut() = Some(at));
        }
        previous(info);
    }));
});

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(err) = payload.downcast_ref::<CatchableError>() {
        err.to_string()
    } else if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

/// Runs `f`, rerunning it after each panic up to `max_panics` more times.
/// A negative `max_panics` reruns until `f` completes.
///
/// Each panic is logged as `job <id> panics with message: <msg>, <file:line>`.
/// Returns `Ok(())` once a run completes, or the last panic otherwise.
pub fn recoverer<N, F>(max_panics: N, mut f: F, job_id: &str) -> Result<(), CatchableError>
where
    N: Into<i64>,
    F: FnMut(),
{
    Lazy::force(&LOCATION_HOOK);
    let mut remaining: i64 = max_panics.into();
    loop {
        PANIC_LOCATION.with(|slot| slot.borrow_mut().take());
        let payload = match panic::catch_unwind(AssertUnwindSafe(&mut f)) {
            Ok(()) => return Ok(()),
            Err(payload) => payload,
        };

        let location = PANIC_LOCATION
            .with(|slot| slot.borrow_mut().take())
            .unwrap_or_else(|| "unknown location".to_owned());
        let err = CatchableError::new(format!(
            "job {} panics with message: {}, {}",
            job_id,
            panic_message(payload.as_ref()),
            location
        ));
        logger::log_error(&err, &[]);

        if remaining == 0 {
            return Err(err);
        }
        if remaining > 0 {
            remaining -= 1;
        }
    }
}
