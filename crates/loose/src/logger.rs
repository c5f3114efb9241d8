//! Pluggable process-wide logger.
//!
//! Every loose helper reports through the logger installed with
//! [`set_logger`]. The default forwards to the `log` crate; installing
//! `None` silences the toolkit entirely.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Minimal line-oriented logging interface.
pub trait StdLogger: Send + Sync {
    fn println(&self, message: &str);

    fn printf(&self, args: fmt::Arguments<'_>);

    fn print(&self, message: &str);

    /// Logs `message` and panics with it.
    fn panicln(&self, message: &str) -> !;
}

/// Forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl StdLogger for LogFacade {
    fn println(&self, message: &str) {
        log::info!("{}", message);
    }

    fn printf(&self, args: fmt::Arguments<'_>) {
        log::info!("{}", args);
    }

    fn print(&self, message: &str) {
        log::info!("{}", message);
    }

    fn panicln(&self, message: &str) -> ! {
        log::error!("{}", message);
        panic!("{}", message);
    }
}

static LOGGER: Lazy<RwLock<Option<Arc<dyn StdLogger>>>> =
    Lazy::new(|| RwLock::new(Some(Arc::new(LogFacade))));

/// Installs the toolkit logger. `None` disables logging.
pub fn set_logger(logger: Option<Box<dyn StdLogger>>) {
    *LOGGER.write() = logger.map(Arc::from);
}

/// The lock is released before the logger runs, so a logger may call
/// [`set_logger`] itself.
fn current() -> Option<Arc<dyn StdLogger>> {
    LOGGER.read().clone()
}

/// Runs `f` against the installed logger, if any.
pub fn with_logger<F: FnOnce(&dyn StdLogger)>(f: F) {
    if let Some(logger) = current() {
        f(logger.as_ref());
    }
}

pub fn log(message: impl fmt::Display) {
    with_logger(|l| l.println(&message.to_string()));
}

/// Logs the `Debug` form of each object on a single line.
pub fn log_deep(objects: &[&dyn fmt::Debug]) {
    with_logger(|l| l.println(&deep_line(None, objects)));
}

/// Backs the [`console!`](crate::console) macro.
#[doc(hidden)]
pub fn console(prefix: &str, objects: &[&dyn fmt::Debug]) {
    with_logger(|l| l.println(&deep_line(Some(prefix), objects)));
}

/// Logs `err`, preceded by `msgs` joined with `": "`.
pub fn log_error(err: &dyn fmt::Display, msgs: &[&str]) {
    with_logger(|l| l.println(&error_line(err, msgs)));
}

/// Logs `err` like [`log_error`] and panics. Does nothing while logging is
/// disabled.
pub fn panic_on_error(err: &dyn fmt::Display, msgs: &[&str]) {
    if let Some(logger) = current() {
        logger.panicln(&error_line(err, msgs));
    }
}

fn error_line(err: &dyn fmt::Display, msgs: &[&str]) -> String {
    if msgs.is_empty() {
        err.to_string()
    } else {
        format!("{}: {}", msgs.join(": "), err)
    }
}

fn deep_line(prefix: Option<&str>, objects: &[&dyn fmt::Debug]) -> String {
    let mut parts: Vec<String> = prefix.map(str::to_owned).into_iter().collect();
    parts.extend(objects.iter().map(|obj| format!("{:?}", obj)));
    parts.join(" ").replace('\r', "\\r").replace('\n', "\\n")
}

/// Logs its arguments in `Debug` form, prefixed with the calling module
/// and line.
///
/// ```rust
/// let point = (3, 4);
/// toolkit_loose::console!("point", point);
/// ```
#[macro_export]
macro_rules! console {
    ($($obj:expr),* $(,)?) => {
        $crate::logger::console(
            &format!("[{}:{}]>", module_path!(), line!()),
            &[$(&$obj as &dyn ::std::fmt::Debug),*],
        )
    };
}
