//! # Toolkit Loose
//!
//! The forgiving face of the toolkit. Operations here never return a
//! `Result` for failures the caller is not expected to handle: they log
//! and mute them, or raise a catchable panic that [`catch`] turns back
//! into an error.
//!
//! ## Example
//!
//! ```rust
//! use toolkit_loose::{catch, must_return, mute};
//!
//! fn parse(text: &str) -> Result<u16, std::num::ParseIntError> {
//!     text.parse()
//! }
//!
//! assert_eq!(mute(parse("nope")), 0);
//!
//! let caught = catch(|| must_return(parse("70000")));
//! assert!(caught.is_err());
//! ```

pub mod bridge;
pub mod convert;
pub mod logger;
pub mod ops;

pub use bridge::{
    catch, must, must_return, must_verbose, mute, recoverer, try_err, BoxError, CatchableError,
};
pub use convert::{convert_slice, convert_value_slice};
pub use logger::{
    log, log_deep, log_error, panic_on_error, set_logger, with_logger, LogFacade, StdLogger,
};
pub use ops::{exec_template, jsonify, objectify, rand_int, retry_func};

pub use toolkit_core::Varchar;
pub use toolkit_safe::{
    is_in, is_zero, non_zero, some_if_non_zero, strtr, value_or_zero, zero, zero_val,
};
