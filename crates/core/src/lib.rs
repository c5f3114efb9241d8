//! # Toolkit Core
//!
//! Shared foundation of the safe and loose toolkit APIs.
//!
//! ## Features
//!
//! - **Type descriptors**: [`TypeInfo`] and [`Kind`] describe values at runtime
//! - **Dynamic values**: [`Value`] and [`Record`], with [`Reflect`] and
//!   [`FromValue`] bridging static Rust types
//! - **Slice conversion**: [`convert_slice`] and [`convert_value_slice`]
//! - **Configuration**: [`RetryPolicy`]
//! - **Strings**: [`Varchar`], a JSON-friendly string
//!
//! ## Example
//!
//! ```rust
//! use toolkit_core::{convert_slice, impl_record};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Row { id: i64, name: String, score: f64 }
//! impl_record!(Row { id, name, score });
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Summary { id: i64, name: String }
//! impl_record!(Summary { id, name });
//!
//! let rows = vec![Row { id: 1, name: "one".into(), score: 0.5 }];
//! let summaries = convert_slice(rows.as_slice(), &Summary::default()).unwrap();
//! assert_eq!(summaries, vec![Summary { id: 1, name: "one".into() }]);
//! ```

#![warn(missing_docs)]

/// Retry configuration
pub mod config;
/// Element-wise slice conversion
pub mod convert;
/// Conversion error types
pub mod error;
/// Static type reflection
pub mod reflect;
/// Runtime type descriptors
pub mod types;
/// Dynamic values
pub mod value;
/// JSON-friendly string type
pub mod varchar;

pub use config::{RetryPolicy, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_SLEEP_MS};
pub use convert::{convert_slice, convert_value_slice};
pub use error::{ConversionFailure, ConvertError, ConvertResult};
pub use reflect::{FromValue, Reflect};
pub use types::{FieldInfo, Kind, TypeInfo};
pub use value::{Record, Value};
pub use varchar::Varchar;
