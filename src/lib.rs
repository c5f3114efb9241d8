//! # Toolkit: General Purpose Helpers
//!
//! Small helpers that come in two flavours:
//!
//! - [`safe`] - every failure is returned as an explicit error
//! - [`loose`] - failures are logged and muted, or raised as catchable panics
//!
//! Both share the [`core`] crate, home of the slice converter: it turns a
//! slice of one type into a vector of another by numeric conversion, plain
//! assignment, or copying the fields two records share.
//!
//! ## Quick Start
//!
//! ```rust
//! use toolkit::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Employee { id: i64, name: String, salary: f64 }
//! impl_record!(Employee { id, name, salary });
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Badge { id: i64, name: String }
//! impl_record!(Badge { id, name });
//!
//! let staff = vec![Employee { id: 7, name: "Grace".into(), salary: 1.0 }];
//! let badges = convert_slice(staff.as_slice(), &Badge::default())?;
//! assert_eq!(badges, vec![Badge { id: 7, name: "Grace".into() }]);
//!
//! let caught = catch(|| toolkit::loose::convert_slice(&[1u8][..], &String::new()));
//! assert!(caught.is_err());
//! # Ok::<(), ConvertError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`toolkit_core`] - type descriptors, dynamic values, the converter, retry config
//! - [`toolkit_safe`] - `Result`-returning helpers
//! - [`toolkit_loose`] - logger shim, `must`/`catch` bridging, muting wrappers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Re-export all public APIs from member crates
pub use toolkit_core as core;
pub use toolkit_loose as loose;
pub use toolkit_safe as safe;

pub use toolkit_core::{impl_newtype, impl_record};
pub use toolkit_loose::console;

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::core::{
        impl_newtype, impl_record, ConvertError, ConvertResult, FromValue, Reflect, RetryPolicy,
        TypeInfo, Value, Varchar,
    };
    pub use crate::loose::{catch, must, must_return, mute, CatchableError};
    pub use crate::safe::{convert_slice, convert_value_slice, ToolError, ToolResult};
}

/// Toolkit library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
