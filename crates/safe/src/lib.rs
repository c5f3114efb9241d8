//! # Toolkit Safe
//!
//! Toolkit operations that report every failure as an explicit error.
//! Nothing in this crate panics on bad input.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use toolkit_safe::{convert_slice, exec_template, rand_int};
//!
//! let wide = convert_slice(&[1i32, 2, 3][..], &0f64).unwrap();
//! assert_eq!(wide, vec![1.0, 2.0, 3.0]);
//!
//! assert!(rand_int(5i32, 5).is_err());
//!
//! let mut vars = BTreeMap::new();
//! vars.insert("name", "Ada");
//! assert_eq!(exec_template("Hi {{ name }}", &vars).unwrap(), "Hi Ada");
//! ```

pub mod error;
pub mod json;
pub mod random;
pub mod retry;
pub mod template;
pub mod text;
pub mod values;

pub use error::{ToolError, ToolResult};
pub use json::{jsonify, objectify};
pub use random::rand_int;
pub use retry::retry_func;
pub use template::exec_template;
pub use text::strtr;
pub use values::{is_in, is_zero, non_zero, some_if_non_zero, value_or_zero, zero, zero_val};

pub use toolkit_core::{convert_slice, convert_value_slice, ConvertError, ConvertResult, Varchar};
