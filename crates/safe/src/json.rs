//! JSON wrap and unwrap helpers.

use crate::error::{ToolError, ToolResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use toolkit_core::Varchar;

/// Serializes `value` into a JSON [`Varchar`].
pub fn jsonify<T: Serialize + ?Sized>(value: &T) -> ToolResult<Varchar> {
    serde_json::to_string(value)
        .map(Varchar::from)
        .map_err(ToolError::Marshal)
}

/// Deserializes JSON text or bytes into a `T`.
pub fn objectify<T, I>(input: I) -> ToolResult<T>
where
    T: DeserializeOwned,
    I: AsRef<[u8]>,
{
    serde_json::from_slice(input.as_ref()).map_err(ToolError::Unmarshal)
}
