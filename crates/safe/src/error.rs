use thiserror::Error;
use toolkit_core::ConvertError;

/// Errors returned by the safe toolkit API
#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("min ({min}) must be less than max ({max})")]
    InvalidRange { min: String, max: String },

    #[error("failed to generate random number: {0}")]
    Random(#[from] rand::Error),

    #[error("failed to marshal to JSON: {0}")]
    Marshal(#[source] serde_json::Error),

    #[error("failed to unmarshal JSON: {0}")]
    Unmarshal(#[source] serde_json::Error),

    #[error("failed to render template: {0}")]
    Template(#[from] tera::Error),
}

/// Result type for the safe toolkit API
pub type ToolResult<T> = Result<T, ToolError>;
