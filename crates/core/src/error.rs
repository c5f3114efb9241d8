use std::fmt;
use thiserror::Error;

/// Why a single element could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionFailure {
    /// No conversion, assignment or record copy applies.
    NoStrategy,
    /// Numeric or boolean source aimed at a textual destination.
    TextualTarget,
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionFailure::NoStrategy => f.write_str(
                "no direct conversion, assignability, or compatible struct field copy strategy found",
            ),
            ConversionFailure::TextualTarget => {
                f.write_str("direct conversion from numeric/bool type to string is not supported")
            }
        }
    }
}

/// Slice conversion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The source slice is absent.
    #[error("source slice is nil")]
    NilSource,

    /// The dynamic source is not a sequence.
    #[error("source value of type {found} is not a slice")]
    NotASlice {
        /// Type name of the source.
        found: String,
    },

    /// An element has no way into the destination type.
    #[error("cannot convert element at index {index} from type {from} to {to}: {reason}")]
    ElementConversion {
        /// Position of the element in the source.
        index: usize,
        /// Type name of the element.
        from: String,
        /// Type name of the destination.
        to: String,
        /// Why no strategy applied.
        reason: ConversionFailure,
    },

    /// A shared record field has types that are not assignable.
    #[error(
        "cannot convert element at index {index}: struct field '{field}' type mismatch, \
         source type {from}, destination type {to}, not assignable"
    )]
    FieldTypeMismatch {
        /// Position of the element in the source.
        index: usize,
        /// Name of the mismatched field.
        field: String,
        /// Field type in the source record.
        from: String,
        /// Field type in the destination record.
        to: String,
    },
}

impl ConvertError {
    /// Index of the failing element, if the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ConvertError::ElementConversion { index, .. }
            | ConvertError::FieldTypeMismatch { index, .. } => Some(*index),
            ConvertError::NilSource | ConvertError::NotASlice { .. } => None,
        }
    }

    pub(crate) fn element(
        index: usize,
        from: impl fmt::Display,
        to: impl fmt::Display,
        reason: ConversionFailure,
    ) -> Self {
        ConvertError::ElementConversion {
            index,
            from: from.to_string(),
            to: to.to_string(),
            reason,
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
