use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// A resolved value could not be coerced into its field's declared kind.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    #[error("field {field} ({source})")]
    Int {
        field: &'static str,
        source: ParseIntError,
    },

    #[error("field {field} ({source})")]
    Float {
        field: &'static str,
        source: ParseFloatError,
    },

    #[error("field {field} (invalid boolean '{value}')")]
    Bool { field: &'static str, value: String },
}

impl BindError {
    /// Name of the field that failed to bind.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Int { field, .. } | Self::Float { field, .. } | Self::Bool { field, .. } => *field,
        }
    }
}
