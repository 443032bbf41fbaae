//! Error types for typed-model construction.

use thiserror::Error;

use crate::base::NameError;

/// Errors raised while binding a tree to the typed survey model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A mandatory field is absent from the input tree.
    #[error("[{record}] missing required field `{field}`")]
    MissingField { record: &'static str, field: String },

    /// The input tree carries keys the record does not declare.
    #[error("[{record}] unexpected field(s): {}", fields.join(", "))]
    UnexpectedField {
        record: &'static str,
        fields: Vec<String>,
    },

    /// A value could not be coerced to the field's type.
    #[error("[{record}] invalid value for `{field}`: {value:?} ({reason})")]
    InvalidValue {
        record: &'static str,
        field: String,
        value: String,
        reason: String,
    },

    /// Values that must be unique within a collection repeat.
    #[error("[{collection}] duplicate value found for `{field}`: [{}]", values.join(", "))]
    DuplicateValue {
        collection: &'static str,
        field: &'static str,
        values: Vec<String>,
    },

    /// A name failed validation or registration.
    #[error(transparent)]
    Name(#[from] NameError),

    /// A string does not spell any variant of a closed enumeration.
    #[error("unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl ModelError {
    /// Create an invalid value error.
    pub fn invalid_value(
        record: &'static str,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            record,
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing_field(record: &'static str, field: impl Into<String>) -> Self {
        Self::MissingField {
            record,
            field: field.into(),
        }
    }

    /// True for missing/unexpected fields and failed coercions.
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::UnexpectedField { .. } | Self::InvalidValue { .. }
        )
    }
}
