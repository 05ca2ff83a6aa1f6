use ordnance_core::location::Location;
use ordnance_core::vehicle::MountError;

use crate::block::{FieldError, ValueType};

/// Broad classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is absent.
    MissingRequiredField,
    /// A field is present but its value is unusable.
    InvalidFieldValue,
    /// A shared collaborator (tech level, transports, equipment) failed.
    ExternalCollaboratorFailure,
}

/// Errors that abort building a vehicle from a data block.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not find {field} block")]
    MissingBlock { field: String },

    #[error("patchwork armor: could not find {field} block for {location}")]
    MissingPatchworkField { location: Location, field: String },

    #[error("invalid movement type: {value}")]
    InvalidMovementType { value: String },

    #[error("incorrect armor array length: expected 5 or 6 values, found {len}")]
    InvalidArmorLength { len: usize },

    #[error("invalid tonnage: {value} (must be a positive number)")]
    InvalidTonnage { value: f64 },

    #[error("unknown engine type code: {code}")]
    UnknownEngineCode { code: i64 },

    #[error("value {value} of field '{field}' is out of range")]
    OutOfRange { field: String, value: i64 },

    #[error("field '{field}' holds {found} values, expected {expected}")]
    FieldType {
        field: String,
        expected: ValueType,
        found: ValueType,
    },

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::MissingBlock { .. } | LoadError::MissingPatchworkField { .. } => {
                ErrorKind::MissingRequiredField
            }
            LoadError::InvalidMovementType { .. }
            | LoadError::InvalidArmorLength { .. }
            | LoadError::InvalidTonnage { .. }
            | LoadError::UnknownEngineCode { .. }
            | LoadError::OutOfRange { .. }
            | LoadError::FieldType { .. } => ErrorKind::InvalidFieldValue,
            LoadError::Collaborator(_) => ErrorKind::ExternalCollaboratorFailure,
        }
    }
}

impl From<FieldError> for LoadError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::Missing { field } => LoadError::MissingBlock { field },
            FieldError::TypeMismatch {
                field,
                expected,
                found,
            } => LoadError::FieldType {
                field,
                expected,
                found,
            },
        }
    }
}

/// Failures raised by the shared collaborators the loader delegates to.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("unrecognized tech level: {value}")]
    UnknownTechLevel { value: String },

    #[error("malformed transporter '{entry}': {reason}")]
    MalformedTransport { entry: String, reason: String },

    #[error("malformed equipment entry '{entry}' in {location}: {reason}")]
    MalformedEquipment {
        location: Location,
        entry: String,
        reason: String,
    },

    #[error("unknown equipment '{name}' in {location}")]
    UnknownEquipment { location: Location, name: String },

    #[error(transparent)]
    Mount(#[from] MountError),
}
