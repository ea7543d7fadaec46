//! Error classification and HTTP status mapping.

use crate::task::services::TaskLifecycleError;
use serde::{Deserialize, Serialize};

/// Stable error classification surfaced on the wire.
///
/// The boundary layer maps each kind to a status code via
/// [`ErrorKind::status_code`]; success codes are fixed by operation
/// (create responds 201, delete responds 204, everything else 200).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or out-of-range input; user-correctable.
    InvalidInput,
    /// Identity or ownership mismatch; path-level and resource-level causes
    /// are not distinguished here.
    Forbidden,
    /// No record for the identifier within the owner's space.
    NotFound,
    /// Credential invalid or expired.
    Unauthorized,
    /// Opaque internal failure.
    Internal,
}

impl ErrorKind {
    /// Returns the HTTP status code for this error kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::InvalidInput => 422,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Unauthorized => 401,
            Self::Internal => 500,
        }
    }
}

impl From<&TaskLifecycleError> for ErrorKind {
    fn from(err: &TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(_) => Self::InvalidInput,
            TaskLifecycleError::Forbidden(_) => Self::Forbidden,
            TaskLifecycleError::NotFound(_) => Self::NotFound,
            TaskLifecycleError::Repository(_) => Self::Internal,
        }
    }
}
