//! Token verification port.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Subject identity established by the authenticator for one request.
///
/// The boundary layer passes this identity to the task lifecycle service as
/// the verified identity for ownership checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerifiedSubject(String);

impl VerifiedSubject {
    /// Wraps a subject identifier produced by a verifier.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }

    /// Returns the subject identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VerifiedSubject {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for VerifiedSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors returned by credential verification.
///
/// Surfaced to callers as an unauthorized response; the cause detail stays
/// out of the response body.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The credential is malformed, unknown, or fails signature checks.
    #[error("credential is invalid")]
    InvalidCredential,

    /// The credential was valid once but has expired.
    #[error("credential has expired")]
    ExpiredCredential,
}

/// Credential verification contract.
///
/// Implementations are external collaborators; the core never issues or
/// inspects credentials itself.
#[async_trait::async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies a bearer credential and yields the subject it identifies.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] for unknown or malformed
    /// credentials and [`AuthError::ExpiredCredential`] for stale ones.
    async fn verify(&self, credential: &str) -> Result<VerifiedSubject, AuthError>;
}
