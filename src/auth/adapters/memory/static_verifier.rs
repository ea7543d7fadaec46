//! Static token verifier for tests and local development.

use crate::auth::ports::{AuthError, TokenVerifier, VerifiedSubject};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// Token verifier backed by a fixed credential table.
///
/// Each registered credential maps to exactly one subject; credentials can
/// additionally be marked expired to exercise the expiry path in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    subjects: HashMap<String, VerifiedSubject>,
    expired: HashSet<String>,
}

impl StaticTokenVerifier {
    /// Creates a verifier that rejects every credential.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a credential resolving to the given subject.
    #[must_use]
    pub fn with_token(mut self, credential: impl Into<String>, subject: impl Into<String>) -> Self {
        self.subjects
            .insert(credential.into(), VerifiedSubject::new(subject));
        self
    }

    /// Registers a credential that verifies as expired.
    #[must_use]
    pub fn with_expired_token(mut self, credential: impl Into<String>) -> Self {
        self.expired.insert(credential.into());
        self
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, credential: &str) -> Result<VerifiedSubject, AuthError> {
        if self.expired.contains(credential) {
            return Err(AuthError::ExpiredCredential);
        }

        self.subjects
            .get(credential)
            .cloned()
            .ok_or(AuthError::InvalidCredential)
    }
}
