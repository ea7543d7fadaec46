//! In-memory adapter for the credential verification port.

mod static_verifier;

pub use static_verifier::StaticTokenVerifier;
