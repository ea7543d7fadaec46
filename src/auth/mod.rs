//! Credential verification for Taskdesk.
//!
//! Token issuance and verification mechanics live outside this crate; the
//! core only consumes a verifier that turns a bearer credential into a
//! verified subject identity or fails. The module follows the same
//! hexagonal layout as [`crate::task`]:
//!
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod ports;

#[cfg(test)]
mod tests;
