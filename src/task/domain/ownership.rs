//! Ownership guard for task access decisions.

use super::OwnerId;
use thiserror::Error;

/// Reasons an access decision denies a request.
///
/// The two causes are kept distinct internally for diagnostics, but the
/// boundary layer surfaces both uniformly as a forbidden response. Note that
/// denying with a resource-level mismatch confirms to the caller that the
/// task exists; this mirrors the upstream service behaviour.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessDenied {
    /// The owner declared in the request path does not match the verified
    /// identity.
    #[error("identity mismatch: path owner does not match verified identity")]
    IdentityMismatch,

    /// The loaded record belongs to a different owner than the verified
    /// identity.
    #[error("resource ownership mismatch: task belongs to another owner")]
    ResourceOwnershipMismatch,
}

/// Decides whether a request may act on a task resource.
///
/// The path-level check compares the owner segment declared in the request
/// target against the verified identity and runs before any store access.
/// The resource-level check, supplied only for operations addressing an
/// existing record, compares the stored owner against the verified identity
/// and defends against identifier guessing across users.
///
/// Pure decision function; no side effects.
///
/// # Errors
///
/// Returns [`AccessDenied::IdentityMismatch`] on a path-level mismatch and
/// [`AccessDenied::ResourceOwnershipMismatch`] on a resource-level mismatch.
pub fn authorize(
    declared_owner: &str,
    verified_identity: &str,
    resource_owner: Option<&OwnerId>,
) -> Result<(), AccessDenied> {
    if declared_owner != verified_identity {
        return Err(AccessDenied::IdentityMismatch);
    }

    if let Some(owner) = resource_owner
        && owner.as_str() != verified_identity
    {
        return Err(AccessDenied::ResourceOwnershipMismatch);
    }

    Ok(())
}
