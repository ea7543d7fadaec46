//! Transport-agnostic wire contract for the task service.
//!
//! The web layer itself (routing, CORS, connection handling) lives outside
//! this crate, but the shapes it exchanges and the status codes it maps
//! errors onto are owned here:
//!
//! - Request and response bodies in [`wire`]
//! - Error classification and status mapping in [`status`]

pub mod status;
pub mod wire;

pub use status::ErrorKind;
pub use wire::{CreateTaskBody, ErrorBody, TaskResponse, UpdateTaskBody};

#[cfg(test)]
mod tests;
