//! Taskdesk: per-user task management core.
//!
//! This crate provides the ownership-enforced task lifecycle behind a
//! per-user todo service: authenticated callers create, list, fetch, update,
//! toggle-complete, and delete tasks scoped to their own identity.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, tests, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task aggregate, ownership guard, and lifecycle service
//! - [`auth`]: Token verification port consumed by the boundary layer
//! - [`api`]: Transport-agnostic wire contract and status mapping

pub mod api;
pub mod auth;
pub mod task;
