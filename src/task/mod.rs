//! Task lifecycle management for Taskdesk.
//!
//! This module implements the ownership-enforced task resource: creating
//! tasks for a verified identity, listing them with completion filtering,
//! and fetching, updating, toggling, and deleting individual tasks with a
//! uniform authorization sequence. Every operation checks the path-declared
//! owner against the verified identity before any store access, and
//! single-resource operations re-check ownership against the loaded record.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
