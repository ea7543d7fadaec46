//! Step definitions for task lifecycle BDD scenarios.

mod given;
mod when;
