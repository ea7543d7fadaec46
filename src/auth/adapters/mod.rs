//! Adapter implementations of the credential verification port.

pub mod memory;
