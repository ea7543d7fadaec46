//! Unit tests for the wire contract.
