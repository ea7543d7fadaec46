//! Unit tests for credential verification.
