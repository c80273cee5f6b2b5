//! Integration tests for the collapse verification corpus.
//!
//! The tests live in `tests/`; this crate exists to give them a workspace
//! member to hang off.
