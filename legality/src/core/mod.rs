//! Deterministic, pure state shared by the legality pipeline.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod context;
pub mod encounter;
pub mod transition;
pub mod types;
