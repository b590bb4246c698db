//! Shared analysis state for validating captured-creature save records.
//!
//! This crate holds the mutable context a legality pipeline threads through
//! its stages (encounter resolution, move checking, PID/IV reconstruction,
//! evolution-chain derivation). The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic state and transition rules (the
//!   context, the matched-encounter union, the cache-invalidation rule).
//!   No I/O, fully testable in isolation.
//! - **[`record`]**: Boundary traits for the collaborators the pipeline
//!   plugs in (the source record, the evolution-chain derivation service).
//! - **[`report`]**: Side-effecting report rendering and persistence,
//!   consumed after a run completes.
//!
//! The crate does not decide legality outcomes and does not implement any
//! of the search algorithms; stages write their findings into the context
//! and read earlier findings back out.

pub mod core;
pub mod logging;
pub mod record;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
