//! Board engine: derived partition, drag session and commit logic.
//!
//! # Responsibility
//! - Derive the per-column view from the flat record store.
//! - Interpret drag lifecycle events into preview and commit mutations.
//!
//! # Invariants
//! - Every record appears in exactly one column sequence.
//! - Only the drag session code mutates the preview partition; only the
//!   commit path writes back to the record store.

pub mod commit;
pub mod partition;
pub mod session;
