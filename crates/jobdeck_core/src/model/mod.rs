//! Domain model for the job-application board.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, board and service
//!   layers.
//! - Keep the fixed stage set and the stage-specific status variants in one
//!   place.
//!
//! # Invariants
//! - Every record is identified by a stable `JobId`.
//! - A record belongs to exactly one `Category` at any instant.

pub mod job;
