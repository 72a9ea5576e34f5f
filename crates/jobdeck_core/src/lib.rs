//! Core board logic for JobDeck.
//! This crate is the single source of truth for partition and drag
//! invariants; rendering, forms and persistence live in host layers.

pub mod board;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use board::commit::commit;
pub use board::partition::{partition, BoardSections};
pub use board::session::{resolve_container, DragSession, DragTarget};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::job::{
    Category, Company, DecisionOutcome, JobApplication, JobId, JobValidationError, Status,
};
pub use service::board_service::BoardService;
pub use store::{JobStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
