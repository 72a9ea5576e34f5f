//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, partition and drag engine into one facade for
//!   UI/host callers.
//! - Keep rendering layers decoupled from mutation entry points.

pub mod board_service;
