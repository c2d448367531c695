//! # ChronoDesk App
//!
//! Application layer: page state, commands and the CLI entry point.
//!
//! This crate contains:
//! - Commands (one per user-facing action, timed and logged)
//! - Page view state with the login redirect guard
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain` and `infra`
//! - Wires the token store, API client and resource clients together

pub mod commands;
pub mod context;
pub mod page;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
pub use page::{Page, PageOutcome, SessionState, ViewState};
