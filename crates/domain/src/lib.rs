//! # ChronoDesk Domain
//!
//! Data-transfer types mirroring the ChronoDesk backend resources.
//!
//! This crate contains:
//! - Resource DTOs (dashboard, company settings, calendar, notifications,
//!   users, roles, shifts, scheduler, time entries)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other ChronoDesk crates
//! - Only external dependencies allowed
//! - Types carry no I/O; invariant checks only

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
