//! Task lifecycle management for Taskdeck.
//!
//! This module implements the work-item core: creating tasks, retrieving and
//! listing them, applying field-level partial updates with tri-state due-date
//! semantics, deleting them, and assigning or unassigning people
//! idempotently. Existence is confirmed before every mutation and a missing
//! record surfaces as a typed not-found failure. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
