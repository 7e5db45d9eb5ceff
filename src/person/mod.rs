//! Person records for Taskdeck.
//!
//! People are the assignees referenced by tasks. This module carries the
//! person aggregate, the repository contract, and the in-memory adapter;
//! task assignment itself deliberately performs no existence check against
//! this module, so the two sides stay decoupled. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
