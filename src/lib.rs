//! Taskdeck: an in-memory task management service.
//!
//! This crate provides the core functionality for managing work-item tasks:
//! creating them, partially updating them, deleting them, and assigning or
//! unassigning people, all against a process-lifetime in-memory store.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle management and person assignment
//! - [`person`]: Person records and the person repository contract
//! - [`http`]: HTTP adapter exposing the task lifecycle as a JSON API
//! - [`config`]: Runtime configuration loaded from the environment

pub mod config;
pub mod http;
pub mod person;
pub mod task;
