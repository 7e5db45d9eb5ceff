//! HTTP adapter exposing the task lifecycle as a JSON API.
//!
//! The adapter is a thin shell around the lifecycle service: it parses and
//! validates transport input, maps typed service failures onto status codes
//! and the global error body, and logs one event per request. No business
//! rules live here.

pub mod error;
pub mod logging;
pub mod tasks;

use crate::config::AppConfig;
use crate::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Task lifecycle service wiring served over HTTP.
pub type HttpTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Task lifecycle service.
    pub tasks: Arc<HttpTaskService>,
    /// Runtime configuration.
    pub config: AppConfig,
}

/// Builds the application router with error formatting and request logging.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/tasks/{id}/assign", post(tasks::assign_person))
        .route("/tasks/{id}/unassign", post(tasks::unassign_person))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error::format_error_responses,
        ))
        .layer(middleware::from_fn(logging::log_requests))
        .with_state(state)
}
