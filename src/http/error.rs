//! Global error formatting for the HTTP adapter.
//!
//! Every failure response shares one JSON body shape. Handlers attach an
//! [`ApiError`] to the response; the formatting middleware, which knows the
//! request method and path, renders the final body and strips stack detail
//! unless the configuration allows it.

use super::AppState;
use axum::{
    Json,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;

/// Typed failure produced by a handler.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    message: String,
    stack: Option<String>,
}

impl ApiError {
    /// A 404 failure with the given message.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: "NotFound".to_owned(),
            message: message.into(),
            stack: None,
        }
    }

    /// A 400 failure with the given message.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "BadRequest".to_owned(),
            message: message.into(),
            stack: None,
        }
    }

    /// A 500 failure carrying the source error as stack detail.
    ///
    /// The detail is only ever serialized when the configuration enables
    /// `show_error_stack`.
    #[must_use]
    pub fn internal(source: &(impl std::error::Error + ?Sized)) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "InternalServerError".to_owned(),
            message: "Internal server error".to_owned(),
            stack: Some(format!("{source:?}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = self.status.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// JSON body rendered for every failure response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Numeric HTTP status.
    pub status_code: u16,
    /// RFC 3339 timestamp of the failure.
    pub timestamp: String,
    /// Request path.
    pub path: String,
    /// Request method.
    pub method: String,
    /// Human-readable failure message.
    pub message: String,
    /// Error class name.
    pub error: String,
    /// Stack detail, present only outside production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorBody {
    /// Renders the body for a failure response.
    fn render(
        show_error_stack: bool,
        status: StatusCode,
        method: &Method,
        path: &str,
        detail: Option<ApiError>,
    ) -> Self {
        let canonical = status.canonical_reason().unwrap_or("Unknown Error");
        let (message, error, stack) = detail.map_or_else(
            || (canonical.to_owned(), canonical.replace(' ', ""), None),
            |api_error| (api_error.message, api_error.error, api_error.stack),
        );

        Self {
            status_code: status.as_u16(),
            timestamp: Utc::now().to_rfc3339(),
            path: path.to_owned(),
            method: method.to_string(),
            message,
            error,
            stack: stack.filter(|_| show_error_stack),
        }
    }
}

/// Middleware rewriting failure responses into the global error body.
///
/// Successful responses pass through untouched. Failures without an attached
/// [`ApiError`] (such as the router's own 404 for an unknown route) get the
/// canonical status text as their message.
pub async fn format_error_responses(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let detail = response.extensions().get::<ApiError>().cloned();
    let body = ErrorBody::render(state.config.show_error_stack, status, &method, &path, detail);
    (status, Json(body)).into_response()
}
