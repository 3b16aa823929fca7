//! The request reflector.
//!
//! Reads the whole body, writes one console line, and answers with the
//! request's method, headers, URL and body as JSON.

use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::http::color::{MethodColor, GRAY, RESET};
use crate::http::record::{HeaderDump, ReflectedRequest};
use crate::http::server::AppState;

pub const BODY_READ_ERROR: &str = "Error reading body";
pub const JSON_ENCODE_ERROR: &str = "Error encoding JSON";

/// Echo handler mounted on every path and method.
pub async fn reflect(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(
                method = %parts.method,
                uri = %parts.uri,
                error = %e,
                "Failed to read request body"
            );
            return plain_error(StatusCode::BAD_REQUEST, BODY_READ_ERROR);
        }
    };

    let record = ReflectedRequest::from_parts(&parts, &bytes);
    state.sink.write_line(&request_line(&record, state.ansi));

    encode_json(&record)
}

/// Console line for a reflected request.
///
/// The method is wrapped in its color code; the rest of the line is gray.
/// With `ansi` off the line carries no escape codes at all.
pub fn request_line(record: &ReflectedRequest, ansi: bool) -> String {
    let (gray, color, reset) = if ansi {
        (GRAY, MethodColor::for_method(&record.method).ansi_code(), RESET)
    } else {
        ("", "", "")
    };

    format!(
        "{gray}Received request: map[Body: {body} Header: {headers} Method: {color}{method}{reset} URL: {reset}{url}{gray}]{reset}",
        body = record.body,
        headers = HeaderDump(&record.header),
        method = record.method,
        url = record.url,
    )
}

/// Serialize `value` as an `application/json` response, or answer 500.
pub fn encode_json<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode response");
            plain_error(StatusCode::INTERNAL_SERVER_ERROR, JSON_ENCODE_ERROR)
        }
    }
}

fn plain_error(status: StatusCode, message: &'static str) -> Response {
    (
        status,
        [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
        message,
    )
        .into_response()
}
