//! Built-in service methods answered under `/serviceproxy/`.

use crate::ServerEvent;
use crate::http::{AppState, publish_after_body, request_info};

use axum::extract::{Path, Request, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::debug;
use serde_json::json;

pub(crate) async fn handle_service_proxy(
    State(state): State<AppState>,
    Path(method): Path<String>,
    request: Request,
) -> Response {
    let info = request_info(&request);
    let app = &state.app;

    let body = match method.as_str() {
        "ping" => json!({ "app": app.name, "pong": true }),
        "describe" => json!({
            "app": app.name,
            "bindings": app.bindings.iter().map(ToString::to_string).collect::<Vec<_>>(),
        }),
        _ => {
            state
                .events
                .publish(&ServerEvent::NotResponded { request: info });
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let bytes = match serde_json::to_vec(&body) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Failed to encode service proxy reply for {method}: {e}");
            state
                .events
                .publish(&ServerEvent::NotResponded { request: info });
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let responded = ServerEvent::ProxyResponded {
        request: info,
        method,
    };
    let content_type = [(header::CONTENT_TYPE, "application/json")];

    if *request.method() == Method::HEAD {
        state.events.publish(&responded);
        return (StatusCode::OK, content_type, bytes).into_response();
    }

    let body = publish_after_body(bytes, state.events.clone(), responded);
    (StatusCode::OK, content_type, body).into_response()
}
