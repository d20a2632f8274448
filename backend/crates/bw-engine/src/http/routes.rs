use crate::ServerEvent;
use crate::http::content::{content_type_for, existing_file, resolve_content_path};
use crate::http::{AppState, publish_after_body, request_info, service_proxy};

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use log::debug;

/// Router for one app: the service proxy plus static content.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/serviceproxy/{*method}",
            any(service_proxy::handle_service_proxy),
        )
        .fallback(serve_content)
        .with_state(state)
}

async fn serve_content(State(state): State<AppState>, request: Request) -> Response {
    let info = request_info(&request);

    if *request.method() != Method::GET && *request.method() != Method::HEAD {
        state
            .events
            .publish(&ServerEvent::NotResponded { request: info });
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let file = match resolve_content_path(request.uri().path()) {
        Some(relative) => existing_file(&state.app.content_dir, &relative).await,
        None => None,
    };

    let Some(file) = file else {
        state
            .events
            .publish(&ServerEvent::NotResponded { request: info });
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => {
            let flushed = ServerEvent::ResponseFlushed {
                request: info,
                status: StatusCode::OK.as_u16(),
            };
            let content_type = [(header::CONTENT_TYPE, content_type_for(&file))];

            // HEAD bodies are never polled.
            if *request.method() == Method::HEAD {
                state.events.publish(&flushed);
                return (StatusCode::OK, content_type, bytes).into_response();
            }

            let body = publish_after_body(bytes, state.events.clone(), flushed);
            (StatusCode::OK, content_type, body).into_response()
        }
        Err(e) => {
            debug!("Failed to read {}: {e}", file.display());
            state
                .events
                .publish(&ServerEvent::NotResponded { request: info });
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
