use crate::RequestInfo;

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Capture the loggable parts of a request.
///
/// The client address is only known when the router is served with connect
/// info; requests driven straight through the router have none.
pub fn request_info(request: &Request) -> RequestInfo {
    let headers = request.headers();

    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let uri = request.uri();
    let path = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());

    let mut info = RequestInfo::new(request_id)
        .with_path(path)
        .with_property("method", request.method().as_str())
        .with_property("uri", uri.to_string())
        .with_property("version", format!("{:?}", request.version()));

    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        info = info.with_client_addr(addr.ip().to_string());
    }

    for (name, value) in headers {
        if name.as_str() == REQUEST_ID_HEADER {
            continue;
        }
        info = info.with_property(
            format!("header.{}", name.as_str()),
            String::from_utf8_lossy(value.as_bytes()),
        );
    }

    info
}
