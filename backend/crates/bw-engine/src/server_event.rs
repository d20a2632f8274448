use crate::RequestInfo;

/// The fixed set of events a subscriber can tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A response was written for the request
    ResponseFlushed,
    /// No responder handled the request
    NotResponded,
    /// The service-proxy layer answered the request
    ProxyResponded,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [
        Self::ResponseFlushed,
        Self::NotResponded,
        Self::ProxyResponded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResponseFlushed => "response_flushed",
            Self::NotResponded => "not_responded",
            Self::ProxyResponded => "proxy_responded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    ResponseFlushed { request: RequestInfo, status: u16 },
    NotResponded { request: RequestInfo },
    ProxyResponded { request: RequestInfo, method: String },
}

impl ServerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ResponseFlushed { .. } => EventKind::ResponseFlushed,
            Self::NotResponded { .. } => EventKind::NotResponded,
            Self::ProxyResponded { .. } => EventKind::ProxyResponded,
        }
    }

    pub fn request(&self) -> &RequestInfo {
        match self {
            Self::ResponseFlushed { request, .. }
            | Self::NotResponded { request }
            | Self::ProxyResponded { request, .. } => request,
        }
    }
}
