use bw_engine::{RequestInfo, ServerEvent};

use log::Level;

pub const RESPONDED_LABEL: &str = "Responded";
pub const NOT_RESPONDED_LABEL: &str = "DID NOT RESPOND";
pub const PROXY_RESPONDED_LABEL: &str = "ServiceProxy Responded";

const FRAME: &str = "***";

/// A request event captured for logging, rendered off the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub label: &'static str,
    pub request: RequestInfo,
}

impl LogRecord {
    pub fn from_event(event: &ServerEvent) -> Self {
        let (level, label) = match event {
            ServerEvent::ResponseFlushed { .. } => (Level::Info, RESPONDED_LABEL),
            ServerEvent::NotResponded { .. } => (Level::Warn, NOT_RESPONDED_LABEL),
            ServerEvent::ProxyResponded { .. } => (Level::Info, PROXY_RESPONDED_LABEL),
        };

        Self {
            level,
            label,
            request: event.request().clone(),
        }
    }

    /// ```text
    /// <label>: RequestId=<id>, ClientIp=<ip|[null]>, Path=<path|[null]>
    /// ***
    /// <properties>
    /// ***
    /// ```
    pub fn render(&self) -> String {
        format!(
            "{label}: RequestId={id}, ClientIp={ip}, Path={path}\n{FRAME}\n{props}\n{FRAME}",
            label = self.label,
            id = self.request.request_id,
            ip = self.request.client_addr_or_placeholder(),
            path = self.request.path_or_placeholder(),
            props = self.request.properties_dump(),
        )
    }
}
