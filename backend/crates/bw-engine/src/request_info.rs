use std::collections::BTreeMap;

/// Rendered in place of a client address or path that is not known.
pub const NULL_PLACEHOLDER: &str = "[null]";

/// What an engine knows about a request when it publishes an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub request_id: String,
    pub client_addr: Option<String>,
    pub path: Option<String>,
    pub properties: BTreeMap<String, String>,
}

impl RequestInfo {
    pub fn new<S: Into<String>>(request_id: S) -> Self {
        Self {
            request_id: request_id.into(),
            client_addr: None,
            path: None,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_client_addr<S: Into<String>>(mut self, client_addr: S) -> Self {
        self.client_addr = Some(client_addr.into());
        self
    }

    pub fn with_path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn client_addr_or_placeholder(&self) -> &str {
        self.client_addr.as_deref().unwrap_or(NULL_PLACEHOLDER)
    }

    pub fn path_or_placeholder(&self) -> &str {
        self.path.as_deref().unwrap_or(NULL_PLACEHOLDER)
    }

    /// One `key: value` line per property, sorted by key.
    pub fn properties_dump(&self) -> String {
        self.properties
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
