/// State of one server handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Constructed, engine not started yet
    Uninitialized,
    /// Engine started and serving
    Running,
    /// Engine stopped; the handle is discarded and never restarted
    Stopped,
}

impl ServerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }
}
