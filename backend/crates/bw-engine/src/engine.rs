use crate::{EngineResult, EventHub};

use std::sync::Arc;

use async_trait::async_trait;
use bw_config::Config;

/// The server implementation driven by the lifecycle controller.
///
/// The lifecycle controller starts each engine at most once and discards it
/// after stop, asking the factory for a fresh one on the next start.
#[async_trait]
pub trait Engine: Send + Sync + 'static {
    /// Bind and begin serving. Events published after this returns are
    /// delivered to every subscriber registered beforehand.
    async fn start(&self) -> EngineResult<()>;

    /// Stop serving. Stopping an engine that is not running is a no-op.
    async fn stop(&self) -> EngineResult<()>;

    fn is_running(&self) -> bool;
}

/// Builds engines from a resolved configuration.
pub trait EngineFactory: Send + Sync + 'static {
    type Engine: Engine;

    /// Construct (but do not start) an engine that publishes to `events`.
    fn create(&self, config: &Config, events: Arc<EventHub>) -> EngineResult<Self::Engine>;
}
