//! Server engine boundary and a minimal HTTP engine.
//!
//! The lifecycle controller only sees [`Engine`], [`EngineFactory`] and the
//! [`EventHub`] an engine publishes request events to. [`http::HttpEngine`]
//! is the axum implementation used by the `bamweb` binary.

pub mod engine;
pub mod error;
pub mod event_hub;
pub mod http;
pub mod request_info;
pub mod server_event;
pub mod shutdown_signal;

#[cfg(test)]
mod tests;

pub use engine::{Engine, EngineFactory};
pub use error::{EngineError, Result as EngineResult};
pub use event_hub::{EventHandler, EventHub, SubscriptionId};
pub use http::{HttpEngine, HttpEngineFactory};
pub use request_info::{NULL_PLACEHOLDER, RequestInfo};
pub use server_event::{EventKind, ServerEvent};
pub use shutdown_signal::ShutdownSignal;
