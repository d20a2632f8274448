mod app_state;
mod completion;
mod content;
mod http_engine;
mod request;
mod routes;
mod service_proxy;

pub use app_state::{AppState, ServedApp};
pub(crate) use completion::publish_after_body;
pub use content::{content_type_for, resolve_content_path};
pub use http_engine::{HttpEngine, HttpEngineFactory};
pub use request::request_info;
pub use routes::build_router;
