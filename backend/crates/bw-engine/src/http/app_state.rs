use crate::EventHub;

use std::path::PathBuf;
use std::sync::Arc;

use bw_config::{AppConfig, HostBinding};

/// An app resolved against its content root.
#[derive(Debug, Clone)]
pub struct ServedApp {
    pub name: String,
    pub content_dir: PathBuf,
    pub bindings: Vec<HostBinding>,
}

impl ServedApp {
    pub fn from_config(app: &AppConfig, content_root: &std::path::Path) -> Self {
        Self {
            name: app.name.clone(),
            content_dir: app.content_dir(content_root),
            bindings: app.bindings.clone(),
        }
    }
}

/// Router state shared by every handler of one app.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<ServedApp>,
    pub events: Arc<EventHub>,
}
