#![allow(dead_code)]

//! Test infrastructure for bw-server integration tests

use bw_server::LogSink;

use std::env;
use std::sync::Mutex;
use std::time::Duration;

use log::Level;
use tempfile::TempDir;

pub const SITE_CONFIG: &str = r#"
[server]
process_mode = "test"

[[server.apps]]
name = "site"
bindings = [{ host = "127.0.0.1", port = 0 }]

[lifecycle]
settle_delay_ms = 0
"#;

/// Content root with `bamweb.toml` and `apps/site/index.html`.
pub fn content_root() -> TempDir {
    let root = TempDir::new().unwrap();
    std::fs::write(root.path().join("bamweb.toml"), SITE_CONFIG).unwrap();

    let site = root.path().join("apps").join("site");
    std::fs::create_dir_all(&site).unwrap();
    std::fs::write(site.join("index.html"), "<h1>site</h1>").unwrap();

    root
}

#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for RecordingSink {
    fn write(&self, level: Level, message: &str) -> std::io::Result<()> {
        self.lines.lock().unwrap().push((level, message.to_string()));
        Ok(())
    }
}

pub async fn eventually<C: Fn() -> bool>(condition: C) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

/// RAII guard for environment variables - restores the previous value on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}
