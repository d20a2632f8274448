
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - restores the previous value on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
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

/// Create an empty content root
pub(crate) fn content_root() -> TempDir {
    TempDir::new().unwrap()
}

/// Create a content root containing `bamweb.toml` with the given contents
pub(crate) fn content_root_with(toml: &str) -> TempDir {
    let temp = content_root();
    std::fs::write(temp.path().join(crate::CONFIG_FILENAME), toml).unwrap();
    temp
}
