use bw_config::ProcessMode;

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use log::{debug, warn};

/// Current process mode of one controller.
///
/// Precedence: an explicit override beats the configured mode, which beats
/// the default (`Development`). Once overridden, configured modes are ignored
/// for the life of the controller.
#[derive(Debug, Default)]
pub struct ProcessModeState {
    current: RwLock<ProcessMode>,
    overridden: AtomicBool,
}

impl ProcessModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ProcessMode {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden.load(Ordering::SeqCst)
    }

    /// Apply a raw override argument. Absent or unparseable arguments leave
    /// the mode unchanged; the latter is reported at warn.
    pub fn apply_override(&self, argument: Option<&str>) -> bool {
        let Some(argument) = argument else {
            return false;
        };

        match ProcessMode::from_str(argument) {
            Ok(mode) => {
                *self.current.write().unwrap_or_else(PoisonError::into_inner) = mode;
                self.overridden.store(true, Ordering::SeqCst);
                debug!("Process mode overridden to {mode}");
                true
            }
            Err(e) => {
                warn!("Ignoring process mode argument '{argument}': {e}");
                false
            }
        }
    }

    /// Adopt the mode persisted in configuration, unless overridden.
    pub fn adopt_configured(&self, configured: Option<ProcessMode>) -> bool {
        let Some(mode) = configured else {
            return false;
        };

        if self.is_overridden() {
            debug!("Configured process mode {mode} ignored, override in effect");
            return false;
        }

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = mode;
        true
    }
}
