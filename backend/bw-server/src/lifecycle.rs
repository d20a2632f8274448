//! Singleton lifecycle of the served engine.

use crate::config_source::ConfigSource;
use crate::error::{Result as ServerResult, ServerError};
use crate::launch_options::LaunchOptions;
use crate::observability::{LogCrateSink, LogSink, ObservabilityBus};
use crate::process_mode_state::ProcessModeState;
use crate::server_handle::ServerHandle;
use crate::server_state::ServerState;
use crate::startup_summary::log_startup_summary;

use bw_config::ProcessMode;
use bw_engine::{EngineFactory, EventHub};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use log::{info, warn};
use tokio::sync::{Mutex, MutexGuard};

type Handle<F> = ServerHandle<<F as EngineFactory>::Engine>;

/// Owns the single server instance of a process.
///
/// Responsibilities:
/// - Construct the handle lazily, exactly once per cycle
/// - Start, stop and restart it under one lifecycle lock
/// - Apply the process mode and attach request logging before each start
///
/// Readers take a short lock on the slot; construction and every state
/// change happen under the async lifecycle lock, so no caller ever sees a
/// partially built handle.
pub struct ServerController<S: ConfigSource, F: EngineFactory> {
    source: S,
    factory: F,
    options: LaunchOptions,
    bus: ObservabilityBus,
    process_mode: ProcessModeState,
    slot: RwLock<Option<Arc<Handle<F>>>>,
    lifecycle: Mutex<()>,
    epoch: AtomicU64,
}

impl<S: ConfigSource, F: EngineFactory> ServerController<S, F> {
    pub fn new(source: S, factory: F, options: LaunchOptions) -> Self {
        Self::with_log_sink(source, factory, options, Arc::new(LogCrateSink))
    }

    /// Controller whose request log goes to `sink` instead of the `log` facade.
    pub fn with_log_sink(
        source: S,
        factory: F,
        options: LaunchOptions,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            source,
            factory,
            options,
            bus: ObservabilityBus::new(sink),
            process_mode: ProcessModeState::new(),
            slot: RwLock::new(None),
            lifecycle: Mutex::new(()),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn options(&self) -> &LaunchOptions {
        &self.options
    }

    pub fn process_mode(&self) -> ProcessMode {
        self.process_mode.current()
    }

    pub fn current_handle(&self) -> Option<Arc<Handle<F>>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// State of the current handle, `None` when there is none.
    pub fn state(&self) -> Option<ServerState> {
        self.current_handle().map(|handle| handle.state())
    }

    /// Apply a process-mode argument. See [`ProcessModeState::apply_override`].
    pub fn apply_process_mode(&self, argument: Option<&str>) -> bool {
        self.process_mode.apply_override(argument)
    }

    /// Return the current handle, constructing it on first use.
    ///
    /// Construction failures leave the slot empty so a later call retries.
    pub async fn ensure_server(&self) -> ServerResult<Arc<Handle<F>>> {
        if let Some(handle) = self.current_handle() {
            return Ok(handle);
        }

        let guard = self.lifecycle.lock().await;
        self.ensure_locked(&guard)
    }

    /// Start the server. Starting a running server is a no-op.
    pub async fn start(&self) -> ServerResult<()> {
        let guard = self.lifecycle.lock().await;
        let settle = self.start_locked(&guard).await?;
        drop(guard);

        tokio::time::sleep(settle).await;
        Ok(())
    }

    /// Stop and discard the server. Stopping when nothing is running is a
    /// no-op. The handle is discarded even if the engine fails to stop.
    pub async fn stop(&self) -> ServerResult<()> {
        let guard = self.lifecycle.lock().await;
        self.stop_locked(&guard).await
    }

    /// Stop, discard and start a freshly constructed server.
    ///
    /// A failed stop is logged and does not prevent the start.
    pub async fn restart(&self) -> ServerResult<()> {
        let guard = self.lifecycle.lock().await;

        if let Err(e) = self.stop_locked(&guard).await {
            warn!("Stop during restart failed, starting anyway: {e}");
        }

        let settle = self.start_locked(&guard).await?;
        drop(guard);

        tokio::time::sleep(settle).await;
        Ok(())
    }

    fn ensure_locked(&self, _guard: &MutexGuard<'_, ()>) -> ServerResult<Arc<Handle<F>>> {
        if let Some(handle) = self.current_handle() {
            return Ok(handle);
        }

        let config = self.source.load()?;
        let events = Arc::new(EventHub::new());
        let engine = self
            .factory
            .create(&config, events.clone())
            .map_err(ServerError::engine_init)?;

        if self.process_mode.adopt_configured(config.server.process_mode) {
            info!("Process mode {} taken from configuration", self.process_mode());
        }

        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let handle = Arc::new(ServerHandle::new(epoch, engine, config, events));

        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(handle.clone());
        info!("Server epoch {epoch} initialized");

        Ok(handle)
    }

    /// Returns how long the caller should pause once the lock is released.
    async fn start_locked(&self, guard: &MutexGuard<'_, ()>) -> ServerResult<Duration> {
        let handle = self.ensure_locked(guard)?;

        if handle.state() == ServerState::Running {
            info!("Server epoch {} is already running", handle.epoch());
            return Ok(Duration::ZERO);
        }

        if self.options.verbose {
            self.bus.attach_logging(&handle)?;
        }
        self.process_mode
            .apply_override(self.options.process_mode.as_deref());

        handle.start().await?;
        info!("Server epoch {} started", handle.epoch());

        log_startup_summary(handle.config(), self.process_mode());

        Ok(handle.config().lifecycle.settle_delay())
    }

    async fn stop_locked(&self, _guard: &MutexGuard<'_, ()>) -> ServerResult<()> {
        let Some(handle) = self.current_handle() else {
            info!("Server is not running, nothing to stop");
            return Ok(());
        };

        let result = handle.shutdown().await;
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match result {
            Ok(()) => {
                info!("Server epoch {} stopped", handle.epoch());
                Ok(())
            }
            Err(e) => {
                warn!("Server epoch {} released after failed stop", handle.epoch());
                Err(e)
            }
        }
    }
}
