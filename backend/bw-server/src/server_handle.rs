use crate::error::{Result as ServerResult, ServerError};
use crate::server_state::ServerState;

use bw_config::Config;
use bw_engine::{Engine, EventHub};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use tokio::sync::watch;

/// One constructed server: its engine, the configuration it was built from
/// and the event hub its observers are attached to.
///
/// A handle is started at most once. Stopping it closes the hub so no
/// observer fires after teardown; the controller then discards it.
pub struct ServerHandle<E: Engine> {
    epoch: u64,
    engine: E,
    config: Config,
    events: Arc<EventHub>,
    state_tx: watch::Sender<ServerState>,
    logging_attached: AtomicBool,
}

impl<E: Engine> ServerHandle<E> {
    pub(crate) fn new(epoch: u64, engine: E, config: Config, events: Arc<EventHub>) -> Self {
        let (state_tx, _) = watch::channel(ServerState::Uninitialized);

        Self {
            epoch,
            engine,
            config,
            events,
            state_tx,
            logging_attached: AtomicBool::new(false),
        }
    }

    /// Initialization counter; strictly increasing per controller.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Arc<EventHub> {
        &self.events
    }

    pub fn state(&self) -> ServerState {
        *self.state_tx.borrow()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<ServerState> {
        self.state_tx.subscribe()
    }

    pub fn is_logging_attached(&self) -> bool {
        self.logging_attached.load(Ordering::SeqCst)
    }

    /// Claim the right to attach logging. Only the first caller gets `true`.
    pub(crate) fn claim_logging(&self) -> bool {
        !self.logging_attached.swap(true, Ordering::SeqCst)
    }

    pub(crate) fn release_logging_claim(&self) {
        self.logging_attached.store(false, Ordering::SeqCst);
    }

    fn set_state(&self, state: ServerState) {
        let previous = self.state_tx.send_replace(state);
        if previous != state {
            debug!(
                "Server epoch {} {} -> {}",
                self.epoch,
                previous.as_str(),
                state.as_str()
            );
        }
    }

    pub(crate) async fn start(&self) -> ServerResult<()> {
        self.engine.start().await.map_err(ServerError::engine_start)?;
        self.set_state(ServerState::Running);
        Ok(())
    }

    /// Stop the engine and close the hub. The hub is closed and the state
    /// set to `Stopped` even when the engine reports an error.
    pub(crate) async fn shutdown(&self) -> ServerResult<()> {
        let result = self.engine.stop().await;
        let removed = self.events.close();
        self.set_state(ServerState::Stopped);

        debug!(
            "Server epoch {} torn down, {removed} subscriptions released",
            self.epoch
        );

        result.map_err(ServerError::engine_stop)
    }
}
