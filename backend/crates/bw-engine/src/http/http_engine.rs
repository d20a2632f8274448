//! axum-backed engine: one listener per app binding.

use crate::http::{AppState, ServedApp, build_router};
use crate::{Engine, EngineError, EngineFactory, EngineResult, EventHub, ShutdownSignal};

use std::net::SocketAddr;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bw_config::Config;
use error_location::ErrorLocation;
use log::{info, warn};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

struct Listener {
    app: String,
    addr: SocketAddr,
    task: JoinHandle<std::io::Result<()>>,
}

struct Running {
    shutdown: ShutdownSignal,
    listeners: Vec<Listener>,
}

pub struct HttpEngine {
    apps: Vec<Arc<ServedApp>>,
    events: Arc<EventHub>,
    running: Mutex<Option<Running>>,
    is_running: AtomicBool,
}

impl HttpEngine {
    pub fn new(config: &Config, events: Arc<EventHub>) -> Self {
        let apps = config
            .server
            .apps
            .iter()
            .map(|app| Arc::new(ServedApp::from_config(app, &config.content_root)))
            .collect();

        Self {
            apps,
            events,
            running: Mutex::new(None),
            is_running: AtomicBool::new(false),
        }
    }

    pub fn apps(&self) -> &[Arc<ServedApp>] {
        &self.apps
    }

    /// Addresses actually bound (resolves port 0 bindings).
    pub async fn local_addrs(&self) -> Vec<SocketAddr> {
        self.running
            .lock()
            .await
            .as_ref()
            .map(|r| r.listeners.iter().map(|l| l.addr).collect())
            .unwrap_or_default()
    }

    async fn bind_all(&self, shutdown: &ShutdownSignal) -> EngineResult<Vec<Listener>> {
        let mut listeners = Vec::new();

        for app in &self.apps {
            for binding in &app.bindings {
                let addr = binding.socket_addr();

                let bound = match TcpListener::bind(&addr).await {
                    Ok(listener) => listener.local_addr().map(|local| (listener, local)),
                    Err(e) => Err(e),
                };

                let (listener, local) = match bound {
                    Ok(bound) => bound,
                    Err(source) => {
                        shutdown.trigger();
                        Self::join_all(listeners).await.ok();
                        return Err(EngineError::Bind {
                            addr,
                            source,
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                };

                let router = build_router(AppState {
                    app: app.clone(),
                    events: self.events.clone(),
                });
                let signal = shutdown.clone();

                let task = tokio::spawn(async move {
                    axum::serve(
                        listener,
                        router.into_make_service_with_connect_info::<SocketAddr>(),
                    )
                    .with_graceful_shutdown(async move { signal.wait().await })
                    .await
                });

                info!("App '{}' listening on http://{}/", app.name, local);

                listeners.push(Listener {
                    app: app.name.clone(),
                    addr: local,
                    task,
                });
            }
        }

        Ok(listeners)
    }

    /// Wait for every listener task; the first failure is returned.
    async fn join_all(listeners: Vec<Listener>) -> EngineResult<()> {
        let mut first_error = None;

        for listener in listeners {
            let addr = listener.addr.to_string();
            let outcome = match listener.task.await {
                Ok(Ok(())) => Ok(()),
                Ok(Err(source)) => Err(EngineError::Serve {
                    addr,
                    source,
                    location: ErrorLocation::from(Location::caller()),
                }),
                Err(e) => Err(EngineError::Join {
                    addr,
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            };

            if let Err(e) = outcome {
                warn!("Listener for app '{}' stopped with error: {e}", listener.app);
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

#[async_trait]
impl Engine for HttpEngine {
    async fn start(&self) -> EngineResult<()> {
        let mut running = self.running.lock().await;

        if running.is_some() {
            return Err(EngineError::already_running());
        }

        let shutdown = ShutdownSignal::new();
        let listeners = self.bind_all(&shutdown).await?;

        info!(
            "HTTP engine started: {} app(s), {} listener(s)",
            self.apps.len(),
            listeners.len()
        );

        *running = Some(Running {
            shutdown,
            listeners,
        });
        self.is_running.store(true, Ordering::SeqCst);

        Ok(())
    }

    async fn stop(&self) -> EngineResult<()> {
        let Some(running) = self.running.lock().await.take() else {
            return Ok(());
        };

        self.is_running.store(false, Ordering::SeqCst);
        running.shutdown.trigger();

        let result = Self::join_all(running.listeners).await;
        info!("HTTP engine stopped");
        result
    }

    fn is_running(&self) -> bool {
        self.is_running.load(Ordering::SeqCst)
    }
}

/// Builds [`HttpEngine`]s for the lifecycle controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpEngineFactory;

impl EngineFactory for HttpEngineFactory {
    type Engine = HttpEngine;

    fn create(&self, config: &Config, events: Arc<EventHub>) -> EngineResult<HttpEngine> {
        if config.server.apps.is_empty() {
            return Err(EngineError::build("no applications configured"));
        }

        Ok(HttpEngine::new(config, events))
    }
}
