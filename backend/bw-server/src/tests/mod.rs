mod cli;

use crate::{ConfigSource, LaunchOptions, LogSink, ServerController};

use bw_config::{Config, ConfigErrorResult};
use bw_engine::{
    Engine, EngineError, EngineFactory, EngineResult, EventHub, RequestInfo, ServerEvent,
};

use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::Level;

/// Switches and counters shared by a mock factory and its engines.
#[derive(Default)]
pub(crate) struct MockBehavior {
    pub(crate) fail_create: AtomicBool,
    pub(crate) fail_start: AtomicBool,
    pub(crate) fail_stop: AtomicBool,
    pub(crate) publish_on_start: AtomicBool,
    pub(crate) created: AtomicUsize,
    pub(crate) started: AtomicUsize,
    pub(crate) stopped: AtomicUsize,
}

impl MockBehavior {
    pub(crate) fn set(flag: &AtomicBool, value: bool) {
        flag.store(value, Ordering::SeqCst);
    }

    pub(crate) fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

pub(crate) struct MockEngine {
    events: Arc<EventHub>,
    running: AtomicBool,
    behavior: Arc<MockBehavior>,
}

impl MockEngine {
    /// Publish as a request handler would.
    pub(crate) fn publish(&self, event: ServerEvent) -> usize {
        self.events.publish(&event)
    }
}

#[async_trait]
impl Engine for MockEngine {
    async fn start(&self) -> EngineResult<()> {
        if self.behavior.fail_start.load(Ordering::SeqCst) {
            return Err(EngineError::Bind {
                addr: "127.0.0.1:8080".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.running.store(true, Ordering::SeqCst);
        self.behavior.started.fetch_add(1, Ordering::SeqCst);

        if self.behavior.publish_on_start.load(Ordering::SeqCst) {
            self.publish(responded("warmup"));
        }

        Ok(())
    }

    async fn stop(&self) -> EngineResult<()> {
        self.running.store(false, Ordering::SeqCst);
        self.behavior.stopped.fetch_add(1, Ordering::SeqCst);

        if self.behavior.fail_stop.load(Ordering::SeqCst) {
            return Err(EngineError::Join {
                addr: "127.0.0.1:8080".to_string(),
                message: "listener task panicked".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

pub(crate) struct MockFactory {
    behavior: Arc<MockBehavior>,
}

impl EngineFactory for MockFactory {
    type Engine = MockEngine;

    fn create(&self, _config: &Config, events: Arc<EventHub>) -> EngineResult<MockEngine> {
        if self.behavior.fail_create.load(Ordering::SeqCst) {
            return Err(EngineError::build("factory refused"));
        }

        self.behavior.created.fetch_add(1, Ordering::SeqCst);

        Ok(MockEngine {
            events,
            running: AtomicBool::new(false),
            behavior: self.behavior.clone(),
        })
    }
}

/// Fixed configuration that counts how often it is read.
pub(crate) struct CountingSource {
    config: Config,
    loads: Arc<AtomicUsize>,
}

impl ConfigSource for CountingSource {
    fn load(&self) -> ConfigErrorResult<Config> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.config.clone())
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub(crate) fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.lock().unwrap().len()
    }
}

impl LogSink for RecordingSink {
    fn write(&self, level: Level, message: &str) -> std::io::Result<()> {
        self.lines.lock().unwrap().push((level, message.to_string()));
        Ok(())
    }
}

pub(crate) struct Fixture {
    pub(crate) controller: Arc<ServerController<CountingSource, MockFactory>>,
    pub(crate) behavior: Arc<MockBehavior>,
    pub(crate) loads: Arc<AtomicUsize>,
    pub(crate) sink: Arc<RecordingSink>,
}

/// Default configuration without the settle pause.
pub(crate) fn test_config() -> Config {
    let mut config = Config::default();
    config.lifecycle.settle_delay_ms = 0;
    config
}

pub(crate) fn fixture(options: LaunchOptions) -> Fixture {
    fixture_with(test_config(), options)
}

pub(crate) fn fixture_with(config: Config, options: LaunchOptions) -> Fixture {
    let behavior = Arc::new(MockBehavior::default());
    let loads = Arc::new(AtomicUsize::new(0));
    let sink = Arc::new(RecordingSink::default());

    let controller = ServerController::with_log_sink(
        CountingSource {
            config,
            loads: loads.clone(),
        },
        MockFactory {
            behavior: behavior.clone(),
        },
        options,
        sink.clone(),
    );

    Fixture {
        controller: Arc::new(controller),
        behavior,
        loads,
        sink,
    }
}

pub(crate) fn verbose() -> LaunchOptions {
    LaunchOptions::new(true, None)
}

pub(crate) fn responded(request_id: &str) -> ServerEvent {
    ServerEvent::ResponseFlushed {
        request: RequestInfo::new(request_id).with_path("/index.html"),
        status: 200,
    }
}

/// Poll `condition` for up to two seconds.
pub(crate) async fn eventually<C: Fn() -> bool>(condition: C) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
