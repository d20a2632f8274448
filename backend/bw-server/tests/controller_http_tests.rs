mod common;

use common::{EnvGuard, RecordingSink, content_root, eventually};

use bw_config::{AppFilter, ProcessMode};
use bw_engine::HttpEngineFactory;
use bw_server::{ContentRootSource, LaunchOptions, ServerController, ServerError, ServerState};

use std::sync::Arc;

use googletest::prelude::*;
use log::Level;
use serial_test::serial;

type HttpController = ServerController<ContentRootSource, HttpEngineFactory>;

fn controller(
    root: &tempfile::TempDir,
    options: LaunchOptions,
) -> (HttpController, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let controller = ServerController::with_log_sink(
        ContentRootSource::new(root.path(), AppFilter::default()),
        HttpEngineFactory,
        options,
        sink.clone(),
    );
    (controller, sink)
}

#[tokio::test]
#[serial]
async fn given_verbose_server_when_serving_then_responses_and_misses_are_logged() {
    // Given
    let root = content_root();
    let (controller, sink) = controller(&root, LaunchOptions::new(true, None));
    controller.start().await.unwrap();
    let addr = controller.current_handle().unwrap().engine().local_addrs().await[0];

    // When
    let found = reqwest::get(format!("http://{addr}/")).await.unwrap();
    let body = found.text().await.unwrap();
    let _ = eventually(|| sink.lines().len() == 1).await;
    let missing = reqwest::get(format!("http://{addr}/nope.html")).await.unwrap();

    // Then
    assert_eq!(body, "<h1>site</h1>");
    assert_eq!(missing.status().as_u16(), 404);
    assert!(eventually(|| sink.lines().len() == 2).await);

    let lines = sink.lines();
    assert_eq!(lines[0].0, Level::Info);
    assert!(lines[0].1.starts_with("Responded: RequestId="));
    assert!(lines[0].1.contains("ClientIp=127.0.0.1, Path=/\n***\n"));
    assert_eq!(lines[1].0, Level::Warn);
    assert!(lines[1].1.starts_with("DID NOT RESPOND: RequestId="));
    assert!(lines[1].1.contains("Path=/nope.html"));

    controller.stop().await.unwrap();
}

#[tokio::test]
#[serial]
async fn given_running_server_when_restarted_then_old_listener_closed_and_new_one_serves() {
    // Given
    let root = content_root();
    let (controller, _sink) = controller(&root, LaunchOptions::default());
    controller.start().await.unwrap();
    let old = controller.current_handle().unwrap();
    let old_addr = old.engine().local_addrs().await[0];

    // When
    let result = controller.restart().await;

    // Then
    assert_that!(result, ok(anything()));
    let new = controller.current_handle().unwrap();
    let new_addr = new.engine().local_addrs().await[0];
    assert_eq!(old.state(), ServerState::Stopped);
    assert_eq!(new.epoch(), old.epoch() + 1);
    assert!(reqwest::get(format!("http://{new_addr}/")).await.is_ok());
    if new_addr != old_addr {
        assert!(reqwest::get(format!("http://{old_addr}/")).await.is_err());
    }

    controller.stop().await.unwrap();
    assert!(controller.current_handle().is_none());
}

#[tokio::test]
#[serial]
async fn given_persisted_mode_when_started_then_it_applies() {
    // Given
    let root = content_root();
    let (controller, _sink) = controller(&root, LaunchOptions::default());

    // When
    controller.start().await.unwrap();

    // Then
    assert_eq!(controller.process_mode(), ProcessMode::Test);
    controller.stop().await.unwrap();
}

#[tokio::test]
#[serial]
async fn given_env_mode_and_cli_override_when_started_then_cli_wins() {
    // Given
    let _mode = EnvGuard::set("BW_PROCESS_MODE", "production");
    let root = content_root();
    let (env_only, _) = controller(&root, LaunchOptions::default());
    let (overridden, _) = controller(&root, LaunchOptions::new(false, Some("dev".to_string())));

    // When
    env_only.ensure_server().await.unwrap();
    overridden.ensure_server().await.unwrap();
    overridden.apply_process_mode(overridden.options().process_mode.as_deref());

    // Then
    assert_eq!(env_only.process_mode(), ProcessMode::Production);
    assert_eq!(overridden.process_mode(), ProcessMode::Development);
}

#[tokio::test]
#[serial]
async fn given_unknown_app_filter_when_starting_then_config_error_and_no_handle() {
    // Given
    let root = content_root();
    let controller = ServerController::new(
        ContentRootSource::new(root.path(), AppFilter::parse("blog")),
        HttpEngineFactory,
        LaunchOptions::default(),
    );

    // When
    let result = controller.start().await;

    // Then
    assert!(matches!(result, Err(ServerError::Config { .. })));
    assert!(controller.current_handle().is_none());
}
