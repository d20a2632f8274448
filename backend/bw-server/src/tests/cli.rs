use crate::tests::{MockBehavior, fixture};
use crate::{Action, Cli, ConsoleCommand, LaunchOptions, ServerError, run_console};

use std::path::PathBuf;

use clap::Parser;
use googletest::prelude::*;

#[test]
fn test_parse_full_command_line() {
    let cli = Cli::try_parse_from([
        "bamweb",
        "start",
        "--content",
        "/srv/site",
        "--apps",
        "shop; docs",
        "--verbose",
        "--process-mode",
        "prod",
    ])
    .unwrap();

    assert_eq!(cli.action, Some(Action::Start));
    assert_eq!(cli.content, Some(PathBuf::from("/srv/site")));
    assert_eq!(cli.app_filter().names(), ["shop", "docs"]);
    assert_eq!(
        cli.launch_options(),
        LaunchOptions::new(true, Some("prod".to_string()))
    );
}

#[test]
fn test_process_mode_alias_accepted() {
    let cli = Cli::try_parse_from(["bamweb", "--ProcessMode", "Test"]).unwrap();

    assert_eq!(cli.process_mode.as_deref(), Some("Test"));
    assert_eq!(cli.action, None);
}

#[test]
fn test_action_is_case_insensitive() {
    let cli = Cli::try_parse_from(["bamweb", "Restart"]).unwrap();
    assert_eq!(cli.action, Some(Action::Restart));
}

#[test]
fn test_unknown_action_rejected() {
    assert_that!(Cli::try_parse_from(["bamweb", "reload"]), err(anything()));
}

#[test]
fn test_defaults_without_arguments() {
    let cli = Cli::try_parse_from(["bamweb"]).unwrap();

    assert!(cli.content.is_none());
    assert!(cli.app_filter().is_empty());
    assert_eq!(cli.launch_options(), LaunchOptions::default());
}

#[test]
fn test_console_commands_accept_letters_and_words() {
    assert_eq!(ConsoleCommand::parse("s"), Some(ConsoleCommand::Start));
    assert_eq!(ConsoleCommand::parse(" START "), Some(ConsoleCommand::Start));
    assert_eq!(ConsoleCommand::parse("K"), Some(ConsoleCommand::Stop));
    assert_eq!(ConsoleCommand::parse("stop"), Some(ConsoleCommand::Stop));
    assert_eq!(ConsoleCommand::parse("r"), Some(ConsoleCommand::Restart));
    assert_eq!(ConsoleCommand::parse("Quit"), Some(ConsoleCommand::Quit));
    assert_eq!(ConsoleCommand::parse("x"), None);
    assert_eq!(ConsoleCommand::parse(""), None);
}

#[tokio::test]
async fn given_console_script_when_run_then_commands_drive_controller() {
    // Given
    let fixture = fixture(LaunchOptions::default());
    let input: &[u8] = b"s\nwhat\nr\n\nq\ns\n";

    // When
    let result = run_console(&*fixture.controller, input).await;

    // Then
    assert_that!(result, ok(anything()));
    assert_eq!(MockBehavior::count(&fixture.behavior.created), 2);
    assert_eq!(MockBehavior::count(&fixture.behavior.started), 2);
    assert_eq!(MockBehavior::count(&fixture.behavior.stopped), 2);
    assert!(fixture.controller.current_handle().is_none());
}

#[tokio::test]
async fn given_failing_command_when_console_runs_then_it_keeps_reading() {
    // Given
    let fixture = fixture(LaunchOptions::default());
    MockBehavior::set(&fixture.behavior.fail_start, true);
    let input: &[u8] = b"start\nk\n";

    // When
    let result = run_console(&*fixture.controller, input).await;

    // Then
    assert_that!(result, ok(anything()));
    assert_eq!(MockBehavior::count(&fixture.behavior.stopped), 1);
}

#[test]
fn test_recovery_hint_for_bind_failure() {
    let error = ServerError::engine_start(bw_engine::EngineError::Bind {
        addr: "127.0.0.1:80".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
    });

    assert!(error.recovery_hint().contains("binding"));
}
