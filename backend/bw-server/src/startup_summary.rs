use bw_config::{Config, ProcessMode};

use log::{Level, log};

const SEPARATOR_WIDTH: usize = 40;

/// Served apps and their bindings between two rows of `*`.
pub fn render_apps(config: &Config) -> String {
    let separator = "*".repeat(SEPARATOR_WIDTH);
    let mut summary = format!("\n{separator}\n");

    for app in &config.server.apps {
        summary.push_str(&app.name);
        summary.push('\n');
        for binding in &app.bindings {
            summary.push_str(&format!("\t{binding}\n"));
        }
        summary.push('\n');
    }

    summary.push_str(&separator);
    summary
}

pub fn render_process_modes(config: &Config) -> String {
    let modes: Vec<&str> = config
        .server
        .process_modes
        .iter()
        .map(|m| m.as_str())
        .collect();

    format!("Server configured for Process Modes: {}", modes.join(","))
}

pub fn render_current_mode(mode: ProcessMode) -> String {
    format!("Current ProcessMode is {mode}")
}

/// The lines printed after every start, each with its log level.
///
/// The current mode is reported at that mode's severity.
pub fn startup_summary(config: &Config, mode: ProcessMode) -> Vec<(Level, String)> {
    vec![
        (Level::Info, render_apps(config)),
        (Level::Info, render_process_modes(config)),
        (mode.severity(), render_current_mode(mode)),
    ]
}

pub fn log_startup_summary(config: &Config, mode: ProcessMode) {
    for (level, line) in startup_summary(config, mode) {
        log!(level, "{line}");
    }
}
