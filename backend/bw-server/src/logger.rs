use crate::error::{Result as ServerErrorResult, ServerError};

use bw_config::LoggingConfig;

use std::fmt::Arguments;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    level: &dyn std::fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

/// Install the process logger.
///
/// `config.file` appends plain lines to that file; otherwise lines go to
/// stdout, colored by level when `config.colored` is set.
#[track_caller]
pub fn initialize(config: &LoggingConfig) -> ServerErrorResult<()> {
    let level_filter = config.level.0;

    let output = match config.file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::logger(format!("Failed to open log file {path}: {e}")))?;

            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, &record.level()))
                .chain(file)
        }
        None if config.colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, &colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, &record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::logger(format!("Failed to initialize logger: {e}")))?;

    match config.file {
        Some(ref path) => info!("Logger initialized: level={level_filter:?}, file={path}"),
        None => info!("Logger initialized: level={level_filter:?}, stdout"),
    }

    Ok(())
}
