use crate::config_source::ConfigSource;
use crate::error::Result as ServerResult;
use crate::lifecycle::ServerController;

use bw_engine::EngineFactory;

use log::error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const MENU: &str = "[S]tart  [K]ill (stop)  [R]estart  [Q]uit";

/// A line typed at the interactive console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Start,
    Stop,
    Restart,
    Quit,
}

impl ConsoleCommand {
    /// Single letters or full words, case-insensitive.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "s" | "start" => Some(Self::Start),
            "k" | "kill" | "stop" => Some(Self::Stop),
            "r" | "restart" => Some(Self::Restart),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Read commands from `input` until quit or end of input, then stop the
/// server.
///
/// A failing command is reported and the console keeps going.
pub async fn run_console<S, F, R>(controller: &ServerController<S, F>, input: R) -> ServerResult<()>
where
    S: ConfigSource,
    F: EngineFactory,
    R: AsyncBufRead + Unpin,
{
    println!("{MENU}");
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let Some(command) = ConsoleCommand::parse(&line) else {
            if !line.trim().is_empty() {
                println!("Unrecognized command '{}'. {MENU}", line.trim());
            }
            continue;
        };

        let result = match command {
            ConsoleCommand::Start => controller.start().await,
            ConsoleCommand::Stop => controller.stop().await,
            ConsoleCommand::Restart => controller.restart().await,
            ConsoleCommand::Quit => break,
        };

        if let Err(e) = result {
            error!("{e}");
            println!("{}", e.recovery_hint());
        }
    }

    controller.stop().await
}
