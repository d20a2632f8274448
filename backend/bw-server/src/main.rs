use bw_server::{
    Action, Cli, ContentRootSource, ServerController, ServerResult, logger, run_console,
};

use bw_config::LoggingConfig;
use bw_engine::HttpEngineFactory;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::initialize(&LoggingConfig::from_env()) {
        eprintln!("Error: {e}");
        eprintln!("{}", e.recovery_hint());
        return ExitCode::FAILURE;
    }

    info!("Starting bamweb v{}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            eprintln!("{}", e.recovery_hint());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ServerResult<()> {
    let mut stdin = BufReader::new(tokio::io::stdin());

    let content_root = match cli.content {
        Some(ref path) => path.clone(),
        None => prompt_content_root(&mut stdin).await?,
    };

    let source = ContentRootSource::new(content_root, cli.app_filter());
    let controller = ServerController::new(source, HttpEngineFactory, cli.launch_options());

    let action = match cli.action {
        Some(action) => action,
        None => return run_console(&controller, stdin).await,
    };

    match action {
        Action::Stop => return controller.stop().await,
        Action::Start => controller.start().await?,
        Action::Restart => controller.restart().await?,
    }

    info!("Press Ctrl+C to stop");
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), stopping"),
        Err(e) => error!("Failed to listen for SIGINT: {e}"),
    }

    controller.stop().await
}

async fn prompt_content_root<R: AsyncBufRead + Unpin>(input: &mut R) -> ServerResult<PathBuf> {
    print!("Enter the path to the content root: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).await?;

    Ok(PathBuf::from(line.trim()))
}
