use crate::launch_options::LaunchOptions;

use bw_config::AppFilter;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bamweb")]
#[command(about = "Serve static web applications from a content root")]
#[command(version)]
pub struct Cli {
    /// Action to run; without one an interactive console is started
    #[arg(value_enum, ignore_case = true)]
    pub action: Option<Action>,

    /// Content root holding bamweb.toml and the apps directory (prompted if omitted)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Comma or semicolon separated names of the apps to serve (default: all)
    #[arg(long)]
    pub apps: Option<String>,

    /// Log every request the server answers or fails to answer
    #[arg(long)]
    pub verbose: bool,

    /// Process mode overriding the one in the configuration file
    #[arg(long = "process-mode", alias = "ProcessMode", value_name = "MODE")]
    pub process_mode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Start,
    Stop,
    Restart,
}

impl Cli {
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions::new(self.verbose, self.process_mode.clone())
    }

    pub fn app_filter(&self) -> AppFilter {
        self.apps
            .as_deref()
            .map(AppFilter::parse)
            .unwrap_or_default()
    }
}
