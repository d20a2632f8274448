/// Options from the command line that shape every start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Attach request logging on start
    pub verbose: bool,
    /// Raw process-mode argument, applied before each start
    pub process_mode: Option<String>,
}

impl LaunchOptions {
    pub fn new(verbose: bool, process_mode: Option<String>) -> Self {
        Self {
            verbose,
            process_mode,
        }
    }
}
