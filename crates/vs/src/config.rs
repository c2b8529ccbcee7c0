#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Settings shared by every command, resolved from flags and the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    /// Input holds a `;`-separated list rather than a single version.
    pub list: bool,
}
