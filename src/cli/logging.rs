//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Pick a level from the global `--quiet` / `--verbose` flags; quiet wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Default `log` filter for this level, overridable with `RUST_LOG`.
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Quiet => "off",
            LogLevel::Normal => "warn",
            LogLevel::Verbose => "debug",
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// Install `env_logger` on stderr with the default filter for `level`.
pub fn init_logging(level: LogLevel) {
    let env = env_logger::Env::default().default_filter_or(level.filter());
    // A second initialisation (e.g. in tests) is harmless.
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}
