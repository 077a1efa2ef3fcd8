//! Application configuration
//!
//! Runtime settings derived from the command line, wrapping the user
//! configuration loaded from disk and environment.

use crate::config::LinestampConfig;
use crate::error::Result;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Suppress informational logging (report output is still printed)
    pub quiet: bool,
    /// Settings from config file and environment
    pub settings: LinestampConfig,
}

impl AppConfig {
    /// Create a new application configuration, loading user settings
    pub fn new(verbose: u8) -> Result<Self> {
        Ok(Self {
            verbose,
            quiet: false,
            settings: LinestampConfig::load()?,
        })
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_settings(mut self, settings: LinestampConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,reqwest=debug",
        }
    }
}
