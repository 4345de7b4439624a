//! Build configuration.

use std::path::PathBuf;

/// Directory packages are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Name of the note type every card uses.
pub const DEFAULT_MODEL_NAME: &str = "Simple Model";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for one build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub output_dir: PathBuf,
    pub model_name: String,
    pub log_filter: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BuildConfig {
    /// Use a different output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Effective log filter: `RUST_LOG` wins over the default.
    pub fn effective_log_filter(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.log_filter.clone())
    }
}
