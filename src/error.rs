//! Error types for the generation pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::lint::LintWarning;

/// Errors that can occur while generating or writing a rainbow
#[derive(Debug, Error)]
pub enum RainbowError {
    /// Error loading the configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The output file could not be written
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict mode rejected degenerate geometry
    #[error("geometry lint failed: {}", format_warnings(.0))]
    Lint(Vec<LintWarning>),
}

fn format_warnings(warnings: &[LintWarning]) -> String {
    warnings
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
