//! Unified error types for the btgen tool.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during scaffolding.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Configuration ---

    /// The configuration file (`btgen.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Discovery / validation ---

    /// The example source directory could not be read.
    #[error("examples directory not found or unreadable: {path}")]
    ExamplesDirNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template directory does not exist.
    #[error("template directory not found: {0}")]
    TemplateDirNotFound(PathBuf),

    /// A required file inside the template directory is missing.
    #[error("template file missing: {0}")]
    TemplateFileMissing(PathBuf),

    /// An audio example's companion SCO utility source is missing.
    #[error("companion file missing: {0}")]
    CompanionFileMissing(PathBuf),

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
