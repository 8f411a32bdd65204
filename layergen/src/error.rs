//! Error types for generation and packaging

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LayergenError>;

/// Generation error type
#[derive(Debug, Error)]
pub enum LayergenError {
    /// The request could not be turned into at least one entity
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A built-in template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// A template failed to render
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Zip serialization failed
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing entry data into the in-memory archive failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `finish` was called before any file was added
    #[error("Cannot build an archive with no entries")]
    EmptyArchive,
}

impl LayergenError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether this error was caused by the caller's input rather than by
    /// template or archive machinery
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
