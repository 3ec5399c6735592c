/// Error types for template tag rendering
use thiserror::Error;

/// Errors that can occur while presenting or rendering tags
#[derive(Debug, Error)]
pub enum TagsError {
    /// A compiled template failed to render
    #[error("Template render error: {0}")]
    Render(#[from] askama::Error),

    /// Form method other than get, post or inner
    #[error("Unknown form method: {0}")]
    InvalidMethod(String),

    /// No month/yesterday table for the requested locale
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TagsError>;

impl TagsError {
    /// Wrap into an askama error so filters can propagate it with `?`.
    pub fn into_askama(self) -> askama::Error {
        askama::Error::Custom(Box::new(self))
    }
}
