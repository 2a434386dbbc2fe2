/// Result alias that carries the custom [`GalleryError`] type.
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Free-form error used where no richer variant applies. It allows the
    /// higher level application to surface a readable message without
    /// committing to a particular error taxonomy yet.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors raised while loading catalog files.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON errors raised while decoding catalog files.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    /// The catalog failed structural validation (duplicate or empty ids).
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl GalleryError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for GalleryError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for GalleryError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
