//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    // ─────────────────────────────────────────────────────────────
    // Definition Source Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to fetch field definitions: {message}")]
    Fetch { message: String },

    #[error("Malformed definition document: {message}")]
    Definition { message: String },

    // ─────────────────────────────────────────────────────────────
    // Submission Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Submission rejected with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Submission error: {message}")]
    Submission { message: String },

    // ─────────────────────────────────────────────────────────────
    // Extension Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Extension error: {message}")]
    Extension { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    pub fn definition(message: impl Into<String>) -> Self {
        Self::Definition {
            message: message.into(),
        }
    }

    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }

    pub fn extension(message: impl Into<String>) -> Self {
        Self::Extension {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Submission-side failures leave the form interactive and can be
    /// retried by the user.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Http { .. }
                | Error::Transport { .. }
                | Error::Submission { .. }
                | Error::Extension { .. }
        )
    }

    /// Check if this error prevents the form from being rendered at all.
    ///
    /// A failed or malformed definition fetch yields no form (no partial
    /// render is shown).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. } | Error::Definition { .. } | Error::Url(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
