/// Error types for proj
///
/// Every failure a store operation or the dispatcher can hit.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for proj operations
#[derive(Error, Debug)]
pub enum ProjError {
    /// No project name was given (or it was blank)
    #[error("name must be provided")]
    MissingArgument,

    /// Lookup for a name that was never added
    #[error("no project called {0} found")]
    NotFound(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON store file
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for proj operations
pub type Result<T> = std::result::Result<T, ProjError>;

impl ProjError {
    /// Convert to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ProjError::MissingArgument | ProjError::NotFound(_) => self.to_string(),
            ProjError::Database(e) => {
                format!("Database error occurred. Details: {}", e)
            }
            ProjError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            ProjError::Serialization(e) => {
                format!("Project file is not valid JSON: {}", e)
            }
            ProjError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}
