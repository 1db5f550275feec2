use std::path::PathBuf;

use thiserror::Error;

use crate::schema::UserId;

#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("The file '{}' was not found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Dataset schema error: {0}")]
    SchemaError(String),

    #[error("No UserID found in the question and none remembered from earlier turns")]
    NoIdentifier,

    #[error("Data for UserID {0} could not be found.")]
    RecordNotFound(UserId),

    #[error("An error occurred while communicating with the Gemini API: {0}")]
    Generation(String),

    #[cfg(feature = "gemini")]
    #[error("An error occurred while communicating with the Gemini API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CopilotError {
    /// Errors that only abort the current turn. Everything else is fatal at startup.
    pub fn is_turn_recoverable(&self) -> bool {
        match self {
            CopilotError::NoIdentifier
            | CopilotError::RecordNotFound(_)
            | CopilotError::Generation(_) => true,
            #[cfg(feature = "gemini")]
            CopilotError::Http(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CopilotError>;
