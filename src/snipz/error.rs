use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Invalid import format: {0}")]
    ImportFormat(String),

    #[error("Invalid share payload: {0}")]
    ShareFormat(String),

    #[error("Failed to persist '{key}': {reason}")]
    PersistenceWrite { key: String, reason: String },

    #[error("Unreadable '{key}': {reason}")]
    UnreadableDocument { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SnipzError>;
