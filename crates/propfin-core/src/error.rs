use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropfinError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PropfinError {
    fn from(e: serde_json::Error) -> Self {
        PropfinError::SerializationError(e.to_string())
    }
}
