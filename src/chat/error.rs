use thiserror::Error;

/// Rejected chat operation. The session is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Operation attempted in the wrong session state
    #[error("Not allowed: {0}")]
    Precondition(String),

    /// Bad input (empty message, unknown team tag)
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Game not found: {0}")]
    GameNotFound(String),
}
