use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Form input that could not be turned into a typed value.
    #[error("Invalid input for {0}: {1}")]
    Validation(String, String),
}
