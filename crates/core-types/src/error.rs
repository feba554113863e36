use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Field '{0}' is not a non-negative integer")]
    NotNumeric(String),

    #[error("Field '{0}' does not fit in a 64-bit unsigned integer")]
    Overflow(String),
}
