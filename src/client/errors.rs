use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or body-decoding failure as reported by reqwest.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Body decoded but failed a domain constraint.
    #[error("Invalid payload: {0}")]
    Payload(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<TypeConstraintError> for ClientError {
    fn from(err: TypeConstraintError) -> Self {
        ClientError::Payload(err.to_string())
    }
}
