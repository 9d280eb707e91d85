pub mod routes;
pub mod safety;
pub mod trips;

use thiserror::Error;

use crate::client::ClientError;
use crate::domain::types::TypeConstraintError;

/// Errors surfaced by the view-loading services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Metrics client error: {0}")]
    Client(#[from] ClientError),

    #[error("Constraint violation: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(err.to_string())
    }
}
