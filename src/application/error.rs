use thiserror::Error;

use crate::domain::OperationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("a customer with this CPF already exists: {0}")]
    CustomerAlreadyExists(String),

    #[error("no customer found with CPF {0}")]
    CustomerNotFound(String),
}
