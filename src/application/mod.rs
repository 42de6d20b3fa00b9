mod error;
mod service;

pub use error::AppError;
pub use service::*;
