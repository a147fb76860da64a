use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Requested document does not exist
    NotFound(String),
    /// Unknown email or wrong password (deliberately indistinguishable)
    InvalidCredentials,
    /// Required field missing or empty after trimming
    Validation(String),
    /// Unique index violation (users.email)
    Duplicate(String),
    DatabaseError(String),
    HashingError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::Duplicate(msg) => write!(f, "Duplicate key: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::HashingError(msg) => write!(f, "Hashing error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// MongoDB duplicate key error code
const DUPLICATE_KEY: i32 = 11000;

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        let duplicate = match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
            ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
            _ => false,
        };

        if duplicate {
            AppError::Duplicate(err.to_string())
        } else {
            AppError::DatabaseError(err.to_string())
        }
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::DatabaseError(format!("Failed to encode document: {}", err))
    }
}
