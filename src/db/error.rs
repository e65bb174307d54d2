use thiserror::Error;
use tokio_postgres::error::SqlState;

/// Result type for database operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for database operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid connection string or pool settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Connection error - database unreachable or authentication failure
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Pool error - connection pool issues
    #[error("Pool error: {0}")]
    PoolError(String),

    /// A UNIQUE constraint rejected the write
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// A value exceeded its column length
    #[error("Value too long: {0}")]
    ValueTooLong(String),

    /// Any other SQL error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl Error {
    /// Description that is safe to hand back to an HTTP caller.
    ///
    /// Raw driver text can leak schema details, so only the classification
    /// is exposed.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::UniqueViolation { .. } => "username or email already exists",
            Error::ValueTooLong(_) => "value exceeds the allowed length",
            Error::ConfigError(_) | Error::ConnectionError(_) | Error::PoolError(_) => {
                "database unavailable"
            }
            Error::DatabaseError(_) => "database error",
        }
    }
}

/// Classify tokio-postgres errors by SQLSTATE
impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            let code = db_error.code();

            if *code == SqlState::UNIQUE_VIOLATION {
                return Error::UniqueViolation {
                    constraint: db_error.constraint().unwrap_or("unknown").to_string(),
                };
            }

            if *code == SqlState::STRING_DATA_RIGHT_TRUNCATION {
                return Error::ValueTooLong(db_error.message().to_string());
            }

            return Error::DatabaseError(format!("{}: {}", code.code(), db_error.message()));
        }

        if err.is_closed() {
            return Error::ConnectionError(err.to_string());
        }

        Error::DatabaseError(format!("{:?}", err))
    }
}

impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::PoolError(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::ConfigError(err.to_string())
    }
}
