use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("{path} is not a database file: {message}")]
    NotADatabase { path: String, message: String },

    #[error("{path} is not an airport database (missing tables: {})", .missing.join(", "))]
    NotAnAirportDatabase { path: String, missing: Vec<String> },

    #[error("No database is open")]
    NotConnected,

    #[error("The application has ended")]
    ApplicationEnded,

    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Cannot map column {column}: {message}")]
    RowMappingError { column: String, message: String },

    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Database,
    Configuration,
    Session,
    Lookup,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status; `Low` is a warning and still exits successfully.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AppError {
    /// Reclassifies a store error raised by a write.
    pub fn from_write(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ffi_err, message)
                if ffi_err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AppError::ConstraintViolation {
                    message: message.unwrap_or_else(|| ffi_err.to_string()),
                }
            }
            other => AppError::DatabaseError(other),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::DatabaseError(_) | AppError::ConstraintViolation { .. } => {
                ErrorCategory::Database
            }
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::NotADatabase { .. }
            | AppError::NotAnAirportDatabase { .. }
            | AppError::NotConnected
            | AppError::ApplicationEnded => ErrorCategory::Session,
            AppError::NotFound { .. } => ErrorCategory::Lookup,
            AppError::RowMappingError { .. } | AppError::SerializationError(_) => {
                ErrorCategory::Data
            }
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::NotFound { .. } | AppError::ConstraintViolation { .. } => ErrorSeverity::Low,
            AppError::NotConnected
            | AppError::ApplicationEnded
            | AppError::NotADatabase { .. }
            | AppError::NotAnAirportDatabase { .. } => ErrorSeverity::Medium,
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::RowMappingError { .. }
            | AppError::SerializationError(_) => ErrorSeverity::High,
            AppError::DatabaseError(_) | AppError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Short text meant for the user interface.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::NotADatabase { .. } => "Not a database file".to_string(),
            AppError::NotAnAirportDatabase { .. } => "Not an airport database".to_string(),
            AppError::ConstraintViolation { message } => format!("Save failed: {}", message),
            AppError::DatabaseError(e) => format!("Database error: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Database => {
                "Check that referenced ids exist and unique codes are not already taken"
            }
            ErrorCategory::Configuration => "Fix the configuration file or command-line options",
            ErrorCategory::Session => "Open a valid airport database first",
            ErrorCategory::Lookup => "Search again to pick an existing record",
            ErrorCategory::Data => "The database contains values of an unexpected type",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
