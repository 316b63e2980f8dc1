//! Unified error types for the back-office service.
//!
//! Validation errors are raised before any store write; database errors wrap
//! whatever the store reports for a rejected write. Chat API failures carry
//! their own variant so the assistant can recover them locally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// An amount field did not parse to a positive finite number.
    /// Raised at the boundary, before any write is attempted.
    #[error("Invalid amount {input:?}: expected a positive number")]
    InvalidAmount { input: String },

    /// A required field was empty or missing.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// A project id resolved to nothing (deleted concurrently or never
    /// existed). Callers render this as a "not found" view, not a toast.
    #[error("Project {id} not found")]
    ProjectNotFound { id: i64 },

    /// A salary transaction referenced a staff member that does not exist.
    #[error("Staff member {id} not found")]
    StaffNotFound { id: i64 },

    /// Some other record kind resolved to nothing.
    #[error("{kind} {id} not found")]
    RecordNotFound { kind: &'static str, id: i64 },

    /// The generative chat API failed; recovered by the canned fallback.
    #[error("Chat API error: {message}")]
    ChatApi { message: String },

    /// The store rejected or failed a read/write.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// True for local precondition failures that never reached the store.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. } | Self::MissingField { .. })
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
