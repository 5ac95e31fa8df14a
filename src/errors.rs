use thiserror::Error;

/// Unified error type for store, configuration, and report operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or is semantically invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No entry exists with the requested id
    #[error("Entry {id} not found")]
    EntryNotFound {
        /// Requested entry id
        id: i64,
    },

    /// No account exists with the requested number
    #[error("Account {number} not found")]
    AccountNotFound {
        /// Requested account number
        number: i32,
    },

    /// An account exists under this number but belongs to a different category
    #[error("Account {number} is not an {expected} account")]
    WrongAccountKind {
        /// Referenced account number
        number: i32,
        /// Category the caller required
        expected: &'static str,
    },

    /// No tax rate exists with the requested id
    #[error("Tax rate {id} not found")]
    TaxRateNotFound {
        /// Requested tax rate id
        id: i64,
    },

    /// A monetary amount outside the accepted range (e.g. a negative total)
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// Rejected amount in minor units
        amount: i64,
    },

    /// A tax rate outside the accepted `[0, 1)` range
    #[error("Invalid tax rate: {rate}")]
    InvalidRate {
        /// Rejected fractional rate
        rate: f64,
    },

    /// I/O failure while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
