use std::path::PathBuf;
use thiserror::Error;

/// Problems found while turning a line of text into a boat record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("boat name is empty")]
    EmptyName,

    #[error("boat name is longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("boat length must be positive, got {0}")]
    NonPositiveLength(f64),

    #[error("amount owed cannot be negative, got {0}")]
    NegativeAmount(f64),

    #[error("missing {0}")]
    MissingPayload(&'static str),
}

#[derive(Error, Debug)]
pub enum MarinaError {
    #[error("The marina is full ({capacity} boats)")]
    StoreFull { capacity: usize },

    #[error("No boat with that name")]
    NotFound(String),

    #[error("A boat named {0} already exists")]
    DuplicateName(String),

    #[error("That is more than the amount owed, ${owed:.2}")]
    Overpayment { owed: f64 },

    #[error("Monthly charges would push the balance of {0} out of range")]
    BalanceOverflow(String),

    #[error("Payment must be a positive amount, got {0}")]
    InvalidAmount(f64),

    #[error("Invalid boat data: {0}")]
    Parse(#[from] ParseError),

    #[error("Cannot read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    UnwritableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl MarinaError {
    /// Fatal errors end the session; everything else is reported and the menu continues.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MarinaError::UnreadableFile { .. }
                | MarinaError::UnwritableFile { .. }
                | MarinaError::Io(_)
                | MarinaError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MarinaError>;
