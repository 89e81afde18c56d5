//! Error types for the hospital record console.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HospitalError {
    #[error("Invalid menu choice: '{0}'")]
    InvalidChoice(String),

    #[error("Invalid age: '{0}'")]
    InvalidAge(String),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HospitalError>;
