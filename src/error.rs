use thiserror::Error;

pub type Result<T> = std::result::Result<T, TicketingError>;

#[derive(Error, Debug)]
pub enum TicketingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
