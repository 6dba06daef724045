use thiserror::Error;

/// Error types that can occur during spectrum reconstruction.
#[derive(Error, Debug)]
pub enum FormicError {
    /// The instance cannot support a meaningful search (empty spectrum,
    /// target shorter than one fragment, and similar structural defects).
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),
    /// A run parameter is outside its legal range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Two fragments of different lengths were compared.
    #[error("Fragment length mismatch: {0} vs {1}")]
    FragmentLengthMismatch(usize, usize),
    /// File I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data.
    #[error("Parse error: {0}")]
    ParseError(String),
}
