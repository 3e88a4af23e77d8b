//! Error types for worksheet generation and rendering.

use thiserror::Error;

/// Result type alias for worksheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering a worksheet.
///
/// None of these are fatal: the caller reports them and the user simply
/// retries the action. Nothing is retried automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested operation name is not one of the recognized set.
    #[error("unrecognized operation '{0}' (expected addition, subtraction, or multiplication)")]
    InvalidOperation(String),

    /// The worksheet font could not be fetched or read.
    #[error("failed to load worksheet font: {0}")]
    FontLoad(String),

    /// The PDF library failed during drawing or save.
    #[error("failed to render worksheet: {0}")]
    Render(String),

    /// Underlying I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
