//! Error types for unresume library.

use std::io;
use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, recognizing, or rendering resumes.
///
/// Layout analysis itself never fails; only the I/O, recognition and
/// rendering edges produce these.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The upload is neither a supported image nor a PDF.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// A recognition file (TSV or JSON) could not be parsed.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// No image width was supplied and the recognition output carries none.
    #[error("Image width is unknown; pass it explicitly")]
    MissingImageWidth,

    /// The text recognition engine failed.
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// The text recognition engine could not be started.
    #[error("Recognizer unavailable: {0}")]
    RecognizerUnavailable(String),

    /// Error during rendering (Markdown, text, JSON, SVG).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedInput(err.to_string())
    }
}
