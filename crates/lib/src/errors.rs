use std::fmt;
use thiserror::Error;

/// Errors raised while expanding an lz-string Base64 stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressError {
    #[error("compressed input is empty")]
    Empty,
    #[error("invalid Base64 character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("compressed input ended before the end-of-stream marker")]
    UnexpectedEnd,
    #[error("back-reference {0} points past the dictionary")]
    BadReference(usize),
}

/// Every way a `docfetch` run can fail.
#[derive(Error, Debug)]
pub enum DocFetchError {
    #[error("Failed to fetch document: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("No JSON.parse('...') payload found in document")]
    PayloadNotFound,
    #[error("Embedded payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("Embedded payload has no usable 'content' field")]
    MissingContent,
    #[error("Failed to decompress content: {0}")]
    Decompress(#[from] DecompressError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Coarse classification of failures, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Transport,
    PayloadNotFound,
    MissingContent,
    Decompress,
    Output,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Usage => write!(f, "usage_error"),
            ErrorKind::Transport => write!(f, "transport_error"),
            ErrorKind::PayloadNotFound => write!(f, "payload_not_found"),
            ErrorKind::MissingContent => write!(f, "missing_content"),
            ErrorKind::Decompress => write!(f, "decompress_error"),
            ErrorKind::Output => write!(f, "output_error"),
        }
    }
}

impl DocFetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocFetchError::Transport(_) | DocFetchError::HttpStatus { .. } => ErrorKind::Transport,
            DocFetchError::PayloadNotFound
            | DocFetchError::InvalidPayload(_)
            | DocFetchError::Regex(_) => ErrorKind::PayloadNotFound,
            DocFetchError::MissingContent => ErrorKind::MissingContent,
            DocFetchError::Decompress(_) => ErrorKind::Decompress,
            DocFetchError::Io(_) => ErrorKind::Output,
        }
    }
}
