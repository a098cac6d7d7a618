//! Error types and handling for Letterbox

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for Letterbox operations
pub type Result<T> = std::result::Result<T, LetterboxError>;

/// Main error type for Letterbox operations
#[derive(Debug, Error)]
pub enum LetterboxError {
    /// Malformed user input (size string, quality, ...)
    #[error("{message}")]
    InvalidArgument { message: String },

    /// A matched file could not be opened or decoded as an image
    #[error("Cannot decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded image has zero width or height
    #[error("Source image has no pixels")]
    EmptyImage,

    /// Directory creation, enumeration or file creation failed
    #[error("Filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The letterboxed canvas could not be written as JPEG
    #[error("Cannot encode JPEG {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Settings file errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O errors without path context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`LetterboxError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Filesystem,
    Decode,
    Encode,
    Config,
}

impl LetterboxError {
    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new decode error for `path`
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create a new encode error for `path`
    pub fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }

    /// Create a new filesystem error for `path`
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Which part of the taxonomy this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::Argument,
            Self::Decode { .. } | Self::EmptyImage => ErrorKind::Decode,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::Config { .. } => ErrorKind::Config,
            Self::Filesystem { .. } | Self::Io(_) => ErrorKind::Filesystem,
        }
    }

    /// Process exit status: 2 for usage problems (as clap does), 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Argument | ErrorKind::Config => 2,
            ErrorKind::Filesystem | ErrorKind::Decode | ErrorKind::Encode => 1,
        }
    }

    /// Get the associated file path if available
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Filesystem { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Error context extension for adding file path information
pub trait ErrorContext<T> {
    /// Attach `path` to an I/O failure
    fn with_path<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ErrorContext<T> for std::result::Result<T, std::io::Error> {
    fn with_path<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|e| LetterboxError::filesystem(path.as_ref(), e))
    }
}
