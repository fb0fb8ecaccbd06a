//! Central error types for the EBML float element.
//!
//! Variants referring to the wire format name the relevant RFC 8794 section.

use core::fmt;
use std::io;

/// All errors the float element can report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A default value was already assigned; it can be set only once.
    DefaultAlreadySet,
    /// The default value was read before one was assigned.
    DefaultNotSet,
    /// The value was read before it was set or parsed.
    ValueNotSet,
    /// The declared payload size is neither 4 nor 8 bytes (RFC 8794, 7.3).
    InvalidFloatSize(u64),
    /// The byte source ended before the payload was complete.
    PrematureEndOfStream,
    /// Ein IO-Fehler des umgebenden Streams, unveraendert weitergereicht.
    IoError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultAlreadySet => write!(f, "default value already set"),
            Self::DefaultNotSet => write!(f, "default value not set"),
            Self::ValueNotSet => write!(f, "value not set"),
            Self::InvalidFloatSize(size) => {
                write!(f, "invalid float size {size}, expected 4 or 8 (RFC 8794, 7.3)")
            }
            Self::PrematureEndOfStream => write!(f, "premature end of stream"),
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::PrematureEndOfStream,
            _ => Self::IoError(err.to_string()),
        }
    }
}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
