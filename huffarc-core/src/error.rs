//! Error types for Huffarc operations.
//!
//! All failures in the compression pipeline are unrecoverable for the
//! current call: they propagate to the caller as a distinguishable error,
//! never as silently truncated output.

use std::io;
use thiserror::Error;

/// The main error type for Huffarc operations.
#[derive(Debug, Error)]
pub enum HuffArcError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic number at the start of a compressed stream.
    #[error("Invalid magic number: expected {expected:#010x}, found {found:#010x}")]
    InvalidMagic {
        /// Expected magic value.
        expected: u32,
        /// Actual magic value found.
        found: u32,
    },

    /// The bit source signaled end-of-data while a definite field
    /// (header bit, symbol payload, body bit) was still expected.
    #[error("Unexpected end of input at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position where the input ran out.
        bit_position: u64,
    },

    /// Structurally malformed stream header.
    ///
    /// Only structural impossibilities are detected. A malformed header
    /// that still parses produces undefined decoded output, not an error.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },
}

/// Result type alias for Huffarc operations.
pub type Result<T> = std::result::Result<T, HuffArcError>;

impl HuffArcError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: u32, found: u32) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bit_position: u64) -> Self {
        Self::UnexpectedEof { bit_position }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuffArcError::invalid_magic(0xFACE_8201, 0x1F8B_0808);
        assert!(err.to_string().contains("Invalid magic"));
        assert!(err.to_string().contains("0xface8201"));

        let err = HuffArcError::unexpected_eof(42);
        assert!(err.to_string().contains("bit position 42"));

        let err = HuffArcError::invalid_header("tree has too many leaves");
        assert!(err.to_string().contains("too many leaves"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: HuffArcError = io_err.into();
        assert!(matches!(err, HuffArcError::Io(_)));
    }
}
