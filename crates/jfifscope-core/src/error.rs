//! Error types for jfifscope-core.

use thiserror::Error;

/// Result type for jfifscope-core operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Structural violations found while walking the marker segments.
///
/// Every variant aborts the parse; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer than 2 bytes were left where a marker code was expected.
    #[error("Unexpected end of data when reading marker at position {offset}")]
    TruncatedMarker { offset: usize },

    /// Marker code outside `0xFF01..=0xFFFE`.
    #[error("Invalid marker 0x{code:04X} at position {offset}")]
    InvalidMarker { code: u16, offset: usize },

    /// The first marker is not SOI.
    #[error("SOI marker not found (first marker is 0x{code:04X})")]
    MissingStartOfImage { code: u16 },

    /// SOI appeared after the first segment.
    #[error("Unexpected SOI marker at position {offset}")]
    UnexpectedStartOfImage { offset: usize },

    /// Fewer than 2 bytes were left where a payload length was expected.
    #[error("Unexpected end of data when reading payload length of 0x{code:04X} at position {offset}")]
    TruncatedLength { code: u16, offset: usize },

    /// The declared payload runs past the end of the buffer.
    #[error(
        "Payload of 0x{code:04X} at position {offset} declares {declared} bytes, only {available} available"
    )]
    TruncatedPayload {
        code: u16,
        offset: usize,
        declared: usize,
        available: usize,
    },
}

impl DecodeError {
    /// Byte offset the error refers to, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            Self::TruncatedMarker { offset }
            | Self::InvalidMarker { offset, .. }
            | Self::UnexpectedStartOfImage { offset }
            | Self::TruncatedLength { offset, .. }
            | Self::TruncatedPayload { offset, .. } => Some(offset),
            Self::MissingStartOfImage { .. } => Some(0),
        }
    }

    /// Marker code involved in the error, when one was read.
    pub fn marker_code(&self) -> Option<u16> {
        match *self {
            Self::InvalidMarker { code, .. }
            | Self::MissingStartOfImage { code }
            | Self::TruncatedLength { code, .. }
            | Self::TruncatedPayload { code, .. } => Some(code),
            Self::UnexpectedStartOfImage { .. } => Some(crate::marker::SOI),
            Self::TruncatedMarker { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_marker_message_is_uppercase_hex() {
        let err = DecodeError::InvalidMarker {
            code: 0xFF00,
            offset: 6,
        };
        assert_eq!(err.to_string(), "Invalid marker 0xFF00 at position 6");
        assert_eq!(err.offset(), Some(6));
        assert_eq!(err.marker_code(), Some(0xFF00));
    }

    #[test]
    fn test_truncated_marker_has_no_code() {
        let err = DecodeError::TruncatedMarker { offset: 1 };
        assert_eq!(err.marker_code(), None);
        assert_eq!(err.offset(), Some(1));
    }
}
