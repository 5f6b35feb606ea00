//! Error types shared by the coding modules.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the encoders, decoders and their helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bit sequence did not have the length the operation requires
    #[error("invalid length: expected {expected} bits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A textual bit string contained something other than '0' or '1'
    #[error("invalid bit {character:?} at index {index}")]
    InvalidBit { index: usize, character: char },

    /// A codeword position outside 1..=7
    #[error("invalid codeword position {0}, expected 1..=7")]
    InvalidPosition(usize),

    /// Malformed input that does not fit one of the more specific variants
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_message() {
        let err = Error::InvalidLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "invalid length: expected 4 bits, got 3");
    }

    #[test]
    fn test_invalid_bit_message() {
        let err = Error::InvalidBit {
            index: 2,
            character: 'x',
        };
        assert_eq!(err.to_string(), "invalid bit 'x' at index 2");
    }
}
