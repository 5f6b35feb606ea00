//! Error correction code implementations.
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! Currently implemented:
//! - Hamming (7,4) codes
//!
//! # Examples
//!
//! ```rust
//! use hamming_codec::cs::ecc::{ErrorCorrection, Hamming74};
//!
//! let code = Hamming74;
//! let encoded = code.encode(b"hi").unwrap();
//! assert_eq!(code.decode(&encoded).unwrap(), b"hi");
//! ```

pub use crate::cs::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Hamming (7,4) single-error-correcting code
pub mod hamming;
pub use hamming::{
    bits_to_string, hamming_decode, hamming_encode, inject_error, parse_bits, Codeword,
    Correction, DataWord, DecodedStream, Hamming74, Syndrome,
};
