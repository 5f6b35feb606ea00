//! Hamming (7,4) error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! The (7,4) code encodes 4 data bits into 7 bits by adding 3 even-parity bits, and can correct
//! any single-bit error in a codeword.
//!
//! Codewords are laid out as `(p1, p2, d1, p3, d2, d3, d4)`: parity bits sit at the power-of-two
//! positions 1, 2 and 4, so the recomputed syndrome read as a binary number is the 1-based
//! position of a flipped bit.
//!
//! | parity | covers         |
//! |--------|----------------|
//! | p1     | d1, d2, d4     |
//! | p2     | d1, d3, d4     |
//! | p3     | d2, d3, d4     |
//!
//! # Limitations
//!
//! The code is single-error-correcting only. Two or more flipped bits produce a non-zero syndrome
//! that points at some third position; the decoder flips that bit and returns wrong data without
//! any way to tell. This is a property of the (7,4) code itself and is not reported as an error.
//!
//! # Examples
//!
//! ```
//! use hamming_codec::cs::ecc::hamming::{decode, encode, DataWord};
//!
//! let data: DataWord = "1011".parse().unwrap();
//! let codeword = encode(data);
//! assert_eq!(codeword.to_string(), "0110011");
//!
//! let received = codeword.flip(5).unwrap();
//! let (recovered, position) = decode(received);
//! assert_eq!(position, 5);
//! assert_eq!(recovered, data);
//! ```

use crate::cs::ecc::{ErrorCorrection, Result};
use crate::cs::error::Error;
use bitvec::prelude::*;
use bitvec::view::BitView;
use log::{debug, trace};
use rand::Rng;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of data bits per codeword
pub const DATA_BITS: usize = 4;

/// Number of bits in a codeword
pub const CODEWORD_BITS: usize = 7;

/// 0-indexed codeword slots holding d1..d4 (1-based positions 3, 5, 6, 7)
const DATA_SLOTS: [usize; DATA_BITS] = [2, 4, 5, 6];

/// Four data bits `d1..d4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataWord([bool; DATA_BITS]);

impl DataWord {
    pub const fn new(bits: [bool; DATA_BITS]) -> Self {
        DataWord(bits)
    }

    /// Builds a data word from the low nibble of `nibble`, d1 being the most significant bit.
    pub fn from_nibble(nibble: u8) -> Self {
        DataWord(std::array::from_fn(|i| (nibble >> (3 - i)) & 1 == 1))
    }

    /// Packs the word back into a nibble, d1 in bit 3.
    pub fn to_nibble(self) -> u8 {
        self.0
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
    }

    pub fn bits(&self) -> [bool; DATA_BITS] {
        self.0
    }

    /// Every possible data word, `0000` through `1111`.
    pub fn all() -> impl Iterator<Item = DataWord> {
        (0u8..16).map(Self::from_nibble)
    }
}

impl From<[bool; DATA_BITS]> for DataWord {
    fn from(bits: [bool; DATA_BITS]) -> Self {
        DataWord(bits)
    }
}

impl TryFrom<&[bool]> for DataWord {
    type Error = Error;

    fn try_from(bits: &[bool]) -> Result<Self> {
        let bits: [bool; DATA_BITS] = bits.try_into().map_err(|_| Error::InvalidLength {
            expected: DATA_BITS,
            actual: bits.len(),
        })?;
        Ok(DataWord(bits))
    }
}

impl Display for DataWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&bits_to_string(&self.0))
    }
}

impl FromStr for DataWord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DataWord::try_from(parse_bits(s)?.as_slice())
    }
}

/// Seven transmitted bits `(p1, p2, d1, p3, d2, d3, d4)`, positions 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codeword([bool; CODEWORD_BITS]);

impl Codeword {
    pub const fn new(bits: [bool; CODEWORD_BITS]) -> Self {
        Codeword(bits)
    }

    pub fn bits(&self) -> [bool; CODEWORD_BITS] {
        self.0
    }

    /// Returns the bit at a 1-based position, or `None` outside 1..=7.
    pub fn get(&self, position: usize) -> Option<bool> {
        position
            .checked_sub(1)
            .and_then(|index| self.0.get(index).copied())
    }

    /// Returns a copy with the bit at the 1-based `position` inverted.
    pub fn flip(self, position: usize) -> Result<Codeword> {
        if !(1..=CODEWORD_BITS).contains(&position) {
            return Err(Error::InvalidPosition(position));
        }
        Ok(self.flipped(position))
    }

    fn flipped(mut self, position: usize) -> Codeword {
        self.0[position - 1] = !self.0[position - 1];
        self
    }

    /// Recomputes the three parity checks against the received bits.
    pub fn syndrome(&self) -> Syndrome {
        let [p1, p2, d1, p3, d2, d3, d4] = self.0;
        Syndrome {
            s1: p1 ^ d1 ^ d2 ^ d4,
            s2: p2 ^ d1 ^ d3 ^ d4,
            s3: p3 ^ d2 ^ d3 ^ d4,
        }
    }

    /// Reads d1..d4 straight out of the codeword without any correction.
    pub fn data(&self) -> DataWord {
        DataWord(DATA_SLOTS.map(|slot| self.0[slot]))
    }
}

impl From<[bool; CODEWORD_BITS]> for Codeword {
    fn from(bits: [bool; CODEWORD_BITS]) -> Self {
        Codeword(bits)
    }
}

impl TryFrom<&[bool]> for Codeword {
    type Error = Error;

    fn try_from(bits: &[bool]) -> Result<Self> {
        let bits: [bool; CODEWORD_BITS] = bits.try_into().map_err(|_| Error::InvalidLength {
            expected: CODEWORD_BITS,
            actual: bits.len(),
        })?;
        Ok(Codeword(bits))
    }
}

impl Display for Codeword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&bits_to_string(&self.0))
    }
}

impl FromStr for Codeword {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Codeword::try_from(parse_bits(s)?.as_slice())
    }
}

/// Result of the three parity checks over a received codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Syndrome {
    pub s1: bool,
    pub s2: bool,
    pub s3: bool,
}

impl Syndrome {
    /// 1-based position of the bit in error (`s3*4 + s2*2 + s1`), 0 when all checks pass.
    pub fn position(&self) -> usize {
        usize::from(self.s3) * 4 + usize::from(self.s2) * 2 + usize::from(self.s1)
    }

    pub fn is_zero(&self) -> bool {
        self.position() == 0
    }
}

impl Display for Syndrome {
    /// Written most significant first, `s3 s2 s1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&bits_to_string(&[self.s3, self.s2, self.s1]))
    }
}

/// Encodes four data bits into a (7,4) codeword using even parity.
pub fn encode(data: DataWord) -> Codeword {
    let [d1, d2, d3, d4] = data.0;
    let p1 = d1 ^ d2 ^ d4;
    let p2 = d1 ^ d3 ^ d4;
    let p3 = d2 ^ d3 ^ d4;
    Codeword([p1, p2, d1, p3, d2, d3, d4])
}

/// Decodes a received codeword, correcting at most one flipped bit.
///
/// Returns the recovered data and the detected 1-based error position, 0 if the
/// syndrome was clean. A non-zero position is the normal outcome for a corrupted word.
pub fn decode(codeword: Codeword) -> (DataWord, usize) {
    let syndrome = codeword.syndrome();
    let position = syndrome.position();

    let corrected = if position > 0 {
        debug!(
            "syndrome {} on codeword {}, error at position {}",
            syndrome, codeword, position
        );
        let corrected = codeword.flipped(position);
        debug!("flipped bit at position {} -> {}", position, corrected);
        corrected
    } else {
        codeword
    };

    (corrected.data(), position)
}

/// Encodes a 4-bit slice, failing with [`Error::InvalidLength`] for any other length.
pub fn hamming_encode(data: &[bool]) -> Result<Vec<bool>> {
    let data = DataWord::try_from(data)?;
    Ok(encode(data).0.to_vec())
}

/// Decodes a 7-bit slice, failing with [`Error::InvalidLength`] for any other length.
pub fn hamming_decode(codeword: &[bool]) -> Result<(Vec<bool>, usize)> {
    let codeword = Codeword::try_from(codeword)?;
    let (data, position) = decode(codeword);
    Ok((data.0.to_vec(), position))
}

/// Flips one uniformly chosen position of `codeword`, returning the corrupted word and the position.
pub fn inject_error<R: Rng + ?Sized>(codeword: Codeword, rng: &mut R) -> (Codeword, usize) {
    let position = rng.gen_range(1..=CODEWORD_BITS);
    (codeword.flipped(position), position)
}

/// Renders bits as a string of '0' and '1' in positional order.
pub fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

/// Parses a string of '0' and '1' characters into bits.
pub fn parse_bits(s: &str) -> Result<Vec<bool>> {
    s.chars()
        .enumerate()
        .map(|(index, character)| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(Error::InvalidBit { index, character }),
        })
        .collect()
}

/// A single correction made while decoding a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    /// Index of the 7-bit block in the stream
    pub block: usize,
    /// 1-based position flipped within that block
    pub position: usize,
}

/// Decoded bytes together with every correction applied on the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedStream {
    pub data: Vec<u8>,
    pub corrections: Vec<Correction>,
}

/// Byte-oriented (7,4) Hamming code.
///
/// Each input byte is split into two nibbles, high nibble first, and each nibble becomes one
/// codeword. Codewords are packed back to back, most significant bit first, and the final byte
/// is zero padded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming74;

impl Hamming74 {
    /// Gets the number of encoded bytes needed for a given number of input bytes
    pub fn encoded_bytes_needed(&self, input_bytes: usize) -> usize {
        (input_bytes * 2 * CODEWORD_BITS).div_ceil(8)
    }

    pub fn encode_word(&self, data: DataWord) -> Codeword {
        encode(data)
    }

    pub fn decode_word(&self, codeword: Codeword) -> (DataWord, usize) {
        decode(codeword)
    }

    /// Decodes a packed stream and reports where bits were corrected.
    pub fn decode_stream(&self, encoded: &[u8]) -> Result<DecodedStream> {
        if encoded.is_empty() {
            return Ok(DecodedStream::default());
        }

        let encoded_bits = encoded.view_bits::<Msb0>();
        let blocks = encoded_bits.len() / CODEWORD_BITS;
        let data_bytes = blocks / 2;
        if blocks % 2 != 0 || self.encoded_bytes_needed(data_bytes) != encoded.len() {
            return Err(Error::InvalidInput(format!(
                "{} bytes is not a valid Hamming (7,4) stream length",
                encoded.len()
            )));
        }

        let mut stream = DecodedStream {
            data: Vec::with_capacity(data_bytes),
            corrections: Vec::new(),
        };
        let mut nibbles = [0u8; 2];

        for block in 0..blocks {
            let start = block * CODEWORD_BITS;
            let bits = &encoded_bits[start..start + CODEWORD_BITS];
            let codeword = Codeword(std::array::from_fn(|i| bits[i]));

            let (data, position) = decode(codeword);
            trace!("block {}: {} -> {}", block, codeword, data);
            if position > 0 {
                stream.corrections.push(Correction { block, position });
            }

            nibbles[block % 2] = data.to_nibble();
            if block % 2 == 1 {
                stream.data.push((nibbles[0] << 4) | nibbles[1]);
            }
        }

        debug!(
            "decoded {} blocks into {} bytes with {} corrections",
            blocks,
            stream.data.len(),
            stream.corrections.len()
        );
        Ok(stream)
    }
}

impl ErrorCorrection for Hamming74 {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut encoded = bitvec![u8, Msb0; 0; data.len() * 2 * CODEWORD_BITS];

        for (block, nibble) in data.iter().flat_map(|&byte| [byte >> 4, byte & 0x0F]).enumerate() {
            let codeword = encode(DataWord::from_nibble(nibble));
            let start = block * CODEWORD_BITS;
            for (i, &bit) in codeword.0.iter().enumerate() {
                encoded.set(start + i, bit);
            }
        }

        Ok(encoded.as_raw_slice().to_vec())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.decode_stream(data)?.data)
    }
}
