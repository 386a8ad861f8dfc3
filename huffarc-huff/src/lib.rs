//! # Huffarc-Huff: Pure Rust tree-coded Huffman compression
//!
//! This crate compresses and decompresses arbitrary byte streams with an
//! adaptive Huffman code derived from the actual symbol distribution of
//! the input. The code tree itself is embedded in the compressed output,
//! making the format self-describing: no external dictionary is needed to
//! decode.
//!
//! ## Format
//!
//! - **Magic**: a fixed 32-bit marker identifying the tree-header variant
//! - **Tree header**: the code tree in preorder, bit-packed (`0` = internal
//!   node followed by both subtrees, `1` = leaf followed by a 9-bit symbol)
//! - **Body**: one variable-length code per input byte, terminated by the
//!   code of a pseudo-EOF symbol outside the byte range
//!
//! All fields are big-endian, MSB-first. Compression is two-pass (count,
//! rewind, encode); decompression is single-pass.
//!
//! ## Example
//!
//! ```rust
//! use huffarc_huff::{compress, decompress};
//!
//! let original = b"streams of bytes become streams of bits";
//!
//! let compressed = compress(original).unwrap();
//! let restored = decompress(&compressed).unwrap();
//!
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod decode;
pub mod encode;
pub mod header;
pub mod tree;

pub use decode::decode_huff;
pub use encode::{count_frequencies, encode_huff};
pub use huffarc_core::error::{HuffArcError, Result};
pub use tree::{CodeTable, CodeTree};

use huffarc_core::{BitReader, BitWriter};
use std::io::Cursor;

/// Number of bits per input word.
pub const BITS_PER_WORD: u8 = 8;

/// Number of raw byte values.
pub const ALPHABET_SIZE: usize = 1 << BITS_PER_WORD;

/// Symbol marking the logical end of the compressed body.
///
/// Lies outside the raw byte range, so the decoder can detect completion
/// without a separate length field.
pub const PSEUDO_EOF: u16 = ALPHABET_SIZE as u16;

/// Total symbol count: 256 byte values plus the pseudo-EOF marker.
pub const SYMBOL_COUNT: usize = ALPHABET_SIZE + 1;

/// Width of a serialized leaf symbol. 8 bits cannot represent the
/// pseudo-EOF value 256, so leaves carry 9 bits.
pub const SYMBOL_BITS: u8 = BITS_PER_WORD + 1;

/// Per-symbol occurrence counts, indexed by symbol value.
///
/// Slot 256 belongs to the pseudo-EOF marker and is forced to 1 by the
/// tree builder regardless of what the counting pass observed.
pub type CountTable = [u64; SYMBOL_COUNT];

/// Compress a byte slice into a self-describing Huffman stream.
///
/// # Example
///
/// ```rust
/// use huffarc_huff::compress;
///
/// let compressed = compress(b"aaaaaaaabbbbcc").unwrap();
/// assert!(!compressed.is_empty());
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(Cursor::new(data));
    let mut output = Vec::new();
    let mut writer = BitWriter::new(&mut output);
    encode_huff(&mut reader, &mut writer)?;
    drop(writer);
    Ok(output)
}

/// Decompress a Huffman stream produced by [`compress`].
///
/// # Example
///
/// ```rust
/// use huffarc_huff::{compress, decompress};
///
/// let compressed = compress(b"to be or not to be").unwrap();
/// assert_eq!(decompress(&compressed).unwrap(), b"to be or not to be");
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(Cursor::new(data));
    let mut output = Vec::new();
    decode_huff(&mut reader, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"").unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, b"");
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"A").unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, b"A");
    }

    #[test]
    fn test_repeated_byte() {
        let original = vec![0x41u8; 1000];
        let compressed = compress(&original).unwrap();

        // One dominant symbol compresses to roughly a bit per byte plus
        // the fixed header.
        assert!(compressed.len() < original.len() / 2);

        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }
}
