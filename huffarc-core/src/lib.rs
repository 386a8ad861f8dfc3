//! # Huffarc Core
//!
//! Core components for the Huffarc compression library.
//!
//! This crate provides the building blocks the codec crates are written
//! against:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length codes
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! Huffarc is a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI                                         │
//! │     huffarc compress/decompress/test/info   │
//! ├─────────────────────────────────────────────┤
//! │ Codec                                       │
//! │     Tree-coded Huffman (huffarc-huff)       │
//! ├─────────────────────────────────────────────┤
//! │ BitStream (this crate)                      │
//! │     BitReader/BitWriter, MSB-first          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use huffarc_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0xB5, 8).unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(8).unwrap(), 0xB5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{HuffArcError, Result};
