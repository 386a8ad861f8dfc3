//! Decompression: replay the header tree, then walk it bit-by-bit.

use crate::tree::NodeKind;
use crate::{PSEUDO_EOF, header};
use huffarc_core::BitReader;
use huffarc_core::error::Result;
use std::io::{Read, Write};

/// Decompress `reader` into `writer`, returning the number of bytes
/// written.
///
/// The decoder is a state machine over the reconstructed tree: one bit is
/// read per transition, `0` descends left and `1` descends right. Reaching
/// a leaf emits its byte and resets to the root; reaching the pseudo-EOF
/// leaf is the only successful terminal state. If the input runs out
/// first, the stream is truncated and the error propagates - partial
/// output is never reported as success.
pub fn decode_huff<R: Read, W: Write>(reader: &mut BitReader<R>, writer: &mut W) -> Result<u64> {
    let tree = header::read_tree(reader)?;
    let root = tree.root();

    let mut written = 0u64;
    let mut current = root;
    loop {
        let bit = reader.read_bit()?;
        let next = tree.step(current, bit)?;
        match tree.node(next).kind {
            NodeKind::Leaf { symbol } if symbol == PSEUDO_EOF => break,
            NodeKind::Leaf { symbol } => {
                writer.write_all(&[symbol as u8])?;
                written += 1;
                current = root;
            }
            NodeKind::Internal { .. } => current = next,
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SYMBOL_BITS, compress};
    use huffarc_core::{BitWriter, HuffArcError};
    use std::io::Cursor;

    #[test]
    fn test_decode_reports_bytes_written() {
        let compressed = compress(b"decoded byte count").unwrap();

        let mut reader = BitReader::new(Cursor::new(&compressed));
        let mut output = Vec::new();
        let written = decode_huff(&mut reader, &mut output).unwrap();

        assert_eq!(written, output.len() as u64);
        assert_eq!(output, b"decoded byte count");
    }

    #[test]
    fn test_truncated_body() {
        let compressed = compress(&[0xAAu8; 4096]).unwrap();

        // Drop the tail of the body, keeping the header intact.
        let cut = &compressed[..compressed.len() - 64];
        let mut reader = BitReader::new(Cursor::new(cut));
        let mut output = Vec::new();
        let err = decode_huff(&mut reader, &mut output).unwrap_err();
        assert!(matches!(err, HuffArcError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_single_leaf_tree_rejected() {
        // A lone-leaf header parses, but walking it cannot make progress.
        let mut data = Vec::new();
        let mut writer = BitWriter::new(&mut data);
        writer.write_bits(header::HUFF_MAGIC_TREE, 32).unwrap();
        writer.write_bit(true).unwrap();
        writer.write_bits(u32::from(PSEUDO_EOF), SYMBOL_BITS).unwrap();
        writer.write_bits(0, 8).unwrap();
        writer.flush().unwrap();
        drop(writer);

        let mut reader = BitReader::new(Cursor::new(&data));
        let mut output = Vec::new();
        let err = decode_huff(&mut reader, &mut output).unwrap_err();
        assert!(matches!(err, HuffArcError::InvalidHeader { .. }));
    }
}
