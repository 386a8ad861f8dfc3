//! Compression pipeline: count, build, rewind, encode.

use crate::tree::{CodeTable, CodeTree};
use crate::{CountTable, PSEUDO_EOF, SYMBOL_COUNT, header};
use huffarc_core::error::Result;
use huffarc_core::{BitReader, BitWriter};
use std::io::{Read, Seek, Write};

/// Count 8-bit word occurrences over the whole input.
///
/// Reads until the source reports a clean end of data. The pseudo-EOF slot
/// is left untouched here; the tree builder forces it to 1. The caller owns
/// the rewind before the encoding pass.
pub fn count_frequencies<R: Read>(reader: &mut BitReader<R>) -> Result<CountTable> {
    let mut counts: CountTable = [0; SYMBOL_COUNT];
    while let Some(word) = reader.read_word()? {
        counts[word as usize] += 1;
    }
    Ok(counts)
}

/// Compress `reader` into `writer`.
///
/// First pass counts symbol frequencies, then the input is rewound and
/// encoded against the code table of the freshly built tree. The stream is
/// the 32-bit magic, the preorder tree header, the per-symbol codes, and
/// the pseudo-EOF code as terminator. Returns the number of bits written,
/// including the final byte's zero padding.
pub fn encode_huff<R: Read + Seek, W: Write>(
    reader: &mut BitReader<R>,
    writer: &mut BitWriter<W>,
) -> Result<u64> {
    let counts = count_frequencies(reader)?;
    let tree = CodeTree::from_counts(&counts);
    let codes = tree.codes();

    header::write_tree(&tree, writer)?;

    reader.rewind()?;
    while let Some(word) = reader.read_word()? {
        write_code(writer, &codes, word as u16)?;
    }
    write_code(writer, &codes, PSEUDO_EOF)?;
    writer.flush()?;

    Ok(writer.bits_written())
}

/// Emit one symbol's code bit-by-bit, most significant bit first.
fn write_code<W: Write>(writer: &mut BitWriter<W>, codes: &CodeTable, symbol: u16) -> Result<()> {
    for &bit in codes.code(symbol) {
        writer.write_bit(bit)?;
    }
    Ok(())
}
