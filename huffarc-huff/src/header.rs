//! Serialization and reconstruction of the code tree header.
//!
//! The header grammar is self-delimiting: a `0` bit announces an internal
//! node followed by its two serialized subtrees, a `1` bit announces a leaf
//! followed by its 9-bit symbol. Reading terminates exactly when the
//! serialized structure is exhausted; no length prefix exists.

use crate::tree::{CodeTree, NodeId, NodeKind};
use crate::{PSEUDO_EOF, SYMBOL_BITS, SYMBOL_COUNT};
use huffarc_core::error::{HuffArcError, Result};
use huffarc_core::{BitReader, BitWriter};
use std::io::{Read, Write};

/// Base magic number of the Huffarc stream format.
pub const HUFF_MAGIC: u32 = 0xFACE_8200;

/// Magic variant announcing that a preorder tree header follows.
pub const HUFF_MAGIC_TREE: u32 = HUFF_MAGIC | 1;

/// Any valid tree over 257 leaves has height below this; deeper recursion
/// while reading means the header is garbage that parses as an endless run
/// of internal nodes.
const MAX_TREE_DEPTH: usize = SYMBOL_COUNT;

/// Write the 32-bit magic and the preorder-encoded tree.
pub fn write_tree<W: Write>(tree: &CodeTree, writer: &mut BitWriter<W>) -> Result<()> {
    writer.write_bits(HUFF_MAGIC_TREE, 32)?;
    write_node(tree, tree.root(), writer)
}

fn write_node<W: Write>(tree: &CodeTree, id: NodeId, writer: &mut BitWriter<W>) -> Result<()> {
    match tree.node(id).kind {
        NodeKind::Internal { left, right } => {
            writer.write_bit(false)?;
            write_node(tree, left, writer)?;
            write_node(tree, right, writer)
        }
        NodeKind::Leaf { symbol } => {
            writer.write_bit(true)?;
            writer.write_bits(u32::from(symbol), SYMBOL_BITS)
        }
    }
}

/// Read the magic and reconstruct the code tree from the header bits.
///
/// Both the base magic and the tree-header variant are accepted. A wrong
/// magic fails before any output is produced; end-of-data inside the
/// header is a truncation error. Reconstructed nodes carry weight zero -
/// decoding only follows the structure.
pub fn read_tree<R: Read>(reader: &mut BitReader<R>) -> Result<CodeTree> {
    let magic = reader.read_bits(32)?;
    if magic != HUFF_MAGIC && magic != HUFF_MAGIC_TREE {
        return Err(HuffArcError::invalid_magic(HUFF_MAGIC_TREE, magic));
    }

    let mut tree = CodeTree::empty();
    let root = read_node(reader, &mut tree, 0)?;
    tree.set_root(root);
    Ok(tree)
}

fn read_node<R: Read>(
    reader: &mut BitReader<R>,
    tree: &mut CodeTree,
    depth: usize,
) -> Result<NodeId> {
    if depth > MAX_TREE_DEPTH {
        return Err(HuffArcError::invalid_header(
            "tree header exceeds maximum depth",
        ));
    }

    if reader.read_bit()? {
        let symbol = reader.read_bits(SYMBOL_BITS)? as u16;
        if symbol > PSEUDO_EOF {
            return Err(HuffArcError::invalid_header(format!(
                "leaf symbol {symbol} out of range"
            )));
        }
        Ok(tree.push_leaf(symbol, 0))
    } else {
        let left = read_node(reader, tree, depth + 1)?;
        let right = read_node(reader, tree, depth + 1)?;
        Ok(tree.push_internal(left, right))
    }
}
