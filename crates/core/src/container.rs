//! Compressed container format: header, serialized tree, bit-packed payload.
//!
//! # Container Format
//!
//! ```text
//! +--------------------+
//! | header (2 bytes)   |  big-endian u16: (padding:3 bits << 13) | tree_size:13 bits
//! +--------------------+
//! | tree (tree_size)   |  pre-order serialization, see below
//! +--------------------+
//! | payload            |  Huffman codes bit-packed MSB-first; the low
//! | (rest of file)     |  `padding` bits of the last byte are filler
//! +--------------------+
//! ```
//!
//! # Tree Serialization
//!
//! Pre-order traversal over a tag alphabet:
//! - leaf: `'1'` then the leaf's byte value; values `'*'` and `'\'` are
//!   preceded by an escape `'\'` so the reader can tell a data byte from
//!   the escape marker itself
//! - internal: `'0'` then the left subtree, then the right subtree
//!
//! Tag and value positions are structurally disjoint (after a `'1'` the
//! next byte is always data), so leaf values `'0'` and `'1'` need no
//! escape. The reader walks the structure; the header's byte count exists
//! so the payload can be located without walking, and the two must agree.
//!
//! # Empty input
//!
//! An empty file compresses to a bare `(padding = 0, tree_size = 0)`
//! header: no tree, no payload.

use crate::bitio::{BitReader, BitWriter};
use crate::codes::CodeTable;
use crate::error::{FormatError, Result};
use crate::freq::FrequencyTable;
use crate::tree::Node;

/// Size of the container header in bytes
pub const HEADER_SIZE: usize = 2;

/// Largest serialized tree the 13-bit header field can describe
pub const MAX_TREE_BYTES: usize = 0x1FFF;

/// Tag byte opening a leaf node
const LEAF_TAG: u8 = b'1';

/// Tag byte opening an internal node
const INTERNAL_TAG: u8 = b'0';

/// Escape marker prefixing leaf values that collide with the tag alphabet
const ESCAPE: u8 = b'\\';

/// Historical second member of the escaped set, kept for format
/// compatibility with existing archives
const ESCAPED_STAR: u8 = b'*';

/// Pack the header: padding count in the top 3 bits, serialized tree size
/// in the low 13, big-endian.
///
/// # Errors
/// `FormatError::TreeTooLarge` if `tree_size` exceeds 8191. Unreachable
/// for byte alphabets (a 256-symbol tree serializes to at most 1023
/// bytes) but enforced rather than assumed.
pub fn encode_header(padding: u8, tree_size: usize) -> Result<[u8; 2]> {
    if tree_size > MAX_TREE_BYTES {
        return Err(FormatError::TreeTooLarge { size: tree_size }.into());
    }
    let header = ((padding as u16) << 13) | tree_size as u16;
    Ok(header.to_be_bytes())
}

/// Unpack the leading 2-byte header into `(padding, tree_size)`.
///
/// # Errors
/// `FormatError::TruncatedHeader` on fewer than 2 bytes.
pub fn parse_header(data: &[u8]) -> Result<(u8, usize)> {
    if data.len() < HEADER_SIZE {
        return Err(FormatError::TruncatedHeader { actual: data.len() }.into());
    }
    let header = u16::from_be_bytes([data[0], data[1]]);
    let padding = (header >> 13) as u8;
    let tree_size = (header & 0x1FFF) as usize;
    Ok((padding, tree_size))
}

/// Append the pre-order serialization of `root` to `out`.
pub fn serialize_tree(root: &Node, out: &mut Vec<u8>) {
    match root {
        Node::Leaf { byte, .. } => {
            out.push(LEAF_TAG);
            if *byte == ESCAPED_STAR || *byte == ESCAPE {
                out.push(ESCAPE);
            }
            out.push(*byte);
        }
        Node::Internal { left, right, .. } => {
            out.push(INTERNAL_TAG);
            serialize_tree(left, out);
            serialize_tree(right, out);
        }
    }
}

/// Rebuild a tree from its pre-order serialization.
///
/// Returns the root and the number of bytes consumed. Node weights are
/// reconstructed as zero; they only matter during encoding.
///
/// # Errors
/// `FormatError::InvalidTag` on an unknown tag byte, and
/// `FormatError::TruncatedTree` if the region ends while a node is still
/// expected.
pub fn deserialize_tree(data: &[u8]) -> Result<(Node, usize)> {
    let mut pos = 0;
    let root = read_node(data, &mut pos)?;
    Ok((root, pos))
}

fn read_node(data: &[u8], pos: &mut usize) -> Result<Node> {
    let tag = next_byte(data, pos)?;
    match tag {
        LEAF_TAG => {
            let mut value = next_byte(data, pos)?;
            if value == ESCAPE {
                value = next_byte(data, pos)?;
            }
            Ok(Node::Leaf { byte: value, weight: 0 })
        }
        INTERNAL_TAG => {
            let left = read_node(data, pos)?;
            let right = read_node(data, pos)?;
            Ok(Node::Internal {
                weight: 0,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        _ => Err(FormatError::InvalidTag { tag, offset: *pos - 1 }.into()),
    }
}

fn next_byte(data: &[u8], pos: &mut usize) -> Result<u8> {
    let byte = *data.get(*pos).ok_or(FormatError::TruncatedTree {
        required: *pos + 1,
        actual: data.len(),
    })?;
    *pos += 1;
    Ok(byte)
}

/// Compress `data` into a self-describing container.
///
/// Two passes over the input: one to count frequencies, one to emit
/// codes. Compression cannot fail on any input content; every byte value
/// that appears receives a code by construction.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let freq = FrequencyTable::from_bytes(data);

    let root = match Node::build(&freq) {
        Some(root) => root,
        None => return Ok(encode_header(0, 0)?.to_vec()),
    };
    let table = CodeTable::from_tree(&root)?;

    let mut tree_bytes = Vec::with_capacity(root.node_count() * 2);
    serialize_tree(&root, &mut tree_bytes);

    let padding = table.padding_bits(&freq);
    let header = encode_header(padding, tree_bytes.len())?;

    let mut writer = BitWriter::new();
    for &byte in data {
        let code = table.get(byte);
        writer.write_code(code.bits, code.len);
    }
    let (payload, _) = writer.finish();

    let mut out = Vec::with_capacity(HEADER_SIZE + tree_bytes.len() + payload.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(&tree_bytes);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decompress a container back to the original byte stream.
///
/// # Errors
/// `FormatError` on any corrupt or truncated shape: short header, bad
/// tree tags, a tree disagreeing with the header's byte count, or a
/// payload whose valid bits end in the middle of a code.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let (padding, tree_size) = parse_header(data)?;

    let rest = &data[HEADER_SIZE..];
    if rest.len() < tree_size {
        return Err(FormatError::TruncatedTree {
            required: tree_size,
            actual: rest.len(),
        }
        .into());
    }
    let (tree_region, payload) = rest.split_at(tree_size);

    if tree_size == 0 {
        if !payload.is_empty() {
            return Err(FormatError::PayloadWithoutTree.into());
        }
        return Ok(Vec::new());
    }

    let (root, consumed) = deserialize_tree(tree_region)?;
    if consumed != tree_size {
        return Err(FormatError::TreeSizeMismatch {
            expected: tree_size,
            actual: consumed,
        }
        .into());
    }

    let total_bits = payload.len() as u64 * 8;
    let valid_bits = total_bits
        .checked_sub(padding as u64)
        .ok_or(FormatError::TruncatedPayload)?;

    decode_payload(&root, payload, valid_bits)
}

/// Walk `valid_bits` of the payload through the tree: left on 0, right on
/// 1, emit a byte at each leaf and restart from the root. Padding bits
/// are never walked.
fn decode_payload(root: &Node, payload: &[u8], valid_bits: u64) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut reader = BitReader::new(payload);

    // A lone-leaf tree encodes its single symbol as one bit each.
    if let Node::Leaf { byte, .. } = root {
        for _ in 0..valid_bits {
            reader.read_bit()?;
            out.push(*byte);
        }
        return Ok(out);
    }

    let mut node = root;
    for _ in 0..valid_bits {
        let bit = reader.read_bit()?;
        if let Node::Internal { left, right, .. } = node {
            node = if bit { right } else { left };
        }
        if let Node::Leaf { byte, .. } = node {
            out.push(*byte);
            node = root;
        }
    }

    // The last valid bit must land exactly on a leaf.
    if !std::ptr::eq(node, root) {
        return Err(FormatError::TruncatedPayload.into());
    }
    Ok(out)
}
