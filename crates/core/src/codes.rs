//! Code table generation and bit accounting.
//!
//! Walking the tree assigns every leaf a codeword: append 0 going left,
//! 1 going right. Leaves are the only codeword endpoints, so no code is a
//! prefix of another by construction.
//!
//! Codewords are stored as a `u32` plus a bit length. 32 bits is far more
//! than any realistic byte-frequency distribution produces, but a
//! sufficiently skewed alphabet can exceed it; such trees are rejected
//! with [`HuffmanError::CodeTooLong`] rather than silently truncated.

use crate::error::{HuffmanError, Result};
use crate::freq::FrequencyTable;
use crate::tree::Node;

/// Widest representable codeword, bound by the `u32` storage.
pub const MAX_CODE_BITS: usize = 32;

/// One codeword: the low `len` bits of `bits`, MSB emitted first.
///
/// `len == 0` means the byte never appeared in the input and has no code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Code {
    pub bits: u32,
    pub len: u8,
}

/// Codewords for all 256 byte values.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Code; 256],
}

impl CodeTable {
    /// Assign codewords by walking the tree.
    ///
    /// A root that is itself a leaf (single distinct symbol) gets code 0
    /// with length 1, so every input byte still occupies one payload bit.
    ///
    /// # Errors
    /// `HuffmanError::CodeTooLong` if any leaf sits deeper than 32.
    pub fn from_tree(root: &Node) -> Result<Self> {
        let mut codes = [Code::default(); 256];

        if let Node::Leaf { byte, .. } = root {
            codes[*byte as usize] = Code { bits: 0, len: 1 };
            return Ok(Self { codes });
        }

        assign(root, 0, 0, &mut codes)?;
        Ok(Self { codes })
    }

    /// Codeword for a byte value (`len == 0` when unassigned).
    pub fn get(&self, byte: u8) -> Code {
        self.codes[byte as usize]
    }

    /// Exact payload size in bits: sum of frequency times code length.
    pub fn payload_bits(&self, freq: &FrequencyTable) -> u64 {
        freq.iter_nonzero()
            .map(|(byte, count)| count * self.get(byte).len as u64)
            .sum()
    }

    /// Filler bits needed to round the payload up to a whole byte (0-7).
    pub fn padding_bits(&self, freq: &FrequencyTable) -> u8 {
        ((8 - self.payload_bits(freq) % 8) % 8) as u8
    }
}

fn assign(node: &Node, bits: u32, depth: usize, codes: &mut [Code; 256]) -> Result<()> {
    match node {
        Node::Leaf { byte, .. } => {
            codes[*byte as usize] = Code {
                bits,
                len: depth as u8,
            };
            Ok(())
        }
        Node::Internal { left, right, .. } => {
            if depth == MAX_CODE_BITS {
                return Err(HuffmanError::CodeTooLong { length: depth + 1 }.into());
            }
            assign(left, bits << 1, depth + 1, codes)?;
            assign(right, (bits << 1) | 1, depth + 1, codes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(data: &[u8]) -> (CodeTable, FrequencyTable) {
        let freq = FrequencyTable::from_bytes(data);
        let root = Node::build(&freq).expect("nonempty input");
        (CodeTable::from_tree(&root).unwrap(), freq)
    }

    /// No assigned code may be a bit-prefix of another.
    fn assert_prefix_free(table: &CodeTable, freq: &FrequencyTable) {
        let assigned: Vec<(u8, Code)> = freq.iter_nonzero().map(|(b, _)| (b, table.get(b))).collect();
        for (a, ca) in &assigned {
            for (b, cb) in &assigned {
                if a == b {
                    continue;
                }
                let (short, long) = if ca.len <= cb.len { (ca, cb) } else { (cb, ca) };
                let shifted = long.bits >> (long.len - short.len);
                assert_ne!(shifted, short.bits, "code for {a} is a prefix of code for {b}");
            }
        }
    }

    #[test]
    fn test_abra_code_lengths() {
        let (table, freq) = table_for(b"AABRA");
        assert_eq!(table.get(b'A').len, 1);
        assert_eq!(table.get(b'B').len, 2);
        assert_eq!(table.get(b'R').len, 2);
        assert_eq!(table.get(b'Z').len, 0);
        assert_eq!(table.payload_bits(&freq), 3 * 1 + 1 * 2 + 1 * 2);
        assert_eq!(table.padding_bits(&freq), 1);
        assert_prefix_free(&table, &freq);
    }

    #[test]
    fn test_single_symbol_gets_one_bit_code() {
        let (table, freq) = table_for(b"xxxxxxxx");
        assert_eq!(table.get(b'x'), Code { bits: 0, len: 1 });
        assert_eq!(table.payload_bits(&freq), 8);
        assert_eq!(table.padding_bits(&freq), 0);
    }

    #[test]
    fn test_prefix_free_full_alphabet() {
        let data: Vec<u8> = (0u8..=255).flat_map(|b| vec![b; b as usize + 1]).collect();
        let (table, freq) = table_for(&data);
        assert_prefix_free(&table, &freq);
    }

    #[test]
    fn test_sibling_codes_differ_in_last_bit() {
        let (table, _) = table_for(b"AABRA");
        let b = table.get(b'B');
        let r = table.get(b'R');
        assert_eq!(b.len, r.len);
        assert_eq!(b.bits >> 1, r.bits >> 1);
        assert_ne!(b.bits & 1, r.bits & 1);
    }

    #[test]
    fn test_padding_complements_payload() {
        for data in [&b"AABRA"[..], b"abcdefg", b"aaaabbbcc", b"\x00\xff\x00"] {
            let (table, freq) = table_for(data);
            let bits = table.payload_bits(&freq);
            let padding = table.padding_bits(&freq) as u64;
            assert_eq!((bits + padding) % 8, 0);
            assert!(padding <= 7);
        }
    }

    #[test]
    fn test_code_deeper_than_32_is_rejected() {
        // Hand-built left spine 33 deep; unreachable from byte frequencies
        // in practice but the constraint must hold for any tree.
        let mut node = Node::Leaf { byte: 0, weight: 1 };
        for i in 1..=33u8 {
            node = Node::Internal {
                weight: node.weight() + 1,
                left: Box::new(node),
                right: Box::new(Node::Leaf { byte: i, weight: 1 }),
            };
        }
        assert!(matches!(
            CodeTable::from_tree(&node),
            Err(crate::error::Error::Huffman(HuffmanError::CodeTooLong { .. }))
        ));
    }
}
