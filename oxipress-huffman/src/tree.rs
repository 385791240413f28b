//! Huffman tree construction and code derivation.
//!
//! The tree lives in an arena: nodes are stored in a `Vec` and children are
//! referenced by index, so building and walking it needs no shared ownership.
//!
//! # Tie-breaking
//!
//! Construction repeatedly pops the two nodes with the smallest
//! `(weight, id)` key from a min-heap. Leaves receive ids in ascending byte
//! order and every internal node receives the next id when it is created, so
//! among equal weights the node created first wins. The first popped node
//! becomes the left child (bit `0`), the second the right child (bit `1`).
//! Compression and decompression both call [`HuffmanTree::build`], so they
//! always agree on the shape.

use crate::frequency::FrequencyTable;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Index of a node in the tree arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Leaf(u8),
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone, Copy)]
struct Node {
    weight: u64,
    kind: NodeKind,
}

/// A Huffman tree stored as an arena of nodes.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree for `frequencies`.
    ///
    /// Returns `None` when the table is empty. A single distinct symbol yields
    /// a tree whose root is that leaf.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let distinct = frequencies.distinct();
        if distinct == 0 {
            return None;
        }

        let mut nodes = Vec::with_capacity(2 * distinct - 1);
        let mut heap = BinaryHeap::with_capacity(distinct);

        for (symbol, count) in frequencies.symbols() {
            let id = nodes.len();
            nodes.push(Node {
                weight: count as u64,
                kind: NodeKind::Leaf(symbol),
            });
            heap.push(Reverse((count as u64, id)));
        }

        while let (Some(Reverse((w1, left))), Some(Reverse((w2, right)))) = (heap.pop(), heap.pop())
        {
            let id = nodes.len();
            nodes.push(Node {
                weight: w1 + w2,
                kind: NodeKind::Internal { left, right },
            });
            heap.push(Reverse((w1 + w2, id)));
        }

        // The last node created is the root.
        let root = nodes.len() - 1;
        Some(Self { nodes, root })
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Aggregated weight of `node`.
    pub fn weight(&self, node: NodeId) -> u64 {
        self.nodes[node].weight
    }

    /// The byte carried by `node` if it is a leaf.
    pub fn symbol(&self, node: NodeId) -> Option<u8> {
        match self.nodes[node].kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// The child reached from `node` by `bit` (`false` = left, `true` = right).
    ///
    /// Leaves have no children.
    pub fn child(&self, node: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[node].kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal { left, right } => Some(if bit { right } else { left }),
        }
    }

    /// Derive the prefix code of every leaf.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::empty();

        if let NodeKind::Leaf(symbol) = self.nodes[self.root].kind {
            table.codes[symbol as usize] = Code { bits: 0, len: 1 };
            return table;
        }

        let mut stack = vec![(self.root, Code { bits: 0, len: 0 })];
        while let Some((node, code)) = stack.pop() {
            match self.nodes[node].kind {
                NodeKind::Leaf(symbol) => table.codes[symbol as usize] = code,
                NodeKind::Internal { left, right } => {
                    // Depth stays well below 64: weights are 32-bit counts over
                    // at most 256 symbols, which bounds a Fibonacci-shaped tree.
                    debug_assert!(code.len < 64);
                    stack.push((right, code.extend(true)));
                    stack.push((left, code.extend(false)));
                }
            }
        }

        table
    }
}

/// A single prefix code: the low `len` bits of `bits`, MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    /// Code bits, right-aligned.
    pub bits: u64,
    /// Code length in bits (0 means "no code").
    pub len: u8,
}

impl Code {
    fn extend(self, bit: bool) -> Self {
        Self {
            bits: (self.bits << 1) | bit as u64,
            len: self.len + 1,
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.len).rev() {
            f.write_str(if (self.bits >> i) & 1 == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from byte value to prefix code.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Code; 256],
}

impl CodeTable {
    fn empty() -> Self {
        Self {
            codes: [Code::default(); 256],
        }
    }

    /// The code for `symbol`, if it occurs.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        let code = self.codes[symbol as usize];
        (code.len > 0).then_some(code)
    }

    /// Total bits needed to encode data with the given frequencies.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .symbols()
            .map(|(symbol, count)| {
                let len = self.codes[symbol as usize].len as u64;
                count as u64 * len
            })
            .sum()
    }
}
