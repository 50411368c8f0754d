use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::huffman::frequency::FrequencyTable;

/// Index of a node in the tree's arena.
///
/// Nodes are appended in creation order, so the index doubles as the insertion
/// sequence number used to break weight ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: char, weight: u64 },
    Internal { weight: u64, left: NodeId, right: NodeId },
}

impl Node {
    pub const fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

/// A Huffman tree stored as an arena of nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Builds the tree for `frequencies` with the greedy two-smallest merge.
    ///
    /// Leaves enter the queue in code point order and entries are ordered by
    /// `(weight, NodeId)`. The first node popped becomes the left child. Any
    /// change to these rules changes the codes and breaks existing files.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(Error::EmptyFrequencyTable);
        }

        let mut nodes = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut queue = BinaryHeap::with_capacity(frequencies.len());

        for (symbol, weight) in frequencies {
            let id = NodeId(nodes.len());
            nodes.push(Node::Leaf { symbol, weight });
            queue.push(Reverse((weight, id)));
        }

        let root = loop {
            let Some(Reverse((left_weight, left))) = queue.pop() else {
                return Err(Error::EmptyFrequencyTable);
            };
            // the last node standing is the root
            let Some(Reverse((right_weight, right))) = queue.pop() else {
                break left;
            };
            let weight = left_weight + right_weight;
            let id = NodeId(nodes.len());
            nodes.push(Node::Internal { weight, left, right });
            queue.push(Reverse((weight, id)));
        };

        crate::if_tracing! {
            tracing::debug!(leaves = frequencies.len(), nodes = nodes.len(), "built huffman tree");
        }

        Ok(Self { nodes, root })
    }

    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Whether the whole tree is one leaf (a text with a single distinct symbol).
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.node(self.root), Node::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| matches!(node, Node::Leaf { .. })).count()
    }

    /// Sum of `weight * depth` over all leaves.
    ///
    /// A lone root leaf counts as depth 1, matching the 1-bit code it is given.
    pub fn weighted_path_length(&self) -> u64 {
        if self.is_single_leaf() {
            return self.node(self.root).weight();
        }

        let mut total = 0;
        let mut stack = vec![(self.root, 0u64)];
        while let Some((id, depth)) = stack.pop() {
            match *self.node(id) {
                Node::Leaf { weight, .. } => total += weight * depth,
                Node::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        total
    }
}
