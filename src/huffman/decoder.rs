use crate::error::{Error, Result};
use crate::huffman::bits::BitStream;
use crate::huffman::code_table::{Code, CodeTable};
use crate::huffman::tree::{HuffmanTree, Node};

/// Walks `tree` once per symbol: `0` goes left, `1` goes right, a leaf emits its symbol.
///
/// The stream must end exactly on a symbol boundary.
pub fn decode(stream: &BitStream, tree: &HuffmanTree) -> Result<String> {
    let total = stream.len();
    let mut text = String::with_capacity(total / 2);

    if let Node::Leaf { symbol, .. } = *tree.node(tree.root()) {
        // every symbol was written as a single `0`
        for (consumed, bit) in stream.iter().enumerate() {
            if bit {
                return Err(Error::DecodeDesync { consumed, total });
            }
            text.push(symbol);
        }
        return Ok(text);
    }

    let mut current = tree.root();
    for bit in stream.iter() {
        // `current` is always internal here: the walk restarts at the root after every leaf
        if let Node::Internal { left, right, .. } = *tree.node(current) {
            current = if bit { right } else { left };
        }

        if let Node::Leaf { symbol, .. } = *tree.node(current) {
            text.push(symbol);
            current = tree.root();
        }
    }

    if current != tree.root() {
        return Err(Error::DecodeDesync { consumed: total, total });
    }

    Ok(text)
}

/// Decodes by growing a codeword bit by bit until the reverse mapping knows it.
///
/// Slower than [`decode`] but independent of the tree layout, which makes it a
/// useful cross-check.
pub fn decode_with_table(stream: &BitStream, table: &CodeTable) -> Result<String> {
    let total = stream.len();
    let limit = table.max_code_len();
    let mut text = String::new();
    let mut code = Code::new();

    for (consumed, bit) in stream.iter().enumerate() {
        code.push(bit);
        if let Some(symbol) = table.lookup(&code) {
            text.push(symbol);
            code.clear();
        } else if code.len() >= limit {
            return Err(Error::DecodeDesync { consumed: consumed + 1, total });
        }
    }

    if !code.is_empty() {
        return Err(Error::DecodeDesync { consumed: total, total });
    }

    Ok(text)
}
