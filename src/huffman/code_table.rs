use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::huffman::frequency::FrequencyTable;
use crate::huffman::tree::{HuffmanTree, Node};

/// A codeword: bits in transmission order, `false` for 0 and `true` for 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub const fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// This code followed by `bit`.
    pub fn with(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// A character other than `0` or `1` in a textual code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{0:?} is not a bit, codes are written with 0 and 1 only")]
pub struct ParseCodeError(pub char);

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(ParseCodeError(other)),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { bits })
    }
}

/// Codes for every symbol of a tree, plus the inverse lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
    reverse: HashMap<Code, char>,
}

impl CodeTable {
    /// Assigns codes by a pre-order walk: `0` for every left turn, `1` for every right turn.
    ///
    /// A tree that is a single leaf has no turns to take, so its symbol gets `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::default();

        if let Node::Leaf { symbol, .. } = *tree.node(tree.root()) {
            table.insert(symbol, Code::new().with(false));
            return table;
        }

        // explicit stack: the tree can be as deep as it has symbols
        let mut stack = vec![(tree.root(), Code::new())];
        while let Some((id, path)) = stack.pop() {
            match *tree.node(id) {
                Node::Leaf { symbol, .. } => table.insert(symbol, path),
                Node::Internal { left, right, .. } => {
                    stack.push((right, path.with(true)));
                    stack.push((left, path.with(false)));
                }
            }
        }

        crate::if_tracing! {
            tracing::debug!(symbols = table.len(), max_code_len = table.max_code_len(), "generated code table");
        }

        table
    }

    fn insert(&mut self, symbol: char, code: Code) {
        self.reverse.insert(code.clone(), symbol);
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// The symbol whose code is exactly `code`.
    pub fn lookup(&self, code: &Code) -> Option<char> {
        self.reverse.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Iterates `(symbol, code)` pairs in code point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Length in bits of the text counted by `frequencies` once encoded with this table.
    ///
    /// Symbols without a code are ignored.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(bits: &str) -> Code {
        bits.parse().unwrap()
    }

    fn table_for(text: &str) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::from_text(text)).unwrap())
    }

    #[test]
    fn aaabbc_codes() {
        let table = table_for("aaabbc");
        assert_eq!(table.get('a').unwrap().to_string(), "0");
        assert_eq!(table.get('c').unwrap().to_string(), "10");
        assert_eq!(table.get('b').unwrap().to_string(), "11");
        assert_eq!(table.lookup(&parse("10")), Some('c'));
        assert_eq!(table.lookup(&parse("1")), None);
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let table = table_for("zzzz");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('z'), Some(&parse("0")));
        assert_eq!(table.lookup(&parse("0")), Some('z'));
    }

    #[test]
    fn reference_distribution_code_lengths() {
        let frequencies: FrequencyTable = [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)].into_iter().collect();
        let table = CodeTable::from_tree(&HuffmanTree::build(&frequencies).unwrap());
        let lengths: Vec<_> = table.iter().map(|(_, code)| code.len()).collect();
        assert_eq!(lengths, vec![4, 4, 3, 3, 3, 1]);
        assert_eq!(table.encoded_bit_len(&frequencies), 224);
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for("It was the best of times, it was the worst of times; ünïcödé ✓✓✓\n\t\"{}\"");
        let codes: Vec<_> = table.iter().map(|(_, code)| code.clone()).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn every_symbol_gets_exactly_one_code() {
        let text = "abracadabra alakazam";
        let frequencies = FrequencyTable::from_text(text);
        let table = table_for(text);
        assert_eq!(table.len(), frequencies.len());
        for (symbol, _) in &frequencies {
            let code = table.get(symbol).unwrap();
            assert_eq!(table.lookup(code), Some(symbol));
        }
    }

    #[test]
    fn parsing_rejects_anything_but_bits() {
        assert_eq!("0x2".parse::<Code>(), Err(ParseCodeError('x')));
        assert_eq!("10 1".parse::<Code>(), Err(ParseCodeError(' ')));
        assert_eq!("".parse::<Code>(), Ok(Code::new()));
    }

    #[test]
    fn code_display_round_trips() {
        let code = parse("0110");
        assert_eq!(code.to_string(), "0110");
        assert_eq!(parse(&code.to_string()), code);
        assert_eq!(code.len(), 4);
        assert!(parse("01").is_prefix_of(&code));
        assert!(!parse("1").is_prefix_of(&code));
    }
}
