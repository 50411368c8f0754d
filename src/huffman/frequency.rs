use std::collections::BTreeMap;
use std::collections::btree_map;

/// Occurrence count of every symbol in a text.
///
/// Keys are kept in code point order. Tree construction inserts leaves in this
/// order, which is what makes the rebuilt tree identical on both sides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    pub const fn new() -> Self {
        Self { counts: BTreeMap::new() }
    }

    /// Counts every symbol of `text`. Empty text gives an empty table.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for symbol in text.chars() {
            table.add(symbol, 1);
        }
        table
    }

    /// Adds `count` occurrences of `symbol`.
    pub fn add(&mut self, symbol: char, count: u64) {
        *self.counts.entry(symbol).or_insert(0) += count;
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of symbols in the counted text.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates `(symbol, count)` pairs in code point order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.counts.iter() }
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, char, u64>,
}

impl Iterator for Iter<'_> {
    type Item = (char, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&symbol, &count)| (symbol, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (char, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in iter {
            table.add(symbol, count);
        }
        table
    }
}
