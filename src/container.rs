//! The compressed file layout.
//!
//! ```text
//! <sha-256 hex of the text>\n
//! {"version":1,"symbols":[[<code point>,<count>],...]}\n
//! <padding count byte><packed bits...>
//! ```
//!
//! Symbols are written as numbers, so no symbol can smuggle a line terminator
//! into the header.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::huffman::frequency::FrequencyTable;
use crate::integrity;

/// Frequency header version written by this crate.
pub const HEADER_VERSION: u32 = 1;

/// A compressed text: hash, frequency table and padded payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub hash: String,
    pub frequencies: FrequencyTable,
    pub payload: Vec<u8>,
}

#[derive(Serialize, Deserialize)]
struct FrequencyHeader {
    version: u32,
    symbols: Vec<(u32, u64)>,
}

impl FrequencyHeader {
    fn from_table(table: &FrequencyTable) -> Self {
        Self {
            version: HEADER_VERSION,
            symbols: table.iter().map(|(symbol, count)| (u32::from(symbol), count)).collect(),
        }
    }

    fn into_table(self) -> Result<FrequencyTable> {
        if self.version != HEADER_VERSION {
            return Err(Error::MalformedContainer(format!(
                "unsupported frequency header version {}",
                self.version
            )));
        }

        let mut table = FrequencyTable::new();
        // every merged tree weight is bounded by the total
        let mut total = 0u64;
        for (code_point, count) in self.symbols {
            let symbol = char::from_u32(code_point)
                .ok_or_else(|| Error::MalformedContainer(format!("{code_point:#x} is not a unicode scalar value")))?;
            if count == 0 {
                return Err(Error::MalformedContainer(format!("symbol {symbol:?} has a zero count")));
            }
            if table.contains(symbol) {
                return Err(Error::MalformedContainer(format!("symbol {symbol:?} appears twice")));
            }
            total = total
                .checked_add(count)
                .ok_or_else(|| Error::MalformedContainer("symbol counts overflow a 64-bit total".into()))?;
            table.add(symbol, count);
        }
        Ok(table)
    }
}

impl Container {
    /// Writes the container in file order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.hash.as_bytes())?;
        writer.write_all(b"\n")?;
        serde_json::to_writer(&mut *writer, &FrequencyHeader::from_table(&self.frequencies))?;
        writer.write_all(b"\n")?;
        writer.write_all(&self.payload)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.hash.len() + self.payload.len() + 16 * self.frequencies.len() + 32);
        self.write_to(&mut bytes)
            .expect("serializing a frequency header into a Vec cannot fail");
        bytes
    }

    /// Parses a container. The payload is taken as-is; it is checked when decoded.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (hash_line, rest) = split_line(data, "hash")?;
        let (header_line, payload) = split_line(rest, "frequency header")?;

        let hash = std::str::from_utf8(hash_line)
            .ok()
            .filter(|hash| integrity::is_hash_text(hash))
            .ok_or_else(|| Error::MalformedContainer("first line is not a sha-256 hex digest".into()))?
            .to_owned();

        let header: FrequencyHeader = serde_json::from_slice(header_line)
            .map_err(|e| Error::MalformedContainer(format!("unreadable frequency header: {e}")))?;
        let frequencies = header.into_table()?;

        if payload.is_empty() {
            return Err(Error::MalformedContainer("payload is missing the padding-count byte".into()));
        }

        Ok(Self {
            hash,
            frequencies,
            payload: payload.to_vec(),
        })
    }
}

fn split_line<'a>(data: &'a [u8], what: &str) -> Result<(&'a [u8], &'a [u8])> {
    let end = data
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| Error::MalformedContainer(format!("{what} line is not terminated")))?;
    Ok((&data[..end], &data[end + 1..]))
}
