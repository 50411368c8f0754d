//! The Huffman pipeline as plain functions.
//!
//! Compression: [`FrequencyTable`] → [`HuffmanTree`] → [`CodeTable`] →
//! [`bits::encode`] → [`bits::pad`] → [`Container`].
//! Decompression runs the same tree and table construction from the stored
//! frequencies, then [`bits::unpad`] → [`decoder::decode`] → integrity check.

use crate::compressor::Compressor;
use crate::container::Container;
use crate::error::{Error, Result};
use crate::integrity;

pub mod bits;
pub mod code_table;
pub mod decoder;
pub mod frequency;
pub mod tree;

pub use self::bits::BitStream;
pub use self::code_table::{Code, CodeTable, ParseCodeError};
pub use self::frequency::FrequencyTable;
pub use self::tree::{HuffmanTree, Node, NodeId};

/// Compresses `text` into a container.
pub fn encode_text(text: &str) -> Result<Container> {
    let hash = integrity::content_hash(text);
    let frequencies = FrequencyTable::from_text(text);

    let stream = if frequencies.is_empty() {
        BitStream::new()
    } else {
        let tree = HuffmanTree::build(&frequencies)?;
        let table = CodeTable::from_tree(&tree);
        bits::encode(text, &table)?
    };

    crate::if_tracing! {
        tracing::debug!(
            symbols = frequencies.total(),
            distinct = frequencies.len(),
            bits = stream.len(),
            "huffman encode complete"
        );
    }

    Ok(Container {
        hash,
        frequencies,
        payload: bits::pad(&stream),
    })
}

/// Recovers and verifies the text held by `container`.
pub fn decode_container(container: &Container) -> Result<String> {
    let stream = bits::unpad(&container.payload)?;

    let text = if container.frequencies.is_empty() {
        if !stream.is_empty() {
            return Err(Error::MalformedContainer(format!(
                "{} payload bits but no symbols in the frequency table",
                stream.len()
            )));
        }
        String::new()
    } else {
        let tree = HuffmanTree::build(&container.frequencies)?;
        decoder::decode(&stream, &tree)?
    };

    integrity::verify(&container.hash, &text)?;

    crate::if_tracing! {
        tracing::debug!(bits = stream.len(), chars = text.chars().count(), "huffman decode complete");
    }

    Ok(text)
}

/// Huffman coding over whole texts. Holds no state between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanCoding;

impl Compressor for HuffmanCoding {
    fn compress_text(&self, text: &str) -> Result<Vec<u8>> {
        Ok(encode_text(text)?.to_bytes())
    }

    fn decompress_text(&self, data: &[u8]) -> Result<String> {
        decode_container(&Container::from_bytes(data)?)
    }

    fn compressor_name(&self) -> String {
        "Huffman Coding".into()
    }
}
