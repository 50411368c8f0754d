use crate::error::{Error, Result};
use crate::huffman::code_table::{Code, CodeTable};

/// Bits packed MSB-first into bytes.
///
/// Bits past `len` in the last byte are always zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
}

impl BitStream {
    pub const fn new() -> Self {
        Self { bytes: Vec::new(), len: 0 }
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    pub fn push(&mut self, bit: bool) {
        let byte_index = self.len / 8;
        let bit_offset = self.len % 8;

        if byte_index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 0x80 >> bit_offset;
        }
        self.len += 1;
    }

    pub fn push_code(&mut self, code: &Code) {
        for &bit in code.bits() {
            self.push(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Number of bits.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes, trailing bits of the last byte zeroed.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|index| self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut stream = Self::new();
        for bit in iter {
            stream.push(bit);
        }
        stream
    }
}

/// Concatenates the code of every symbol of `text`, in order.
pub fn encode(text: &str, table: &CodeTable) -> Result<BitStream> {
    // every code is at least one bit long
    let mut stream = BitStream::with_capacity(text.len());
    for symbol in text.chars() {
        let code = table.get(symbol).ok_or(Error::MissingCode(symbol))?;
        stream.push_code(code);
    }

    crate::if_tracing! {
        tracing::debug!(symbols = text.chars().count(), bits = stream.len(), "encoded text");
    }

    Ok(stream)
}

/// Number of zero bits appended to a stream of `len` bits.
///
/// Always in `1..=8`: an already aligned stream gets a whole zero byte. Files
/// written so far carry this count, so decoders rely on it staying this way.
pub const fn padding_for(len: usize) -> u8 {
    (8 - len % 8) as u8
}

/// Byte-aligns `stream` and prefixes the padding count.
pub fn pad(stream: &BitStream) -> Vec<u8> {
    let padding = padding_for(stream.len());
    let mut payload = Vec::with_capacity(stream.as_bytes().len() + 2);
    payload.push(padding);
    payload.extend_from_slice(stream.as_bytes());
    if padding == 8 {
        payload.push(0);
    }

    crate::if_tracing! {
        tracing::debug!(bits = stream.len(), padding, payload_len = payload.len(), "padded bit stream");
    }

    payload
}

/// Reverses [`pad`]: reads the padding count and strips that many trailing bits.
pub fn unpad(payload: &[u8]) -> Result<BitStream> {
    let Some((&padding, body)) = payload.split_first() else {
        return Err(Error::MalformedContainer("payload is missing the padding-count byte".into()));
    };

    if padding > 8 {
        return Err(Error::MalformedContainer(format!("padding count {padding} is larger than a byte")));
    }

    let total = body.len() * 8;
    let padding = usize::from(padding);
    if padding > total {
        return Err(Error::MalformedContainer(format!(
            "padding count {padding} exceeds the {total} payload bits"
        )));
    }

    let len = total - padding;
    let stream = BitStream {
        bytes: body[..len.div_ceil(8)].to_vec(),
        len,
    };

    // stripped bits must be the zeros the encoder wrote
    let tail = &body[len / 8..];
    let mut tail_bits = tail.iter().enumerate().flat_map(|(i, byte)| (0..8).map(move |bit| (i * 8 + bit, byte & (0x80 >> bit) != 0)));
    if tail_bits.any(|(offset, set)| offset >= len % 8 && set) {
        return Err(Error::MalformedContainer("padding bits are not zero".into()));
    }

    crate::if_tracing! {
        tracing::debug!(payload_len = payload.len(), padding, bits = stream.len(), "unpadded payload");
    }

    Ok(stream)
}
