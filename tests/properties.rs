//! Property tests for the Huffman pipeline.

use proptest::prelude::*;

use huffpack::huffman::{self, BitStream, CodeTable, FrequencyTable, HuffmanTree, bits, decoder};
use huffpack::{Compressor, Error, HuffmanCoding};

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[ab]{0,64}",
        "[a-e \n]{0,400}",
        prop::collection::vec(prop::char::range('\u{1F980}', '\u{1F98F}'), 0..50).prop_map(|chars| chars.into_iter().collect()),
    ]
}

fn frequencies_strategy() -> impl Strategy<Value = FrequencyTable> {
    prop::collection::btree_map(any::<char>(), 1u64..1_000_000, 1..64).prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_roundtrip(text in text_strategy()) {
        let compressed = HuffmanCoding.compress_text(&text).unwrap();
        prop_assert_eq!(HuffmanCoding.decompress_text(&compressed).unwrap(), text);
    }

    #[test]
    fn prop_codes_are_prefix_free(frequencies in frequencies_strategy()) {
        let table = CodeTable::from_tree(&HuffmanTree::build(&frequencies).unwrap());
        prop_assert_eq!(table.len(), frequencies.len());
        let codes: Vec<_> = table.iter().map(|(_, code)| code.clone()).collect();
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for b in &codes[i + 1..] {
                prop_assert!(!a.is_prefix_of(b) && !b.is_prefix_of(a), "{} / {}", a, b);
            }
        }
    }

    #[test]
    fn prop_code_lengths_match_tree_cost(frequencies in frequencies_strategy()) {
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let table = CodeTable::from_tree(&tree);
        prop_assert_eq!(table.encoded_bit_len(&frequencies), tree.weighted_path_length());
    }

    #[test]
    fn prop_tree_rebuild_is_idempotent(frequencies in frequencies_strategy()) {
        let first = CodeTable::from_tree(&HuffmanTree::build(&frequencies).unwrap());
        let second = CodeTable::from_tree(&HuffmanTree::build(&frequencies.iter().collect::<FrequencyTable>()).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_padding_recovers_stream(raw in prop::collection::vec(any::<bool>(), 0..200)) {
        let stream: BitStream = raw.iter().copied().collect();
        let payload = bits::pad(&stream);
        let padding = usize::from(payload[0]);
        prop_assert!((1..=8).contains(&padding));
        prop_assert_eq!(((payload.len() - 1) * 8) % 8, 0);
        prop_assert_eq!((payload.len() - 1) * 8, raw.len() + padding);
        prop_assert_eq!(bits::unpad(&payload).unwrap(), stream);
    }

    #[test]
    fn prop_table_decoder_agrees_with_tree_walk(text in "[a-h]{1,200}") {
        let frequencies = FrequencyTable::from_text(&text);
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let table = CodeTable::from_tree(&tree);
        let stream = bits::encode(&text, &table).unwrap();
        prop_assert_eq!(decoder::decode(&stream, &tree).unwrap(), text.clone());
        prop_assert_eq!(decoder::decode_with_table(&stream, &table).unwrap(), text);
    }

    #[test]
    fn prop_single_bit_flip_never_succeeds(text in "[a-f ]{1,60}", flip in any::<prop::sample::Index>()) {
        let container = huffman::encode_text(&text).unwrap();
        let mut corrupt = container.clone();
        let bit = flip.index(corrupt.payload.len() * 8);
        corrupt.payload[bit / 8] ^= 0x80 >> (bit % 8);
        match huffman::decode_container(&corrupt) {
            Ok(decoded) => {
                prop_assert!(false, "flip of bit {} decoded to {:?}", bit, decoded);
            }
            Err(Error::DecodeDesync { .. } | Error::IntegrityMismatch { .. } | Error::MalformedContainer(_)) => {}
            Err(other) => {
                prop_assert!(false, "unexpected error {:?}", other);
            }
        }
    }
}

#[test]
fn reference_distribution_is_optimal() {
    let frequencies: FrequencyTable = [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)].into_iter().collect();
    let table = CodeTable::from_tree(&HuffmanTree::build(&frequencies).unwrap());
    let lengths: Vec<_> = ['a', 'b', 'c', 'd', 'e', 'f'].iter().map(|&c| table.get(c).unwrap().len()).collect();
    assert_eq!(lengths, vec![4, 4, 3, 3, 3, 1]);
}
