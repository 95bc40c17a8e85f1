//! Properties of the codec and container that must hold for any input.

use invisink::alphabet::{is_symbol, ALPHABET};
use invisink::codec::Codec;
use invisink::container::{read_note, write_note, NoteContent, MARKER};
use invisink::model::{ExerciseDurations, SessionPayload};
use invisink::stream::StreamCompressor;
use proptest::prelude::*;

/// xorshift text that deflate cannot shrink much.
fn noisy_text(len: usize) -> String {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            char::from(b'!' + (state % 90) as u8)
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_round_trip(text in "\\PC*") {
        let codec = Codec::default();
        let hidden = codec.encode(&text).unwrap();
        prop_assert_eq!(codec.decode(&hidden), Some(text));
    }

    #[test]
    fn prop_output_is_even_and_invisible(text in ".{0,256}") {
        let codec = Codec::default();
        let hidden = codec.encode(&text).unwrap();
        let compressed = codec.compressor().compress(text.as_bytes()).unwrap();
        prop_assert_eq!(hidden.chars().count(), 2 * compressed.len());
        prop_assert!(hidden.chars().all(is_symbol));
    }

    #[test]
    fn prop_odd_length_never_decodes(
        symbols in proptest::collection::vec(0usize..16, 0..64).prop_filter("odd", |v| v.len() % 2 == 1)
    ) {
        let hidden: String = symbols.into_iter().map(|i| ALPHABET[i]).collect();
        prop_assert_eq!(Codec::default().decode(&hidden), None);
    }

    #[test]
    fn prop_foreign_symbol_never_decodes(text in "[a-z]{1,40}", position in 0usize..1000, foreign in "[ -~]") {
        let codec = Codec::default();
        let mut symbols: Vec<char> = codec.encode(&text).unwrap().chars().collect();
        let position = position % symbols.len();
        symbols[position] = foreign.chars().next().unwrap();
        let tampered: String = symbols.into_iter().collect();
        prop_assert_eq!(codec.decode(&tampered), None);
    }

    #[test]
    fn prop_any_buffer_size_interoperates(text in ".{0,512}", buffer in 1usize..64) {
        let small = Codec::new(StreamCompressor::new(6, buffer));
        let hidden = small.encode(&text).unwrap();
        prop_assert_eq!(Codec::default().decode(&hidden), Some(text.clone()));
        let written_default = Codec::default().encode(&text).unwrap();
        prop_assert_eq!(small.decode(&written_default), Some(text));
    }

    #[test]
    fn prop_container_round_trip(entries in proptest::collection::btree_map(any::<i64>(), -1.0e6f64..1.0e6, 0..20)) {
        let codec = Codec::default();
        let payload = SessionPayload::new(ExerciseDurations::from(entries));
        let note = write_note(&payload, &codec).unwrap();
        prop_assert_eq!(read_note(&note, &codec), NoteContent::Current(payload));
    }
}

#[test]
fn test_large_payload_spans_many_buffers() {
    let codec = Codec::default();
    let text = noisy_text(96 * 1024);
    let compressed = codec.compressor().compress(text.as_bytes()).unwrap();
    assert!(compressed.len() > 8 * 4096);

    let hidden = codec.encode(&text).unwrap();
    assert_eq!(hidden.chars().count(), 2 * compressed.len());
    assert_eq!(codec.decode(&hidden), Some(text));
}

#[test]
fn test_large_container_round_trip() {
    let codec = Codec::default();
    let entries: ExerciseDurations = (0..5000i64).map(|i| (i * 7919, i as f64 / 3.0)).collect();
    let payload = SessionPayload::new(entries);
    let note = write_note(&payload, &codec).unwrap();
    assert_eq!(read_note(&note, &codec), NoteContent::Current(payload));
}

#[test]
fn test_empty_payload() {
    assert_eq!(invisink::decode(&invisink::encode("").unwrap()).as_deref(), Some(""));
}

#[test]
fn test_legacy_parse_skips_bad_entry() {
    let codec = Codec::default();
    let content = read_note(&format!("{}12=5.0|bad|34=2.5", MARKER), &codec);
    let expected: ExerciseDurations = [(12, 5.0), (34, 2.5)].into_iter().collect();
    assert_eq!(content, NoteContent::Legacy(expected));
}

#[test]
fn test_every_single_symbol_swap_is_caught_or_falls_back() {
    let codec = Codec::default();
    let payload = SessionPayload::new([(1, 30.0), (2, 45.0)].into_iter().collect());
    let note = write_note(&payload, &codec).unwrap();
    let chars: Vec<char> = note.chars().collect();

    for i in MARKER.len()..chars.len() {
        let mut tampered = chars.clone();
        tampered[i] = 'x';
        let tampered: String = tampered.into_iter().collect();
        assert!(!matches!(
            read_note(&tampered, &codec),
            NoteContent::Current(_)
        ));
    }
}

/// Every way of replacing one symbol with a different alphabet symbol.
fn alphabet_swaps(hidden: &str) -> impl Iterator<Item = String> + '_ {
    let chars: Vec<char> = hidden.chars().collect();
    (0..chars.len()).flat_map(move |i| {
        let chars = chars.clone();
        let current = chars[i];
        ALPHABET
            .into_iter()
            .filter(move |&symbol| symbol != current)
            .map(move |symbol| {
                let mut swapped = chars.clone();
                swapped[i] = symbol;
                swapped.into_iter().collect::<String>()
            })
    })
}

#[test]
fn test_in_alphabet_swap_never_decodes_to_other_text() {
    let codec = Codec::default();
    let original = "12=5|34=2.5";
    let hidden = codec.encode(original).unwrap();

    let mut checked = 0;
    for swapped in alphabet_swaps(&hidden) {
        if let Some(text) = codec.decode(&swapped) {
            assert_eq!(text, original, "swap decoded to different text");
        }
        checked += 1;
    }
    assert_eq!(checked, hidden.chars().count() * 15);
}

#[test]
fn test_in_alphabet_swap_never_yields_other_payload() {
    let codec = Codec::default();
    let payload = SessionPayload::new([(12, 5.0), (34, 2.5)].into_iter().collect());
    let note = write_note(&payload, &codec).unwrap();
    let hidden = note.strip_prefix(MARKER).unwrap();

    for swapped in alphabet_swaps(hidden) {
        let tampered = format!("{}{}", MARKER, swapped);
        if let NoteContent::Current(decoded) = read_note(&tampered, &codec) {
            assert_eq!(decoded, payload);
        }
    }
}
