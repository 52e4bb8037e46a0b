//! Cross-module codec behavior: record layouts, text streams, and
//! malformed input.

use keel_codec::binary::{self, get_i32_bytes, to_i32};
use keel_codec::utf8::{self, Decoder, MAX_SEQUENCE_LEN};
use keel_codec::{decode_codepoint, encode_codepoint, ByteReader, ByteWriter, CodecError};
use keel_test_utils::strategies::{raw_bytes, scalar_value, utf8_text};
use keel_test_utils::{MALFORMED_UTF8, MIXED_SCRIPT};
use proptest::prelude::*;

#[test]
fn minus_one_is_all_ones() {
    let bytes = get_i32_bytes(-1);
    assert_eq!(bytes, [0xFF; 4]);
    assert_eq!(to_i32(&bytes, 0), -1);
}

#[test]
fn euro_sign_round_trip() {
    let mut buf = [0u8; 4];
    assert_eq!(encode_codepoint(0x20AC, &mut buf, 0), 3);
    assert_eq!(&buf[..3], &[0xE2, 0x82, 0xAC]);
    assert_eq!(decode_codepoint(&buf[..3], 0, MAX_SEQUENCE_LEN), (0x20AC, 3));
}

#[test]
fn every_malformed_sample_substitutes_and_advances() {
    for (label, bytes) in MALFORMED_UTF8 {
        let (cp, n) = decode_codepoint(bytes, 0, MAX_SEQUENCE_LEN);
        assert_eq!(cp, utf8::REPLACEMENT_CHARACTER, "{label}");
        assert_eq!(n, 1, "{label}");
        let err = utf8::validate(bytes).unwrap_err();
        assert_eq!(err.offset(), 0, "{label}");
    }
}

#[test]
fn mixed_script_decodes_like_std() {
    let ours: Vec<u32> = Decoder::new(MIXED_SCRIPT.as_bytes()).map(|(cp, _)| cp).collect();
    let std: Vec<u32> = MIXED_SCRIPT.chars().map(u32::from).collect();
    assert_eq!(ours, std);
    assert_eq!(utf8::count_codepoints(MIXED_SCRIPT.as_bytes()), std.len());
    assert_eq!(utf8::count_codepoints_lenient(MIXED_SCRIPT.as_bytes()), std.len());
}

#[test]
fn lenient_count_diverges_on_bad_continuations() {
    let bytes = [0xE2, b'(', 0xA1, b'x'];
    assert_eq!(utf8::count_codepoints(&bytes), 4);
    assert_eq!(utf8::count_codepoints_lenient(&bytes), 2);
}

#[test]
fn header_then_payload_through_cursors() {
    let mut buf = [0u8; 32];
    let mut w = ByteWriter::new(&mut buf);
    w.put(0x4B45_454Cu32).unwrap();
    w.put(-3i16).unwrap();
    w.put(binary::float_to_bits(0.25)).unwrap();
    w.put_length_prefixed(&MIXED_SCRIPT.as_bytes()[..5]).unwrap();
    let written = w.into_written();

    let mut r = ByteReader::new(written);
    assert_eq!(r.peek::<u32>(), Some(0x4B45_454C));
    assert_eq!(r.read::<u32>(), Some(0x4B45_454C));
    assert_eq!(r.read::<i16>(), Some(-3));
    assert_eq!(r.read::<u32>().map(binary::bits_to_float), Some(0.25));
    assert_eq!(r.read_length_prefixed().unwrap(), &MIXED_SCRIPT.as_bytes()[..5]);
    assert!(r.is_at_end());
    assert_eq!(r.read::<u8>(), None);
}

#[test]
fn writer_refuses_partial_values() {
    let mut buf = [0u8; 5];
    let mut w = ByteWriter::new(&mut buf);
    w.put(1u32).unwrap();
    let err = w.put(2u16).unwrap_err();
    assert_eq!(
        err,
        CodecError::OutOfBounds {
            start: 4,
            width: 2,
            len: 5
        }
    );
    assert_eq!(w.position(), 4);
    w.put(9u8).unwrap();
    assert_eq!(w.into_written(), &[1, 0, 0, 0, 9]);
}

#[test]
fn truncated_length_prefix_leaves_reader_in_place() {
    let mut buf = [0u8; 8];
    binary::write_le(10u32, &mut buf, 0);
    let mut r = ByteReader::new(&buf);
    let err = r.read_length_prefixed().unwrap_err();
    assert_eq!(
        err,
        CodecError::Truncated {
            needed: 10,
            available: 4
        }
    );
    assert_eq!(r.position(), 0);
}

#[test]
#[should_panic(expected = "keel:")]
fn fatal_read_past_end() {
    let _: u64 = binary::read_le(&[0u8; 7], 0);
}

proptest! {
    #[test]
    fn encoding_matches_std(cp in scalar_value()) {
        let mut ours = [0u8; 4];
        let n = encode_codepoint(cp, &mut ours, 0);
        let mut theirs = [0u8; 4];
        let expected = char::from_u32(cp).map(|c| c.encode_utf8(&mut theirs).len());
        prop_assert_eq!(Some(n), expected);
        prop_assert_eq!(&ours[..n], &theirs[..n]);
    }

    #[test]
    fn validate_agrees_with_std(bytes in raw_bytes(64)) {
        match (utf8::validate(&bytes), std::str::from_utf8(&bytes)) {
            (Ok(()), Ok(_)) => {}
            (Err(ours), Err(theirs)) => prop_assert_eq!(ours.offset(), theirs.valid_up_to()),
            (ours, theirs) => prop_assert!(false, "ours {:?}, std {:?}", ours, theirs.map(|_| ())),
        }
    }

    #[test]
    fn decoder_widths_cover_input(bytes in raw_bytes(64)) {
        let total: usize = Decoder::new(&bytes).map(|(_, n)| n).sum();
        prop_assert_eq!(total, bytes.len());
    }

    #[test]
    fn valid_text_counts_match_chars(text in utf8_text(32)) {
        prop_assert_eq!(utf8::count_codepoints(text.as_bytes()), text.chars().count());
        prop_assert_eq!(utf8::count_codepoints_lenient(text.as_bytes()), text.chars().count());
    }
}
