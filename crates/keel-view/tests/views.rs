//! Integration tests for the view types: slice safety, write-through,
//! and the text operations working together.

use keel_core::{Iterable, Sliceable};
use keel_test_utils::fixtures::{counting_bytes, nul_terminated};
use keel_test_utils::strategies::{padded_text, raw_bytes, slice_request, utf8_text};
use keel_view::{concat, replace, Array, ReadOnlySpan, Span, Str};
use proptest::prelude::*;

#[test]
fn five_element_slice_clamps_when_asked() {
    let data = [10, 11, 12, 13, 14];
    let v = ReadOnlySpan::new(&data);
    assert_eq!(v.slice_clamped(3, 10).as_slice(), &[13, 14]);
    assert!(v.slice(3, 10).is_empty());
}

#[test]
#[should_panic(expected = "keel: index out of bounds: index 5, length 3")]
fn at_past_end_of_three_is_fatal() {
    let data = [1u32, 2, 3];
    ReadOnlySpan::new(&data).at(5);
}

#[test]
fn hello_scenario() {
    let s = Str::new("hello");
    let sub = s.substring(1, 3);
    assert!(sub.equals(Str::new("ell")));
    assert_eq!(s.index_of("ll"), Some(2));
}

#[test]
fn array_to_span_to_read_only_chain() {
    let mut block = [0u16; 8];
    let mut array = Array::new(&mut block);
    {
        let mut window = array.as_span().slice(2, 4);
        window.fill(5);
        window.reborrow().slice(1, 2).clear();
        let ro = window.as_read_only();
        assert_eq!(ro.as_slice(), &[5, 0, 0, 5]);
    }
    array.set(7, 1);
    assert_eq!(block, [0, 0, 5, 0, 0, 5, 0, 1]);
}

#[test]
fn str_is_a_byte_view() {
    let s = Str::new("a,b");
    let bytes: ReadOnlySpan<'_, u8> = s.into();
    assert_eq!(bytes.len(), 3);
    assert_eq!(bytes.fold(0u32, |n, b| n + u32::from(b == b',')), 1);
}

#[test]
fn literal_drops_its_terminator() {
    let literal = nul_terminated("k=v");
    let s = Str::from_literal(&literal);
    assert_eq!(s, "k=v");
    assert_eq!(s.split_once(b'='), Some((Str::new("k"), Str::new("v"))));
}

#[test]
fn windows_over_counting_bytes() {
    let data = counting_bytes(300);
    let v = ReadOnlySpan::new(&data);
    assert_eq!(v.slice(254, 4).as_slice(), &[254, 255, 0, 1]);
    assert_eq!(v.slice_from(298).as_slice(), &[42, 43]);
}

#[test]
fn trimmed_concat_then_replace() {
    let mut joined = [0u8; 32];
    let greeting = concat(
        &mut joined,
        Str::new("  hello ").trim(),
        Str::new(", world\n").trim_end(),
    );
    assert_eq!(greeting, "hello, world");

    let mut out = [0u8; 32];
    let shouted = replace(&mut out, greeting, Str::new("o"), Str::new("0"));
    assert_eq!(shouted, "hell0, w0rld");
}

#[test]
fn span_copy_into_smaller_array() {
    let src = [1i64, 2, 3, 4, 5];
    let mut small = [0i64; 3];
    let n = ReadOnlySpan::new(&src).copy_to(Span::new(&mut small));
    assert_eq!(n, 3);
    assert_eq!(small, [1, 2, 3]);
}

proptest! {
    #[test]
    fn slice_never_escapes_parent(
        data in prop::collection::vec(any::<u8>(), 0..64),
        (start, len) in slice_request(64),
    ) {
        let v = ReadOnlySpan::new(&data);
        let s = v.slice(start, len);
        prop_assert!(s.is_empty() || start + len <= data.len());
        if !s.is_empty() {
            prop_assert_eq!(s.len(), len);
            prop_assert_eq!(s.as_slice(), &data[start..start + len]);
        }
        let c = v.slice_clamped(start, len);
        prop_assert!(c.len() <= len);
        prop_assert!(c.len() <= data.len().saturating_sub(start));
    }

    #[test]
    fn substring_stays_inside(text in utf8_text(16), (start, len) in slice_request(64)) {
        let s = Str::new(&text);
        let sub = s.substring(start, len);
        prop_assert!(sub.byte_length() <= len);
        if !sub.is_empty() {
            prop_assert_eq!(sub.as_bytes(), &text.as_bytes()[start..start + sub.byte_length()]);
        }
    }

    #[test]
    fn trim_is_idempotent(text in padded_text()) {
        let once = Str::new(&text).trim();
        prop_assert_eq!(once, once.trim());
        prop_assert_eq!(once.as_bytes(), text.trim_matches([' ', '\t', '\r', '\n']).as_bytes());
    }

    #[test]
    fn codepoint_count_agrees_with_iterator(bytes in raw_bytes(32)) {
        let s = Str::from_bytes(&bytes);
        prop_assert_eq!(s.codepoint_count(), s.codepoints().count());
    }

    #[test]
    fn codepoint_count_is_char_count_for_valid_text(text in utf8_text(24)) {
        prop_assert_eq!(Str::new(&text).codepoint_count(), text.chars().count());
    }

    #[test]
    fn concat_fits_or_leaves_dest_alone(
        a in "[a-z]{0,8}",
        b in "[a-z]{0,8}",
        cap in 0usize..20,
    ) {
        let mut buf = vec![b'#'; cap];
        let fits = a.len() + b.len() <= cap;
        let out = concat(&mut buf, Str::new(&a), Str::new(&b));
        if fits {
            let expected = format!("{a}{b}");
            prop_assert_eq!(out.as_bytes(), expected.as_bytes());
        } else {
            prop_assert!(out.is_empty());
            prop_assert!(buf.iter().all(|&x| x == b'#'));
        }
    }

    #[test]
    fn replace_never_exceeds_capacity(
        text in "[ab-]{0,24}",
        new in "[xyz]{0,4}",
        cap in 0usize..32,
    ) {
        let mut buf = vec![0u8; cap];
        let out = replace(&mut buf, Str::new(&text), Str::new("-"), Str::new(&new));
        prop_assert!(out.byte_length() <= cap);
        let full = text.replace('-', &new);
        prop_assert!(full.as_bytes().starts_with(out.as_bytes()));
    }
}
