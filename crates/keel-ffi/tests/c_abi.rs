//! Drive the C entry points the way a C caller would.

use keel_ffi::binary::{keel_read_u16, keel_write_u16};
use keel_ffi::slice::keel_slice;
use keel_ffi::text::{keel_str_codepoint_count, keel_str_concat, keel_str_trim};
use keel_ffi::utf8::{keel_utf8_decode, keel_utf8_validate};
use keel_ffi::KeelStatus;
use keel_test_utils::strategies::raw_bytes;
use keel_test_utils::{MALFORMED_UTF8, MIXED_SCRIPT};
use proptest::prelude::*;

const OK: i32 = KeelStatus::Ok as i32;

#[test]
fn every_malformed_sample_is_rejected() {
    for (label, bytes) in MALFORMED_UTF8 {
        let mut at = usize::MAX;
        let rc = keel_utf8_validate(bytes.as_ptr(), bytes.len(), &mut at);
        assert_eq!(rc, KeelStatus::InvalidUtf8 as i32, "{label}");
        assert!(at < bytes.len(), "{label}: offset {at}");
    }
}

#[test]
fn mixed_script_validates_and_counts() {
    let bytes = MIXED_SCRIPT.as_bytes();
    assert_eq!(
        keel_utf8_validate(bytes.as_ptr(), bytes.len(), std::ptr::null_mut()),
        OK
    );
    let mut n = 0;
    assert_eq!(keel_str_codepoint_count(bytes.as_ptr(), bytes.len(), &mut n), OK);
    assert_eq!(n, MIXED_SCRIPT.chars().count());
}

#[test]
fn trim_then_concat_with_caller_buffer() {
    let raw = b"\t key ";
    let (mut start, mut len) = (0, 0);
    assert_eq!(keel_str_trim(raw.as_ptr(), raw.len(), &mut start, &mut len), OK);
    let key = &raw[start..start + len];

    let mut dest = [0u8; 8];
    let mut written = 0;
    let rc = keel_str_concat(
        dest.as_mut_ptr(),
        dest.len(),
        key.as_ptr(),
        key.len(),
        b"=1".as_ptr(),
        2,
        &mut written,
    );
    assert_eq!(rc, OK);
    assert_eq!(&dest[..written], b"key=1");
}

#[test]
fn record_layout_round_trip() {
    let mut record = [0u8; 6];
    assert_eq!(keel_write_u16(0x0102, record.as_mut_ptr(), 6, 0), OK);
    assert_eq!(keel_write_u16(0xA0B0, record.as_mut_ptr(), 6, 4), OK);
    assert_eq!(record, [0x02, 0x01, 0, 0, 0xB0, 0xA0]);
    let mut v = 0u16;
    assert_eq!(keel_read_u16(record.as_ptr(), 6, 4, &mut v), OK);
    assert_eq!(v, 0xA0B0);
}

proptest! {
    #[test]
    fn decode_loop_terminates_on_any_input(bytes in raw_bytes(48)) {
        let mut offset = 0;
        let mut steps = 0;
        while offset < bytes.len() {
            let (mut cp, mut n) = (0u32, 0usize);
            let rc = keel_utf8_decode(bytes.as_ptr(), bytes.len(), offset, &mut cp, &mut n);
            prop_assert_eq!(rc, OK);
            prop_assert!((1..=4).contains(&n));
            prop_assert!(cp <= 0x10FFFF);
            offset += n;
            steps += 1;
        }
        prop_assert_eq!(offset, bytes.len());
        prop_assert!(steps <= bytes.len());
    }

    #[test]
    fn slice_bounds_stay_inside(view_len in 0usize..64, start in -8isize..80, len in -8isize..80) {
        let (mut s, mut n) = (0, 0);
        prop_assert_eq!(keel_slice(view_len, start, len, &mut s, &mut n), OK);
        prop_assert!(s + n <= view_len || (s, n) == (0, 0));
        if start < 0 || len < 0 {
            prop_assert_eq!((s, n), (0, 0));
        }
    }
}
