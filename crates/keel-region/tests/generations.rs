//! Handle lifetimes across many resets.

use keel_region::{Handle, Region, RegionConfig, RegionError};
use keel_test_utils::MIXED_SCRIPT;
use keel_view::Str;
use proptest::prelude::*;

#[test]
fn text_round_trips_through_a_handle() {
    let mut buf = [0u8; 128];
    let mut region = Region::new(&mut buf);
    let h = region.store_str(Str::new(MIXED_SCRIPT)).unwrap();
    let back = region.resolve_str(h).unwrap();
    assert_eq!(back, MIXED_SCRIPT);
    assert_eq!(back.codepoint_count(), MIXED_SCRIPT.chars().count());
}

#[test]
fn every_live_generation_keeps_its_bytes() {
    let mut buf = [0u8; 40];
    let mut region = Region::with_config(&mut buf, RegionConfig::new(3));
    let mut handles: Vec<Handle> = Vec::new();
    for g in 0u8..4 {
        handles.push(region.store(&[g; 5]).unwrap());
        if g < 3 {
            region.reset().unwrap();
        }
    }
    for (g, h) in handles.iter().enumerate() {
        assert_eq!(region.resolve(*h).unwrap().as_slice(), &[g as u8; 5]);
    }
    region.reset().unwrap();
    assert!(matches!(
        region.resolve(handles[0]),
        Err(RegionError::StaleHandle {
            handle_generation: 0,
            oldest_live: 1
        })
    ));
    assert!(region.resolve(handles[1]).is_ok());
}

#[test]
fn reset_restores_full_capacity() {
    let mut buf = [0u8; 8];
    let mut region = Region::new(&mut buf);
    region.alloc(4).unwrap();
    assert_eq!(region.remaining(), 0);
    assert_eq!(region.reset(), Ok(1));
    assert_eq!(region.remaining(), 4);
    assert_eq!(region.generation(), 1);
}

proptest! {
    #[test]
    fn resolve_succeeds_iff_within_age(age in 0u32..4, resets in 0u32..10) {
        let mut buf = vec![0u8; 64];
        let mut region = Region::with_config(&mut buf, RegionConfig::new(age));
        let h = region.store(b"hi").unwrap();
        for _ in 0..resets {
            region.reset().unwrap();
        }
        let resolved = region.resolve(h);
        if resets <= age {
            prop_assert_eq!(resolved.unwrap().as_slice(), b"hi");
        } else {
            let is_stale = matches!(resolved, Err(RegionError::StaleHandle { .. }));
            prop_assert!(is_stale);
        }
    }
}
