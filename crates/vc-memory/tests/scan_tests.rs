//! Signature scan behavior tests

use vc_core::ByteOrder;
use vc_memory::{scan, ScanSpec, SliceSpace};

const MAGIC: u32 = 0x8037_1240;

#[test]
fn scan_finds_signature_with_valid_size() {
    let base = 0x4000;
    let mut space = SliceSpace::zeroed(base, 0x1000);
    let hit = base + 0x200;
    space.put_u32(hit, MAGIC);
    space.put_u32(hit - 0x10, 0x8_0000);

    let spec = spec_over(base, base + 0x1000);
    let region = scan(&spec, &space).expect("signature should be found");
    assert_eq!(region.host_base, hit);
    assert_eq!(region.size, 0x8_0000);
    assert_eq!(region.guest_base, spec.guest_base);
    assert_eq!(region.byte_order, ByteOrder::Big);
}

#[test]
fn scan_skips_zero_size_candidate() {
    let base = 0x4000;
    let mut space = SliceSpace::zeroed(base, 0x1000);

    // Zero-size match first; valid match later in the window.
    let first = base + 0x100;
    space.put_u32(first, MAGIC);
    space.put_u32(first - 0x10, 0);

    let second = base + 0x400;
    space.put_u32(second, MAGIC);
    space.put_u32(second - 0x10, 0x4_0000);

    let region = scan(&spec_over(base, base + 0x1000), &space).unwrap();
    assert_eq!(region.host_base, second);
    assert_eq!(region.size, 0x4_0000);
}

#[test]
fn scan_skips_oversized_candidate() {
    let base = 0x4000;
    let mut space = SliceSpace::zeroed(base, 0x1000);

    let first = base + 0x100;
    space.put_u32(first, MAGIC);
    space.put_u32(first - 0x10, 0xFFFF_FFFF);

    let second = base + 0x300;
    space.put_u32(second, MAGIC);
    space.put_u32(second - 0x10, 0x1000);

    let region = scan(&spec_over(base, base + 0x1000), &space).unwrap();
    assert_eq!(region.host_base, second);
}

#[test]
fn scan_without_signature_terminates_empty() {
    let base = 0x4000;
    let space = SliceSpace::zeroed(base, 0x2000);
    assert!(scan(&spec_over(base, base + 0x2000), &space).is_none());
}

#[test]
fn scan_rejects_size_field_outside_view() {
    // Match sits right at the start of the view, so the size field at
    // match-0x10 is out of bounds and the candidate must be dropped.
    let base = 0x4000;
    let mut space = SliceSpace::zeroed(base, 0x1000);
    space.put_u32(base, MAGIC);

    assert!(scan(&spec_over(base, base + 0x1000), &space).is_none());
}

#[test]
fn scan_honors_upper_bound() {
    // A valid signature past the window's end is never considered.
    let base = 0x4000;
    let mut space = SliceSpace::zeroed(base, 0x2000);
    let hit = base + 0x1800;
    space.put_u32(hit, MAGIC);
    space.put_u32(hit - 0x10, 0x1000);

    assert!(scan(&spec_over(base, base + 0x1000), &space).is_none());
}

#[test]
fn scan_applies_negative_data_offset() {
    // NDS-style layout: region starts 0xC0 before the logo signature and
    // the size field sits at -0xD0.
    let base = 0x4000;
    let mut space = SliceSpace::zeroed(base, 0x1000);
    let hit = base + 0x400;
    space.put_u32(hit, 0x24FF_AE51);
    space.put_u32(hit - 0xD0, 0x2_0000);

    let spec = ScanSpec {
        start: base,
        end: base + 0x1000,
        magic: 0x24FF_AE51,
        size_offset: -0xD0,
        data_offset: -0xC0,
        max_size: 0x2000_0000,
        guest_base: 0,
        origin: "NDS logo signature",
        byte_order: ByteOrder::Little,
    };
    let region = scan(&spec, &space).unwrap();
    assert_eq!(region.host_base, hit - 0xC0);
    assert_eq!(region.size, 0x2_0000);
    assert_eq!(region.byte_order, ByteOrder::Little);
}

fn spec_over(start: u64, end: u64) -> ScanSpec {
    ScanSpec {
        start,
        end,
        magic: MAGIC,
        size_offset: -0x10,
        data_offset: 0,
        max_size: 0x0400_0000,
        guest_base: 0x1000_0000,
        origin: "test signature",
        byte_order: ByteOrder::Big,
    }
}
