//! Integration tests for BufInfo: appending, permutation decoding and
//! the attribute buffer register stream.

mod common;

use c3d_core::gpu::buffers::{BufCfg, BUFINFO_MAX, DEFAULT_BASE_PADDR};
use c3d_core::gpu::registers;
use c3d_core::{BufInfo, BufInfoError, PhysAddr};
use common::MockSink;
use proptest::prelude::*;

const BASE: u32 = DEFAULT_BASE_PADDR;

#[test]
fn test_new_is_empty_at_default_base() {
    let info = BufInfo::new();
    assert_eq!(info.base_paddr(), 0x1800_0000);
    assert_eq!(info.len(), 0);
    assert!(info.is_empty());
    assert!(info.buffers().is_empty());
}

#[test]
fn test_add_returns_sequential_ids() {
    let mut info = BufInfo::new();
    assert_eq!(info.add(PhysAddr(BASE + 0x100), 20, 3, 0x210), Ok(0));
    assert_eq!(info.add(PhysAddr(BASE + 0x800), 8, 1, 0x0), Ok(1));
    assert_eq!(info.len(), 2);

    let first = info.buffers()[0];
    assert_eq!(first.offset, 0x100);
    assert_eq!(first.stride(), 20);
    assert_eq!(first.attrib_count(), 3);
    assert_eq!(first.permutation(), 0x210);
    assert_eq!(info.buffers()[1].offset, 0x800);
}

#[test]
fn test_thirteenth_buffer_is_rejected() {
    let mut info = BufInfo::new();
    for i in 0..BUFINFO_MAX {
        assert_eq!(info.add(PhysAddr(BASE + i as u32 * 0x40), 4, 1, 0), Ok(i));
    }
    let before = info;

    assert_eq!(
        info.add(PhysAddr(BASE), 4, 1, 0),
        Err(BufInfoError::Full { capacity: 12 })
    );
    assert_eq!(info.len(), 12);
    assert_eq!(info, before);
}

#[test]
fn test_buffer_below_base_is_rejected() {
    let mut info = BufInfo::new();
    info.add(PhysAddr(BASE), 4, 1, 0).unwrap();
    let before = info;

    assert_eq!(
        info.add(PhysAddr(BASE - 8), 4, 1, 0),
        Err(BufInfoError::BelowBase {
            addr: BASE - 8,
            base: BASE
        })
    );
    assert_eq!(info, before);
}

#[test]
fn test_custom_base() {
    let mut info = BufInfo::with_base(0x2000_0000);
    info.add(PhysAddr(0x2000_0040), 12, 2, 0x10).unwrap();
    assert_eq!(info.buffers()[0].offset, 0x40);

    info.init();
    assert_eq!(info, BufInfo::new());
}

#[test]
fn test_attribute_order_identity() {
    let cfg = BufCfg::new(0, 20, 3, 0x210);
    assert_eq!(cfg.attribute_order().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_attribute_order_follows_nibbles() {
    let cfg = BufCfg::new(0, 20, 3, 0x120);
    assert_eq!(cfg.attribute_order().collect::<Vec<_>>(), vec![0, 2, 1]);

    let cfg = BufCfg::new(0, 20, 3, 0x012);
    assert_eq!(cfg.attribute_order().collect::<Vec<_>>(), vec![2, 1, 0]);
}

#[test]
fn test_attribute_order_stops_at_count() {
    // Nibbles past the attribute count are ignored.
    let cfg = BufCfg::new(0, 8, 2, 0xFFF_F310);
    assert_eq!(cfg.attribute_order().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn test_padding_nibbles_pass_through() {
    let cfg = BufCfg::new(0, 16, 3, 0xC10);
    assert_eq!(cfg.attribute_order().collect::<Vec<_>>(), vec![0, 1, 0xC]);
}

#[test]
fn test_flag_word_layout() {
    let cfg = BufCfg::new(0x40, 0x1C, 12, 0xBA98_7654_3210);
    assert_eq!(cfg.flags[0], 0x7654_3210);
    assert_eq!(cfg.flags[1], 0xC01C_BA98);
    assert_eq!(cfg.attribute_order().count(), 12);
    assert_eq!(
        cfg.attribute_order().collect::<Vec<_>>(),
        (0..12).collect::<Vec<u8>>()
    );
}

#[test]
fn test_fields_truncate_to_width() {
    // 48-bit permutation, 4-bit attribute count.
    let cfg = BufCfg::new(0, 4, 0x13, 0xFFFF_0000_0000_0001);
    assert_eq!(cfg.permutation(), 0x0000_0000_0001);
    assert_eq!(cfg.attrib_count(), 3);
}

#[test]
fn test_write_to_emits_location_and_all_entries() {
    let mut info = BufInfo::new();
    info.add(PhysAddr(BASE + 0x100), 20, 3, 0x210).unwrap();

    let mut sink = MockSink::new();
    info.write_to(&mut sink).unwrap();

    let writes = sink.get_writes();
    assert_eq!(writes.len(), 1 + 36);
    assert_eq!(writes[0], (registers::ATTRIBBUFFERS_LOC, 0x0300_0000));

    assert_eq!(sink.last_write_to(registers::ATTRIBBUFFER0_OFFSET), Some(0x100));
    assert_eq!(sink.last_write_to(registers::ATTRIBBUFFER0_CONFIG1), Some(0x210));
    assert_eq!(
        sink.last_write_to(registers::ATTRIBBUFFER0_CONFIG2),
        Some(0x3014_0000)
    );

    // Unused entries are zero and the block is contiguous.
    for (i, (reg, value)) in writes[1..].iter().enumerate() {
        assert_eq!(*reg, registers::ATTRIBBUFFER0_OFFSET + i as u16);
        if i >= 3 {
            assert_eq!(*value, 0);
        }
    }
}

proptest! {
    #[test]
    fn prop_count_never_exceeds_capacity(n in 0usize..32) {
        let mut info = BufInfo::new();
        let mut accepted = 0;
        for i in 0..n {
            if info.add(PhysAddr(BASE + i as u32 * 0x10), 4, 1, 0).is_ok() {
                accepted += 1;
            }
        }
        prop_assert_eq!(accepted, n.min(BUFINFO_MAX));
        prop_assert_eq!(info.len(), n.min(BUFINFO_MAX));
    }

    #[test]
    fn prop_packed_fields_unpack(
        offset in 0u32..0x0800_0000,
        stride in any::<u8>(),
        count in 0u8..16,
        perm in 0u64..(1 << 48),
    ) {
        let mut info = BufInfo::new();
        info.add(PhysAddr(BASE + offset), stride, count, perm).unwrap();
        let cfg = info.buffers()[0];
        prop_assert_eq!(cfg.offset, offset);
        prop_assert_eq!(cfg.stride(), stride);
        prop_assert_eq!(cfg.attrib_count(), count);
        prop_assert_eq!(cfg.permutation(), perm);

        for (slot, attr) in cfg.attribute_order().enumerate() {
            prop_assert_eq!(attr as u64, (perm >> (slot * 4)) & 0xF);
        }
    }
}
