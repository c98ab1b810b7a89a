//! Unit tests for packed_bitfield.rs

use super::*;
use crate::codec::TexelCodec;
use crate::format::TextureFormat;

fn b5g6r5() -> PackedBitfieldCodec {
    PackedBitfieldCodec::new(PackedStorage::U16, 5, 6, 5, 0)
}

fn r10g10b10a2() -> PackedBitfieldCodec {
    PackedBitfieldCodec::new(PackedStorage::U32, 10, 10, 10, 2)
}

// ============================================================================
// CONSTRUCTION TESTS
// ============================================================================

#[test]
fn test_storage_sizes() {
    assert_eq!(PackedStorage::U16.size(), 2);
    assert_eq!(PackedStorage::U16.bits(), 16);
    assert_eq!(PackedStorage::U32.size(), 4);
    assert_eq!(PackedStorage::U32.bits(), 32);
}

#[test]
fn test_new_keeps_widths() {
    let codec = r10g10b10a2();
    assert_eq!(codec.storage(), PackedStorage::U32);
    assert_eq!(codec.bit_widths(), [10, 10, 10, 2]);
    assert_eq!(codec.texel_size(), 4);
    assert!(codec.has_alpha());
    assert!(!b5g6r5().has_alpha());
}

#[test]
#[should_panic(expected = "bit-fields 5/6/5/1 need 17 bits but U16 holds 16")]
fn test_widths_wider_than_storage_panic() {
    PackedBitfieldCodec::new(PackedStorage::U16, 5, 6, 5, 1);
}

// ============================================================================
// LAYOUT TESTS
// ============================================================================

#[test]
fn test_layout_without_alpha() {
    let codec = b5g6r5();
    let coord = TexelCoord::new(3, 2, 1, 1, 1);
    assert_eq!(codec.field_values(coord), [4, 3, 1, 0]);

    let mut block = [0u8; 2];
    codec.initialize(&mut block, coord);
    let word = u16::from_ne_bytes(block);
    assert_eq!(word, 4 | (3 << 5) | (1 << 11));
}

#[test]
fn test_layout_with_alpha() {
    let codec = r10g10b10a2();
    let coord = TexelCoord::new(3, 2, 1, 1, 1);
    assert_eq!(codec.field_values(coord), [4, 2, 1, 1]);

    let mut block = [0u8; 4];
    codec.initialize(&mut block, coord);
    let word = u32::from_ne_bytes(block);
    assert_eq!(word, 4 | (2 << 10) | (1 << 20) | (1 << 30));
}

/// Every packed layout of the format table plus edge layouts
fn round_trip_layouts() -> Vec<PackedBitfieldCodec> {
    let mut codecs: Vec<PackedBitfieldCodec> = TextureFormat::ALL
        .iter()
        .filter_map(|format| match TexelCodec::for_format(*format) {
            Ok(TexelCodec::Packed(codec)) => Some(codec),
            _ => None,
        })
        .collect();

    codecs.extend([
        PackedBitfieldCodec::new(PackedStorage::U16, 16, 0, 0, 0),
        PackedBitfieldCodec::new(PackedStorage::U16, 0, 0, 0, 16),
        PackedBitfieldCodec::new(PackedStorage::U16, 1, 1, 1, 1),
        PackedBitfieldCodec::new(PackedStorage::U16, 5, 0, 5, 0),
        PackedBitfieldCodec::new(PackedStorage::U32, 32, 0, 0, 0),
        PackedBitfieldCodec::new(PackedStorage::U32, 0, 0, 0, 32),
        PackedBitfieldCodec::new(PackedStorage::U32, 0, 16, 0, 16),
        PackedBitfieldCodec::new(PackedStorage::U32, 8, 8, 8, 0),
    ]);
    codecs
}

#[test]
fn test_pack_unpack_round_trip() {
    let layouts = round_trip_layouts();
    // 6 distinct layouts in the format table, 8 edge layouts
    assert!(layouts.len() >= 14);

    for codec in layouts {
        // 0, mid and max for every field width
        let samples = codec.bit_widths().map(|width| {
            let max = ((1u64 << width) - 1) as u32;
            [0, max / 2, max]
        });

        for r in samples[0] {
            for g in samples[1] {
                for b in samples[2] {
                    for a in samples[3] {
                        let fields = [r, g, b, a];
                        assert_eq!(
                            codec.unpack(codec.pack(fields)),
                            fields,
                            "{:?} widths {:?}",
                            codec.storage(),
                            codec.bit_widths()
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_round_trip_through_storage_bytes() {
    for codec in round_trip_layouts() {
        let mut block = [0u8; 4];
        for coord in [
            TexelCoord::new(0, 0, 0, 0, 0),
            TexelCoord::new(3, 2, 1, 1, 1),
            TexelCoord::new(1000, 700, 3, 9, 40),
        ] {
            codec.initialize(&mut block, coord);
            let expected: Vec<_> = codec
                .field_values(coord)
                .iter()
                .zip(codec.bit_widths())
                .map(|(value, width)| ChannelValue::Unsigned(u64::from(*value) & ((1u64 << width) - 1)))
                .collect();
            assert_eq!(codec.decode(&block), expected, "widths {:?}", codec.bit_widths());
        }
    }
}

#[test]
fn test_full_width_field() {
    let codec = PackedBitfieldCodec::new(PackedStorage::U32, 32, 0, 0, 0);
    assert_eq!(codec.pack([u32::MAX, 0, 0, 0]), u32::MAX);
    assert_eq!(codec.unpack(u32::MAX), [u32::MAX, 0, 0, 0]);
}

#[test]
fn test_wide_values_are_masked_to_their_field() {
    let codec = b5g6r5();
    // 40 needs 6 bits; only the low 5 land in red, green stays untouched
    let word = codec.pack([40, 0, 0, 0]);
    assert_eq!(word, 40 & 0x1F);
    assert_eq!(codec.unpack(word), [8, 0, 0, 0]);
}

// ============================================================================
// COMPARISON TESTS
// ============================================================================

#[test]
fn test_compare_equal_blocks() {
    let codec = r10g10b10a2();
    let mut block = [0u8; 4];
    codec.initialize(&mut block, TexelCoord::new(17, 5, 0, 2, 3));
    assert!(codec.compare(&block, &block).is_empty());
}

#[test]
fn test_compare_reports_field() {
    let codec = b5g6r5();
    let mut expected = [0u8; 2];
    codec.initialize(&mut expected, TexelCoord::new(3, 2, 1, 1, 1));

    // Flip the lowest green bit
    let word = u16::from_ne_bytes(expected) ^ (1 << 5);
    let actual = word.to_ne_bytes();

    let mismatches = codec.compare(&actual, &expected);
    assert_eq!(
        mismatches,
        vec![ChannelMismatch {
            channel: 1,
            actual: ChannelValue::Unsigned(2),
            expected: ChannelValue::Unsigned(3),
        }]
    );
}

#[test]
fn test_compare_ignores_padding_bits() {
    let codec = PackedBitfieldCodec::new(PackedStorage::U32, 8, 8, 8, 0);
    let expected = 0x0012_3456u32.to_ne_bytes();
    let actual = 0xFF12_3456u32.to_ne_bytes();
    assert!(codec.compare(&actual, &expected).is_empty());
}

#[test]
fn test_decode_returns_four_fields() {
    let codec = r10g10b10a2();
    let mut block = [0u8; 4];
    codec.initialize(&mut block, TexelCoord::new(3, 2, 1, 1, 1));
    assert_eq!(
        codec.decode(&block),
        vec![
            ChannelValue::Unsigned(4),
            ChannelValue::Unsigned(2),
            ChannelValue::Unsigned(1),
            ChannelValue::Unsigned(1),
        ]
    );
}

#[test]
#[should_panic(expected = "texel block of 2 bytes is smaller than a U32 word")]
fn test_short_block_panics() {
    r10g10b10a2().decode(&[0u8; 2]);
}
