/// Codec for formats packing all channels as bit-fields of one storage word

use crate::codec::{ChannelMismatch, ChannelValue, TexelCoord};

/// Unsigned storage word of a packed format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackedStorage {
    U16,
    U32,
}

impl PackedStorage {
    /// Size of the storage word in bytes
    pub fn size(&self) -> usize {
        match self {
            PackedStorage::U16 => 2,
            PackedStorage::U32 => 4,
        }
    }

    /// Width of the storage word in bits
    pub fn bits(&self) -> u32 {
        self.size() as u32 * 8
    }
}

/// Texel codec for packed formats such as B5G6R5 or R10G10B10A2.
///
/// Fields are laid out from least to most significant bit in r, g, b, a order.
/// The field contents depend on whether the format has an alpha field:
///
/// - no alpha (`a_bits == 0`): `[x+mip : r] [y+layer : g] [z : b]`
/// - alpha (`a_bits > 0`): `[x+layer : r] [y : g] [z : b] [mip : a]`
///
/// Values wider than their field are masked to the field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedBitfieldCodec {
    storage: PackedStorage,
    bits: [u32; 4],
}

impl PackedBitfieldCodec {
    /// Create a codec with the given field widths
    ///
    /// # Panics
    ///
    /// Panics if the widths add up to more bits than `storage` holds.
    pub fn new(storage: PackedStorage, r_bits: u32, g_bits: u32, b_bits: u32, a_bits: u32) -> Self {
        let total = r_bits + g_bits + b_bits + a_bits;
        assert!(
            total <= storage.bits(),
            "bit-fields {}/{}/{}/{} need {} bits but {:?} holds {}",
            r_bits,
            g_bits,
            b_bits,
            a_bits,
            total,
            storage,
            storage.bits()
        );
        Self { storage, bits: [r_bits, g_bits, b_bits, a_bits] }
    }

    pub fn storage(&self) -> PackedStorage {
        self.storage
    }

    /// Field widths in r, g, b, a order
    pub fn bit_widths(&self) -> [u32; 4] {
        self.bits
    }

    /// Returns true if the alpha field is present (selects the 4-field layout)
    pub fn has_alpha(&self) -> bool {
        self.bits[3] > 0
    }

    /// Bytes written by `initialize`
    pub fn texel_size(&self) -> usize {
        self.storage.size()
    }

    /// Field values for `coord` before masking, in r, g, b, a order
    pub fn field_values(&self, coord: TexelCoord) -> [u32; 4] {
        let TexelCoord { x, y, z, mip_level, array_layer } = coord;
        if self.has_alpha() {
            [x.wrapping_add(array_layer), y, z, mip_level]
        } else {
            // No alpha field: mip and layer ride along in red and green
            [x.wrapping_add(mip_level), y.wrapping_add(array_layer), z, 0]
        }
    }

    /// Pack four field values into a storage word
    pub(crate) fn pack(&self, fields: [u32; 4]) -> u32 {
        let mut word: u64 = 0;
        for (field, &width) in fields.iter().zip(self.bits.iter()).rev() {
            word <<= width;
            word |= u64::from(*field) & field_mask(width);
        }
        word as u32
    }

    /// Split a storage word into its four field values
    pub(crate) fn unpack(&self, word: u32) -> [u32; 4] {
        let mut word = u64::from(word);
        let mut fields = [0u32; 4];
        for (field, &width) in fields.iter_mut().zip(self.bits.iter()) {
            *field = (word & field_mask(width)) as u32;
            word >>= width;
        }
        fields
    }

    /// Store the packed word for `coord` at the start of `block`
    pub fn initialize(&self, block: &mut [u8], coord: TexelCoord) {
        self.check_block(block.len());
        let word = self.pack(self.field_values(coord));
        match self.storage {
            PackedStorage::U16 => block[..2].copy_from_slice(bytemuck::bytes_of(&(word as u16))),
            PackedStorage::U32 => block[..4].copy_from_slice(bytemuck::bytes_of(&word)),
        }
    }

    /// Compare the unpacked fields of two blocks, one entry per diverging field.
    ///
    /// Bits above the last field are ignored.
    pub fn compare(&self, actual: &[u8], expected: &[u8]) -> Vec<ChannelMismatch> {
        let actual = self.decode_fields(actual);
        let expected = self.decode_fields(expected);

        actual
            .iter()
            .zip(expected.iter())
            .enumerate()
            .filter(|(_, (a, e))| a != e)
            .map(|(channel, (a, e))| ChannelMismatch {
                channel,
                actual: ChannelValue::Unsigned(u64::from(*a)),
                expected: ChannelValue::Unsigned(u64::from(*e)),
            })
            .collect()
    }

    /// Decode the four fields stored in `block`
    pub fn decode(&self, block: &[u8]) -> Vec<ChannelValue> {
        self.decode_fields(block)
            .iter()
            .map(|field| ChannelValue::Unsigned(u64::from(*field)))
            .collect()
    }

    fn decode_fields(&self, block: &[u8]) -> [u32; 4] {
        self.check_block(block.len());
        let word = match self.storage {
            PackedStorage::U16 => u32::from(bytemuck::pod_read_unaligned::<u16>(&block[..2])),
            PackedStorage::U32 => bytemuck::pod_read_unaligned::<u32>(&block[..4]),
        };
        self.unpack(word)
    }

    fn check_block(&self, len: usize) {
        assert!(
            len >= self.texel_size(),
            "texel block of {} bytes is smaller than a {:?} word",
            len,
            self.storage
        );
    }
}

/// `(1 << width) - 1`, valid up to a full 32-bit field
fn field_mask(width: u32) -> u64 {
    (1u64 << width) - 1
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "packed_bitfield_tests.rs"]
mod tests;
