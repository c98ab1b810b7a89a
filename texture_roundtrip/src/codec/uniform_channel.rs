/// Codec for formats storing one value of a uniform numeric type per channel

use std::fmt;
use std::mem::size_of;
use bytemuck::Pod;
use crate::codec::{ChannelMismatch, TexelCoord};

/// Numeric type of every channel in a uniform-channel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
}

impl ChannelType {
    /// Size of one channel in bytes
    pub fn size(&self) -> usize {
        match self {
            ChannelType::U8 | ChannelType::I8 => 1,
            ChannelType::U16 | ChannelType::I16 => 2,
            ChannelType::U32 | ChannelType::I32 | ChannelType::F32 => 4,
        }
    }
}

/// One decoded channel value, kept in its own numeric domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelValue {
    Unsigned(u64),
    Signed(i64),
    Float(f32),
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelValue::Unsigned(v) => write!(f, "{}", v),
            ChannelValue::Signed(v) => write!(f, "{}", v),
            ChannelValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// Storage type of one uniform channel
trait Channel: Pod + PartialEq {
    /// Convert a mixed coordinate value with `as` semantics (integers wrap)
    fn from_coord(value: u32) -> Self;

    fn value(self) -> ChannelValue;
}

macro_rules! impl_channel {
    ($ty:ty, $variant:ident, $wide:ty) => {
        impl Channel for $ty {
            fn from_coord(value: u32) -> Self {
                value as $ty
            }

            fn value(self) -> ChannelValue {
                ChannelValue::$variant(self as $wide)
            }
        }
    };
}

impl_channel!(u8, Unsigned, u64);
impl_channel!(u16, Unsigned, u64);
impl_channel!(u32, Unsigned, u64);
impl_channel!(i8, Signed, i64);
impl_channel!(i16, Signed, i64);
impl_channel!(i32, Signed, i64);
impl_channel!(f32, Float, f32);

/// Texel codec for 1 to 4 channels of one numeric type, stored back to back.
///
/// Channel values are mixed from the texel coordinate so that every axis
/// (x, y, z, mip level, array layer) perturbs at least one channel:
///
/// | channels | values |
/// |---|---|
/// | 1 | `x+y+z+mip+layer` |
/// | 2 | `x+z+layer`, `y+mip` |
/// | 3 | `x+mip`, `y+layer`, `z` |
/// | 4 | `x+layer`, `y`, `z`, `mip` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformChannelCodec {
    channel_type: ChannelType,
    component_count: u32,
}

impl UniformChannelCodec {
    /// Create a codec for `component_count` channels of `channel_type`
    ///
    /// # Panics
    ///
    /// Panics if `component_count` is not in 1..=4. The format table is closed,
    /// so any other count is a bug in the table, not a runtime condition.
    pub fn new(channel_type: ChannelType, component_count: u32) -> Self {
        assert!(
            (1..=4).contains(&component_count),
            "component count should be between 1 and 4, got {}",
            component_count
        );
        Self { channel_type, component_count }
    }

    pub fn channel_type(&self) -> ChannelType {
        self.channel_type
    }

    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    /// Bytes written by `initialize`
    pub fn texel_size(&self) -> usize {
        self.channel_type.size() * self.component_count as usize
    }

    /// Channel values for `coord` before conversion to the channel type.
    ///
    /// Only the first `component_count` entries are meaningful.
    pub fn mixed_values(&self, coord: TexelCoord) -> [u32; 4] {
        let TexelCoord { x, y, z, mip_level, array_layer } = coord;
        match self.component_count {
            1 => [
                x.wrapping_add(y)
                    .wrapping_add(z)
                    .wrapping_add(mip_level)
                    .wrapping_add(array_layer),
                0,
                0,
                0,
            ],
            2 => [
                x.wrapping_add(z).wrapping_add(array_layer),
                y.wrapping_add(mip_level),
                0,
                0,
            ],
            3 => [x.wrapping_add(mip_level), y.wrapping_add(array_layer), z, 0],
            4 => [x.wrapping_add(array_layer), y, z, mip_level],
            _ => unreachable!("component count validated in UniformChannelCodec::new"),
        }
    }

    /// Write the channel values for `coord` into the start of `block`
    pub fn initialize(&self, block: &mut [u8], coord: TexelCoord) {
        match self.channel_type {
            ChannelType::U8 => self.write_channels::<u8>(block, coord),
            ChannelType::I8 => self.write_channels::<i8>(block, coord),
            ChannelType::U16 => self.write_channels::<u16>(block, coord),
            ChannelType::I16 => self.write_channels::<i16>(block, coord),
            ChannelType::U32 => self.write_channels::<u32>(block, coord),
            ChannelType::I32 => self.write_channels::<i32>(block, coord),
            ChannelType::F32 => self.write_channels::<f32>(block, coord),
        }
    }

    /// Compare two blocks channel by channel, one entry per diverging channel
    pub fn compare(&self, actual: &[u8], expected: &[u8]) -> Vec<ChannelMismatch> {
        match self.channel_type {
            ChannelType::U8 => self.compare_channels::<u8>(actual, expected),
            ChannelType::I8 => self.compare_channels::<i8>(actual, expected),
            ChannelType::U16 => self.compare_channels::<u16>(actual, expected),
            ChannelType::I16 => self.compare_channels::<i16>(actual, expected),
            ChannelType::U32 => self.compare_channels::<u32>(actual, expected),
            ChannelType::I32 => self.compare_channels::<i32>(actual, expected),
            ChannelType::F32 => self.compare_channels::<f32>(actual, expected),
        }
    }

    /// Decode the channels stored in `block`
    pub fn decode(&self, block: &[u8]) -> Vec<ChannelValue> {
        match self.channel_type {
            ChannelType::U8 => self.decode_channels::<u8>(block),
            ChannelType::I8 => self.decode_channels::<i8>(block),
            ChannelType::U16 => self.decode_channels::<u16>(block),
            ChannelType::I16 => self.decode_channels::<i16>(block),
            ChannelType::U32 => self.decode_channels::<u32>(block),
            ChannelType::I32 => self.decode_channels::<i32>(block),
            ChannelType::F32 => self.decode_channels::<f32>(block),
        }
    }

    fn decode_channels<T: Channel>(&self, block: &[u8]) -> Vec<ChannelValue> {
        self.read_channels::<T>(block).into_iter().map(Channel::value).collect()
    }

    fn write_channels<T: Channel>(&self, block: &mut [u8], coord: TexelCoord) {
        self.check_block(block.len());
        let size = size_of::<T>();
        let values = self.mixed_values(coord);
        for (i, value) in values.iter().take(self.component_count as usize).enumerate() {
            let channel = T::from_coord(*value);
            block[i * size..(i + 1) * size].copy_from_slice(bytemuck::bytes_of(&channel));
        }
    }

    fn read_channels<T: Channel>(&self, block: &[u8]) -> Vec<T> {
        self.check_block(block.len());
        let size = size_of::<T>();
        (0..self.component_count as usize)
            .map(|i| bytemuck::pod_read_unaligned::<T>(&block[i * size..(i + 1) * size]))
            .collect()
    }

    fn compare_channels<T: Channel>(&self, actual: &[u8], expected: &[u8]) -> Vec<ChannelMismatch> {
        let actual = self.read_channels::<T>(actual);
        let expected = self.read_channels::<T>(expected);

        actual
            .into_iter()
            .zip(expected)
            .enumerate()
            .filter(|(_, (a, e))| a != e)
            .map(|(channel, (a, e))| ChannelMismatch {
                channel,
                actual: a.value(),
                expected: e.value(),
            })
            .collect()
    }

    fn check_block(&self, len: usize) {
        assert!(
            len >= self.texel_size(),
            "texel block of {} bytes is smaller than {} channels of {:?}",
            len,
            self.component_count,
            self.channel_type
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "uniform_channel_tests.rs"]
mod tests;
