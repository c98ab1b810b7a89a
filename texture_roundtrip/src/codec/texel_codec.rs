/// Texel codec dispatch and the format-to-codec table

use crate::codec::{
    ChannelType, ChannelValue, PackedBitfieldCodec, PackedStorage, UniformChannelCodec,
};
use crate::error::{Error, Result};
use crate::format::TextureFormat;

/// Position of one texel inside a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TexelCoord {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub mip_level: u32,
    pub array_layer: u32,
}

impl TexelCoord {
    pub fn new(x: u32, y: u32, z: u32, mip_level: u32, array_layer: u32) -> Self {
        Self { x, y, z, mip_level, array_layer }
    }
}

/// One channel whose actual value differs from the expected one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMismatch {
    /// Channel index (r = 0, g = 1, b = 2, a = 3)
    pub channel: usize,
    pub actual: ChannelValue,
    pub expected: ChannelValue,
}

/// Texel encoding of a format.
///
/// Both variants derive texel content purely from the texel coordinate and
/// compare blocks by their decoded channel values, so a block written by
/// `initialize` always compares equal to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexelCodec {
    /// One value per channel, all channels of the same numeric type
    Uniform(UniformChannelCodec),
    /// All channels packed as bit-fields of one storage word
    Packed(PackedBitfieldCodec),
}

impl TexelCodec {
    /// Look up the codec for `format`
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedFormat` for formats outside the test matrix
    /// (depth/stencil pairs and block-compressed formats).
    pub fn for_format(format: TextureFormat) -> Result<Self> {
        use ChannelType::*;
        use TextureFormat::*;

        let uniform = |channel_type, count| TexelCodec::Uniform(UniformChannelCodec::new(channel_type, count));
        let packed = |storage, r, g, b, a| TexelCodec::Packed(PackedBitfieldCodec::new(storage, r, g, b, a));

        let codec = match format {
            R32G32B32A32_TYPELESS | R32G32B32A32_UINT => uniform(U32, 4),
            R32G32B32_TYPELESS | R32G32B32_UINT => uniform(U32, 3),
            R32G32_TYPELESS | R32G32_UINT => uniform(U32, 2),
            R32_TYPELESS | R32_UINT => uniform(U32, 1),

            R32G32B32A32_SINT => uniform(I32, 4),
            R32G32B32_SINT => uniform(I32, 3),
            R32G32_SINT => uniform(I32, 2),
            R32_SINT => uniform(I32, 1),

            R32G32B32A32_FLOAT => uniform(F32, 4),
            R32G32B32_FLOAT => uniform(F32, 3),
            R32G32_FLOAT => uniform(F32, 2),
            R32_FLOAT | D32_FLOAT => uniform(F32, 1),

            // Half floats are compared by their raw bits
            R16G16B16A16_TYPELESS | R16G16B16A16_UINT | R16G16B16A16_UNORM | R16G16B16A16_FLOAT => uniform(U16, 4),
            R16G16_TYPELESS | R16G16_UINT | R16G16_UNORM | R16G16_FLOAT => uniform(U16, 2),
            R16_TYPELESS | R16_UINT | R16_UNORM | R16_FLOAT | D16_UNORM => uniform(U16, 1),

            R16G16B16A16_SINT | R16G16B16A16_SNORM => uniform(I16, 4),
            R16G16_SINT | R16G16_SNORM => uniform(I16, 2),
            R16_SINT | R16_SNORM => uniform(I16, 1),

            R8G8B8A8_TYPELESS | R8G8B8A8_UINT | R8G8B8A8_UNORM | R8G8B8A8_UNORM_SRGB
            | B8G8R8A8_TYPELESS | B8G8R8A8_UNORM | B8G8R8A8_UNORM_SRGB
            | B8G8R8X8_UNORM | B8G8R8X8_UNORM_SRGB => uniform(U8, 4),
            R8G8_TYPELESS | R8G8_UINT | R8G8_UNORM => uniform(U8, 2),
            R8_TYPELESS | R8_UINT | R8_UNORM => uniform(U8, 1),

            R8G8B8A8_SINT | R8G8B8A8_SNORM => uniform(I8, 4),
            R8G8_SINT | R8G8_SNORM => uniform(I8, 2),
            R8_SINT | R8_SNORM => uniform(I8, 1),

            B4G4R4A4_UNORM => packed(PackedStorage::U16, 4, 4, 4, 4),
            B5G6R5_UNORM => packed(PackedStorage::U16, 5, 6, 5, 0),
            B5G5R5A1_UNORM => packed(PackedStorage::U16, 5, 5, 5, 1),
            R9G9B9E5_SHAREDEXP => packed(PackedStorage::U32, 9, 9, 9, 5),
            R10G10B10A2_TYPELESS | R10G10B10A2_UNORM | R10G10B10A2_UINT => packed(PackedStorage::U32, 10, 10, 10, 2),
            R11G11B10_FLOAT => packed(PackedStorage::U32, 11, 11, 10, 0),

            D32_FLOAT_S8_UINT | BC1_UNORM | BC3_UNORM | BC7_UNORM => {
                return Err(Error::UnsupportedFormat(format).logged("roundtrip::Codec"));
            }
        };

        Ok(codec)
    }

    /// Bytes of a texel block the codec reads and writes
    pub fn texel_size(&self) -> usize {
        match self {
            TexelCodec::Uniform(codec) => codec.texel_size(),
            TexelCodec::Packed(codec) => codec.texel_size(),
        }
    }

    /// Number of channels reported by `compare` and `decode`
    pub fn channel_count(&self) -> usize {
        match self {
            TexelCodec::Uniform(codec) => codec.component_count() as usize,
            TexelCodec::Packed(_) => 4,
        }
    }

    /// Write the texel content for `coord` into `block`
    pub fn initialize(&self, block: &mut [u8], coord: TexelCoord) {
        match self {
            TexelCodec::Uniform(codec) => codec.initialize(block, coord),
            TexelCodec::Packed(codec) => codec.initialize(block, coord),
        }
    }

    /// Compare two blocks at the channel level.
    ///
    /// An empty result means the blocks hold equal texel values.
    pub fn compare(&self, actual: &[u8], expected: &[u8]) -> Vec<ChannelMismatch> {
        match self {
            TexelCodec::Uniform(codec) => codec.compare(actual, expected),
            TexelCodec::Packed(codec) => codec.compare(actual, expected),
        }
    }

    /// Decode the channels stored in `block`
    pub fn decode(&self, block: &[u8]) -> Vec<ChannelValue> {
        match self {
            TexelCodec::Uniform(codec) => codec.decode(block),
            TexelCodec::Packed(codec) => codec.decode(block),
        }
    }

    /// Freshly encoded block for `coord`
    pub fn encode(&self, coord: TexelCoord) -> Vec<u8> {
        let mut block = vec![0u8; self.texel_size()];
        self.initialize(&mut block, coord);
        block
    }
}

/// Compare an actual block against an expected block with `codec`
pub fn compare_blocks(codec: &TexelCodec, actual: &[u8], expected: &[u8]) -> Vec<ChannelMismatch> {
    codec.compare(actual, expected)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "texel_codec_tests.rs"]
mod tests;
