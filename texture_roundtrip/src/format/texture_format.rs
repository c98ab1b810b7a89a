/// Pixel formats exercised by the round-trip tests and their aspects

use bitflags::bitflags;

/// Texture pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    // Typeless formats
    R32G32B32A32_TYPELESS,
    R32G32B32_TYPELESS,
    R32G32_TYPELESS,
    R32_TYPELESS,
    R16G16B16A16_TYPELESS,
    R16G16_TYPELESS,
    R16_TYPELESS,
    R8G8B8A8_TYPELESS,
    R8G8_TYPELESS,
    R8_TYPELESS,
    B8G8R8A8_TYPELESS,

    // Float formats
    R32G32B32A32_FLOAT,
    R32G32B32_FLOAT,
    R32G32_FLOAT,
    R32_FLOAT,
    R16G16B16A16_FLOAT,
    R16G16_FLOAT,
    R16_FLOAT,

    // Unsigned integer formats
    R32G32B32A32_UINT,
    R32G32B32_UINT,
    R32G32_UINT,
    R32_UINT,
    R16G16B16A16_UINT,
    R16G16_UINT,
    R16_UINT,
    R8G8B8A8_UINT,
    R8G8_UINT,
    R8_UINT,

    // Signed integer formats
    R32G32B32A32_SINT,
    R32G32B32_SINT,
    R32G32_SINT,
    R32_SINT,
    R16G16B16A16_SINT,
    R16G16_SINT,
    R16_SINT,
    R8G8B8A8_SINT,
    R8G8_SINT,
    R8_SINT,

    // Normalized formats
    R16G16B16A16_UNORM,
    R16G16_UNORM,
    R16_UNORM,
    R8G8B8A8_UNORM,
    R8G8B8A8_UNORM_SRGB,
    R8G8_UNORM,
    R8_UNORM,
    B8G8R8A8_UNORM,
    B8G8R8A8_UNORM_SRGB,
    B8G8R8X8_UNORM,
    B8G8R8X8_UNORM_SRGB,
    R16G16B16A16_SNORM,
    R16G16_SNORM,
    R16_SNORM,
    R8G8B8A8_SNORM,
    R8G8_SNORM,
    R8_SNORM,

    // Depth/stencil formats
    D32_FLOAT,
    D16_UNORM,
    D32_FLOAT_S8_UINT,

    // Packed formats
    B4G4R4A4_UNORM,
    B5G6R5_UNORM,
    B5G5R5A1_UNORM,
    R9G9B9E5_SHAREDEXP,
    R10G10B10A2_TYPELESS,
    R10G10B10A2_UNORM,
    R10G10B10A2_UINT,
    R11G11B10_FLOAT,

    // Block-compressed formats (4x4 blocks)
    BC1_UNORM,
    BC3_UNORM,
    BC7_UNORM,
}

bitflags! {
    /// Aspects of a texel a format carries
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureAspect: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;
        const DEPTH_STENCIL = Self::DEPTH.bits() | Self::STENCIL.bits();
    }
}

impl TextureFormat {
    /// Every format, in declaration order
    pub const ALL: &'static [TextureFormat] = &[
        TextureFormat::R32G32B32A32_TYPELESS,
        TextureFormat::R32G32B32_TYPELESS,
        TextureFormat::R32G32_TYPELESS,
        TextureFormat::R32_TYPELESS,
        TextureFormat::R16G16B16A16_TYPELESS,
        TextureFormat::R16G16_TYPELESS,
        TextureFormat::R16_TYPELESS,
        TextureFormat::R8G8B8A8_TYPELESS,
        TextureFormat::R8G8_TYPELESS,
        TextureFormat::R8_TYPELESS,
        TextureFormat::B8G8R8A8_TYPELESS,
        TextureFormat::R32G32B32A32_FLOAT,
        TextureFormat::R32G32B32_FLOAT,
        TextureFormat::R32G32_FLOAT,
        TextureFormat::R32_FLOAT,
        TextureFormat::R16G16B16A16_FLOAT,
        TextureFormat::R16G16_FLOAT,
        TextureFormat::R16_FLOAT,
        TextureFormat::R32G32B32A32_UINT,
        TextureFormat::R32G32B32_UINT,
        TextureFormat::R32G32_UINT,
        TextureFormat::R32_UINT,
        TextureFormat::R16G16B16A16_UINT,
        TextureFormat::R16G16_UINT,
        TextureFormat::R16_UINT,
        TextureFormat::R8G8B8A8_UINT,
        TextureFormat::R8G8_UINT,
        TextureFormat::R8_UINT,
        TextureFormat::R32G32B32A32_SINT,
        TextureFormat::R32G32B32_SINT,
        TextureFormat::R32G32_SINT,
        TextureFormat::R32_SINT,
        TextureFormat::R16G16B16A16_SINT,
        TextureFormat::R16G16_SINT,
        TextureFormat::R16_SINT,
        TextureFormat::R8G8B8A8_SINT,
        TextureFormat::R8G8_SINT,
        TextureFormat::R8_SINT,
        TextureFormat::R16G16B16A16_UNORM,
        TextureFormat::R16G16_UNORM,
        TextureFormat::R16_UNORM,
        TextureFormat::R8G8B8A8_UNORM,
        TextureFormat::R8G8B8A8_UNORM_SRGB,
        TextureFormat::R8G8_UNORM,
        TextureFormat::R8_UNORM,
        TextureFormat::B8G8R8A8_UNORM,
        TextureFormat::B8G8R8A8_UNORM_SRGB,
        TextureFormat::B8G8R8X8_UNORM,
        TextureFormat::B8G8R8X8_UNORM_SRGB,
        TextureFormat::R16G16B16A16_SNORM,
        TextureFormat::R16G16_SNORM,
        TextureFormat::R16_SNORM,
        TextureFormat::R8G8B8A8_SNORM,
        TextureFormat::R8G8_SNORM,
        TextureFormat::R8_SNORM,
        TextureFormat::D32_FLOAT,
        TextureFormat::D16_UNORM,
        TextureFormat::D32_FLOAT_S8_UINT,
        TextureFormat::B4G4R4A4_UNORM,
        TextureFormat::B5G6R5_UNORM,
        TextureFormat::B5G5R5A1_UNORM,
        TextureFormat::R9G9B9E5_SHAREDEXP,
        TextureFormat::R10G10B10A2_TYPELESS,
        TextureFormat::R10G10B10A2_UNORM,
        TextureFormat::R10G10B10A2_UINT,
        TextureFormat::R11G11B10_FLOAT,
        TextureFormat::BC1_UNORM,
        TextureFormat::BC3_UNORM,
        TextureFormat::BC7_UNORM,
    ];

    /// Size of one texel in bytes.
    ///
    /// For block-compressed formats this is the size of one 4x4 block.
    pub fn bytes_per_texel(&self) -> u32 {
        match self {
            TextureFormat::R32G32B32A32_TYPELESS
            | TextureFormat::R32G32B32A32_FLOAT
            | TextureFormat::R32G32B32A32_UINT
            | TextureFormat::R32G32B32A32_SINT => 16,

            TextureFormat::R32G32B32_TYPELESS
            | TextureFormat::R32G32B32_FLOAT
            | TextureFormat::R32G32B32_UINT
            | TextureFormat::R32G32B32_SINT => 12,

            TextureFormat::R32G32_TYPELESS
            | TextureFormat::R32G32_FLOAT
            | TextureFormat::R32G32_UINT
            | TextureFormat::R32G32_SINT
            | TextureFormat::R16G16B16A16_TYPELESS
            | TextureFormat::R16G16B16A16_FLOAT
            | TextureFormat::R16G16B16A16_UINT
            | TextureFormat::R16G16B16A16_SINT
            | TextureFormat::R16G16B16A16_UNORM
            | TextureFormat::R16G16B16A16_SNORM
            | TextureFormat::D32_FLOAT_S8_UINT => 8,

            TextureFormat::R32_TYPELESS
            | TextureFormat::R32_FLOAT
            | TextureFormat::R32_UINT
            | TextureFormat::R32_SINT
            | TextureFormat::R16G16_TYPELESS
            | TextureFormat::R16G16_FLOAT
            | TextureFormat::R16G16_UINT
            | TextureFormat::R16G16_SINT
            | TextureFormat::R16G16_UNORM
            | TextureFormat::R16G16_SNORM
            | TextureFormat::R8G8B8A8_TYPELESS
            | TextureFormat::R8G8B8A8_UINT
            | TextureFormat::R8G8B8A8_SINT
            | TextureFormat::R8G8B8A8_UNORM
            | TextureFormat::R8G8B8A8_UNORM_SRGB
            | TextureFormat::R8G8B8A8_SNORM
            | TextureFormat::B8G8R8A8_TYPELESS
            | TextureFormat::B8G8R8A8_UNORM
            | TextureFormat::B8G8R8A8_UNORM_SRGB
            | TextureFormat::B8G8R8X8_UNORM
            | TextureFormat::B8G8R8X8_UNORM_SRGB
            | TextureFormat::D32_FLOAT
            | TextureFormat::R9G9B9E5_SHAREDEXP
            | TextureFormat::R10G10B10A2_TYPELESS
            | TextureFormat::R10G10B10A2_UNORM
            | TextureFormat::R10G10B10A2_UINT
            | TextureFormat::R11G11B10_FLOAT => 4,

            TextureFormat::R16_TYPELESS
            | TextureFormat::R16_FLOAT
            | TextureFormat::R16_UINT
            | TextureFormat::R16_SINT
            | TextureFormat::R16_UNORM
            | TextureFormat::R16_SNORM
            | TextureFormat::R8G8_TYPELESS
            | TextureFormat::R8G8_UINT
            | TextureFormat::R8G8_SINT
            | TextureFormat::R8G8_UNORM
            | TextureFormat::R8G8_SNORM
            | TextureFormat::D16_UNORM
            | TextureFormat::B4G4R4A4_UNORM
            | TextureFormat::B5G6R5_UNORM
            | TextureFormat::B5G5R5A1_UNORM => 2,

            TextureFormat::R8_TYPELESS
            | TextureFormat::R8_UINT
            | TextureFormat::R8_SINT
            | TextureFormat::R8_UNORM
            | TextureFormat::R8_SNORM => 1,

            TextureFormat::BC1_UNORM => 8,
            TextureFormat::BC3_UNORM | TextureFormat::BC7_UNORM => 16,
        }
    }

    /// Aspect classification (color, depth, stencil)
    pub fn aspect(&self) -> TextureAspect {
        match self {
            TextureFormat::D16_UNORM | TextureFormat::D32_FLOAT => TextureAspect::DEPTH,
            TextureFormat::D32_FLOAT_S8_UINT => TextureAspect::DEPTH_STENCIL,
            _ => TextureAspect::COLOR,
        }
    }

    /// Returns true if texels are stored as compressed 4x4 blocks
    pub fn is_block_compressed(&self) -> bool {
        matches!(
            self,
            TextureFormat::BC1_UNORM | TextureFormat::BC3_UNORM | TextureFormat::BC7_UNORM
        )
    }

    /// Returns true if the format has a depth and/or stencil aspect
    pub fn is_depth_stencil(&self) -> bool {
        self.aspect().intersects(TextureAspect::DEPTH_STENCIL)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "texture_format_tests.rs"]
mod tests;
