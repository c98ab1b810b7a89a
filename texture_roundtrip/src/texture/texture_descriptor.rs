/// Texture descriptor: format, shape and one owned buffer per subresource

use crate::error::{Error, Result};
use crate::format::TextureFormat;
use crate::texture::{Extent3D, SubresourceLayout};
use crate::{roundtrip_bail, roundtrip_debug};

/// Texture dimensionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureDimension {
    Tex1D,
    Tex2D,
    Tex3D,
    /// Cube map, addressed as 6 array layers per cube
    TexCube,
}

impl TextureDimension {
    /// Array layers each requested layer occupies (6 faces for cubes)
    pub fn layers_per_element(&self) -> u32 {
        match self {
            TextureDimension::TexCube => 6,
            _ => 1,
        }
    }
}

/// Linear index of a subresource.
///
/// Subresources are numbered layer-major: all mip levels of layer 0, then all
/// mip levels of layer 1, and so on.
pub fn subresource_index(mip_level: u32, mip_level_count: u32, array_layer: u32) -> u32 {
    debug_assert!(
        mip_level < mip_level_count,
        "mip_level {} out of range (mip_level_count = {})",
        mip_level,
        mip_level_count
    );
    array_layer * mip_level_count + mip_level
}

/// Number of mip levels in a full chain down to 1x1x1
pub fn max_mip_levels(extent: Extent3D) -> u32 {
    let largest = extent.width.max(extent.height).max(extent.depth).max(1);
    u32::BITS - largest.leading_zeros()
}

// ===== SUBRESOURCE =====

/// One mip level of one array layer and the bytes it owns
#[derive(Debug, Clone)]
pub struct Subresource {
    mip_level: u32,
    array_layer: u32,
    layout: SubresourceLayout,
    data: Vec<u8>,
}

impl Subresource {
    pub fn mip_level(&self) -> u32 {
        self.mip_level
    }

    pub fn array_layer(&self) -> u32 {
        self.array_layer
    }

    pub fn layout(&self) -> &SubresourceLayout {
        &self.layout
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Texel block at (x, y, z)
    pub fn block(&self, x: u32, y: u32, z: u32) -> &[u8] {
        self.layout.block(&self.data, x, y, z)
    }

    /// Mutable texel block at (x, y, z)
    pub fn block_mut(&mut self, x: u32, y: u32, z: u32) -> &mut [u8] {
        self.layout.block_mut(&mut self.data, x, y, z)
    }
}

// ===== TEXTURE DESCRIPTOR =====

/// A texture's shape plus zero-initialized host memory for every subresource.
///
/// Subresource `i` lives at `subresources()[i]` with `i` numbered by
/// [`subresource_index`]. Descriptors are built with [`TextureDescriptor::builder`].
#[derive(Debug, Clone)]
pub struct TextureDescriptor {
    format: TextureFormat,
    texel_size: u32,
    dimension: TextureDimension,
    extent: Extent3D,
    mip_level_count: u32,
    array_layer_count: u32,
    subresources: Vec<Subresource>,
}

impl TextureDescriptor {
    /// Start building a descriptor
    ///
    /// # Example
    ///
    /// ```
    /// use texture_roundtrip::texture::{Extent3D, TextureDescriptor, TextureDimension};
    /// use texture_roundtrip::TextureFormat;
    ///
    /// let texture = TextureDescriptor::builder(
    ///     TextureFormat::R8G8B8A8_UNORM,
    ///     TextureDimension::Tex2D,
    ///     Extent3D::new(16, 16, 1),
    /// )
    /// .mip_levels(4)
    /// .array_layers(2)
    /// .build()?;
    ///
    /// assert_eq!(texture.subresource_count(), 8);
    /// # Ok::<(), texture_roundtrip::Error>(())
    /// ```
    pub fn builder(
        format: TextureFormat,
        dimension: TextureDimension,
        extent: Extent3D,
    ) -> TextureDescriptorBuilder {
        TextureDescriptorBuilder {
            format,
            dimension,
            extent,
            texel_size: None,
            mip_levels: MipLevels::Count(1),
            array_layers: 1,
        }
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn texel_size(&self) -> u32 {
        self.texel_size
    }

    pub fn dimension(&self) -> TextureDimension {
        self.dimension
    }

    /// Extent of mip level 0
    pub fn extent(&self) -> Extent3D {
        self.extent
    }

    pub fn mip_level_count(&self) -> u32 {
        self.mip_level_count
    }

    /// Total array layers, counting each cube face as a layer
    pub fn array_layer_count(&self) -> u32 {
        self.array_layer_count
    }

    pub fn subresource_count(&self) -> u32 {
        self.mip_level_count * self.array_layer_count
    }

    pub fn subresources(&self) -> &[Subresource] {
        &self.subresources
    }

    pub fn subresources_mut(&mut self) -> &mut [Subresource] {
        &mut self.subresources
    }

    /// Subresource by linear index
    pub fn subresource(&self, index: u32) -> &Subresource {
        &self.subresources[index as usize]
    }

    /// Mutable subresource by linear index
    pub fn subresource_mut(&mut self, index: u32) -> &mut Subresource {
        &mut self.subresources[index as usize]
    }

    /// Subresource for a mip level and array layer
    pub fn subresource_at(&self, mip_level: u32, array_layer: u32) -> &Subresource {
        self.subresource(subresource_index(mip_level, self.mip_level_count, array_layer))
    }

    /// Bytes held across all subresources
    pub fn total_size(&self) -> usize {
        self.subresources.iter().map(|s| s.data.len()).sum()
    }
}

// ===== BUILDER =====

#[derive(Debug, Clone, Copy)]
enum MipLevels {
    Count(u32),
    FullChain,
}

/// Builder for [`TextureDescriptor`]
#[derive(Debug, Clone)]
pub struct TextureDescriptorBuilder {
    format: TextureFormat,
    dimension: TextureDimension,
    extent: Extent3D,
    texel_size: Option<u32>,
    mip_levels: MipLevels,
    array_layers: u32,
}

impl TextureDescriptorBuilder {
    /// Texel size in bytes; must match the format's texel size
    pub fn texel_size(mut self, texel_size: u32) -> Self {
        self.texel_size = Some(texel_size);
        self
    }

    pub fn mip_levels(mut self, mip_levels: u32) -> Self {
        self.mip_levels = MipLevels::Count(mip_levels);
        self
    }

    /// Use every mip level down to 1x1x1
    pub fn full_mip_chain(mut self) -> Self {
        self.mip_levels = MipLevels::FullChain;
        self
    }

    /// Array layers (cubes for `TexCube`, each contributing 6 layers)
    pub fn array_layers(mut self, array_layers: u32) -> Self {
        self.array_layers = array_layers;
        self
    }

    /// Validate the description and allocate zero-filled subresource buffers
    ///
    /// # Errors
    ///
    /// - `Error::UnsupportedFormat` for block-compressed formats
    /// - `Error::InvalidTexture` for empty extents, zero counts, extents that do
    ///   not fit the dimension, too many mip levels or a mismatched texel size
    pub fn build(self) -> Result<TextureDescriptor> {
        const SOURCE: &str = "roundtrip::TextureDescriptor";

        if self.format.is_block_compressed() {
            return Err(Error::UnsupportedFormat(self.format).logged(SOURCE));
        }

        let format_texel_size = self.format.bytes_per_texel();
        let texel_size = self.texel_size.unwrap_or(format_texel_size);
        if texel_size != format_texel_size {
            roundtrip_bail!(SOURCE,
                "texel size {} does not match {:?} ({} bytes)",
                texel_size, self.format, format_texel_size);
        }

        let extent = self.extent;
        if extent.is_empty() {
            roundtrip_bail!(SOURCE, "extent {:?} has a zero dimension", extent);
        }
        match self.dimension {
            TextureDimension::Tex1D if extent.height != 1 || extent.depth != 1 => {
                roundtrip_bail!(SOURCE, "1D texture must have height and depth 1, got {:?}", extent);
            }
            TextureDimension::Tex2D if extent.depth != 1 => {
                roundtrip_bail!(SOURCE, "2D texture must have depth 1, got {:?}", extent);
            }
            TextureDimension::TexCube if extent.depth != 1 || extent.width != extent.height => {
                roundtrip_bail!(SOURCE, "cube faces must be square with depth 1, got {:?}", extent);
            }
            _ => {}
        }

        if self.array_layers == 0 {
            roundtrip_bail!(SOURCE, "array layer count must be at least 1");
        }
        if self.dimension == TextureDimension::Tex3D && self.array_layers != 1 {
            roundtrip_bail!(SOURCE, "3D textures cannot have array layers (got {})", self.array_layers);
        }

        let max_levels = max_mip_levels(extent);
        let mip_level_count = match self.mip_levels {
            MipLevels::Count(count) => count,
            MipLevels::FullChain => max_levels,
        };
        if mip_level_count == 0 || mip_level_count > max_levels {
            roundtrip_bail!(SOURCE,
                "mip level count {} out of range (1..={} for {:?})",
                mip_level_count, max_levels, extent);
        }

        let Some(array_layer_count) = self.array_layers.checked_mul(self.dimension.layers_per_element()) else {
            roundtrip_bail!(SOURCE,
                "{} array layers of {:?} overflow the layer count",
                self.array_layers, self.dimension);
        };
        let Some(subresource_count) = mip_level_count.checked_mul(array_layer_count) else {
            roundtrip_bail!(SOURCE,
                "{} mips x {} layers overflow the subresource count",
                mip_level_count, array_layer_count);
        };
        let texel_bytes = texel_size as usize;

        let mut subresources = Vec::with_capacity(subresource_count as usize);
        for array_layer in 0..array_layer_count {
            for mip_level in 0..mip_level_count {
                let layout = SubresourceLayout::tight(extent.mip(mip_level), texel_bytes);
                subresources.push(Subresource {
                    mip_level,
                    array_layer,
                    layout,
                    data: vec![0u8; layout.required_size()],
                });
            }
        }

        roundtrip_debug!(SOURCE,
            "Built {:?} {:?} texture {}x{}x{} ({} mips, {} layers, {} subresources)",
            self.dimension, self.format, extent.width, extent.height, extent.depth,
            mip_level_count, array_layer_count, subresources.len());

        Ok(TextureDescriptor {
            format: self.format,
            texel_size,
            dimension: self.dimension,
            extent,
            mip_level_count,
            array_layer_count,
            subresources,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "texture_descriptor_tests.rs"]
mod tests;
