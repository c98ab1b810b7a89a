/// Deterministic texture content generation

use crate::codec::{TexelCodec, TexelCoord};
use crate::{roundtrip_debug, roundtrip_trace};
use crate::texture::TextureDescriptor;

/// Mip level and array layer of a linear subresource index
pub fn subresource_position(index: u32, mip_level_count: u32) -> (u32, u32) {
    (index % mip_level_count, index / mip_level_count)
}

/// Fill every texel of every subresource of `texture` with content derived
/// from its coordinate.
///
/// Running it twice produces byte-identical buffers.
///
/// # Panics
///
/// Panics if the codec writes more bytes per texel than the texture holds.
pub fn generate(texture: &mut TextureDescriptor, codec: &TexelCodec) {
    assert!(
        codec.texel_size() <= texture.texel_size() as usize,
        "codec writes {} bytes per texel but {:?} texels hold {}",
        codec.texel_size(),
        texture.format(),
        texture.texel_size()
    );

    let mip_level_count = texture.mip_level_count();
    let mut texel_count = 0usize;

    for index in 0..texture.subresource_count() {
        let (mip_level, array_layer) = subresource_position(index, mip_level_count);
        let subresource = texture.subresource_mut(index);
        debug_assert_eq!((subresource.mip_level(), subresource.array_layer()), (mip_level, array_layer));

        let layout = *subresource.layout();
        let data = subresource.data_mut();
        for (x, y, z) in layout.coords() {
            let block = layout.block_mut(data, x, y, z);
            codec.initialize(block, TexelCoord::new(x, y, z, mip_level, array_layer));
        }
        texel_count += layout.extent().texel_count();

        roundtrip_trace!("roundtrip::Generator",
            "{:?} mip {} layer {}: {} texels",
            texture.format(), mip_level, array_layer, layout.extent().texel_count());
    }

    roundtrip_debug!("roundtrip::Generator",
        "Generated {} texels across {} subresources of {:?}",
        texel_count, texture.subresource_count(), texture.format());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "data_generator_tests.rs"]
mod tests;
