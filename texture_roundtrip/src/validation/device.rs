/// Device interface the round trip runs against

use crate::codec::TexelCodec;
use crate::config::ValidationConfig;
use crate::error::Result;
use crate::texture::{generate, subresource_position, TextureDescriptor};
use crate::validation::{validate_texture, ReadbackData, TextureReport};

/// Opaque handle to a texture living on a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Texture upload and readback, implemented by the device layer.
///
/// The device owns the texture memory; this crate only hands it host buffers
/// to upload and receives host buffers back.
pub trait TextureDevice {
    /// Create a texture shaped like `texture` and upload every subresource
    fn upload(&mut self, texture: &TextureDescriptor) -> Result<TextureHandle>;

    /// Copy one subresource back to host memory
    fn readback(&self, handle: TextureHandle, mip_level: u32, array_layer: u32) -> Result<ReadbackData>;
}

/// Generate `texture`, upload it, read every subresource back and validate it
///
/// # Errors
///
/// Propagates device errors and readback shape errors. Channel mismatches are
/// reported in the returned `TextureReport`, not as errors.
pub fn run_roundtrip<D: TextureDevice + ?Sized>(
    device: &mut D,
    texture: &mut TextureDescriptor,
    codec: &TexelCodec,
    config: &ValidationConfig,
) -> Result<TextureReport> {
    generate(texture, codec);
    let handle = device.upload(texture)?;

    let mut readbacks = Vec::with_capacity(texture.subresource_count() as usize);
    for index in 0..texture.subresource_count() {
        let (mip_level, array_layer) = subresource_position(index, texture.mip_level_count());
        readbacks.push(device.readback(handle, mip_level, array_layer)?);
    }

    validate_texture(texture, codec, &readbacks, config)
}
