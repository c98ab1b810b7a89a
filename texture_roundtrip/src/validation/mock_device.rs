/// Mock texture device for unit tests (no GPU required)
///
/// Keeps a host copy of every uploaded subresource and hands readbacks back
/// with rows padded to a fixed alignment. On top of the plain round trip it
/// can simulate device bugs and records every readback request, so tests can
/// check that validation catches the bugs.

use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::roundtrip_bail;
use crate::texture::{subresource_index, Extent3D, Subresource, TextureDescriptor};
use crate::validation::{ReadbackData, TextureDevice, TextureHandle};

// ============================================================================
// Mock Texture
// ============================================================================

/// One uploaded texture
#[derive(Debug)]
pub struct MockTexture {
    pub extent: Extent3D,
    pub mip_level_count: u32,
    pub array_layer_count: u32,
    /// Host copies, in subresource index order
    pub subresources: Vec<Subresource>,
}

// ============================================================================
// Mock Faults
// ============================================================================

/// Device bug the mock simulates on readback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFault {
    /// Every array layer reads back as layer 0
    IgnoreArrayLayer,
    /// Every mip level reads back as mip 0, cropped to the requested extent
    IgnoreMipLevel,
}

// ============================================================================
// Mock Device
// ============================================================================

pub struct MockTextureDevice {
    row_alignment: usize,
    /// Uploaded textures, indexed by handle
    pub textures: Vec<MockTexture>,
    /// Track readback requests as (handle, mip, layer)
    pub readbacks: Arc<Mutex<Vec<(u32, u32, u32)>>>,
    /// Simulated device bug
    pub fault: Option<MockFault>,
}

impl MockTextureDevice {
    /// Create a mock device padding readback rows to `row_alignment` bytes
    pub fn new(row_alignment: usize) -> Self {
        Self {
            row_alignment,
            textures: Vec::new(),
            readbacks: Arc::new(Mutex::new(Vec::new())),
            fault: None,
        }
    }

    pub fn with_fault(mut self, fault: MockFault) -> Self {
        self.fault = Some(fault);
        self
    }

    /// Flip every bit of byte `offset` of texel (x, y, z) in a stored subresource
    pub fn corrupt_texel(&mut self, handle: TextureHandle, index: u32, (x, y, z): (u32, u32, u32), offset: usize) {
        let subresource = &mut self.textures[handle.0 as usize].subresources[index as usize];
        subresource.block_mut(x, y, z)[offset] ^= 0xFF;
    }

    /// Get readback requests
    pub fn get_readbacks(&self) -> Vec<(u32, u32, u32)> {
        self.readbacks.lock().unwrap().clone()
    }
}

impl TextureDevice for MockTextureDevice {
    fn upload(&mut self, texture: &TextureDescriptor) -> Result<TextureHandle> {
        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.push(MockTexture {
            extent: texture.extent(),
            mip_level_count: texture.mip_level_count(),
            array_layer_count: texture.array_layer_count(),
            subresources: texture.subresources().to_vec(),
        });
        Ok(handle)
    }

    fn readback(&self, handle: TextureHandle, mip_level: u32, array_layer: u32) -> Result<ReadbackData> {
        self.readbacks.lock().unwrap().push((handle.0, mip_level, array_layer));

        let Some(texture) = self.textures.get(handle.0 as usize) else {
            roundtrip_bail!("roundtrip::mock", "readback: unknown texture handle {}", handle.0);
        };
        if mip_level >= texture.mip_level_count || array_layer >= texture.array_layer_count {
            roundtrip_bail!("roundtrip::mock",
                "readback: subresource (mip {}, layer {}) out of range ({} mips, {} layers)",
                mip_level, array_layer, texture.mip_level_count, texture.array_layer_count);
        }

        let (source_mip, source_layer) = match self.fault {
            Some(MockFault::IgnoreArrayLayer) => (mip_level, 0),
            Some(MockFault::IgnoreMipLevel) => (0, array_layer),
            None => (mip_level, array_layer),
        };
        let source = &texture.subresources[subresource_index(source_mip, texture.mip_level_count, source_layer) as usize];

        // Always shaped like the requested subresource, whatever the fault read
        Ok(ReadbackData::from_texels(
            source.layout(),
            source.data(),
            texture.extent.mip(mip_level),
            self.row_alignment,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
