/// Extents, strides and bounds-checked texel addressing of one subresource

/// Size of a texture or subresource in texels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent3D {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Extent3D {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self { width, height, depth }
    }

    /// Extent of mip level `level`: every dimension halved per level, minimum 1
    pub fn mip(&self, level: u32) -> Self {
        Self {
            width: mip_dimension(self.width, level),
            height: mip_dimension(self.height, level),
            depth: mip_dimension(self.depth, level),
        }
    }

    /// Number of texels covered by this extent
    pub fn texel_count(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// Returns true if any dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.depth == 0
    }
}

fn mip_dimension(value: u32, level: u32) -> u32 {
    value.checked_shr(level).unwrap_or(0).max(1)
}

/// Byte distance between neighbouring texels along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strides {
    /// Bytes from one texel to the next in a row
    pub x: usize,
    /// Bytes from one row to the next (row pitch)
    pub y: usize,
    /// Bytes from one depth slice to the next (slice pitch)
    pub z: usize,
}

impl Strides {
    /// Strides of a tightly packed subresource
    pub fn tight(extent: Extent3D, texel_size: usize) -> Self {
        let y = extent.width as usize * texel_size;
        Self {
            x: texel_size,
            y,
            z: y * extent.height as usize,
        }
    }

    /// Strides from a device-reported row and slice pitch
    pub fn pitched(texel_size: usize, row_pitch: usize, slice_pitch: usize) -> Self {
        Self { x: texel_size, y: row_pitch, z: slice_pitch }
    }
}

/// Layout of one mip level of one array layer inside its byte buffer.
///
/// The layout never owns the buffer it describes; the buffer is passed to
/// `block`/`block_mut` and validated against the layout on every access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubresourceLayout {
    extent: Extent3D,
    strides: Strides,
    texel_size: usize,
}

impl SubresourceLayout {
    pub fn new(extent: Extent3D, strides: Strides, texel_size: usize) -> Self {
        Self { extent, strides, texel_size }
    }

    /// Layout of a tightly packed subresource
    pub fn tight(extent: Extent3D, texel_size: usize) -> Self {
        Self::new(extent, Strides::tight(extent, texel_size), texel_size)
    }

    pub fn extent(&self) -> Extent3D {
        self.extent
    }

    pub fn strides(&self) -> Strides {
        self.strides
    }

    pub fn texel_size(&self) -> usize {
        self.texel_size
    }

    /// Byte offset of texel (x, y, z) from the start of the subresource
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is at or beyond its extent.
    pub fn address_of(&self, x: u32, y: u32, z: u32) -> usize {
        assert!(
            x < self.extent.width,
            "x = {} out of range (width = {})",
            x,
            self.extent.width
        );
        assert!(
            y < self.extent.height,
            "y = {} out of range (height = {})",
            y,
            self.extent.height
        );
        assert!(
            z < self.extent.depth,
            "z = {} out of range (depth = {})",
            z,
            self.extent.depth
        );

        z as usize * self.strides.z + y as usize * self.strides.y + x as usize * self.strides.x
    }

    /// Minimum buffer length holding every texel of this subresource
    pub fn required_size(&self) -> usize {
        if self.extent.is_empty() {
            return 0;
        }
        let last = self.address_of(
            self.extent.width - 1,
            self.extent.height - 1,
            self.extent.depth - 1,
        );
        last + self.texel_size
    }

    /// Texel block at (x, y, z) in `buffer`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range or the block does not fit in `buffer`.
    pub fn block<'a>(&self, buffer: &'a [u8], x: u32, y: u32, z: u32) -> &'a [u8] {
        let range = self.block_range(buffer.len(), x, y, z);
        &buffer[range]
    }

    /// Mutable texel block at (x, y, z) in `buffer`
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range or the block does not fit in `buffer`.
    pub fn block_mut<'a>(&self, buffer: &'a mut [u8], x: u32, y: u32, z: u32) -> &'a mut [u8] {
        let range = self.block_range(buffer.len(), x, y, z);
        &mut buffer[range]
    }

    /// Every in-range coordinate, x fastest then y then z
    pub fn coords(&self) -> impl Iterator<Item = (u32, u32, u32)> {
        let Extent3D { width, height, depth } = self.extent;
        (0..depth).flat_map(move |z| (0..height).flat_map(move |y| (0..width).map(move |x| (x, y, z))))
    }

    fn block_range(&self, buffer_len: usize, x: u32, y: u32, z: u32) -> std::ops::Range<usize> {
        let offset = self.address_of(x, y, z);
        let end = offset + self.texel_size;
        assert!(
            end <= buffer_len,
            "texel ({}, {}, {}) spans bytes {}..{} but the buffer holds {}",
            x,
            y,
            z,
            offset,
            end,
            buffer_len
        );
        offset..end
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "subresource_layout_tests.rs"]
mod tests;
