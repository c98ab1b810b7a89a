/// Comparison of device readbacks against generated reference data

use crate::codec::{ChannelValue, TexelCodec, TexelCoord};
use crate::config::ValidationConfig;
use crate::error::{Error, Result};
use crate::format::TextureFormat;
use crate::texture::{subresource_position, Extent3D, Strides, SubresourceLayout, TextureDescriptor};
use crate::{roundtrip_debug, roundtrip_info, roundtrip_warn};

const SOURCE: &str = "roundtrip::Validation";

// ===== READBACK DATA =====

/// Host copy of one subresource as the device laid it out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadbackData {
    /// Raw bytes, starting at texel (0, 0, 0)
    pub data: Vec<u8>,
    /// Bytes between the starts of consecutive rows
    pub row_pitch: usize,
    /// Bytes between the starts of consecutive depth slices
    pub slice_pitch: usize,
}

impl ReadbackData {
    /// Readback of a subresource in the same tight layout the generator uses
    pub fn tight(data: Vec<u8>, layout: &SubresourceLayout) -> Self {
        let strides = layout.strides();
        Self { data, row_pitch: strides.y, slice_pitch: strides.z }
    }

    /// Copy the texels of `extent` out of `source` into rows padded to a
    /// multiple of `row_alignment` bytes, the way devices lay out
    /// texture-to-buffer copies.
    ///
    /// # Panics
    ///
    /// Panics if `extent` reaches past `source_layout` or past `source`.
    pub fn from_texels(
        source_layout: &SubresourceLayout,
        source: &[u8],
        extent: Extent3D,
        row_alignment: usize,
    ) -> Self {
        let texel_size = source_layout.texel_size();
        let alignment = row_alignment.max(1);
        let row_pitch = (extent.width as usize * texel_size).div_ceil(alignment) * alignment;
        let slice_pitch = row_pitch * extent.height as usize;

        let layout = SubresourceLayout::new(extent, Strides::pitched(texel_size, row_pitch, slice_pitch), texel_size);
        let mut data = vec![0u8; layout.required_size()];
        for (x, y, z) in layout.coords() {
            layout
                .block_mut(&mut data, x, y, z)
                .copy_from_slice(source_layout.block(source, x, y, z));
        }

        Self { data, row_pitch, slice_pitch }
    }
}

// ===== REPORTS =====

/// One channel of one texel that did not survive the round trip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexelMismatch {
    pub coord: TexelCoord,
    /// Channel index (r = 0, g = 1, b = 2, a = 3)
    pub channel: usize,
    pub actual: ChannelValue,
    pub expected: ChannelValue,
}

/// Result of validating one subresource
#[derive(Debug, Clone, PartialEq)]
pub struct SubresourceReport {
    pub mip_level: u32,
    pub array_layer: u32,
    /// Texels compared
    pub texels_compared: usize,
    /// All mismatching channels, including those not kept in `mismatches`
    pub mismatch_count: usize,
    /// First mismatches, capped by `ValidationConfig::max_reported_mismatches`
    pub mismatches: Vec<TexelMismatch>,
}

impl SubresourceReport {
    /// Returns true if every channel of every texel matched
    pub fn is_match(&self) -> bool {
        self.mismatch_count == 0
    }
}

/// Result of validating every subresource of a texture
#[derive(Debug, Clone, PartialEq)]
pub struct TextureReport {
    pub format: TextureFormat,
    /// Reports in subresource index order
    pub subresources: Vec<SubresourceReport>,
}

impl TextureReport {
    pub fn is_match(&self) -> bool {
        self.subresources.iter().all(SubresourceReport::is_match)
    }

    pub fn mismatch_count(&self) -> usize {
        self.subresources.iter().map(|s| s.mismatch_count).sum()
    }

    pub fn texels_compared(&self) -> usize {
        self.subresources.iter().map(|s| s.texels_compared).sum()
    }

    /// Reports of the subresources that had at least one mismatch
    pub fn failing_subresources(&self) -> impl Iterator<Item = &SubresourceReport> {
        self.subresources.iter().filter(|s| !s.is_match())
    }
}

// ===== VALIDATION =====

/// Layout of a readback of mip level `mip_level` of `texture`
///
/// # Errors
///
/// Returns `Error::InvalidReadback` if the pitches are smaller than a tight
/// row/slice or the data does not cover every texel.
pub fn readback_layout(
    texture: &TextureDescriptor,
    mip_level: u32,
    readback: &ReadbackData,
) -> Result<SubresourceLayout> {
    let extent = texture.extent().mip(mip_level);
    let texel_size = texture.texel_size() as usize;
    let tight = Strides::tight(extent, texel_size);

    if readback.row_pitch < tight.y {
        return Err(Error::InvalidReadback(format!(
            "row pitch {} is smaller than a row of {} texels ({} bytes)",
            readback.row_pitch, extent.width, tight.y
        ))
        .logged(SOURCE));
    }

    if extent.depth > 1 && readback.slice_pitch < readback.row_pitch * extent.height as usize {
        return Err(Error::InvalidReadback(format!(
            "slice pitch {} is smaller than {} rows of {} bytes",
            readback.slice_pitch, extent.height, readback.row_pitch
        ))
        .logged(SOURCE));
    }

    let layout = SubresourceLayout::new(
        extent,
        Strides::pitched(texel_size, readback.row_pitch, readback.slice_pitch),
        texel_size,
    );
    if readback.data.len() < layout.required_size() {
        return Err(Error::InvalidReadback(format!(
            "mip {} needs {} bytes but the readback holds {}",
            mip_level,
            layout.required_size(),
            readback.data.len()
        ))
        .logged(SOURCE));
    }

    Ok(layout)
}

/// Compare one readback subresource against the generated reference in `texture`
///
/// # Errors
///
/// Returns `Error::InvalidReadback` if the readback does not cover the subresource.
///
/// # Panics
///
/// Panics if `mip_level` or `array_layer` is out of range for `texture`.
pub fn validate_subresource(
    texture: &TextureDescriptor,
    codec: &TexelCodec,
    mip_level: u32,
    array_layer: u32,
    readback: &ReadbackData,
    config: &ValidationConfig,
) -> Result<SubresourceReport> {
    assert!(
        mip_level < texture.mip_level_count() && array_layer < texture.array_layer_count(),
        "subresource (mip {}, layer {}) out of range ({} mips, {} layers)",
        mip_level,
        array_layer,
        texture.mip_level_count(),
        texture.array_layer_count()
    );

    let actual_layout = readback_layout(texture, mip_level, readback)?;
    let expected = texture.subresource_at(mip_level, array_layer);

    let mut report = SubresourceReport {
        mip_level,
        array_layer,
        texels_compared: 0,
        mismatch_count: 0,
        mismatches: Vec::new(),
    };

    for (x, y, z) in actual_layout.coords() {
        let actual_block = actual_layout.block(&readback.data, x, y, z);
        let expected_block = expected.block(x, y, z);
        report.texels_compared += 1;

        for mismatch in codec.compare(actual_block, expected_block) {
            report.mismatch_count += 1;
            if report.mismatches.len() >= config.max_reported_mismatches {
                continue;
            }

            let coord = TexelCoord::new(x, y, z, mip_level, array_layer);
            if config.log_mismatches {
                roundtrip_warn!(SOURCE,
                    "{:?} mip {} layer {} texel ({}, {}, {}) channel {}: expected {}, got {}",
                    texture.format(), mip_level, array_layer, x, y, z,
                    mismatch.channel, mismatch.expected, mismatch.actual);
            }
            report.mismatches.push(TexelMismatch {
                coord,
                channel: mismatch.channel,
                actual: mismatch.actual,
                expected: mismatch.expected,
            });
        }
    }

    roundtrip_debug!(SOURCE,
        "mip {} layer {}: {} texels compared, {} mismatching channels",
        mip_level, array_layer, report.texels_compared, report.mismatch_count);

    Ok(report)
}

/// Compare one readback per subresource, given in subresource index order
///
/// # Errors
///
/// Returns `Error::InvalidReadback` if the number of readbacks differs from
/// the subresource count, or if any readback does not cover its subresource.
pub fn validate_texture(
    texture: &TextureDescriptor,
    codec: &TexelCodec,
    readbacks: &[ReadbackData],
    config: &ValidationConfig,
) -> Result<TextureReport> {
    if readbacks.len() != texture.subresource_count() as usize {
        return Err(Error::InvalidReadback(format!(
            "expected {} subresource readbacks, got {}",
            texture.subresource_count(),
            readbacks.len()
        ))
        .logged(SOURCE));
    }

    let mut subresources = Vec::with_capacity(readbacks.len());
    for (index, readback) in readbacks.iter().enumerate() {
        let (mip_level, array_layer) = subresource_position(index as u32, texture.mip_level_count());
        subresources.push(validate_subresource(texture, codec, mip_level, array_layer, readback, config)?);
    }

    let report = TextureReport { format: texture.format(), subresources };
    if report.is_match() {
        roundtrip_info!(SOURCE,
            "{:?}: all {} texels matched", report.format, report.texels_compared());
    } else {
        roundtrip_info!(SOURCE,
            "{:?}: {} mismatching channels in {} of {} subresources",
            report.format,
            report.mismatch_count(),
            report.failing_subresources().count(),
            report.subresources.len());
    }

    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "readback_tests.rs"]
mod tests;
