//! Unit tests for data_generator.rs

use super::*;
use crate::format::TextureFormat;
use crate::log::{self, LogEntry, LogSeverity, Logger};
use crate::texture::{Extent3D, TextureDimension};
use serial_test::serial;
use std::sync::{Arc, Mutex};

fn rgba8_texture() -> TextureDescriptor {
    TextureDescriptor::builder(
        TextureFormat::R8G8B8A8_UINT,
        TextureDimension::Tex2D,
        Extent3D::new(8, 8, 1),
    )
    .mip_levels(4)
    .array_layers(2)
    .build()
    .unwrap()
}

#[test]
fn test_subresource_position() {
    assert_eq!(subresource_position(0, 4), (0, 0));
    assert_eq!(subresource_position(5, 4), (1, 1));
    assert_eq!(subresource_position(14, 4), (2, 3));
}

#[test]
fn test_generate_writes_coordinate_content() {
    let mut texture = rgba8_texture();
    let codec = TexelCodec::for_format(texture.format()).unwrap();
    generate(&mut texture, &codec);

    // Subresource 5 is mip 1 of layer 1
    let subresource = texture.subresource(5);
    assert_eq!((subresource.mip_level(), subresource.array_layer()), (1, 1));
    assert_eq!(subresource.block(3, 2, 0), &[4u8, 2, 0, 1]);

    let expected = codec.encode(TexelCoord::new(3, 2, 0, 1, 1));
    assert!(codec.compare(subresource.block(3, 2, 0), &expected).is_empty());
}

#[test]
fn test_generate_is_idempotent() {
    let mut first = rgba8_texture();
    let codec = TexelCodec::for_format(first.format()).unwrap();
    generate(&mut first, &codec);

    let mut second = first.clone();
    generate(&mut second, &codec);

    for (a, b) in first.subresources().iter().zip(second.subresources()) {
        assert_eq!(a.data(), b.data());
    }
}

#[test]
fn test_generate_fills_every_subresource() {
    let mut texture = rgba8_texture();
    let codec = TexelCodec::for_format(texture.format()).unwrap();
    generate(&mut texture, &codec);

    for subresource in texture.subresources() {
        let layout = *subresource.layout();
        for (x, y, z) in layout.coords() {
            let coord = TexelCoord::new(x, y, z, subresource.mip_level(), subresource.array_layer());
            assert_eq!(subresource.block(x, y, z), codec.encode(coord).as_slice());
        }
    }
}

#[test]
fn test_flipped_byte_reports_one_channel() {
    let mut texture = rgba8_texture();
    let codec = TexelCodec::for_format(texture.format()).unwrap();
    generate(&mut texture, &codec);

    let mut actual = texture.subresource(5).block(3, 2, 0).to_vec();
    actual[1] ^= 0xFF;

    let mismatches = codec.compare(&actual, texture.subresource(5).block(3, 2, 0));
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].channel, 1);
}

#[test]
fn test_generate_packed_format() {
    let mut texture = TextureDescriptor::builder(
        TextureFormat::B5G6R5_UNORM,
        TextureDimension::Tex2D,
        Extent3D::new(4, 4, 1),
    )
    .mip_levels(2)
    .array_layers(3)
    .build()
    .unwrap();
    let codec = TexelCodec::for_format(texture.format()).unwrap();
    generate(&mut texture, &codec);

    let subresource = texture.subresource_at(1, 2);
    let expected = codec.encode(TexelCoord::new(1, 0, 0, 1, 2));
    assert_eq!(subresource.block(1, 0, 0), expected.as_slice());
}

#[test]
#[should_panic(expected = "codec writes 16 bytes per texel")]
fn test_codec_larger_than_texel_panics() {
    let mut texture = rgba8_texture();
    let codec = TexelCodec::for_format(TextureFormat::R32G32B32A32_UINT).unwrap();
    generate(&mut texture, &codec);
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
#[serial]
fn test_generate_traces_each_subresource() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });

    let mut texture = TextureDescriptor::builder(
        TextureFormat::R16G16_SINT,
        TextureDimension::Tex2D,
        Extent3D::new(4, 2, 1),
    )
    .mip_levels(2)
    .array_layers(2)
    .build()
    .unwrap();
    let codec = TexelCodec::for_format(texture.format()).unwrap();
    generate(&mut texture, &codec);

    log::reset_logger();

    let entries = entries.lock().unwrap();
    let traces: Vec<_> = entries
        .iter()
        .filter(|e| e.source == "roundtrip::Generator" && e.severity == LogSeverity::Trace)
        .map(|e| e.message.as_str())
        .collect();
    for expected in [
        "R16G16_SINT mip 0 layer 0: 8 texels",
        "R16G16_SINT mip 1 layer 0: 2 texels",
        "R16G16_SINT mip 0 layer 1: 8 texels",
        "R16G16_SINT mip 1 layer 1: 2 texels",
    ] {
        assert!(traces.contains(&expected), "missing trace {:?} in {:?}", expected, traces);
    }
}
