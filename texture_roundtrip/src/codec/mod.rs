/// Codec module - texel generation and comparison per format family

pub mod texel_codec;
pub mod uniform_channel;
pub mod packed_bitfield;

pub use texel_codec::*;
pub use uniform_channel::*;
pub use packed_bitfield::*;
