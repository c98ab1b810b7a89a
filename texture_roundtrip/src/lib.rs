/*!
# Texture Roundtrip

Support layer for texture round-trip tests of a graphics abstraction API.

The crate generates deterministic texel content for every subresource of a
texture and decides, channel by channel, whether data read back from a device
matches what was written. It never talks to a device itself: the device layer
hands raw host-memory buffers in and out.

## Architecture

- **TexelCodec**: Closed set of texel encodings (uniform channels or packed bit-fields)
- **SubresourceLayout**: Extents and byte strides of one mip/array slice
- **TextureDescriptor**: Owns one zero-initialized buffer per subresource
- **generate**: Fills every texel of every subresource from its coordinate
- **validate_texture**: Compares device readbacks against the generated reference
*/

// Internal modules
mod config;
mod error;
pub mod log;
pub mod format;
pub mod codec;
pub mod texture;
pub mod validation;

// Error types
pub use crate::error::{Error, Result};

// Configuration
pub use crate::config::ValidationConfig;

// Most used entry points
pub use crate::codec::{compare_blocks, TexelCodec, TexelCoord};
pub use crate::format::{TextureAspect, TextureFormat};
pub use crate::texture::{generate, subresource_index, TextureDescriptor, TextureDimension};

// ============================================================================
// Tests
// ============================================================================
