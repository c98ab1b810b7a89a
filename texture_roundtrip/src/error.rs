//! Error types for texture round-trip validation
//!
//! Only recoverable construction and I/O-shape problems are errors.
//! Contract violations (out-of-range texel access, impossible codec shapes)
//! panic, and channel mismatches are returned as data.

use std::fmt;
use crate::format::TextureFormat;

/// Result type for texture round-trip operations
pub type Result<T> = std::result::Result<T, Error>;

/// Texture round-trip errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Texture description is inconsistent (extents, counts, texel size)
    InvalidTexture(String),

    /// Format has no texel codec or cannot be addressed per texel
    UnsupportedFormat(TextureFormat),

    /// Readback buffer does not cover the subresource it claims to hold
    InvalidReadback(String),

    /// Error reported by the device layer
    BackendError(String),
}

impl Error {
    /// Log this error at ERROR severity and hand it back
    pub(crate) fn logged(self, source: &str) -> Self {
        crate::roundtrip_error!(source, "{}", self);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTexture(msg) => write!(f, "Invalid texture: {}", msg),
            Error::UnsupportedFormat(format) => write!(f, "Unsupported format: {:?}", format),
            Error::InvalidReadback(msg) => write!(f, "Invalid readback: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an `Error::InvalidTexture` and log it with file:line information
///
/// # Example
///
/// ```no_run
/// # use texture_roundtrip::roundtrip_err;
/// let err = roundtrip_err!("roundtrip::Texture", "mip count {} exceeds {}", 12, 9);
/// ```
#[macro_export]
macro_rules! roundtrip_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::Error::InvalidTexture(message)
    }};
}

/// Return early with a logged `Error::InvalidTexture`
///
/// # Example
///
/// ```no_run
/// # use texture_roundtrip::{roundtrip_bail, Result};
/// fn check(width: u32) -> Result<()> {
///     if width == 0 {
///         roundtrip_bail!("roundtrip::Texture", "width must be non-zero");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! roundtrip_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::roundtrip_err!($source, $($arg)*))
    };
}
