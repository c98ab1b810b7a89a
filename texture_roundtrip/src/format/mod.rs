/// Format module - pixel formats and their aspects

pub mod texture_format;

pub use texture_format::*;
