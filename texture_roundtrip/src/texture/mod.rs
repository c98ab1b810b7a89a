/// Texture module - subresource addressing, descriptors and data generation

pub mod subresource_layout;
pub mod texture_descriptor;
pub mod data_generator;

pub use subresource_layout::*;
pub use texture_descriptor::*;
pub use data_generator::*;
