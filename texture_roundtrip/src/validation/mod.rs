/// Validation module - readback comparison and the device interface

pub mod readback;
pub mod device;

pub use readback::*;
pub use device::*;

// Mock texture device for tests (no GPU required)
#[cfg(test)]
pub mod mock_device;
