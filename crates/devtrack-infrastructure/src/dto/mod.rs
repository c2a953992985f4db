//! Data transfer objects for persisted files.

mod device;

pub use device::DeviceRecord;
