//! Device domain models and the storage port.
//!
//! A device is the only entity tracked by devtrack. The collection of devices
//! is held by [`crate::store::DeviceStore`] and mirrored to a [`DeviceStorage`].

mod memory;
mod model;
mod repository;

pub use memory::MemoryDeviceStorage;
pub use model::{Device, DeviceDraft, DeviceType};
pub use repository::DeviceStorage;
