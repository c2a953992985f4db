pub mod config;
pub mod device;
pub mod edit;
pub mod error;
pub mod form;
pub mod list;
pub mod store;

// Re-export common error type
pub use error::DevtrackError;

pub use device::{Device, DeviceDraft, DeviceStorage, DeviceType, MemoryDeviceStorage};
pub use edit::AssignmentEditor;
pub use form::{DeviceForm, FormError};
pub use list::{DeviceListView, ListProjection};
pub use store::DeviceStore;
