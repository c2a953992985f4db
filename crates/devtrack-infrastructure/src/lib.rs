pub mod config_service;
pub mod dto;
pub mod file_device_storage;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_device_storage::FileDeviceStorage;
pub use crate::paths::DevtrackPaths;
