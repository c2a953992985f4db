//! File-backed device storage.
//!
//! The whole collection lives in one JSON array file (default:
//! `<data dir>/devtrack/devices.json`).

use std::path::{Path, PathBuf};

use devtrack_core::device::{Device, DeviceStorage};
use devtrack_core::error::{DevtrackError, Result};

use crate::dto::DeviceRecord;
use crate::paths::DevtrackPaths;
use crate::storage::{AtomicJsonError, AtomicJsonFile};

pub struct FileDeviceStorage {
    file: AtomicJsonFile<Vec<DeviceRecord>>,
}

impl FileDeviceStorage {
    /// Creates a storage at the platform default location.
    pub fn new() -> Result<Self> {
        let path = DevtrackPaths::devices_file().map_err(|e| DevtrackError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a storage backed by `path`.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl DeviceStorage for FileDeviceStorage {
    fn read(&self) -> Result<Option<Vec<Device>>> {
        let records = self.file.load().map_err(into_devtrack_error)?;
        Ok(records.map(|records| {
            records
                .into_iter()
                .map(DeviceRecord::into_domain)
                .collect()
        }))
    }

    fn write(&self, devices: &[Device]) -> Result<()> {
        let records: Vec<DeviceRecord> = devices.iter().map(DeviceRecord::from).collect();
        self.file.save(&records).map_err(into_devtrack_error)?;
        tracing::debug!(path = %self.path().display(), count = records.len(), "Devices written");
        Ok(())
    }
}

fn into_devtrack_error(err: AtomicJsonError) -> DevtrackError {
    match err {
        AtomicJsonError::IoError(e) => e.into(),
        AtomicJsonError::JsonError(e) => e.into(),
        AtomicJsonError::LockError(message) => DevtrackError::io(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devtrack_core::{DeviceDraft, DeviceStore, DeviceType};
    use std::fs;
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir) -> FileDeviceStorage {
        FileDeviceStorage::with_path(temp_dir.path().join("devices.json"))
    }

    #[test]
    fn test_missing_file_reads_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(storage_in(&temp_dir).read().unwrap().is_none());
    }

    #[test]
    fn test_round_trip_through_store() {
        let temp_dir = TempDir::new().unwrap();

        let before = {
            let mut store = DeviceStore::load(storage_in(&temp_dir));
            store
                .add(DeviceDraft::named("MacBook Pro 2023").with_serial_number("SN1"))
                .unwrap();
            store
                .add(DeviceDraft::named("Pixel 8").with_type(DeviceType::Smartphone))
                .unwrap();
            store
                .add(
                    DeviceDraft::named("LG UltraFine")
                        .with_type(DeviceType::Monitor)
                        .with_assigned_to("Jane Doe"),
                )
                .unwrap();
            store.devices().to_vec()
        };

        let reloaded = DeviceStore::load(storage_in(&temp_dir));
        assert_eq!(reloaded.devices(), before.as_slice());
    }

    #[test]
    fn test_file_layout() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        let device = DeviceDraft::named("AirPods Pro")
            .with_type(DeviceType::Headphones)
            .into_device("1717171717171".to_string());

        storage.write(&[device]).unwrap();

        let raw = fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];
        assert_eq!(record["id"], "1717171717171");
        assert_eq!(record["name"], "AirPods Pro");
        assert_eq!(record["type"], "headphones");
        assert_eq!(record["serialNumber"], "");
        assert_eq!(record["assignedTo"], "");
    }

    #[test]
    fn test_corrupt_file_loads_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        for corrupt in [
            "not json at all",
            "{\"id\": \"1\"}",
            "[{\"id\": \"1\", \"name\": \"x\"}]",
            "[{\"id\": 1, \"name\": \"x\", \"type\": \"laptop\", \"serialNumber\": \"\", \"assignedTo\": \"\"}]",
        ] {
            fs::write(storage.path(), corrupt).unwrap();
            assert!(storage.read().unwrap_err().is_serialization());

            let store = DeviceStore::load(storage_in(&temp_dir));
            assert!(store.is_empty(), "{corrupt}");
        }
    }

    #[test]
    fn test_unknown_type_normalized_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        fs::write(
            storage.path(),
            r#"[{"id":"1","name":"Kindle","type":"ereader","serialNumber":"K1","assignedTo":""}]"#,
        )
        .unwrap();

        let store = DeviceStore::load(storage);
        assert_eq!(store.get("1").unwrap().device_type, DeviceType::Laptop);
    }
}
