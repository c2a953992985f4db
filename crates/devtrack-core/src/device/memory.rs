//! In-memory device storage.
//!
//! Used for session-only runs (`--in-memory`) and as a test double. Clones
//! share the same slot, so a test can keep a handle after moving one into a
//! store and observe what was persisted.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::model::Device;
use super::repository::DeviceStorage;
use crate::error::{DevtrackError, Result};

#[derive(Debug, Clone, Default)]
pub struct MemoryDeviceStorage {
    slot: Arc<Mutex<Option<Vec<Device>>>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl MemoryDeviceStorage {
    /// Creates an empty storage (nothing persisted yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage whose slot already holds `devices`.
    pub fn with_devices(devices: Vec<Device>) -> Self {
        let storage = Self::default();
        if let Ok(mut slot) = storage.slot.lock() {
            *slot = Some(devices);
        }
        storage
    }

    /// Makes every subsequent write fail, as a full disk or quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of the persisted slot.
    pub fn snapshot(&self) -> Option<Vec<Device>> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl DeviceStorage for MemoryDeviceStorage {
    fn read(&self) -> Result<Option<Vec<Device>>> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| DevtrackError::internal(format!("Storage lock poisoned: {}", e)))?;
        Ok(slot.clone())
    }

    fn write(&self, devices: &[Device]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DevtrackError::io("Storage quota exceeded"));
        }

        let mut slot = self
            .slot
            .lock()
            .map_err(|e| DevtrackError::internal(format!("Storage lock poisoned: {}", e)))?;
        *slot = Some(devices.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
