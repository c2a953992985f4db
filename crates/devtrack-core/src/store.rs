//! The device store.
//!
//! `DeviceStore` owns the device collection and mirrors it to a
//! [`DeviceStorage`] after every mutation. It is the only component that
//! touches storage.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::device::{Device, DeviceDraft, DeviceStorage};

/// Issues time-based device ids.
///
/// Ids are decimal Unix milliseconds, bumped so that every id issued by one
/// generator is strictly greater than the previous one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an id greater than every id issued before and not contained
    /// in `taken`.
    pub fn next_id(&mut self, taken: &HashSet<&str>) -> String {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut candidate = now.max(self.last.saturating_add(1));
        while taken.contains(candidate.to_string().as_str()) {
            candidate += 1;
        }
        self.last = candidate;
        candidate.to_string()
    }
}

/// In-memory device collection backed by a storage port.
pub struct DeviceStore {
    devices: Vec<Device>,
    storage: Box<dyn DeviceStorage>,
    ids: IdGenerator,
    last_persist_error: Option<String>,
}

impl DeviceStore {
    /// Hydrates the store from `storage`.
    ///
    /// Never fails: a missing slot yields an empty collection, and an
    /// unreadable or corrupt slot is logged and replaced by an empty one.
    pub fn load(storage: impl DeviceStorage + 'static) -> Self {
        let devices = match storage.read() {
            Ok(Some(devices)) => dedupe(devices),
            Ok(None) => {
                debug!("No persisted devices, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to load persisted devices, starting empty: {}", e);
                Vec::new()
            }
        };

        info!(count = devices.len(), "Device store loaded");

        Self {
            devices,
            storage: Box::new(storage),
            ids: IdGenerator::new(),
            last_persist_error: None,
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Message of the most recent failed write, cleared by the next
    /// successful one.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Appends a new device built from `draft`.
    ///
    /// Returns the new id, or `None` without mutating if the draft has no
    /// name.
    pub fn add(&mut self, draft: DeviceDraft) -> Option<String> {
        if !draft.has_name() {
            debug!("Rejected device without a name");
            return None;
        }

        let id = {
            let taken: HashSet<&str> = self.devices.iter().map(|d| d.id.as_str()).collect();
            self.ids.next_id(&taken)
        };

        let device = draft.into_device(id.clone());
        info!(id = %device.id, name = %device.name, device_type = %device.device_type, "Device added");
        self.devices.push(device);
        self.persist();

        Some(id)
    }

    /// Removes the device with `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.devices.iter().position(|d| d.id == id) else {
            debug!(id, "Remove ignored, no such device");
            return false;
        };

        let removed = self.devices.remove(index);
        info!(id = %removed.id, name = %removed.name, "Device removed");
        self.persist();
        true
    }

    /// Replaces the assignee of the device with `id`. Returns `false` if
    /// there was none.
    pub fn reassign(&mut self, id: &str, assigned_to: impl Into<String>) -> bool {
        let Some(device) = self.devices.iter_mut().find(|d| d.id == id) else {
            debug!(id, "Reassign ignored, no such device");
            return false;
        };

        device.assigned_to = assigned_to.into();
        info!(id = %device.id, assigned_to = %device.assigned_to, "Device reassigned");
        self.persist();
        true
    }

    fn persist(&mut self) {
        match self.storage.write(&self.devices) {
            Ok(()) => {
                self.last_persist_error = None;
            }
            Err(e) => {
                warn!("Failed to persist devices, keeping in-memory state: {}", e);
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}

/// Drops devices whose id was already seen; the first occurrence wins.
fn dedupe(devices: Vec<Device>) -> Vec<Device> {
    let mut seen = HashSet::new();
    let total = devices.len();
    let unique: Vec<Device> = devices
        .into_iter()
        .filter(|d| seen.insert(d.id.clone()))
        .collect();

    if unique.len() != total {
        warn!(
            dropped = total - unique.len(),
            "Dropped persisted devices with duplicate ids"
        );
    }
    unique
}
