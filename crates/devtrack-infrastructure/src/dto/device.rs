//! Persisted device record.

use devtrack_core::{Device, DeviceType};
use serde::{Deserialize, Serialize};

/// A device as stored in the slot file.
///
/// `type` is kept as a raw string so unrecognized values can be normalized
/// instead of failing the whole load. Every field is required; a record
/// missing one makes the file corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub serial_number: String,
    pub assigned_to: String,
}

impl DeviceRecord {
    /// Converts to the domain model. Unknown types become laptop.
    pub fn into_domain(self) -> Device {
        let device_type = match self.device_type.parse::<DeviceType>() {
            Ok(device_type) => device_type,
            Err(_) => {
                tracing::warn!(
                    id = %self.id,
                    raw_type = %self.device_type,
                    "Unrecognized device type, normalized to laptop"
                );
                DeviceType::Laptop
            }
        };

        Device {
            id: self.id,
            name: self.name,
            device_type,
            serial_number: self.serial_number,
            assigned_to: self.assigned_to,
        }
    }
}

impl From<&Device> for DeviceRecord {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id.clone(),
            name: device.name.clone(),
            device_type: device.device_type.to_string(),
            serial_number: device.serial_number.clone(),
            assigned_to: device.assigned_to.clone(),
        }
    }
}
