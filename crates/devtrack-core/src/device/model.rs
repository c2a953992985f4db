//! Device domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Kind of hardware a device record describes.
///
/// Serialized in lowercase (`"laptop"`, `"smartphone"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum DeviceType {
    #[default]
    Laptop,
    Smartphone,
    Monitor,
    Headphones,
    Other,
}

impl DeviceType {
    /// Parses a type name, falling back to [`DeviceType::Laptop`] for anything
    /// outside the closed set.
    pub fn parse_or_default(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }

    /// Human-readable label used by the add form.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Laptop => "Laptop",
            DeviceType::Smartphone => "Smartphone",
            DeviceType::Monitor => "Monitor",
            DeviceType::Headphones => "Headphones",
            DeviceType::Other => "Other",
        }
    }

    /// All types in form order.
    pub fn all() -> Vec<DeviceType> {
        DeviceType::iter().collect()
    }
}

/// A tracked physical asset.
///
/// Only `assigned_to` changes after creation; `id` is the sole lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// Free-text label. Never empty.
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    /// Empty when unknown.
    pub serial_number: String,
    /// Empty means unassigned.
    pub assigned_to: String,
}

impl Device {
    pub fn is_assigned(&self) -> bool {
        !self.assigned_to.is_empty()
    }
}

/// Uncommitted values for a new device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceDraft {
    pub name: String,
    pub device_type: DeviceType,
    pub serial_number: String,
    pub assigned_to: String,
}

impl DeviceDraft {
    /// Creates a draft with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = serial_number.into();
        self
    }

    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = assigned_to.into();
        self
    }

    /// Name is the only required field; whitespace does not count.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Builds the device this draft describes under the given id.
    pub fn into_device(self, id: String) -> Device {
        Device {
            id,
            name: self.name,
            device_type: self.device_type,
            serial_number: self.serial_number,
            assigned_to: self.assigned_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_default_is_laptop() {
        assert_eq!(DeviceType::default(), DeviceType::Laptop);
        assert_eq!(DeviceDraft::default().device_type, DeviceType::Laptop);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(DeviceType::parse_or_default("monitor"), DeviceType::Monitor);
        assert_eq!(DeviceType::parse_or_default(" Headphones "), DeviceType::Headphones);
        assert_eq!(DeviceType::parse_or_default("tablet"), DeviceType::Laptop);
        assert_eq!(DeviceType::parse_or_default(""), DeviceType::Laptop);
    }

    #[test]
    fn test_device_type_display_matches_wire_value() {
        for device_type in DeviceType::all() {
            let json = serde_json::to_string(&device_type).unwrap();
            assert_eq!(json, format!("\"{}\"", device_type));
        }
        assert_eq!(DeviceType::all().len(), 5);
    }

    #[test]
    fn test_device_serializes_with_camel_case_field_names() {
        let device = DeviceDraft::named("MacBook Pro 2023")
            .with_serial_number("SN1")
            .into_device("1700000000000".to_string());

        let value = serde_json::to_value(&device).unwrap();
        assert_eq!(value["id"], "1700000000000");
        assert_eq!(value["name"], "MacBook Pro 2023");
        assert_eq!(value["type"], "laptop");
        assert_eq!(value["serialNumber"], "SN1");
        assert_eq!(value["assignedTo"], "");
    }

    #[test]
    fn test_has_name_rejects_whitespace() {
        assert!(!DeviceDraft::named("").has_name());
        assert!(!DeviceDraft::named("   ").has_name());
        assert!(DeviceDraft::named("Pixel 8").has_name());
    }
}
