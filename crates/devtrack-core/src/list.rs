//! Filtered projection of the device collection.
//!
//! The list view never mutates the store. Every call to [`DeviceListView::project`]
//! recomputes the visible rows from the live collection and the current
//! search term.

use crate::device::Device;
use crate::error::{DevtrackError, Result};

/// Message shown when the collection itself is empty.
pub const NO_DEVICES_MESSAGE: &str = "No devices added yet. Use 'Add Device' to get started.";

/// Message shown when the search filters out every device.
pub const NO_MATCHES_MESSAGE: &str = "No devices match your search criteria.";

/// Returns true if `term` occurs, ignoring case, in the device's name,
/// serial number, or assignee. An empty term matches every device.
pub fn matches(device: &Device, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term = term.to_lowercase();
    [&device.name, &device.serial_number, &device.assigned_to]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// What the list should display.
#[derive(Debug, PartialEq, Eq)]
pub enum ListProjection<'a> {
    /// The collection is empty.
    NoDevices,
    /// The collection has devices but none match the search.
    NoMatches,
    /// Matching devices in collection order.
    Rows(Vec<&'a Device>),
}

impl<'a> ListProjection<'a> {
    /// Number of visible rows, shown as "Devices (n)".
    pub fn count(&self) -> usize {
        match self {
            ListProjection::Rows(rows) => rows.len(),
            _ => 0,
        }
    }

    /// Empty-state message, if any.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            ListProjection::NoDevices => Some(NO_DEVICES_MESSAGE),
            ListProjection::NoMatches => Some(NO_MATCHES_MESSAGE),
            ListProjection::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[&'a Device] {
        match self {
            ListProjection::Rows(rows) => rows.as_slice(),
            _ => &[],
        }
    }
}

/// Search state for the device list.
#[derive(Debug, Clone, Default)]
pub struct DeviceListView {
    search: String,
}

impl DeviceListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn project<'a>(&self, devices: &'a [Device]) -> ListProjection<'a> {
        if devices.is_empty() {
            return ListProjection::NoDevices;
        }

        let rows: Vec<&Device> = devices
            .iter()
            .filter(|device| matches(device, &self.search))
            .collect();

        if rows.is_empty() {
            ListProjection::NoMatches
        } else {
            ListProjection::Rows(rows)
        }
    }

    /// Resolves a row reference typed by the user into a device id.
    ///
    /// `reference` is either a 1-based row number in the current projection
    /// or an exact device id. Ids take precedence, since generated ids are
    /// also numeric.
    pub fn resolve(&self, devices: &[Device], reference: &str) -> Result<String> {
        let reference = reference.trim();

        if let Some(device) = devices.iter().find(|d| d.id == reference) {
            return Ok(device.id.clone());
        }

        let projection = self.project(devices);
        reference
            .parse::<usize>()
            .ok()
            .and_then(|row| row.checked_sub(1))
            .and_then(|index| projection.rows().get(index))
            .map(|device| device.id.clone())
            .ok_or_else(|| DevtrackError::not_found("device", reference))
    }
}
