//! Add-device form controller.

use thiserror::Error;

use crate::device::{DeviceDraft, DeviceType};
use crate::store::DeviceStore;

/// Reasons a form submission is refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Device name is required")]
    NameRequired,
}

/// Draft values for a new device plus the form's visibility.
///
/// Toggling visibility never clears the draft; only a successful submit
/// resets it.
#[derive(Debug, Clone, Default)]
pub struct DeviceForm {
    draft: DeviceDraft,
    visible: bool,
}

impl DeviceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Label for the header action that toggles the form.
    pub fn toggle_label(&self) -> &'static str {
        if self.visible { "Cancel" } else { "Add Device" }
    }

    pub fn draft(&self) -> &DeviceDraft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_type(&mut self, device_type: DeviceType) {
        self.draft.device_type = device_type;
    }

    /// Sets the type from user input; unknown names select laptop.
    pub fn set_type_str(&mut self, value: &str) -> DeviceType {
        let device_type = DeviceType::parse_or_default(value);
        self.draft.device_type = device_type;
        device_type
    }

    pub fn set_serial_number(&mut self, serial_number: impl Into<String>) {
        self.draft.serial_number = serial_number.into();
    }

    pub fn set_assigned_to(&mut self, assigned_to: impl Into<String>) {
        self.draft.assigned_to = assigned_to.into();
    }

    /// Submits the draft to `store`.
    ///
    /// On success the draft is reset, the form is hidden, and the new id is
    /// returned. On failure nothing changes.
    pub fn submit(&mut self, store: &mut DeviceStore) -> Result<String, FormError> {
        if !self.draft.has_name() {
            return Err(FormError::NameRequired);
        }

        let id = store
            .add(self.draft.clone())
            .ok_or(FormError::NameRequired)?;

        self.draft = DeviceDraft::default();
        self.visible = false;
        Ok(id)
    }
}
