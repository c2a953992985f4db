//! Inline assignee editing.
//!
//! At most one device is edited at a time. The state is an optional id plus
//! a text buffer: `None` is viewing, `Some(id)` is editing that device.

use tracing::debug;

use crate::device::Device;
use crate::store::DeviceStore;

#[derive(Debug, Clone, Default)]
pub struct AssignmentEditor {
    editing_id: Option<String>,
    buffer: String,
}

impl AssignmentEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id.as_deref() == Some(id)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Starts editing `device`, pre-filling the buffer with its assignee.
    ///
    /// Any edit already in progress is discarded; its id is returned.
    pub fn begin(&mut self, device: &Device) -> Option<String> {
        let cancelled = self
            .editing_id
            .replace(device.id.clone())
            .filter(|previous| *previous != device.id);
        if let Some(previous) = &cancelled {
            debug!(previous = %previous, next = %device.id, "Discarded pending assignment edit");
        }
        self.buffer = device.assigned_to.clone();
        cancelled
    }

    /// Replaces the buffer. Ignored while viewing.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if self.editing_id.is_some() {
            self.buffer = text.into();
        }
    }

    /// Commits the buffer as the edited device's assignee and returns to
    /// viewing. Returns the id that was saved, or `None` while viewing.
    pub fn save(&mut self, store: &mut DeviceStore) -> Option<String> {
        let id = self.editing_id.take()?;
        let assigned_to = std::mem::take(&mut self.buffer);
        store.reassign(&id, assigned_to);
        Some(id)
    }

    /// Discards the buffer and returns to viewing.
    pub fn cancel(&mut self) -> Option<String> {
        self.buffer.clear();
        self.editing_id.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceDraft, MemoryDeviceStorage};

    fn store_with_two() -> (DeviceStore, String, String) {
        let mut store = DeviceStore::load(MemoryDeviceStorage::new());
        let a = store
            .add(DeviceDraft::named("ThinkPad").with_assigned_to("Alice"))
            .unwrap();
        let b = store
            .add(DeviceDraft::named("iPad").with_assigned_to("Bob"))
            .unwrap();
        (store, a, b)
    }

    #[test]
    fn test_begin_prefills_buffer() {
        let (store, a, _) = store_with_two();
        let mut editor = AssignmentEditor::new();

        assert!(editor.begin(store.get(&a).unwrap()).is_none());

        assert!(editor.is_editing(&a));
        assert_eq!(editor.buffer(), "Alice");
    }

    #[test]
    fn test_save_reassigns_and_clears() {
        let (mut store, a, b) = store_with_two();
        let mut editor = AssignmentEditor::new();

        editor.begin(store.get(&a).unwrap());
        editor.set_buffer("Jane Doe");
        assert_eq!(editor.save(&mut store), Some(a.clone()));

        assert_eq!(store.get(&a).unwrap().assigned_to, "Jane Doe");
        assert_eq!(store.get(&b).unwrap().assigned_to, "Bob");
        assert!(editor.editing_id().is_none());
        assert_eq!(editor.buffer(), "");
    }

    #[test]
    fn test_empty_save_unassigns() {
        let (mut store, a, _) = store_with_two();
        let mut editor = AssignmentEditor::new();

        editor.begin(store.get(&a).unwrap());
        editor.set_buffer("");
        editor.save(&mut store);

        assert!(!store.get(&a).unwrap().is_assigned());
    }

    #[test]
    fn test_cancel_does_not_touch_store() {
        let (mut store, a, _) = store_with_two();
        let mut editor = AssignmentEditor::new();

        editor.begin(store.get(&a).unwrap());
        editor.set_buffer("Mallory");
        assert_eq!(editor.cancel(), Some(a.clone()));

        assert_eq!(store.get(&a).unwrap().assigned_to, "Alice");
        assert!(editor.save(&mut store).is_none());
    }

    #[test]
    fn test_single_active_edit() {
        let (mut store, a, b) = store_with_two();
        let mut editor = AssignmentEditor::new();

        editor.begin(store.get(&a).unwrap());
        editor.set_buffer("half-typed");

        let cancelled = editor.begin(store.get(&b).unwrap());
        assert_eq!(cancelled, Some(a.clone()));
        assert!(!editor.is_editing(&a));
        assert!(editor.is_editing(&b));
        assert_eq!(editor.buffer(), "Bob");

        editor.save(&mut store);
        assert_eq!(store.get(&a).unwrap().assigned_to, "Alice");
        assert_eq!(store.get(&b).unwrap().assigned_to, "Bob");
    }

    #[test]
    fn test_set_buffer_ignored_while_viewing() {
        let mut editor = AssignmentEditor::new();
        editor.set_buffer("ghost");
        assert_eq!(editor.buffer(), "");
    }
}
