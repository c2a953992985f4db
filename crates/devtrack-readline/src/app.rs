//! Interactive application state.
//!
//! `TrackerApp` composes the store, the add form, the list view, and the
//! assignment editor, and turns REPL input into operations on them.

use devtrack_core::{AssignmentEditor, DeviceForm, DeviceListView, DeviceStore};
use tracing::debug;

use crate::command::Command;

/// Something the REPL should show after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Re-render header, form, search, and device list.
    View,
    /// Show the add form's current draft.
    Form,
    Help,
    Success(String),
    Info(String),
    Warning(String),
    Quit,
}

pub struct TrackerApp {
    store: DeviceStore,
    form: DeviceForm,
    list: DeviceListView,
    editor: AssignmentEditor,
}

impl TrackerApp {
    pub fn new(store: DeviceStore) -> Self {
        Self {
            store,
            form: DeviceForm::new(),
            list: DeviceListView::new(),
            editor: AssignmentEditor::new(),
        }
    }

    pub fn store(&self) -> &DeviceStore {
        &self.store
    }

    pub fn form(&self) -> &DeviceForm {
        &self.form
    }

    pub fn list(&self) -> &DeviceListView {
        &self.list
    }

    pub fn editor(&self) -> &AssignmentEditor {
        &self.editor
    }

    /// Name of the device being edited, for the prompt.
    pub fn editing_device_name(&self) -> Option<&str> {
        self.editor
            .editing_id()
            .and_then(|id| self.store.get(id))
            .map(|device| device.name.as_str())
    }

    /// Handles one line of input.
    ///
    /// While an assignment is being edited, only `/` commands are commands.
    /// Any other line, `quit` included, replaces the buffer and saves it, so
    /// an empty line unassigns the device.
    pub fn handle_line(&mut self, line: &str) -> Vec<Output> {
        if self.editor.editing_id().is_some() && !line.trim_start().starts_with('/') {
            self.editor.set_buffer(line);
            return self.save_edit();
        }

        match Command::parse(line) {
            Ok(Some(command)) => self.handle(command),
            Ok(None) if line.trim().is_empty() => Vec::new(),
            Ok(None) => vec![Output::Info(
                "Unknown command. Type /help for commands.".to_string(),
            )],
            Err(e) => vec![Output::Warning(e.to_string())],
        }
    }

    pub fn handle(&mut self, command: Command) -> Vec<Output> {
        debug!(?command, "Handling command");

        match command {
            Command::ToggleForm => {
                self.form.toggle();
                if self.form.is_visible() {
                    vec![Output::Form]
                } else {
                    vec![Output::Info("Add form hidden. Draft kept.".to_string())]
                }
            }
            Command::SetName(name) => self.with_open_form(|form| form.set_name(name)),
            Command::SetType(value) => {
                if !self.form.is_visible() {
                    return vec![closed_form_warning()];
                }
                let parsed = self.form.set_type_str(&value);
                let mut outputs = Vec::new();
                if !parsed.to_string().eq_ignore_ascii_case(value.trim()) {
                    outputs.push(Output::Info(format!(
                        "Unknown type '{}', using {}",
                        value,
                        parsed.label()
                    )));
                }
                outputs.push(Output::Form);
                outputs
            }
            Command::SetSerial(serial) => {
                self.with_open_form(|form| form.set_serial_number(serial))
            }
            Command::SetAssignee(assignee) => {
                self.with_open_form(|form| form.set_assigned_to(assignee))
            }
            Command::ShowForm => {
                if self.form.is_visible() {
                    vec![Output::Form]
                } else {
                    vec![closed_form_warning()]
                }
            }
            Command::Submit => self.submit(),
            Command::Search(term) if term.trim().is_empty() => {
                self.list.clear_search();
                vec![Output::View]
            }
            Command::Search(term) => {
                self.list.set_search(term);
                vec![Output::View]
            }
            Command::List => vec![Output::View],
            Command::Delete(reference) => self.delete(&reference),
            Command::Edit(reference) => self.begin_edit(&reference),
            Command::Save => {
                if self.editor.editing_id().is_none() {
                    return vec![Output::Info("Nothing is being edited.".to_string())];
                }
                self.save_edit()
            }
            Command::Cancel => {
                if self.editor.cancel().is_some() {
                    vec![Output::Info("Edit cancelled.".to_string()), Output::View]
                } else if self.form.is_visible() {
                    self.form.close();
                    vec![Output::Info("Add form hidden. Draft kept.".to_string())]
                } else {
                    vec![Output::Info("Nothing to cancel.".to_string())]
                }
            }
            Command::Help => vec![Output::Help],
            Command::Quit => vec![Output::Quit],
        }
    }

    fn with_open_form(&mut self, update: impl FnOnce(&mut DeviceForm)) -> Vec<Output> {
        if !self.form.is_visible() {
            return vec![closed_form_warning()];
        }
        update(&mut self.form);
        vec![Output::Form]
    }

    fn submit(&mut self) -> Vec<Output> {
        if !self.form.is_visible() {
            return vec![closed_form_warning()];
        }

        match self.form.submit(&mut self.store) {
            Ok(id) => {
                let name = self
                    .store
                    .get(&id)
                    .map(|device| device.name.clone())
                    .unwrap_or_default();
                self.after_mutation(Output::Success(format!("Added {}", name)))
            }
            Err(e) => vec![Output::Warning(e.to_string()), Output::Form],
        }
    }

    fn delete(&mut self, reference: &str) -> Vec<Output> {
        let id = match self.list.resolve(self.store.devices(), reference) {
            Ok(id) => id,
            Err(_) => return vec![no_such_row(reference)],
        };

        let name = self
            .store
            .get(&id)
            .map(|device| device.name.clone())
            .unwrap_or_default();

        if self.editor.is_editing(&id) {
            self.editor.cancel();
        }

        self.store.remove(&id);
        self.after_mutation(Output::Success(format!("Deleted {}", name)))
    }

    fn begin_edit(&mut self, reference: &str) -> Vec<Output> {
        let Some(device) = self
            .list
            .resolve(self.store.devices(), reference)
            .ok()
            .and_then(|id| self.store.get(&id))
        else {
            return vec![no_such_row(reference)];
        };

        let mut outputs = Vec::new();
        if let Some(previous) = self.editor.begin(device)
            && let Some(previous) = self.store.get(&previous)
        {
            outputs.push(Output::Info(format!(
                "Discarded pending edit for {}",
                previous.name
            )));
        }
        outputs.push(Output::Info(format!(
            "Editing assignee of {}. Enter saves, /cancel discards.",
            device.name
        )));
        outputs
    }

    fn save_edit(&mut self) -> Vec<Output> {
        let Some(id) = self.editor.save(&mut self.store) else {
            return Vec::new();
        };

        let message = match self.store.get(&id) {
            Some(device) if device.is_assigned() => {
                format!("{} assigned to {}", device.name, device.assigned_to)
            }
            Some(device) => format!("{} unassigned", device.name),
            None => "Device no longer exists".to_string(),
        };
        self.after_mutation(Output::Success(message))
    }

    fn after_mutation(&self, result: Output) -> Vec<Output> {
        let mut outputs = vec![Output::View, result];
        if let Some(error) = self.store.last_persist_error() {
            outputs.push(Output::Warning(format!(
                "Could not save to storage, changes kept for this session: {}",
                error
            )));
        }
        outputs
    }
}

fn closed_form_warning() -> Output {
    Output::Warning("The add form is closed. Use /add to open it.".to_string())
}

fn no_such_row(reference: &str) -> Output {
    Output::Warning(format!("No device at row or id '{}'", reference))
}
