//! Text rendering of the tracker view.

use colored::Colorize;
use devtrack_core::{Device, DeviceType, ListProjection};

use crate::app::TrackerApp;

const SEARCH_PLACEHOLDER: &str = "Search devices by name, serial number or employee... (/search <term>)";

/// Short glyph for a device type. Unrecognized kinds share the laptop glyph.
pub fn type_icon(device_type: DeviceType) -> &'static str {
    match device_type {
        DeviceType::Smartphone => "[P]",
        DeviceType::Monitor => "[M]",
        DeviceType::Headphones => "[H]",
        DeviceType::Laptop | DeviceType::Other => "[L]",
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Header, add form (when open), search box, and device list.
pub fn render_view(app: &TrackerApp) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}\n",
        "=== Device Management ===".bright_magenta().bold(),
        format!("[/add: {}]", app.form().toggle_label()).bright_black()
    ));

    if app.form().is_visible() {
        out.push_str(&render_form(app));
    }

    let search = app.list().search();
    if search.is_empty() {
        out.push_str(&format!("{}\n", SEARCH_PLACEHOLDER.bright_black()));
    } else {
        out.push_str(&format!("Search: {}\n", format!("\"{}\"", search).cyan()));
    }

    let projection = app.list().project(app.store().devices());
    out.push_str(&format!(
        "{}\n",
        format!("Devices ({})", projection.count()).bold()
    ));

    match projection.empty_message() {
        Some(message) => out.push_str(&format!("  {}\n", message.bright_black())),
        None => out.push_str(&render_table(app, &projection)),
    }

    out
}

fn render_table(app: &TrackerApp, projection: &ListProjection<'_>) -> String {
    let rows = projection.rows();

    let device_cells: Vec<String> = rows
        .iter()
        .map(|d| format!("{} {} ({})", type_icon(d.device_type), d.name, d.device_type))
        .collect();
    let assigned_cells: Vec<String> = rows.iter().map(|d| assigned_cell(app, d)).collect();

    let index_width = rows.len().to_string().len().max(1);
    let device_width = width_of("Device", &device_cells);
    let serial_width = rows
        .iter()
        .map(|d| d.serial_number.chars().count())
        .chain(std::iter::once("Serial Number".len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!(
        "  {}  {}  {}  {}\n",
        pad("#", index_width).bright_black(),
        pad("Device", device_width).bright_black(),
        pad("Serial Number", serial_width).bright_black(),
        "Assigned To".bright_black()
    ));

    for (index, device) in rows.iter().enumerate() {
        let assigned = &assigned_cells[index];
        let assigned = if app.editor().is_editing(&device.id) {
            assigned.yellow().bold().to_string()
        } else if device.is_assigned() {
            assigned.normal().to_string()
        } else {
            assigned.bright_black().italic().to_string()
        };

        out.push_str(&format!(
            "  {}  {}  {}  {}\n",
            pad(&(index + 1).to_string(), index_width).cyan(),
            pad(&device_cells[index], device_width),
            pad(&device.serial_number, serial_width),
            assigned
        ));
    }

    out
}

fn assigned_cell(app: &TrackerApp, device: &Device) -> String {
    if app.editor().is_editing(&device.id) {
        format!("> {}_  (Enter to save, /cancel)", app.editor().buffer())
    } else if device.is_assigned() {
        device.assigned_to.clone()
    } else {
        "Click to assign (/edit)".to_string()
    }
}

fn width_of(header: &str, cells: &[String]) -> usize {
    cells
        .iter()
        .map(|c| c.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or_default()
}

/// The add form with the current draft values.
pub fn render_form(app: &TrackerApp) -> String {
    let draft = app.form().draft();
    let field = |value: &str, placeholder: &str| {
        if value.is_empty() {
            placeholder.bright_black().to_string()
        } else {
            value.to_string()
        }
    };
    let types: Vec<&str> = DeviceType::all().iter().map(|t| t.label()).collect();

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Add New Device".bold()));
    out.push_str(&format!(
        "  Device Name    {}  {}\n",
        field(&draft.name, "MacBook Pro 2023"),
        "/name".bright_black()
    ));
    out.push_str(&format!(
        "  Device Type    {}  {}\n",
        draft.device_type.label(),
        format!("/type ({})", types.join(" | ")).bright_black()
    ));
    out.push_str(&format!(
        "  Serial Number  {}  {}\n",
        field(&draft.serial_number, "SN12345678"),
        "/serial".bright_black()
    ));
    out.push_str(&format!(
        "  Assigned To    {}  {}\n",
        field(&draft.assigned_to, "John Doe (optional)"),
        "/assignee".bright_black()
    ));
    out.push_str(&format!(
        "  {}\n",
        "/submit to add the device, /add to hide the form".bright_black()
    ));
    out
}

pub fn render_help() -> String {
    let lines = [
        ("/add", "Show or hide the add-device form"),
        ("/name <text>", "Set the device name (required)"),
        ("/type <type>", "laptop, smartphone, monitor, headphones or other"),
        ("/serial <text>", "Set the serial number"),
        ("/assignee <text>", "Set who the device is assigned to"),
        ("/submit", "Add the device from the form"),
        ("/form", "Show the form"),
        ("/search [term]", "Filter by name, serial number or assignee"),
        ("/list", "Show the device list"),
        ("/delete <row|id>", "Delete a device"),
        ("/edit <row|id>", "Edit who a device is assigned to"),
        ("/save", "Save the pending assignment"),
        ("/cancel", "Discard the pending assignment or hide the form"),
        ("quit", "Exit"),
    ];

    let mut out = String::new();
    for (command, description) in lines {
        out.push_str(&format!("  {}  {}\n", pad(command, 18).cyan(), description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use devtrack_core::{DeviceStore, MemoryDeviceStorage};

    fn plain() {
        colored::control::set_override(false);
    }

    fn app_with(devices: &[(&str, &str)]) -> TrackerApp {
        let mut app = TrackerApp::new(DeviceStore::load(MemoryDeviceStorage::new()));
        for (name, assignee) in devices {
            app.handle_line("/add");
            app.handle_line(&format!("/name {}", name));
            app.handle_line(&format!("/assignee {}", assignee));
            app.handle_line("/submit");
        }
        app
    }

    #[test]
    fn test_empty_collection_message() {
        plain();
        let app = app_with(&[]);
        let view = render_view(&app);

        assert!(view.contains("Devices (0)"));
        assert!(view.contains("No devices added yet."));
        assert!(view.contains("[/add: Add Device]"));
    }

    #[test]
    fn test_no_match_message() {
        plain();
        let mut app = app_with(&[("MacBook", "Jane Doe")]);
        app.handle_line("/search xyz123");

        let view = render_view(&app);
        assert!(view.contains("No devices match your search criteria."));
        assert!(!view.contains("No devices added yet."));
    }

    #[test]
    fn test_rows_and_placeholders() {
        plain();
        let mut app = app_with(&[("MacBook", "Jane Doe"), ("Pixel 8", "")]);
        app.handle_line("/edit 1");

        let view = render_view(&app);
        assert!(view.contains("Devices (2)"));
        assert!(view.contains("[L] MacBook (laptop)"));
        assert!(view.contains("> Jane Doe_"));
        assert!(view.contains("Click to assign"));
    }

    #[test]
    fn test_form_shows_draft() {
        plain();
        let mut app = app_with(&[]);
        app.handle_line("/add");
        app.handle_line("/name ThinkPad");
        app.handle_line("/type smartphone");

        let view = render_view(&app);
        assert!(view.contains("[/add: Cancel]"));
        assert!(view.contains("Add New Device"));
        assert!(view.contains("ThinkPad"));
        assert!(view.contains("Smartphone"));
    }

    #[test]
    fn test_type_icon_fallback() {
        assert_eq!(type_icon(DeviceType::Other), type_icon(DeviceType::Laptop));
        assert_ne!(type_icon(DeviceType::Monitor), type_icon(DeviceType::Laptop));
    }
}
