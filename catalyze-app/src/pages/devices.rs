use catalyze_core::{Action, AppContext, Component, Element, ElementKind, Event};
use crossterm::event::KeyCode;

use crate::components::{
    DeviceStatus, DeviceStatusProps, Input, InputProps, Modal, ModalProps,
};
use crate::data::mock_devices;
use crate::model::Device;
use crate::services;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenDialog {
    None,
    Pairing,
    Details,
    Settings,
    RemoveConfirm,
}

/// Device fleet overview with pairing, details, settings and removal dialogs.
pub struct DevicesPage {
    root: Element,
    cx: AppContext,
    devices: Vec<Device>,
    selected: usize,
    dialog: OpenDialog,
    modal: Option<Modal>,
    pairing_name: Input,
}

impl DevicesPage {
    pub fn new(cx: AppContext) -> Self {
        Self {
            root: Element::new(ElementKind::Container, Some("page devices-page")),
            cx,
            devices: mock_devices(),
            selected: 0,
            dialog: OpenDialog::None,
            modal: None,
            pairing_name: Input::new(InputProps {
                label: Some("Device Name".into()),
                placeholder: Some("e.g. Kitchen Litter Box".into()),
                value: String::new(),
            }),
        }
    }

    fn render_grid(&mut self) {
        let Some(grid) = self.root.find_by_id("device-grid") else {
            return;
        };
        grid.clear_children();
        for (index, device) in self.devices.iter().enumerate() {
            let mut panel = DeviceStatus::new(DeviceStatusProps {
                device: device.clone(),
            });
            panel.mount(&grid);
            if index == self.selected {
                panel.root().add_class("selected");
            }
        }
    }

    fn selected_device(&self) -> Option<&Device> {
        self.devices.get(self.selected)
    }

    fn open_modal(&mut self, dialog: OpenDialog, title: &str, content: Element) {
        if let Some(previous) = self.modal.take() {
            previous.unmount();
        }
        let mut modal = Modal::new(ModalProps {
            title: title.into(),
            content,
            show_close_hint: true,
            on_close: None,
        });
        modal.render();
        modal.mount(&self.root);
        modal.open(&self.cx);
        self.modal = Some(modal);
        self.dialog = dialog;
    }

    fn close_modal(&mut self) {
        if let Some(modal) = &mut self.modal {
            modal.close(&self.cx);
        }
        self.dialog = OpenDialog::None;
    }

    fn open_pairing(&mut self) {
        let content = Element::new(ElementKind::Container, None);
        self.pairing_name.mount(&content);
        let hint = Element::new(ElementKind::Text, Some("muted"))
            .with_text("Enter: pair device");
        content.append_child(&hint);
        self.open_modal(OpenDialog::Pairing, "Add Device", content);
    }

    fn confirm_pairing(&mut self) {
        let name = self.pairing_name.value().trim().to_string();
        if name.is_empty() {
            self.pairing_name.set_error("Name is required");
            return;
        }
        self.pairing_name.clear_error();

        // Pairing has no backend yet; log the refusal and move on.
        self.cx.spawn(async move {
            if let Err(error) = services::pair_device(&name).await {
                tracing::warn!(%error, "device pairing unavailable");
            }
        });
        self.close_modal();
    }

    fn open_details(&mut self) {
        let Some(device) = self.selected_device() else {
            return;
        };
        let content = Element::new(ElementKind::Container, None);
        for line in [
            format!("Name: {}", device.name),
            format!("Status: {}", device.status.label()),
            format!("Firmware: v{}", device.firmware_version),
            format!("Litter level: {}%", device.litter_level),
            format!("Waste level: {}%", device.waste_level),
        ] {
            content.append_child(&Element::new(ElementKind::Text, None).with_text(line));
        }
        self.open_modal(OpenDialog::Details, "Device Details", content);
    }

    fn open_settings(&mut self) {
        let Some(device) = self.selected_device() else {
            return;
        };
        let device_id = device.id.clone();
        let content = Element::new(ElementKind::Container, None);
        content.append_child(
            &Element::new(ElementKind::Text, None)
                .with_text("l: schedule a cleaning cycle"),
        );
        content.append_child(
            &Element::new(ElementKind::Text, Some("muted"))
                .with_text("Firmware and sensor settings require the companion service."),
        );
        content.set_attr("device-id", device_id);
        self.open_modal(OpenDialog::Settings, "Device Settings", content);
    }

    fn schedule_cleaning(&mut self) {
        let Some(device) = self.selected_device() else {
            return;
        };
        let device_id = device.id.clone();
        self.cx.spawn(async move {
            if let Err(error) = services::schedule_cleaning(&device_id).await {
                tracing::warn!(%error, "cleaning scheduling unavailable");
            }
        });
        self.close_modal();
    }

    fn open_remove_confirm(&mut self) {
        let Some(device) = self.selected_device() else {
            return;
        };
        let content = Element::new(ElementKind::Container, None)
            .with_child(
                &Element::new(ElementKind::Text, Some("danger"))
                    .with_text(format!("Remove \"{}\"?", device.name)),
            )
            .with_child(
                &Element::new(ElementKind::Text, Some("muted"))
                    .with_text("y: remove   Esc: keep"),
            );
        self.open_modal(OpenDialog::RemoveConfirm, "Remove Device", content);
    }

    fn remove_selected(&mut self) {
        if self.selected < self.devices.len() {
            let removed = self.devices.remove(self.selected);
            tracing::info!(device = %removed.id, "device removed");
            self.selected = self.selected.min(self.devices.len().saturating_sub(1));
        }
        self.close_modal();
        self.render_grid();
    }
}

impl Component for DevicesPage {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        let heading = Element::new(ElementKind::Heading, Some("page-title bold"))
            .with_text("Devices");
        self.root.append_child(&heading);

        let hint = Element::new(ElementKind::Text, Some("muted"))
            .with_text("↑/↓: select   Enter: details   s: settings   a: add   r: remove");
        self.root.append_child(&hint);

        let grid = Element::new(ElementKind::Row, Some("device-grid"))
            .with_attr("id", "device-grid");
        self.root.append_child(&grid);
        self.render_grid();

        self.root.clone()
    }

    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let Event::Key(key) = event else { return None };

        match self.dialog {
            OpenDialog::Pairing => {
                match key.code {
                    KeyCode::Esc => self.close_modal(),
                    KeyCode::Enter => self.confirm_pairing(),
                    KeyCode::Char(c) => {
                        let value = format!("{}{}", self.pairing_name.value(), c);
                        self.pairing_name.set_value(value);
                    }
                    KeyCode::Backspace => {
                        let mut value = self.pairing_name.value().to_string();
                        value.pop();
                        self.pairing_name.set_value(value);
                    }
                    _ => {}
                }
                return Some(Action::Noop);
            }
            OpenDialog::RemoveConfirm => {
                match key.code {
                    KeyCode::Esc => self.close_modal(),
                    KeyCode::Char('y') => self.remove_selected(),
                    _ => {}
                }
                return Some(Action::Noop);
            }
            OpenDialog::Settings => {
                match key.code {
                    KeyCode::Esc => self.close_modal(),
                    KeyCode::Char('l') => self.schedule_cleaning(),
                    _ => {}
                }
                return Some(Action::Noop);
            }
            OpenDialog::Details => {
                if key.code == KeyCode::Esc {
                    self.close_modal();
                }
                return Some(Action::Noop);
            }
            OpenDialog::None => {}
        }

        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.render_grid();
            }
            KeyCode::Down => {
                if self.selected + 1 < self.devices.len() {
                    self.selected += 1;
                }
                self.render_grid();
            }
            KeyCode::Enter => self.open_details(),
            KeyCode::Char('s') => self.open_settings(),
            KeyCode::Char('a') => self.open_pairing(),
            KeyCode::Char('r') => self.open_remove_confirm(),
            _ => return None,
        }
        Some(Action::Noop)
    }
}
