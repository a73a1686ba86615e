use catalyze_core::{Component, Element, ElementKind};

use crate::model::Device;

pub struct DeviceStatusProps {
    pub device: Device,
}

/// Per-device panel: connection state plus litter, waste and battery gauges.
pub struct DeviceStatus {
    props: DeviceStatusProps,
    root: Element,
}

impl DeviceStatus {
    pub fn new(props: DeviceStatusProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Container, Some("device-status card")),
        }
    }
}

impl Component for DeviceStatus {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();
        let device = &self.props.device;
        self.root.set_attr("title", device.name.clone());

        let status_class = format!("device-state {}", device.status.class());
        let status = Element::new(ElementKind::Text, Some(&status_class))
            .with_text(format!("● {}", device.status.label()));
        self.root.append_child(&status);

        let firmware = Element::new(ElementKind::Text, Some("muted"))
            .with_text(format!("firmware v{}", device.firmware_version));
        self.root.append_child(&firmware);

        let litter = Element::new(ElementKind::Gauge, Some("gauge-litter primary"))
            .with_attr("value", device.litter_level.to_string())
            .with_attr("label", "Litter");
        self.root.append_child(&litter);

        // Waste above 70% means the tray needs emptying soon.
        let waste_class = if device.waste_level > 70 {
            "gauge-waste danger"
        } else {
            "gauge-waste success"
        };
        let waste = Element::new(ElementKind::Gauge, Some(waste_class))
            .with_attr("value", device.waste_level.to_string())
            .with_attr("label", "Waste");
        self.root.append_child(&waste);

        if let Some(level) = device.battery_level {
            let battery = Element::new(ElementKind::Gauge, Some("gauge-battery warning"))
                .with_attr("value", level.to_string())
                .with_attr("label", "Battery");
            self.root.append_child(&battery);
        }

        let cleaned = match &device.last_cleaned {
            Some(at) => format!("last cleaned {}", at.format("%Y-%m-%d %H:%M")),
            None => "never cleaned".to_string(),
        };
        let cleaned = Element::new(ElementKind::Text, Some("muted")).with_text(cleaned);
        self.root.append_child(&cleaned);

        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock_devices;

    #[test]
    fn online_device_shows_gauges_without_battery() {
        let device = mock_devices().remove(0);
        let mut panel = DeviceStatus::new(DeviceStatusProps { device });
        let root = panel.render();

        assert_eq!(root.attr("title").as_deref(), Some("Living Room Litter Box"));
        assert!(root.children()[0].has_class("online"));

        let gauges: Vec<_> = root
            .children()
            .into_iter()
            .filter(|c| c.kind() == ElementKind::Gauge)
            .collect();
        assert_eq!(gauges.len(), 2);
        assert_eq!(gauges[0].attr("value").as_deref(), Some("75"));
        assert!(gauges[1].has_class("success"));
    }

    #[test]
    fn full_waste_tray_and_battery_are_flagged() {
        let device = mock_devices().remove(1);
        let mut panel = DeviceStatus::new(DeviceStatusProps { device });
        let root = panel.render();

        assert!(root.children()[0].has_class("offline"));

        let gauges: Vec<_> = root
            .children()
            .into_iter()
            .filter(|c| c.kind() == ElementKind::Gauge)
            .collect();
        assert_eq!(gauges.len(), 3);
        assert!(gauges[1].has_class("danger"));
        assert_eq!(gauges[2].attr("label").as_deref(), Some("Battery"));
        assert_eq!(gauges[2].attr("value").as_deref(), Some("40"));
    }
}
