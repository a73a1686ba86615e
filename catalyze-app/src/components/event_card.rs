use catalyze_core::{Component, Element, ElementKind};

use crate::model::{Cat, HealthEvent};

pub struct EventCardProps {
    pub event: HealthEvent,
    pub cat: Option<Cat>,
    pub selected: bool,
}

/// Compact one-or-two line entry in an event list.
pub struct EventCard {
    props: EventCardProps,
    root: Element,
}

impl EventCard {
    pub fn new(props: EventCardProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Container, Some("event-card")),
        }
    }
}

impl Component for EventCard {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();
        if self.props.selected {
            self.root.add_class("selected");
        } else {
            self.root.remove_class("selected");
        }

        let event = &self.props.event;
        let (photo, name) = match &self.props.cat {
            Some(cat) => (cat.photo.as_str(), cat.name.as_str()),
            None => ("🐾", "Unknown cat"),
        };

        let mut line = String::new();
        if self.props.selected {
            line.push_str("▶ ");
        }
        line.push_str(&format!(
            "{photo} {name}  {}  {} {}",
            event.timestamp.format("%H:%M"),
            event.kind.glyph(),
            event.kind.label(),
        ));
        if event.has_image {
            line.push_str("  📷");
        }
        let summary = Element::new(ElementKind::Text, Some("event-summary")).with_text(line);
        self.root.append_child(&summary);

        if event.has_anomaly() {
            if let Some(screening) = &event.screening {
                let warning = Element::new(ElementKind::Text, Some("event-anomaly alert"))
                    .with_text(format!("⚠ {}", screening.anomalies.join(", ")));
                self.root.append_child(&warning);
            }
        }

        self.root.clone()
    }
}
