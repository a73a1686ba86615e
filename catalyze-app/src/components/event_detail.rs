use catalyze_core::{Component, Element, ElementKind};

use crate::model::{Cat, HealthEvent};

pub struct EventDetailProps {
    pub event: HealthEvent,
    pub cat: Option<Cat>,
}

/// Full view of one health event, shown inside a modal.
pub struct EventDetail {
    props: EventDetailProps,
    root: Element,
}

impl EventDetail {
    pub fn new(props: EventDetailProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Container, Some("event-detail")),
        }
    }
}

impl Component for EventDetail {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();
        let event = &self.props.event;

        let cat_line = match &self.props.cat {
            Some(cat) => format!("{} {}", cat.photo, cat.name),
            None => "🐾 Unknown cat".to_string(),
        };
        let header = Element::new(ElementKind::Heading, Some("bold")).with_text(cat_line);
        self.root.append_child(&header);

        let badge = Element::new(ElementKind::Text, Some("event-kind primary")).with_text(
            format!(
                "{} {} · {}",
                event.kind.glyph(),
                event.kind.label(),
                event.timestamp.format("%Y-%m-%d %H:%M"),
            ),
        );
        self.root.append_child(&badge);

        if event.has_image {
            let photo = Element::new(ElementKind::Text, Some("muted"))
                .with_text("📷 image captured");
            self.root.append_child(&photo);
        }

        match &event.screening {
            Some(screening) => {
                let grid = Element::new(ElementKind::Container, Some("screening-grid"))
                    .with_attr("title", "Screening");
                for (field, value) in [
                    ("Color", &screening.color),
                    ("Consistency", &screening.consistency),
                    ("Size", &screening.size),
                    ("Shape", &screening.shape),
                ] {
                    let line = Element::new(ElementKind::Text, None)
                        .with_text(format!("{field}: {value}"));
                    grid.append_child(&line);
                }
                let confidence = Element::new(ElementKind::Text, Some("muted")).with_text(
                    format!("confidence {:.0}%", screening.confidence * 100.0),
                );
                grid.append_child(&confidence);
                self.root.append_child(&grid);

                if screening.anomalies.is_empty() {
                    let ok = Element::new(ElementKind::Text, Some("success"))
                        .with_text("✅ No anomalies detected");
                    self.root.append_child(&ok);
                } else {
                    for anomaly in &screening.anomalies {
                        let line = Element::new(ElementKind::Text, Some("alert"))
                            .with_text(format!("⚠ {anomaly}"));
                        self.root.append_child(&line);
                    }
                    let disclaimer = Element::new(ElementKind::Text, Some("muted")).with_text(
                        "Screening only, not a diagnosis. Consult a veterinarian if concerned.",
                    );
                    self.root.append_child(&disclaimer);
                }
            }
            None => {
                let none = Element::new(ElementKind::Text, Some("muted"))
                    .with_text("No screening available for this event.");
                self.root.append_child(&none);
            }
        }

        if let Some(notes) = &event.notes {
            let line = Element::new(ElementKind::Text, Some("event-notes"))
                .with_text(format!("Notes: {notes}"));
            self.root.append_child(&line);
        }

        self.root.clone()
    }
}
