use catalyze_core::{Action, Component, Element, ElementKind, Event};
use crossterm::event::KeyCode;

use crate::components::{
    Button, ButtonProps, ButtonSize, ButtonVariant, Card, CardProps, DeviceStatus,
    DeviceStatusProps, EventCard, EventCardProps, StatCard, StatCardProps, Trend,
};
use crate::data::{
    cat_by_id, mock_cats, mock_devices, recent_events, today_events, unread_notifications,
};
use crate::model::DeviceState;

/// Landing page: headline stats, recent events and device overview.
pub struct DashboardPage {
    root: Element,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            root: Element::new(ElementKind::Container, Some("page dashboard-page")),
        }
    }

    fn render_stats(&self, parent: &Element) {
        let row = Element::new(ElementKind::Row, Some("stats-grid"));

        let cats = mock_cats();
        let today = today_events();
        let unread = unread_notifications();
        let online = mock_devices()
            .iter()
            .filter(|d| d.status == DeviceState::Online)
            .count();
        let total_devices = mock_devices().len();

        let cards = [
            StatCardProps {
                icon: "🐱".into(),
                value: cats.len().to_string(),
                label: "Cats".into(),
                trend: None,
                accent: Some("primary".into()),
            },
            StatCardProps {
                icon: "📊".into(),
                value: today.len().to_string(),
                label: "Events Today".into(),
                trend: Some((Trend::Neutral, "within normal range".into())),
                accent: None,
            },
            StatCardProps {
                icon: "🔔".into(),
                value: unread.len().to_string(),
                label: "Unread Alerts".into(),
                trend: None,
                accent: if unread.is_empty() {
                    None
                } else {
                    Some("warning".into())
                },
            },
            StatCardProps {
                icon: "📡".into(),
                value: format!("{online}/{total_devices}"),
                label: "Devices Online".into(),
                trend: None,
                accent: if online == total_devices {
                    Some("success".into())
                } else {
                    Some("danger".into())
                },
            },
        ];

        for props in cards {
            StatCard::new(props).mount(&row);
        }
        parent.append_child(&row);
    }

    fn render_recent_events(&self, parent: &Element) {
        let list = Element::new(ElementKind::Container, Some("card"))
            .with_attr("title", "Recent Events")
            .with_attr("id", "recent-events");
        for event in recent_events(4) {
            let cat = cat_by_id(&event.cat_id);
            EventCard::new(EventCardProps {
                event,
                cat,
                selected: false,
            })
            .mount(&list);
        }

        let actions = Element::new(ElementKind::Row, Some("quick-actions"));
        Button::new(ButtonProps {
            text: "View All Events".into(),
            icon: Some("📋".into()),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Small,
            disabled: false,
            hint: Some('v'),
        })
        .mount(&actions);
        Button::new(ButtonProps {
            text: "Generate Report".into(),
            icon: Some("📈".into()),
            variant: ButtonVariant::Secondary,
            size: ButtonSize::Small,
            disabled: false,
            hint: Some('g'),
        })
        .mount(&actions);
        list.append_child(&actions);

        parent.append_child(&list);
    }

    fn render_devices(&self, parent: &Element) {
        let row = Element::new(ElementKind::Row, Some("device-grid"));
        for device in mock_devices() {
            DeviceStatus::new(DeviceStatusProps { device }).mount(&row);
        }
        parent.append_child(&row);
    }

    fn render_cats(&self, parent: &Element) {
        let content = Element::new(ElementKind::Container, Some("cats-overview"));
        for cat in mock_cats() {
            let breed = cat.breed.as_deref().unwrap_or("unknown breed");
            let weight = cat
                .weight_kg
                .map(|w| format!("{w:.1} kg"))
                .unwrap_or_else(|| "weight unknown".to_string());
            let line = Element::new(ElementKind::Text, None)
                .with_text(format!("{} {} · {breed} · {weight}", cat.photo, cat.name));
            content.append_child(&line);
        }
        Card::new(CardProps {
            title: Some("Your Cats".into()),
            content,
            footer: None,
        })
        .mount(parent);
    }
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DashboardPage {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        let heading = Element::new(ElementKind::Heading, Some("page-title bold"))
            .with_text("Dashboard");
        self.root.append_child(&heading);

        self.render_stats(&self.root);
        self.render_recent_events(&self.root);
        self.render_devices(&self.root);
        self.render_cats(&self.root);

        self.root.clone()
    }

    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let Event::Key(key) = event else { return None };
        match key.code {
            KeyCode::Char('v') => Some(Action::Navigate("/health".into())),
            KeyCode::Char('g') => Some(Action::Navigate("/reports".into())),
            _ => None,
        }
    }
}
