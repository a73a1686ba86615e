use catalyze_core::{Component, Element, ElementKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Neutral => "→",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatCardProps {
    pub icon: String,
    pub value: String,
    pub label: String,
    pub trend: Option<(Trend, String)>,
    /// Accent class for the value line ("primary", "success", "warning", ...).
    pub accent: Option<String>,
}

/// Single headline number for the dashboard stats row.
pub struct StatCard {
    props: StatCardProps,
    root: Element,
}

impl StatCard {
    pub fn new(props: StatCardProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Container, Some("stat-card card")),
        }
    }
}

impl Component for StatCard {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        let mut value_class = String::from("stat-value bold");
        if let Some(accent) = &self.props.accent {
            value_class.push(' ');
            value_class.push_str(accent);
        }
        let value = Element::new(ElementKind::Text, Some(&value_class))
            .with_text(format!("{} {}", self.props.icon, self.props.value));
        self.root.append_child(&value);

        let label = Element::new(ElementKind::Text, Some("stat-label muted"))
            .with_text(self.props.label.clone());
        self.root.append_child(&label);

        if let Some((trend, caption)) = &self.props.trend {
            let line = Element::new(ElementKind::Text, Some("stat-trend muted"))
                .with_text(format!("{} {}", trend.arrow(), caption));
            self.root.append_child(&line);
        }

        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_value_label_and_trend() {
        let mut card = StatCard::new(StatCardProps {
            icon: "📊".into(),
            value: "3".into(),
            label: "Events Today".into(),
            trend: Some((Trend::Up, "2 more than yesterday".into())),
            accent: Some("primary".into()),
        });
        let root = card.render();

        let children = root.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].text().as_deref(), Some("📊 3"));
        assert!(children[0].has_class("primary"));
        assert_eq!(children[1].text().as_deref(), Some("Events Today"));
        assert_eq!(
            children[2].text().as_deref(),
            Some("↗ 2 more than yesterday")
        );
    }

    #[test]
    fn trend_line_is_optional() {
        let mut card = StatCard::new(StatCardProps {
            icon: "🔋".into(),
            value: "75%".into(),
            label: "Litter Level".into(),
            trend: None,
            accent: None,
        });
        assert_eq!(card.render().child_count(), 2);
    }
}
