use catalyze_core::{Component, Element, ElementKind};
use chrono::{Duration, Utc};

use crate::data::mock_health_events;

#[derive(Debug, Clone, Default)]
pub struct HealthChartProps {
    /// Restrict the tally to one cat, or count every cat when `None`.
    pub cat_id: Option<String>,
    pub days: u32,
}

/// Bar chart of events per day over the trailing window, oldest day first.
pub struct HealthChart {
    props: HealthChartProps,
    root: Element,
}

impl HealthChart {
    pub fn new(props: HealthChartProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Container, Some("health-chart")),
        }
    }

    fn daily_counts(&self) -> Vec<(String, u64)> {
        let days = self.props.days.max(1) as i64;
        let today = Utc::now().date_naive();
        let events = mock_health_events();

        (0..days)
            .rev()
            .map(|offset| {
                let day = today - Duration::days(offset);
                let count = events
                    .iter()
                    .filter(|e| e.timestamp.date_naive() == day)
                    .filter(|e| match &self.props.cat_id {
                        Some(id) => &e.cat_id == id,
                        None => true,
                    })
                    .count() as u64;
                (day.format("%a").to_string(), count)
            })
            .collect()
    }
}

impl Component for HealthChart {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        let counts = self.daily_counts();
        let data: Vec<String> = counts.iter().map(|(_, n)| n.to_string()).collect();
        let labels: Vec<&str> = counts.iter().map(|(day, _)| day.as_str()).collect();

        let chart = Element::new(ElementKind::Chart, Some("chart"))
            .with_attr("data", data.join(","))
            .with_attr("labels", labels.join("|"));
        self.root.append_child(&chart);

        let legend = Element::new(ElementKind::Text, Some("muted"))
            .with_text(format!("events per day, last {} days", counts.len()));
        self.root.append_child(&legend);

        self.root.clone()
    }
}
