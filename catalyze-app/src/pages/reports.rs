use catalyze_core::{Action, AppContext, Component, Element, ElementKind, Event};
use chrono::{Duration, Utc};
use crossterm::event::KeyCode;

use crate::components::{
    Filter, FilterOption, HealthChart, HealthChartProps, Modal, ModalProps, StatCard,
    StatCardProps,
};
use crate::data::mock_health_events;
use crate::model::{EventKind, HealthEvent, ReportFormat, VetReport};
use crate::services;

/// Aggregated statistics and vet-report export.
pub struct ReportsPage {
    root: Element,
    cx: AppContext,
    cat_filter: Filter,
    period_filter: Filter,
    export_modal: Option<Modal>,
}

struct Summary {
    total: usize,
    urinations: usize,
    defecations: usize,
    anomalies: usize,
    daily_average: f64,
}

impl ReportsPage {
    pub fn new(cx: AppContext) -> Self {
        let cat_filter = Filter::new(
            "Cat",
            vec![
                FilterOption::new("All Cats", ""),
                FilterOption::new("Whiskers", "1"),
                FilterOption::new("Luna", "2"),
            ],
        );
        let period_filter = Filter::new(
            "Period",
            vec![
                FilterOption::new("Last 7 Days", "7"),
                FilterOption::new("Last 30 Days", "30"),
            ],
        );
        Self {
            root: Element::new(ElementKind::Container, Some("page reports-page")),
            cx,
            cat_filter,
            period_filter,
            export_modal: None,
        }
    }

    fn period_days(&self) -> i64 {
        self.period_filter
            .value()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7)
    }

    fn events_in_scope(&self) -> Vec<HealthEvent> {
        let cutoff = Utc::now() - Duration::days(self.period_days());
        mock_health_events()
            .into_iter()
            .filter(|e| e.timestamp >= cutoff)
            .filter(|e| match self.cat_filter.value() {
                Some("") | None => true,
                Some(id) => e.cat_id == id,
            })
            .collect()
    }

    fn summarize(&self) -> Summary {
        let events = self.events_in_scope();
        let urinations = events
            .iter()
            .filter(|e| e.kind == EventKind::Urination)
            .count();
        let anomalies = events.iter().filter(|e| e.has_anomaly()).count();
        Summary {
            total: events.len(),
            urinations,
            defecations: events.len() - urinations,
            anomalies,
            daily_average: events.len() as f64 / self.period_days() as f64,
        }
    }

    fn render_body(&mut self) {
        let Some(body) = self.root.find_by_id("reports-body") else {
            return;
        };
        body.clear_children();

        let bar = Element::new(ElementKind::Row, Some("filters"));
        self.cat_filter.mount(&bar);
        self.period_filter.mount(&bar);
        let hint = Element::new(ElementKind::Text, Some("muted"))
            .with_text("c/p: cycle selectors   e: export report");
        bar.append_child(&hint);
        body.append_child(&bar);

        let summary = self.summarize();
        let row = Element::new(ElementKind::Row, Some("stats-grid"));
        let cards = [
            ("📊", summary.total.to_string(), "Total Events", None),
            ("💧", summary.urinations.to_string(), "Urinations", None),
            ("💩", summary.defecations.to_string(), "Defecations", None),
            (
                "⚠",
                summary.anomalies.to_string(),
                "Anomalies",
                if summary.anomalies > 0 {
                    Some("warning".to_string())
                } else {
                    Some("success".to_string())
                },
            ),
            (
                "📈",
                format!("{:.1}", summary.daily_average),
                "Daily Average",
                None,
            ),
        ];
        for (icon, value, label, accent) in cards {
            StatCard::new(StatCardProps {
                icon: icon.into(),
                value,
                label: label.into(),
                trend: None,
                accent,
            })
            .mount(&row);
        }
        body.append_child(&row);

        let chart_card = Element::new(ElementKind::Container, Some("card"))
            .with_attr("title", "Activity");
        HealthChart::new(HealthChartProps {
            cat_id: self.cat_filter.value().filter(|v| !v.is_empty()).map(String::from),
            days: self.period_days() as u32,
        })
        .mount(&chart_card);
        body.append_child(&chart_card);

        let insights = Element::new(ElementKind::Container, Some("card"))
            .with_attr("title", "Insights");
        let text = if summary.anomalies > 0 {
            format!(
                "{} event(s) flagged for review in the selected period. \
                 Screening only, not a diagnosis.",
                summary.anomalies
            )
        } else {
            "No anomalies flagged in the selected period.".to_string()
        };
        insights.append_child(&Element::new(ElementKind::Text, None).with_text(text));
        body.append_child(&insights);
    }

    fn export(&mut self) {
        let today = Utc::now().date_naive();
        let report = VetReport {
            id: format!("report-{today}"),
            range_start: today - Duration::days(self.period_days()),
            range_end: today,
            cat_ids: match self.cat_filter.value() {
                Some("") | None => vec!["1".into(), "2".into()],
                Some(id) => vec![id.to_string()],
            },
            generated_at: Utc::now(),
            format: ReportFormat::Pdf,
        };
        self.cx.spawn(async move {
            if let Err(error) = services::generate_report(&report).await {
                tracing::warn!(%error, "report export unavailable");
            }
        });

        if let Some(previous) = self.export_modal.take() {
            previous.unmount();
        }
        let content = Element::new(ElementKind::Container, None).with_child(
            &Element::new(ElementKind::Text, None)
                .with_text("Report export requires the companion service."),
        );
        let mut modal = Modal::new(ModalProps {
            title: "Export Report".into(),
            content,
            show_close_hint: true,
            on_close: None,
        });
        modal.render();
        modal.mount(&self.root);
        modal.open(&self.cx);
        self.export_modal = Some(modal);
    }

    fn export_is_open(&self) -> bool {
        self.export_modal
            .as_ref()
            .map(Modal::is_open)
            .unwrap_or(false)
    }
}

impl Component for ReportsPage {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        let heading = Element::new(ElementKind::Heading, Some("page-title bold"))
            .with_text("Reports");
        self.root.append_child(&heading);

        let body = Element::new(ElementKind::Container, None)
            .with_attr("id", "reports-body");
        self.root.append_child(&body);
        self.render_body();

        self.root.clone()
    }

    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let Event::Key(key) = event else { return None };

        if self.export_is_open() {
            if key.code == KeyCode::Esc {
                if let Some(modal) = &mut self.export_modal {
                    modal.close(&self.cx);
                }
            }
            return Some(Action::Noop);
        }

        match key.code {
            KeyCode::Char('c') => {
                self.cat_filter.select_next();
                self.render_body();
            }
            KeyCode::Char('p') => {
                self.period_filter.select_next();
                self.render_body();
            }
            KeyCode::Char('e') => self.export(),
            _ => return None,
        }
        Some(Action::Noop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn page() -> ReportsPage {
        let mut page = ReportsPage::new(AppContext::detached());
        page.render();
        page
    }

    #[test]
    fn summary_counts_the_full_dataset_by_default() {
        let page = page();
        let summary = page.summarize();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.urinations, 2);
        assert_eq!(summary.defecations, 3);
        assert_eq!(summary.anomalies, 1);
    }

    #[test]
    fn cat_selector_scopes_the_summary() {
        let mut page = page();
        page.handle_event(&key(KeyCode::Char('c')));
        let summary = page.summarize();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.anomalies, 0);
    }

    #[test]
    fn body_renders_stats_chart_and_insights() {
        let page = page();
        let body = page.root().find_by_id("reports-body").unwrap();
        let stats = body.find_by_class("stats-grid").unwrap();
        assert_eq!(stats.child_count(), 5);
        assert!(body.find_by_class("health-chart").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn export_opens_the_placeholder_modal() {
        let mut page = page();
        page.handle_event(&key(KeyCode::Char('e')));
        assert!(page.export_is_open());

        page.handle_event(&key(KeyCode::Esc));
        tokio::time::sleep(std::time::Duration::from_millis(310)).await;
        assert!(!page.export_is_open());
    }
}
