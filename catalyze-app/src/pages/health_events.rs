use catalyze_core::{Action, AppContext, Component, Element, ElementKind, Event};
use chrono::{Duration, Utc};
use crossterm::event::KeyCode;

use crate::components::{
    EventCard, EventCardProps, EventDetail, EventDetailProps, Filter, FilterOption, Modal,
    ModalProps,
};
use crate::data::{cat_by_id, mock_health_events};
use crate::model::{EventKind, HealthEvent};

/// Filterable event log with a detail modal.
///
/// The filter bar and the event list live in sections located by `id`; filter
/// and selection changes re-render only those sections in place.
pub struct HealthEventsPage {
    root: Element,
    cx: AppContext,
    cat_filter: Filter,
    kind_filter: Filter,
    period_filter: Filter,
    selected: usize,
    detail: Option<Modal>,
}

impl HealthEventsPage {
    pub fn new(cx: AppContext) -> Self {
        let cat_filter = Filter::new(
            "Cat",
            vec![
                FilterOption::new("All Cats", ""),
                FilterOption::new("Whiskers", "1"),
                FilterOption::new("Luna", "2"),
            ],
        );
        let kind_filter = Filter::new(
            "Type",
            vec![
                FilterOption::new("All Types", ""),
                FilterOption::new("Urination", "urination"),
                FilterOption::new("Defecation", "defecation"),
            ],
        );
        let period_filter = Filter::new(
            "Period",
            vec![
                FilterOption::new("Last 7 Days", "7"),
                FilterOption::new("Today", "1"),
                FilterOption::new("Last 30 Days", "30"),
            ],
        );

        Self {
            root: Element::new(ElementKind::Container, Some("page health-events-page")),
            cx,
            cat_filter,
            kind_filter,
            period_filter,
            selected: 0,
            detail: None,
        }
    }

    fn filtered_events(&self) -> Vec<HealthEvent> {
        let days: i64 = self
            .period_filter
            .value()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7);
        let cutoff = Utc::now() - Duration::days(days);

        let mut events: Vec<_> = mock_health_events()
            .into_iter()
            .filter(|e| e.timestamp >= cutoff)
            .filter(|e| match self.cat_filter.value() {
                Some("") | None => true,
                Some(id) => e.cat_id == id,
            })
            .filter(|e| match self.kind_filter.value() {
                Some("urination") => e.kind == EventKind::Urination,
                Some("defecation") => e.kind == EventKind::Defecation,
                _ => true,
            })
            .collect();
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        events
    }

    fn render_filters(&mut self) {
        let Some(bar) = self.root.find_by_id("filters-bar") else {
            return;
        };
        bar.clear_children();
        self.cat_filter.mount(&bar);
        self.kind_filter.mount(&bar);
        self.period_filter.mount(&bar);
        let hint = Element::new(ElementKind::Text, Some("muted"))
            .with_text("c/t/p: cycle filters   x: reset");
        bar.append_child(&hint);
    }

    fn render_list(&mut self) {
        let Some(list) = self.root.find_by_id("events-list") else {
            return;
        };
        list.clear_children();

        let events = self.filtered_events();
        self.selected = self.selected.min(events.len().saturating_sub(1));
        list.set_attr("title", format!("Events ({})", events.len()));

        if events.is_empty() {
            let empty = Element::new(ElementKind::Text, Some("muted"))
                .with_text("No events match the current filters.");
            list.append_child(&empty);
            return;
        }

        for (index, event) in events.into_iter().enumerate() {
            let cat = cat_by_id(&event.cat_id);
            EventCard::new(EventCardProps {
                event,
                cat,
                selected: index == self.selected,
            })
            .mount(&list);
        }
    }

    fn open_detail(&mut self) {
        let events = self.filtered_events();
        let Some(event) = events.into_iter().nth(self.selected) else {
            return;
        };

        if let Some(previous) = self.detail.take() {
            previous.unmount();
        }

        let mut detail = EventDetail::new(EventDetailProps {
            cat: cat_by_id(&event.cat_id),
            event,
        });
        let mut modal = Modal::new(ModalProps {
            title: "Event Details".into(),
            content: detail.render(),
            show_close_hint: true,
            on_close: None,
        });
        modal.render();
        modal.mount(&self.root);
        modal.open(&self.cx);
        self.detail = Some(modal);
    }

    fn detail_is_open(&self) -> bool {
        self.detail.as_ref().map(Modal::is_open).unwrap_or(false)
    }
}

impl Component for HealthEventsPage {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        let heading = Element::new(ElementKind::Heading, Some("page-title bold"))
            .with_text("Health Events");
        self.root.append_child(&heading);

        let bar = Element::new(ElementKind::Row, Some("filters"))
            .with_attr("id", "filters-bar");
        self.root.append_child(&bar);

        let list = Element::new(ElementKind::Container, Some("card"))
            .with_attr("id", "events-list");
        self.root.append_child(&list);

        self.render_filters();
        self.render_list();

        self.root.clone()
    }

    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let Event::Key(key) = event else { return None };

        if self.detail_is_open() {
            if key.code == KeyCode::Esc {
                if let Some(modal) = &mut self.detail {
                    modal.close(&self.cx);
                }
            }
            return Some(Action::Noop);
        }

        match key.code {
            KeyCode::Char('c') => {
                self.cat_filter.select_next();
                self.render_filters();
                self.render_list();
            }
            KeyCode::Char('t') => {
                self.kind_filter.select_next();
                self.render_filters();
                self.render_list();
            }
            KeyCode::Char('p') => {
                self.period_filter.select_next();
                self.render_filters();
                self.render_list();
            }
            KeyCode::Char('x') => {
                self.cat_filter.reset();
                self.kind_filter.reset();
                self.period_filter.reset();
                self.selected = 0;
                self.render_filters();
                self.render_list();
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.render_list();
            }
            KeyCode::Down => {
                self.selected += 1;
                self.render_list();
            }
            KeyCode::Enter => self.open_detail(),
            _ => return None,
        }
        Some(Action::Noop)
    }
}
