//! Application shell: route table, page mounting and global key handling.

use std::sync::{Arc, Mutex};

use catalyze_core::{
    Action, AppContext, Component, Element, ElementKind, Event, History, Router, Shell,
};
use crossterm::event::KeyCode;

use crate::components::{Modal, ModalProps, NavItem, Navbar, NavbarProps};
use crate::pages::{DashboardPage, DevicesPage, HealthEventsPage, ReportsPage, SettingsPage};
use crate::prefs::{DeviceMode, Preferences};

type PageSlot = Arc<Mutex<Option<Box<dyn Component>>>>;

/// Digit keys 1..=5 jump to these routes, in navbar order.
const NAV_PATHS: [&str; 5] = ["/dashboard", "/health", "/devices", "/reports", "/settings"];

fn nav_props() -> NavbarProps {
    NavbarProps {
        logo_text: Some("🐾 Catalyze".into()),
        items: vec![
            NavItem {
                text: "Dashboard".into(),
                path: "/dashboard".into(),
                icon: Some("📊".into()),
            },
            NavItem {
                text: "Health Events".into(),
                path: "/health".into(),
                icon: Some("📋".into()),
            },
            NavItem {
                text: "Devices".into(),
                path: "/devices".into(),
                icon: Some("📡".into()),
            },
            NavItem {
                text: "Reports".into(),
                path: "/reports".into(),
                icon: Some("📈".into()),
            },
            NavItem {
                text: "Settings".into(),
                path: "/settings".into(),
                icon: Some("⚙".into()),
            },
        ],
    }
}

/// Register one route. The handler rebuilds the whole content area: navbar
/// first (active link reflecting the just-loaded route), then a fresh page
/// mounted into a `container` element. The previous page is dropped when the
/// slot is overwritten.
fn register_page<F>(
    router: &Router,
    path: &str,
    content: &Element,
    cx: &AppContext,
    slot: &PageSlot,
    make: F,
) where
    F: Fn(&AppContext) -> Box<dyn Component> + Send + Sync + 'static,
{
    let content = content.clone();
    let cx = cx.clone();
    let slot = slot.clone();
    let router_inner = router.clone();

    router.register(path, move || {
        content.clear_children();

        let mut navbar = Navbar::new(nav_props());
        navbar.mount(&content);
        navbar.set_active(&router_inner.current_route());

        let container = Element::new(ElementKind::Container, Some("container"));
        content.append_child(&container);

        let mut page = make(&cx);
        page.mount(&container);

        match slot.lock() {
            Ok(mut active) => *active = Some(page),
            Err(_) => tracing::warn!("page slot poisoned, keeping previous page"),
        }
        cx.refresh();
        tracing::info!(route = %router_inner.current_route(), "page mounted");
    });
}

pub struct App {
    document: Element,
    router: Router,
    cx: AppContext,
    active_page: PageSlot,
    device_modal: Modal,
}

impl App {
    pub fn new(cx: AppContext) -> Self {
        let history = History::new();
        let router = Router::new(history);

        let document = Element::new(ElementKind::Container, Some("app"));
        let content = Element::new(ElementKind::Container, Some("app-content"))
            .with_attr("id", "app");
        document.append_child(&content);

        let active_page: PageSlot = Arc::default();

        register_page(&router, "/", &content, &cx, &active_page, |_| {
            Box::new(DashboardPage::new())
        });
        register_page(&router, "/dashboard", &content, &cx, &active_page, |_| {
            Box::new(DashboardPage::new())
        });
        register_page(&router, "/health", &content, &cx, &active_page, |cx| {
            Box::new(HealthEventsPage::new(cx.clone()))
        });
        register_page(&router, "/devices", &content, &cx, &active_page, |cx| {
            Box::new(DevicesPage::new(cx.clone()))
        });
        register_page(&router, "/reports", &content, &cx, &active_page, |cx| {
            Box::new(ReportsPage::new(cx.clone()))
        });
        register_page(&router, "/settings", &content, &cx, &active_page, |cx| {
            Box::new(SettingsPage::new(cx.clone()))
        });

        router.init();

        let mut device_modal = Self::build_device_modal();
        device_modal.render();
        device_modal.mount(&document);
        device_modal.open(&cx);

        Self {
            document,
            router,
            cx,
            active_page,
            device_modal,
        }
    }

    fn build_device_modal() -> Modal {
        let content = Element::new(ElementKind::Container, None);
        for line in [
            "d: 🖥  Desktop",
            "t: 📱 Tablet",
            "m: 📱 Mobile",
        ] {
            content.append_child(&Element::new(ElementKind::Text, None).with_text(line));
        }
        Modal::new(ModalProps {
            title: "Select Device Mode".into(),
            content,
            show_close_hint: true,
            on_close: None,
        })
    }

    fn choose_device_mode(&mut self, device_mode: DeviceMode) {
        let prefs = Preferences { device_mode };
        if let Err(error) = prefs.save() {
            tracing::warn!(%error, "failed to persist device mode");
        } else {
            tracing::info!(mode = device_mode.label(), "device mode saved");
        }
        self.device_modal.close(&self.cx);
    }

    fn apply(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Navigate(path) => {
                self.router.navigate(&path);
                None
            }
            Action::Back => {
                self.router.history().back();
                None
            }
            Action::Forward => {
                self.router.history().forward();
                None
            }
            Action::Quit => Some(Action::Quit),
            Action::Noop => None,
        }
    }

    #[cfg(test)]
    fn current_route(&self) -> String {
        self.router.current_route()
    }
}

impl Shell for App {
    fn document(&self) -> &Element {
        &self.document
    }

    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        if self.device_modal.is_open() {
            if let Event::Key(key) = event {
                match key.code {
                    KeyCode::Char('d') => self.choose_device_mode(DeviceMode::Desktop),
                    KeyCode::Char('t') => self.choose_device_mode(DeviceMode::Tablet),
                    KeyCode::Char('m') => self.choose_device_mode(DeviceMode::Mobile),
                    KeyCode::Esc => self.device_modal.close(&self.cx),
                    _ => {}
                }
            }
            return None;
        }

        // The page gets first refusal; the slot lock is released before any
        // resulting navigation re-enters it.
        let action = match self.active_page.lock() {
            Ok(mut slot) => slot.as_mut().and_then(|page| page.handle_event(event)),
            Err(_) => {
                tracing::warn!("page slot poisoned, dropping event");
                None
            }
        };
        if let Some(action) = action {
            return self.apply(action);
        }

        let Event::Key(key) = event else { return None };
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.router.navigate(NAV_PATHS[index]);
                None
            }
            KeyCode::Backspace | KeyCode::Char('[') => {
                self.router.history().back();
                None
            }
            KeyCode::Char(']') => {
                self.router.history().forward();
                None
            }
            _ => None,
        }
    }

    fn on_shutdown(&mut self) {
        tracing::info!("dashboard closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    async fn app_past_the_device_modal() -> App {
        let mut app = App::new(AppContext::detached());
        app.handle_event(&key(KeyCode::Esc));
        tokio::time::sleep(Duration::from_millis(310)).await;
        assert!(!app.device_modal.is_open());
        app
    }

    #[tokio::test(start_paused = true)]
    async fn startup_mounts_the_dashboard_behind_the_device_modal() {
        let app = App::new(AppContext::detached());
        assert_eq!(app.current_route(), "/");
        assert!(app.device_modal.is_open());
        assert!(app.document.find_by_class("dashboard-page").is_some());
        assert!(app.document.find_by_class("navbar").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn device_modal_swallows_input_while_open() {
        let mut app = App::new(AppContext::detached());
        app.handle_event(&key(KeyCode::Char('3')));
        assert_eq!(app.current_route(), "/");
    }

    #[tokio::test(start_paused = true)]
    async fn digit_keys_jump_between_routes() {
        let mut app = app_past_the_device_modal().await;

        app.handle_event(&key(KeyCode::Char('3')));
        assert_eq!(app.current_route(), "/devices");
        assert!(app.document.find_by_class("devices-page").is_some());
        assert!(app.document.find_by_class("dashboard-page").is_none());

        app.handle_event(&key(KeyCode::Char('5')));
        assert_eq!(app.current_route(), "/settings");
    }

    #[tokio::test(start_paused = true)]
    async fn navbar_highlights_the_loaded_route() {
        let mut app = app_past_the_device_modal().await;
        app.handle_event(&key(KeyCode::Char('2')));

        let links = app.document.find_all_by_class("navbar-link");
        let active: Vec<_> = links.iter().filter(|l| l.has_class("active")).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].attr("href").as_deref(), Some("/health"));
    }

    #[tokio::test(start_paused = true)]
    async fn bracket_keys_traverse_history() {
        let mut app = app_past_the_device_modal().await;
        app.handle_event(&key(KeyCode::Char('2')));
        app.handle_event(&key(KeyCode::Char('4')));

        app.handle_event(&key(KeyCode::Char('[')));
        assert_eq!(app.current_route(), "/health");

        app.handle_event(&key(KeyCode::Char(']')));
        assert_eq!(app.current_route(), "/reports");
    }

    #[tokio::test(start_paused = true)]
    async fn page_actions_drive_the_router() {
        let mut app = app_past_the_device_modal().await;
        // Dashboard's quick action.
        app.handle_event(&key(KeyCode::Char('v')));
        assert_eq!(app.current_route(), "/health");
        assert!(app.document.find_by_class("health-events-page").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn quit_key_is_global() {
        let mut app = app_past_the_device_modal().await;
        assert_eq!(app.handle_event(&key(KeyCode::Char('q'))), Some(Action::Quit));
    }
}
