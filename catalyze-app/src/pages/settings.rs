use catalyze_core::{Action, AppContext, Component, Element, ElementKind, Event};
use crossterm::event::KeyCode;

use crate::components::{Filter, FilterOption, Input, InputProps, Modal, ModalProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    None,
    Name,
    Email,
}

/// Profile, notification and preference settings with placeholder save.
pub struct SettingsPage {
    root: Element,
    cx: AppContext,
    name: Input,
    email: Input,
    focus: Focus,
    toggles: Vec<(String, bool)>,
    toggle_cursor: usize,
    theme: Filter,
    confirm: Option<Modal>,
}

const DEFAULT_NAME: &str = "Sarah Chen";
const DEFAULT_EMAIL: &str = "sarah@example.com";

impl SettingsPage {
    pub fn new(cx: AppContext) -> Self {
        Self {
            root: Element::new(ElementKind::Container, Some("page settings-page")),
            cx,
            name: Input::new(InputProps {
                label: Some("Name".into()),
                placeholder: None,
                value: DEFAULT_NAME.into(),
            }),
            email: Input::new(InputProps {
                label: Some("Email".into()),
                placeholder: None,
                value: DEFAULT_EMAIL.into(),
            }),
            focus: Focus::None,
            toggles: Self::default_toggles(),
            toggle_cursor: 0,
            theme: Filter::new(
                "Theme",
                vec![
                    FilterOption::new("System", "system"),
                    FilterOption::new("Light", "light"),
                    FilterOption::new("Dark", "dark"),
                ],
            ),
            confirm: None,
        }
    }

    fn default_toggles() -> Vec<(String, bool)> {
        vec![
            ("Anomaly alerts".to_string(), true),
            ("Cleaning reminders".to_string(), true),
            ("Low litter warnings".to_string(), true),
            ("Weekly summary email".to_string(), false),
        ]
    }

    fn render_toggles(&self) {
        let Some(card) = self.root.find_by_id("notification-settings") else {
            return;
        };
        card.clear_children();
        for (index, (label, enabled)) in self.toggles.iter().enumerate() {
            let marker = if *enabled { "[x]" } else { "[ ]" };
            let cursor = if index == self.toggle_cursor { "▶ " } else { "  " };
            let class = if index == self.toggle_cursor {
                "toggle selected"
            } else {
                "toggle"
            };
            let line = Element::new(ElementKind::Text, Some(class))
                .with_text(format!("{cursor}{marker} {label}"));
            card.append_child(&line);
        }
    }

    fn render_preferences(&mut self) {
        let Some(card) = self.root.find_by_id("preference-settings") else {
            return;
        };
        card.clear_children();
        self.theme.mount(&card);
        let hint = Element::new(ElementKind::Text, Some("muted"))
            .with_text("t: cycle theme");
        card.append_child(&hint);
    }

    fn open_confirm(&mut self, message: &str) {
        if let Some(previous) = self.confirm.take() {
            previous.unmount();
        }
        let content = Element::new(ElementKind::Container, None)
            .with_child(&Element::new(ElementKind::Text, None).with_text(message));
        let mut modal = Modal::new(ModalProps {
            title: "Settings".into(),
            content,
            show_close_hint: true,
            on_close: None,
        });
        modal.render();
        modal.mount(&self.root);
        modal.open(&self.cx);
        self.confirm = Some(modal);
    }

    fn confirm_is_open(&self) -> bool {
        self.confirm.as_ref().map(Modal::is_open).unwrap_or(false)
    }

    fn save(&mut self) {
        if self.name.value().trim().is_empty() {
            self.name.set_error("Name is required");
            return;
        }
        self.name.clear_error();
        if !self.email.value().contains('@') {
            self.email.set_error("Enter a valid email address");
            return;
        }
        self.email.clear_error();

        // Profile changes stay local until account sync exists.
        tracing::info!(theme = ?self.theme.value(), "settings saved locally");
        self.open_confirm("Settings saved locally. Account sync is not available yet.");
    }

    fn reset(&mut self) {
        self.name.set_value(DEFAULT_NAME);
        self.name.clear_error();
        self.email.set_value(DEFAULT_EMAIL);
        self.email.clear_error();
        self.toggles = Self::default_toggles();
        self.toggle_cursor = 0;
        self.theme.reset();
        self.focus = Focus::None;
        self.render_toggles();
        self.render_preferences();
        self.open_confirm("Settings restored to defaults.");
    }

    fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::Email => Some(&mut self.email),
            Focus::None => None,
        }
    }
}

impl Component for SettingsPage {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        let heading = Element::new(ElementKind::Heading, Some("page-title bold"))
            .with_text("Settings");
        self.root.append_child(&heading);

        let hint = Element::new(ElementKind::Text, Some("muted")).with_text(
            "n/m: edit name/email   ↑/↓ + space: toggles   s: save   x: reset",
        );
        self.root.append_child(&hint);

        let profile = Element::new(ElementKind::Container, Some("card"))
            .with_attr("title", "Profile");
        self.name.mount(&profile);
        self.email.mount(&profile);
        self.root.append_child(&profile);

        let notifications = Element::new(ElementKind::Container, Some("card"))
            .with_attr("title", "Notifications")
            .with_attr("id", "notification-settings");
        self.root.append_child(&notifications);
        self.render_toggles();

        let preferences = Element::new(ElementKind::Container, Some("card"))
            .with_attr("title", "Preferences")
            .with_attr("id", "preference-settings");
        self.root.append_child(&preferences);
        self.render_preferences();

        let privacy = Element::new(ElementKind::Container, Some("card"))
            .with_attr("title", "Privacy");
        privacy.append_child(
            &Element::new(ElementKind::Text, Some("muted"))
                .with_text("Event images never leave the device."),
        );
        privacy.append_child(
            &Element::new(ElementKind::Text, Some("muted"))
                .with_text("Screening runs on-device; no data is shared."),
        );
        self.root.append_child(&privacy);

        self.root.clone()
    }

    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let Event::Key(key) = event else { return None };

        if self.confirm_is_open() {
            if key.code == KeyCode::Esc {
                if let Some(modal) = &mut self.confirm {
                    modal.close(&self.cx);
                }
            }
            return Some(Action::Noop);
        }

        if self.focus != Focus::None {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.focus = Focus::None,
                KeyCode::Char(c) => {
                    if let Some(input) = self.focused_input() {
                        let value = format!("{}{}", input.value(), c);
                        input.set_value(value);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(input) = self.focused_input() {
                        let mut value = input.value().to_string();
                        value.pop();
                        input.set_value(value);
                    }
                }
                _ => {}
            }
            return Some(Action::Noop);
        }

        match key.code {
            KeyCode::Char('n') => self.focus = Focus::Name,
            KeyCode::Char('m') => self.focus = Focus::Email,
            KeyCode::Up => {
                self.toggle_cursor = self.toggle_cursor.saturating_sub(1);
                self.render_toggles();
            }
            KeyCode::Down => {
                if self.toggle_cursor + 1 < self.toggles.len() {
                    self.toggle_cursor += 1;
                }
                self.render_toggles();
            }
            KeyCode::Char(' ') => {
                if let Some((_, enabled)) = self.toggles.get_mut(self.toggle_cursor) {
                    *enabled = !*enabled;
                }
                self.render_toggles();
            }
            KeyCode::Char('t') => {
                self.theme.select_next();
                self.render_preferences();
            }
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('x') => self.reset(),
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

    fn page() -> SettingsPage {
        let mut page = SettingsPage::new(AppContext::detached());
        page.render();
        page
    }

    #[test]
    fn renders_profile_notifications_preferences_and_privacy() {
        let page = page();
        assert!(page.root().find_by_id("notification-settings").is_some());
        assert!(page.root().find_by_id("preference-settings").is_some());
        assert_eq!(page.root().find_all_by_class("input-group").len(), 2);
    }

    #[test]
    fn space_toggles_the_highlighted_setting() {
        let mut page = page();
        assert!(page.toggles[0].1);
        page.handle_event(&key(KeyCode::Char(' ')));
        assert!(!page.toggles[0].1);

        page.handle_event(&key(KeyCode::Down));
        page.handle_event(&key(KeyCode::Char(' ')));
        assert!(!page.toggles[1].1);
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut page = page();
        page.handle_event(&key(KeyCode::Char('n')));
        page.handle_event(&key(KeyCode::Backspace));
        page.handle_event(&key(KeyCode::Char('g')));
        page.handle_event(&key(KeyCode::Esc));

        assert_eq!(page.name.value(), "Sarah Cheg");
        // 'n' now refocuses instead of typing.
        assert_eq!(page.focus, Focus::None);
    }

    #[tokio::test(start_paused = true)]
    async fn save_validates_the_email() {
        let mut page = page();
        page.handle_event(&key(KeyCode::Char('m')));
        for _ in 0..DEFAULT_EMAIL.len() {
            page.handle_event(&key(KeyCode::Backspace));
        }
        for c in "not-an-email".chars() {
            page.handle_event(&key(KeyCode::Char(c)));
        }
        page.handle_event(&key(KeyCode::Enter));

        page.handle_event(&key(KeyCode::Char('s')));
        assert!(!page.confirm_is_open());
        assert!(page
            .email
            .root()
            .find_by_class("input-error-message")
            .is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_restores_defaults_and_confirms() {
        let mut page = page();
        page.handle_event(&key(KeyCode::Char(' ')));
        page.handle_event(&key(KeyCode::Char('t')));
        page.handle_event(&key(KeyCode::Char('x')));

        assert!(page.toggles[0].1);
        assert_eq!(page.theme.value(), Some("system"));
        assert!(page.confirm_is_open());
    }
}
