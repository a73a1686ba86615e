use catalyze_core::{Component, Element, ElementKind};

#[derive(Debug, Clone, Default)]
pub struct InputProps {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub value: String,
}

/// Labelled text field with inline validation feedback.
pub struct Input {
    props: InputProps,
    root: Element,
    field: Element,
}

impl Input {
    pub fn new(props: InputProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Container, Some("input-group")),
            field: Element::new(ElementKind::Input, Some("input")),
        }
    }

    pub fn value(&self) -> &str {
        &self.props.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.props.value = value.into();
        self.field.set_text(self.props.value.clone());
    }

    /// Flag the field and show `message` underneath it. A second call
    /// replaces the previous message instead of stacking.
    pub fn set_error(&self, message: &str) {
        self.field.add_class("input-error");
        if let Some(existing) = self.root.find_by_class("input-error-message") {
            existing.set_text(message);
        } else {
            let note = Element::new(ElementKind::Text, Some("input-error-message danger"))
                .with_text(message);
            self.root.append_child(&note);
        }
    }

    /// Remove the error flag and message, if any.
    pub fn clear_error(&self) {
        self.field.remove_class("input-error");
        if let Some(note) = self.root.find_by_class("input-error-message") {
            note.detach();
        }
    }
}

impl Component for Input {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();

        if let Some(label) = &self.props.label {
            let el = Element::new(ElementKind::Text, Some("input-label muted"))
                .with_text(label.clone());
            self.root.append_child(&el);
        }

        self.field.set_text(self.props.value.clone());
        if let Some(placeholder) = &self.props.placeholder {
            self.field.set_attr("placeholder", placeholder.clone());
        }
        self.root.append_child(&self.field);

        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_and_field() {
        let mut input = Input::new(InputProps {
            label: Some("Device Name".into()),
            placeholder: Some("e.g. Kitchen Litter Box".into()),
            value: String::new(),
        });
        let root = input.render();

        let children = root.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].text().as_deref(), Some("Device Name"));
        assert_eq!(
            children[1].attr("placeholder").as_deref(),
            Some("e.g. Kitchen Litter Box")
        );
    }

    #[test]
    fn set_error_is_idempotent_per_message() {
        let mut input = Input::new(InputProps::default());
        input.render();

        input.set_error("Name is required");
        input.set_error("Name is too short");

        let notes = input.root().find_all_by_class("input-error-message");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text().as_deref(), Some("Name is too short"));
    }

    #[test]
    fn clear_error_removes_flag_and_message() {
        let mut input = Input::new(InputProps::default());
        input.render();
        input.set_error("bad");
        input.clear_error();

        assert!(input.root().find_by_class("input-error-message").is_none());
        assert!(input.root().find_by_class("input-error").is_none());

        // Clearing with no error present is a no-op.
        input.clear_error();
    }

    #[test]
    fn set_value_updates_the_field_text() {
        let mut input = Input::new(InputProps::default());
        input.render();
        input.set_value("Hallway Box");
        assert_eq!(input.value(), "Hallway Box");
        assert_eq!(
            input.root().children()[0].text().as_deref(),
            Some("Hallway Box")
        );
    }
}
