use catalyze_core::{Component, Element, ElementKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-small",
            ButtonSize::Medium => "btn-medium",
            ButtonSize::Large => "btn-large",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ButtonProps {
    pub text: String,
    pub icon: Option<String>,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    /// Key the surrounding page reacts to; shown as part of the label.
    pub hint: Option<char>,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: String::new(),
            icon: None,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            hint: None,
        }
    }
}

pub struct Button {
    props: ButtonProps,
    root: Element,
}

impl Button {
    pub fn new(props: ButtonProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Button, Some("btn")),
        }
    }
}

impl Component for Button {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.add_class(self.props.variant.class());
        self.root.add_class(self.props.size.class());
        if self.props.disabled {
            self.root.add_class("btn-disabled");
        }

        let mut label = String::new();
        if let Some(icon) = &self.props.icon {
            label.push_str(icon);
            label.push(' ');
        }
        label.push_str(&self.props.text);
        if let Some(hint) = self.props.hint {
            label.push_str(&format!(" ({hint})"));
        }
        self.root.set_text(label);
        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_and_size_become_classes() {
        let mut button = Button::new(ButtonProps {
            text: "Save Changes".into(),
            variant: ButtonVariant::Outline,
            size: ButtonSize::Small,
            disabled: true,
            hint: Some('s'),
            ..Default::default()
        });
        let root = button.render();

        assert!(root.has_class("btn"));
        assert!(root.has_class("btn-outline"));
        assert!(root.has_class("btn-small"));
        assert!(root.has_class("btn-disabled"));
        assert_eq!(root.text().as_deref(), Some("Save Changes (s)"));
    }
}
