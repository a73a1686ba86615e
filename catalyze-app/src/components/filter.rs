use catalyze_core::{Component, Element, ElementKind};

#[derive(Debug, Clone)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Cycling select control. Repeated activation steps through the options and
/// wraps around; the first option is the "all" default.
pub struct Filter {
    label: String,
    options: Vec<FilterOption>,
    selected: usize,
    root: Element,
}

impl Filter {
    pub fn new(label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            label: label.to_string(),
            options,
            selected: 0,
            root: Element::new(ElementKind::Select, Some("filter-group")),
        }
    }

    /// Value of the current selection.
    pub fn value(&self) -> Option<&str> {
        self.options.get(self.selected).map(|o| o.value.as_str())
    }

    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

impl Component for Filter {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        let selection = self
            .options
            .get(self.selected)
            .map(|o| o.label.as_str())
            .unwrap_or("—");
        self.root.set_text(format!("{}: {selection}", self.label));
        self.root.clone()
    }
}
