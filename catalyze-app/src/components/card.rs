use catalyze_core::{Component, Element, ElementKind};

pub struct CardProps {
    pub title: Option<String>,
    pub content: Element,
    pub footer: Option<Element>,
}

/// Bordered grouping container with an optional title and footer row.
pub struct Card {
    props: CardProps,
    root: Element,
}

impl Card {
    pub fn new(props: CardProps) -> Self {
        Self {
            props,
            root: Element::new(ElementKind::Container, Some("card")),
        }
    }
}

impl Component for Card {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();
        if let Some(title) = &self.props.title {
            self.root.set_attr("title", title.clone());
        } else {
            self.root.remove_attr("title");
        }
        self.root.append_child(&self.props.content);
        if let Some(footer) = &self.props.footer {
            let row = Element::new(ElementKind::Row, Some("card-footer")).with_child(footer);
            self.root.append_child(&row);
        }
        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_becomes_the_border_label() {
        let content = Element::new(ElementKind::Text, None).with_text("body");
        let mut card = Card::new(CardProps {
            title: Some("Recent Events".into()),
            content,
            footer: None,
        });
        let root = card.render();

        assert!(root.has_class("card"));
        assert_eq!(root.attr("title").as_deref(), Some("Recent Events"));
        assert_eq!(root.child_count(), 1);
    }

    #[test]
    fn footer_is_wrapped_in_a_row() {
        let content = Element::new(ElementKind::Text, None);
        let footer = Element::new(ElementKind::Button, Some("btn"));
        let mut card = Card::new(CardProps {
            title: None,
            content,
            footer: Some(footer),
        });
        let root = card.render();

        assert!(root.attr("title").is_none());
        let children = root.children();
        assert_eq!(children.len(), 2);
        assert!(children[1].has_class("card-footer"));
        assert_eq!(children[1].kind(), ElementKind::Row);
    }

    #[test]
    fn re_render_does_not_duplicate_children() {
        let content = Element::new(ElementKind::Text, None);
        let mut card = Card::new(CardProps {
            title: Some("Stats".into()),
            content,
            footer: None,
        });
        card.render();
        let root = card.render();
        assert_eq!(root.child_count(), 1);
    }
}
