//! Component lifecycle contract.
//!
//! Every page and widget owns exactly one root element, created at
//! construction and never replaced. Rendering mutates the root's subtree in
//! place and returns the same handle; mounting appends the rendered root as
//! the last child of a caller-supplied parent.

use crate::element::Element;

/// Class marker toggled by [`Component::show`] / [`Component::hide`].
/// Purely cosmetic: the renderer skips hidden subtrees, mount state is
/// unaffected.
pub const HIDDEN_CLASS: &str = "hidden";

/// Input event delivered to the active component tree.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// Action a component can return after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a path through the router.
    Navigate(String),
    /// Traverse navigation history backwards.
    Back,
    /// Traverse navigation history forwards.
    Forward,
    Quit,
    Noop,
}

/// The uniform capability set implemented by every visual unit.
pub trait Component: Send + 'static {
    /// The root element this component owns.
    fn root(&self) -> &Element;

    /// Rebuild the owned root's subtree to reflect current state and return
    /// that same root element, never a different one.
    fn render(&mut self) -> Element;

    /// Render and attach the root as the last child of `parent`.
    fn mount(&mut self, parent: &Element) {
        let root = self.render();
        parent.append_child(&root);
    }

    /// Detach the root from its parent, if attached. Idempotent.
    fn unmount(&self) {
        self.root().detach();
    }

    fn show(&self) {
        self.root().remove_class(HIDDEN_CLASS);
    }

    fn hide(&self) {
        self.root().add_class(HIDDEN_CLASS);
    }

    /// Handle an event, returning an optional action for the shell.
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let _ = event;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    struct Label {
        root: Element,
        text: String,
        renders: usize,
    }

    impl Label {
        fn new(text: &str) -> Self {
            Self {
                root: Element::new(ElementKind::Text, Some("label")),
                text: text.to_string(),
                renders: 0,
            }
        }
    }

    impl Component for Label {
        fn root(&self) -> &Element {
            &self.root
        }

        fn render(&mut self) -> Element {
            self.renders += 1;
            self.root.set_text(self.text.clone());
            self.root.clone()
        }
    }

    #[test]
    fn mount_renders_and_appends() {
        let parent = Element::new(ElementKind::Container, None);
        let mut label = Label::new("hello");

        label.mount(&parent);

        assert_eq!(label.renders, 1);
        assert_eq!(parent.child_count(), 1);
        assert!(parent.children()[0].same_node(label.root()));
    }

    #[test]
    fn mount_then_unmount_restores_parent() {
        let parent = Element::new(ElementKind::Container, None);
        let existing = Element::new(ElementKind::Text, None);
        parent.append_child(&existing);

        let mut label = Label::new("transient");
        label.mount(&parent);
        label.unmount();

        let children = parent.children();
        assert_eq!(children.len(), 1);
        assert!(children[0].same_node(&existing));

        // Second unmount is a no-op.
        label.unmount();
        assert_eq!(parent.child_count(), 1);
    }

    #[test]
    fn sequential_mounts_preserve_call_order() {
        let parent = Element::new(ElementKind::Container, None);
        let mut a = Label::new("a");
        let mut b = Label::new("b");

        a.mount(&parent);
        b.mount(&parent);

        let children = parent.children();
        assert_eq!(children.len(), 2);
        assert!(children[0].same_node(a.root()));
        assert!(children[1].same_node(b.root()));
    }

    #[test]
    fn show_hide_toggle_marker_without_unmounting() {
        let parent = Element::new(ElementKind::Container, None);
        let mut label = Label::new("hint");
        label.mount(&parent);

        label.hide();
        assert!(label.root().has_class(HIDDEN_CLASS));
        assert_eq!(parent.child_count(), 1);

        label.show();
        assert!(!label.root().has_class(HIDDEN_CLASS));
    }

    #[test]
    fn render_keeps_the_same_root() {
        let mut label = Label::new("stable");
        let first = label.render();
        let second = label.render();
        assert!(first.same_node(&second));
        assert!(first.same_node(label.root()));
    }
}
