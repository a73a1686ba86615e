//! Retained element tree.
//!
//! Every visual unit owns exactly one [`Element`]: a shared handle to a node
//! carrying a kind, a class list, optional text, string attributes and an
//! ordered child list. Handles are cheap to clone and identity is handle
//! identity, so a component can keep its root while the tree re-parents it.
//!
//! All operations degrade silently: a poisoned lock or a missing target means
//! "nothing to update", never a panic or an error surfaced to the caller.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

/// The kinds of nodes the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Block-level grouping; children stack vertically.
    Container,
    /// Children are laid out side by side.
    Row,
    Heading,
    Text,
    Button,
    Input,
    Select,
    /// Percentage bar; reads the `value` and `label` attributes.
    Gauge,
    /// Bar chart; reads the `data` and `labels` attributes.
    Chart,
    Divider,
}

struct Node {
    kind: ElementKind,
    classes: Vec<String>,
    text: Option<String>,
    attrs: HashMap<String, String>,
    children: Vec<Element>,
    parent: Option<Weak<RwLock<Node>>>,
}

/// Shared handle to a tree node.
#[derive(Clone)]
pub struct Element {
    node: Arc<RwLock<Node>>,
}

impl Element {
    /// Create a detached element. A space-separated class string mirrors the
    /// multi-class construction used throughout the dashboard
    /// (`"page dashboard-page"`).
    pub fn new(kind: ElementKind, class: Option<&str>) -> Self {
        let classes = class
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        Self {
            node: Arc::new(RwLock::new(Node {
                kind,
                classes,
                text: None,
                attrs: HashMap::new(),
                children: Vec::new(),
                parent: None,
            })),
        }
    }

    /// Builder form of [`set_text`](Self::set_text).
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    pub fn with_attr(self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder form of [`append_child`](Self::append_child).
    pub fn with_child(self, child: &Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.read(|n| n.kind).unwrap_or(ElementKind::Container)
    }

    /// Whether two handles point at the same node.
    pub fn same_node(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Append `child` as the last child, detaching it from any previous
    /// parent first. Appending an element to itself is a no-op.
    pub fn append_child(&self, child: &Element) {
        if self.same_node(child) {
            return;
        }
        child.detach();
        self.write(|n| n.children.push(child.clone()));
        let parent = Arc::downgrade(&self.node);
        child.write(|n| n.parent = Some(parent));
    }

    /// Remove this element from its parent's child list, if attached.
    /// Idempotent: detaching an already-detached element does nothing.
    pub fn detach(&self) {
        let parent = self.read(|n| n.parent.clone()).flatten();
        let Some(parent) = parent.and_then(|weak| weak.upgrade()) else {
            return;
        };
        if let Ok(mut node) = parent.write() {
            node.children.retain(|c| !Arc::ptr_eq(&c.node, &self.node));
        }
        self.write(|n| n.parent = None);
    }

    /// Drop every child (the `innerHTML = ''` of this tree).
    pub fn clear_children(&self) {
        let removed = self
            .write(|n| std::mem::take(&mut n.children))
            .unwrap_or_default();
        for child in removed {
            child.write(|n| n.parent = None);
        }
    }

    /// Snapshot of the current child list.
    pub fn children(&self) -> Vec<Element> {
        self.read(|n| n.children.clone()).unwrap_or_default()
    }

    pub fn child_count(&self) -> usize {
        self.read(|n| n.children.len()).unwrap_or(0)
    }

    pub fn parent(&self) -> Option<Element> {
        self.read(|n| n.parent.clone())
            .flatten()
            .and_then(|weak| weak.upgrade())
            .map(|node| Element { node })
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.write(|n| n.text = Some(text));
    }

    pub fn text(&self) -> Option<String> {
        self.read(|n| n.text.clone()).flatten()
    }

    pub fn set_attr(&self, name: &str, value: impl Into<String>) {
        if name.is_empty() {
            return;
        }
        let value = value.into();
        self.write(|n| {
            n.attrs.insert(name.to_string(), value);
        });
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.read(|n| n.attrs.get(name).cloned()).flatten()
    }

    pub fn remove_attr(&self, name: &str) {
        self.write(|n| {
            n.attrs.remove(name);
        });
    }

    pub fn add_class(&self, class: &str) {
        if class.is_empty() {
            return;
        }
        self.write(|n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        });
    }

    pub fn remove_class(&self, class: &str) {
        if class.is_empty() {
            return;
        }
        self.write(|n| n.classes.retain(|c| c != class));
    }

    pub fn toggle_class(&self, class: &str) {
        if class.is_empty() {
            return;
        }
        self.write(|n| {
            if let Some(pos) = n.classes.iter().position(|c| c == class) {
                n.classes.remove(pos);
            } else {
                n.classes.push(class.to_string());
            }
        });
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.read(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn classes(&self) -> Vec<String> {
        self.read(|n| n.classes.clone()).unwrap_or_default()
    }

    /// Depth-first search for the first descendant (or self) carrying the
    /// given class.
    pub fn find_by_class(&self, class: &str) -> Option<Element> {
        if self.has_class(class) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_class(class))
    }

    /// All descendants (and self) carrying the given class, in tree order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class(&self, class: &str, found: &mut Vec<Element>) {
        if self.has_class(class) {
            found.push(self.clone());
        }
        for child in self.children() {
            child.collect_by_class(class, found);
        }
    }

    /// First descendant (or self) whose `id` attribute matches.
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        if self.attr("id").as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children().iter().find_map(|child| child.find_by_id(id))
    }

    fn read<R>(&self, f: impl FnOnce(&Node) -> R) -> Option<R> {
        match self.node.read() {
            Ok(guard) => Some(f(&guard)),
            Err(_) => {
                tracing::warn!("element lock poisoned, read skipped");
                None
            }
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut Node) -> R) -> Option<R> {
        match self.node.write() {
            Ok(mut guard) => Some(f(&mut guard)),
            Err(_) => {
                tracing::warn!("element lock poisoned, update skipped");
                None
            }
        }
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.read(|n| (n.kind, n.classes.join(" "), n.children.len())) {
            Some((kind, classes, children)) => f
                .debug_struct("Element")
                .field("kind", &kind)
                .field("classes", &classes)
                .field("children", &children)
                .finish(),
            None => f.write_str("Element(poisoned)"),
        }
    }
}
