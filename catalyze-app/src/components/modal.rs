use std::sync::Arc;
use std::time::Duration;

use catalyze_core::{AppContext, Component, Element, ElementKind, TaskHandle};

pub struct ModalProps {
    pub title: String,
    pub content: Element,
    pub show_close_hint: bool,
    pub on_close: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// Centered overlay dialog with a scheduled enter/exit transition.
///
/// Opening shows the overlay immediately and adds the highlight a frame
/// later; closing drops the highlight and hides the overlay after the exit
/// delay. Either action cancels a still-pending transition from the other,
/// so rapid open/close toggling always settles on the last call.
pub struct Modal {
    props: ModalProps,
    root: Element,
    pending: Option<TaskHandle>,
}

const ENTER_DELAY: Duration = Duration::from_millis(10);
const EXIT_DELAY: Duration = Duration::from_millis(300);

impl Modal {
    pub fn new(props: ModalProps) -> Self {
        let root = Element::new(ElementKind::Container, Some("modal hidden"))
            .with_attr("title", props.title.clone());
        Self {
            props,
            root,
            pending: None,
        }
    }

    pub fn is_open(&self) -> bool {
        !self.root.has_class("hidden")
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    pub fn open(&mut self, cx: &AppContext) {
        self.cancel_pending();
        self.show();
        cx.refresh();

        let root = self.root.clone();
        let cx2 = cx.clone();
        self.pending = Some(cx.spawn(async move {
            tokio::time::sleep(ENTER_DELAY).await;
            root.add_class("modal-show");
            cx2.refresh();
        }));
    }

    pub fn close(&mut self, cx: &AppContext) {
        self.cancel_pending();
        self.root.remove_class("modal-show");
        cx.refresh();

        let root = self.root.clone();
        let cx2 = cx.clone();
        let on_close = self.props.on_close.clone();
        self.pending = Some(cx.spawn(async move {
            tokio::time::sleep(EXIT_DELAY).await;
            root.add_class("hidden");
            if let Some(callback) = on_close {
                callback();
            }
            cx2.refresh();
        }));
    }
}

impl Component for Modal {
    fn root(&self) -> &Element {
        &self.root
    }

    fn render(&mut self) -> Element {
        self.root.clear_children();
        self.root.append_child(&self.props.content);
        if self.props.show_close_hint {
            let hint = Element::new(ElementKind::Text, Some("muted"))
                .with_text("press Esc to close");
            self.root.append_child(&hint);
        }
        self.root.clone()
    }
}
