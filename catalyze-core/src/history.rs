//! Navigation history.
//!
//! In-process stand-in for the browser location/history facility: an entry
//! list with a cursor. `push` records a new entry without notifying anyone;
//! `back`/`forward` move the cursor and fire the traversal listeners, the
//! equivalent of a popstate signal. Listeners run after internal locks are
//! released, so a listener may call back into the history or the router.

use std::sync::{Arc, RwLock};

type TraversalListener = Arc<dyn Fn(&str) + Send + Sync>;

struct Inner {
    entries: Vec<String>,
    cursor: usize,
    listeners: Vec<TraversalListener>,
}

/// Shared navigation history handle.
#[derive(Clone)]
pub struct History {
    inner: Arc<RwLock<Inner>>,
}

impl History {
    /// History starting at `/`.
    pub fn new() -> Self {
        Self::with_location("/")
    }

    /// History starting at the given location.
    pub fn with_location(path: &str) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                entries: vec![path.to_string()],
                cursor: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// The entry the cursor points at.
    pub fn location(&self) -> String {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.entries.get(inner.cursor).cloned())
            .unwrap_or_else(|| String::from("/"))
    }

    /// Total number of entries, forward entries included.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record a new entry after the cursor, discarding any forward entries.
    /// Does not notify listeners.
    pub fn push(&self, path: &str) {
        if let Ok(mut inner) = self.inner.write() {
            let cursor = inner.cursor;
            inner.entries.truncate(cursor + 1);
            inner.entries.push(path.to_string());
            inner.cursor += 1;
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.inner.read().map(|inner| inner.cursor > 0).unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.cursor + 1 < inner.entries.len())
            .unwrap_or(false)
    }

    /// Move one entry back and fire the traversal signal.
    /// Returns whether the cursor moved.
    pub fn back(&self) -> bool {
        self.traverse(-1)
    }

    /// Move one entry forward and fire the traversal signal.
    /// Returns whether the cursor moved.
    pub fn forward(&self) -> bool {
        self.traverse(1)
    }

    /// Register a traversal listener. Fired on `back`/`forward`, never on
    /// `push` (pushing in response to a traversal would feed back into the
    /// entry list).
    pub fn subscribe(&self, listener: impl Fn(&str) + Send + Sync + 'static) {
        if let Ok(mut inner) = self.inner.write() {
            inner.listeners.push(Arc::new(listener));
        }
    }

    fn traverse(&self, delta: i64) -> bool {
        let notify = match self.inner.write() {
            Ok(mut inner) => {
                let target = inner.cursor as i64 + delta;
                if target < 0 || target as usize >= inner.entries.len() {
                    None
                } else {
                    inner.cursor = target as usize;
                    let location = inner.entries[inner.cursor].clone();
                    Some((location, inner.listeners.clone()))
                }
            }
            Err(_) => None,
        };

        // Locks are released; listeners may re-enter.
        match notify {
            Some((location, listeners)) => {
                tracing::debug!(%location, "history traversal");
                for listener in listeners {
                    listener(&location);
                }
                true
            }
            None => false,
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn push_appends_without_notifying() {
        let history = History::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        history.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        history.push("/health");
        history.push("/devices");

        assert_eq!(history.len(), 3);
        assert_eq!(history.location(), "/devices");
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn back_and_forward_notify_with_new_location() {
        let history = History::new();
        history.push("/health");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        history.subscribe(move |path| {
            log.lock().unwrap().push(path.to_string());
        });

        assert!(history.back());
        assert!(history.forward());
        assert!(!history.forward());

        assert_eq!(*seen.lock().unwrap(), vec!["/", "/health"]);
        // Traversal never changes the entry count.
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn back_at_the_first_entry_does_not_move() {
        let history = History::new();
        assert!(!history.can_go_back());
        assert!(!history.back());
        assert_eq!(history.location(), "/");
    }

    #[test]
    fn push_after_back_discards_forward_entries() {
        let history = History::new();
        history.push("/health");
        history.push("/devices");
        history.back();
        history.back();

        history.push("/reports");

        assert_eq!(history.len(), 2);
        assert_eq!(history.location(), "/reports");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn listeners_may_reenter_the_history() {
        let history = History::new();
        history.push("/health");

        let inner = history.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        history.subscribe(move |path| {
            // Reading back from inside a listener must not deadlock.
            log.lock().unwrap().push((path.to_string(), inner.location()));
        });

        history.back();
        let entries = seen.lock().unwrap();
        assert_eq!(entries[0], ("/".to_string(), "/".to_string()));
    }
}
