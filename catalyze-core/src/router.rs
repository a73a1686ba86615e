//! Path routing.
//!
//! Maps path strings to zero-argument handlers by exact match only. The
//! router is the single source of truth for the current route and the only
//! place that mutates navigation history. Unregistered paths silently fall
//! back to the `/` handler; if `/` is also unregistered the load does
//! nothing. No validation is performed on paths: any string is an opaque
//! key.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use crate::history::History;

type RouteHandler = Arc<dyn Fn() + Send + Sync>;

struct State {
    routes: HashMap<String, RouteHandler>,
    current: String,
}

/// Shared router handle. Constructed once at start-up and cloned wherever
/// navigation is needed; there is no module-level singleton.
#[derive(Clone)]
pub struct Router {
    state: Arc<RwLock<State>>,
    history: History,
}

impl Router {
    /// Create a router over the given history. Subscribes once to the
    /// history's traversal signal so back/forward re-runs the load procedure
    /// without pushing a new entry.
    pub fn new(history: History) -> Self {
        let state = Arc::new(RwLock::new(State {
            routes: HashMap::new(),
            current: String::from("/"),
        }));

        let weak: Weak<RwLock<State>> = Arc::downgrade(&state);
        history.subscribe(move |path| {
            if let Some(state) = weak.upgrade() {
                load_route(&state, path);
            }
        });

        Self { state, history }
    }

    /// Store `handler` under `path`, overwriting any existing entry for that
    /// exact path. Last write wins regardless of whether `init` already ran.
    pub fn register(&self, path: impl Into<String>, handler: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut state) = self.state.write() {
            state.routes.insert(path.into(), Arc::new(handler));
        }
    }

    /// Push exactly one history entry for `path`, then run the load
    /// procedure. Safe to call from inside any event handler or route
    /// handler: no internal lock is held while handlers run.
    pub fn navigate(&self, path: &str) {
        self.history.push(path);
        load_route(&self.state, path);
    }

    /// The path of the most recently executed load, whether or not a handler
    /// existed for it. Pure read.
    pub fn current_route(&self) -> String {
        self.state
            .read()
            .map(|state| state.current.clone())
            .unwrap_or_else(|_| String::from("/"))
    }

    /// Load the route matching the history's present location (`/` when the
    /// location is unavailable). Intended to be called exactly once at
    /// start-up, after routes are registered.
    pub fn init(&self) {
        let location = self.history.location();
        let path = if location.is_empty() { "/" } else { &location };
        load_route(&self.state, path);
    }

    /// The history this router navigates through.
    pub fn history(&self) -> &History {
        &self.history
    }
}

fn load_route(state: &Arc<RwLock<State>>, path: &str) {
    let handler = match state.write() {
        Ok(mut state) => {
            state.current = path.to_string();
            match state.routes.get(path) {
                Some(handler) => Some(handler.clone()),
                None => {
                    if state.routes.contains_key("/") {
                        tracing::debug!(%path, "unregistered route, falling back to /");
                    }
                    state.routes.get("/").cloned()
                }
            }
        }
        Err(_) => None,
    };

    // The state lock is released before the handler runs, so handlers may
    // navigate or register routes re-entrantly.
    match handler {
        Some(handler) => handler(),
        None => tracing::debug!(%path, "no handler registered, nothing to load"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_handler(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
        let counter = counter.clone();
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn navigate_invokes_the_registered_handler() {
        let router = Router::new(History::new());
        let home = Arc::new(AtomicUsize::new(0));
        let health = Arc::new(AtomicUsize::new(0));
        router.register("/", counting_handler(&home));
        router.register("/health", counting_handler(&health));

        router.navigate("/health");

        assert_eq!(health.load(Ordering::SeqCst), 1);
        assert_eq!(home.load(Ordering::SeqCst), 0);
        assert_eq!(router.current_route(), "/health");
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn later_registration_silently_replaces_earlier() {
        let router = Router::new(History::new());
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        router.register("/health", counting_handler(&first));
        router.register("/health", counting_handler(&second));

        router.navigate("/health");

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registration_after_init_wins_on_the_next_load() {
        let router = Router::new(History::new());
        let early = Arc::new(AtomicUsize::new(0));
        router.register("/health", counting_handler(&early));
        router.init();

        // Re-register an existing path and add a brand-new one after init.
        let late = Arc::new(AtomicUsize::new(0));
        router.register("/health", counting_handler(&late));
        let fresh = Arc::new(AtomicUsize::new(0));
        router.register("/reports", counting_handler(&fresh));

        router.navigate("/health");
        router.navigate("/reports");

        assert_eq!(early.load(Ordering::SeqCst), 0);
        assert_eq!(late.load(Ordering::SeqCst), 1);
        assert_eq!(fresh.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unregistered_path_falls_back_to_home() {
        let router = Router::new(History::new());
        let home = Arc::new(AtomicUsize::new(0));
        router.register("/", counting_handler(&home));

        router.navigate("/missing");

        assert_eq!(home.load(Ordering::SeqCst), 1);
        // The current route reflects the requested path, not the fallback.
        assert_eq!(router.current_route(), "/missing");
    }

    #[test]
    fn load_without_any_handler_is_silent() {
        let router = Router::new(History::new());
        router.navigate("/nowhere");
        assert_eq!(router.current_route(), "/nowhere");
        // Still exactly one entry pushed.
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn navigate_pushes_exactly_one_entry_per_call() {
        let router = Router::new(History::new());
        let home = Arc::new(AtomicUsize::new(0));
        router.register("/", counting_handler(&home));

        router.navigate("/a");
        router.navigate("/b");

        assert_eq!(router.history().len(), 3);
    }

    #[test]
    fn init_loads_the_present_location() {
        let history = History::with_location("/devices");
        let router = Router::new(history);
        let devices = Arc::new(AtomicUsize::new(0));
        router.register("/devices", counting_handler(&devices));

        router.init();

        assert_eq!(devices.load(Ordering::SeqCst), 1);
        assert_eq!(router.current_route(), "/devices");
    }

    #[test]
    fn traversal_reloads_without_pushing() {
        let history = History::new();
        let router = Router::new(history.clone());
        let home = Arc::new(AtomicUsize::new(0));
        let health = Arc::new(AtomicUsize::new(0));
        router.register("/", counting_handler(&home));
        router.register("/health", counting_handler(&health));

        router.navigate("/health");
        let len_before = history.len();

        assert!(history.back());
        assert_eq!(home.load(Ordering::SeqCst), 1);
        assert_eq!(router.current_route(), "/");
        assert_eq!(history.len(), len_before);

        assert!(history.forward());
        assert_eq!(health.load(Ordering::SeqCst), 2);
        assert_eq!(router.current_route(), "/health");
        assert_eq!(history.len(), len_before);
    }

    #[test]
    fn handlers_may_navigate_reentrantly() {
        let router = Router::new(History::new());
        let landed = Arc::new(AtomicUsize::new(0));
        router.register("/final", counting_handler(&landed));

        let inner = router.clone();
        router.register("/redirect", move || {
            inner.navigate("/final");
        });

        router.navigate("/redirect");

        assert_eq!(landed.load(Ordering::SeqCst), 1);
        assert_eq!(router.current_route(), "/final");
    }
}
