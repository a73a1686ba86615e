pub mod application;
pub mod component;
pub mod element;
pub mod error;
pub mod history;
pub mod render;
pub mod router;
pub mod task;
pub mod theme;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{AppContext, Application, Shell};
pub use component::{Action, Component, Event};
pub use element::{Element, ElementKind};
pub use history::History;
pub use router::Router;
pub use task::TaskHandle;
