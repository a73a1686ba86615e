mod app;
mod components;
mod data;
mod model;
mod pages;
mod prefs;
mod services;

use anyhow::Context;
use catalyze_core::Application;
use tracing_subscriber::EnvFilter;

use crate::app::App;

/// The terminal owns stdout, so logs only go to a file and only when asked:
/// set `CATALYZE_LOG=/path/to/file` (filtering via `RUST_LOG`).
fn init_tracing() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("CATALYZE_LOG") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    Application::new().run(|cx| Ok(App::new(cx.clone())))?;
    Ok(())
}
