//! Trailhead shell binary
//!
//! Mounts the app, prints the initial screen as JSON, then reads one
//! [`UiEvent`](app_ui::UiEvent) JSON object per line from stdin and prints
//! the screen after each event.

use anyhow::{Context, Result};
use app_ui::UiEvent;
use std::io::{self, BufRead, Write};
use trailhead::{logging, App, ShellConfig};

fn main() -> Result<()> {
    let config = ShellConfig::from_env().context("Failed to load shell configuration")?;
    logging::init(&config.log_filter);

    let mut app = App::mount(config).context("Failed to mount root navigator")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", serde_json::to_string(app.current_screen())?)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: UiEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Skipping malformed event: {}", e);
                continue;
            }
        };

        app.dispatch(&event);
        writeln!(out, "{}", serde_json::to_string(app.current_screen())?)?;
    }

    Ok(())
}
