//! aem-tui - A terminal UI for browsing AEM entries
//!
//! This is the main entry point for the aem-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let (config, config_error) = Config::load_or_default();
    if let Err(e) = logging::init(&config) {
        eprintln!("Logging disabled: {:#}", e);
    }
    if let Some(e) = config_error {
        warn!("Ignoring config file: {:#}", e);
    }
    match config.save_if_missing() {
        Ok(true) => info!("Wrote default config"),
        Ok(false) => {}
        Err(e) => warn!("Could not write default config: {:#}", e),
    }

    let entries = model::mock_data::load_entries()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config, entries);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!("Exiting with error: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("Exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!("Draw error: {:#}", e);
            }
        })?;

        // Poll for events
        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
