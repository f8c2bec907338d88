//! Boxes
//!
//! Click and hold to drop boxes. Each box falls until it reaches the floor
//! and disappears after fifty seconds.

mod app;

use anyhow::{Context, Result};
use app::App;
use boxes_core::Settings;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Boxes v{}", boxes_core::VERSION);

    let event_loop = boxes_render::window::create_event_loop().context("initializing windowing")?;

    let mut app = App::new(Settings::default());
    event_loop
        .run_app(&mut app)
        .context("running the event loop")?;

    if let Some(error) = app.take_error() {
        return Err(error).context("renderer failed");
    }

    tracing::info!("Shut down cleanly");
    Ok(())
}
