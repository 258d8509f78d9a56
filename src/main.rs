mod app;
mod assistant;
mod chat;
mod config;
mod content;
mod handler;
mod logging;
mod reservations;
mod submission;
mod tui;
mod ui;

use anyhow::Result;
use tracing::info;

use crate::app::App;
use crate::assistant::Assistant;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;

    let config = Config::load().unwrap_or_default();
    let assistant = Assistant::new(config.model, config.api_key);
    let mut app = App::new(assistant);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = tui::EventHandler::new();
    info!("terminal session started");

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        let Some(event) = events.next().await else {
            break;
        };
        handler::handle_event(&mut app, event);

        // Finished replies land on the transcript between draws
        app.poll_reply().await;
    }

    tui::restore()?;
    info!("terminal session ended");
    Ok(())
}
