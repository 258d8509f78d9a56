use std::io::{self, Stderr};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEvent, KeyEventKind,
        MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Cadence of the thinking-dots animation. Every pulse also wakes the main
/// loop, which is what bounds how long a finished reply waits to land.
const PULSE: Duration = Duration::from_millis(300);

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Pulse,
}

/// Keep presses and repeats, drop releases so keys don't fire twice on
/// terminals that report both.
fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}

/// Merges terminal input and the animation pulse into one stream. The
/// channel closes if the terminal's event stream ends, which the main loop
/// treats as a signal to shut down.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut input = EventStream::new();
            let mut pulse = tokio::time::interval(PULSE);
            loop {
                let event = tokio::select! {
                    _ = pulse.tick() => Some(AppEvent::Pulse),
                    term = input.next() => match term {
                        Some(Ok(event)) => translate(event),
                        Some(Err(_)) => None,
                        None => break,
                    },
                };
                if let Some(event) = event {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(io::stderr()))?)
}

pub fn restore() -> Result<()> {
    execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Leave the alternate screen before the default hook prints, so panic
/// output is actually readable.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key_event(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_translate_keeps_presses_drops_releases() {
        assert!(matches!(
            translate(key_event(KeyEventKind::Press)),
            Some(AppEvent::Key(_))
        ));
        assert!(matches!(
            translate(key_event(KeyEventKind::Repeat)),
            Some(AppEvent::Key(_))
        ));
        assert!(translate(key_event(KeyEventKind::Release)).is_none());
    }

    #[test]
    fn test_translate_resize_and_focus() {
        assert!(matches!(
            translate(Event::Resize(80, 24)),
            Some(AppEvent::Resize)
        ));
        assert!(translate(Event::FocusGained).is_none());
        assert!(translate(Event::FocusLost).is_none());
    }
}
