use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tracing::info;

/// Run the TUI until the user quits.
///
/// Events are handled one at a time on this thread, so every dispatch
/// runs to completion before the next event is looked at.
pub fn run(mut app: App, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    info!(slice = app.slice_name(), "tui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // The next draw picks up the new size
            Ok(AppEvent::Resize) | Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    info!(
        value = app.counter().value,
        renders = app.counter_render_count(),
        "tui stopped"
    );
    drop(events);
    drop(guard);
    Ok(())
}
