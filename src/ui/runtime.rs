use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::Config;
use crate::store::Store;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Drive the TUI until quit.
///
/// Must be called with a tokio runtime entered; the user directory fetch
/// runs as a task on it.
pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let store = Store::new();
    let mut app = App::new(store.clone(), config);
    let events = EventHandler::new(tick_rate);

    // Wake the loop whenever a new tree is published, so dispatches from
    // the fetch task re-render immediately instead of on the next tick.
    let publish_tx = events.sender();
    let subscription = store.subscribe(move |_| {
        let _ = publish_tx.send(AppEvent::StateChanged);
    });

    app.start_users_fetch();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::StateChanged) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    store.unsubscribe(subscription);
    drop(guard);
    Ok(())
}
