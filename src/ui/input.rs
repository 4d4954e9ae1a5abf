use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::ui::app::App;

/// Translate a key press into app mutations or dispatched actions.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('o') => app.order_cake(),
        KeyCode::Char('r') => app.restock_cake(),
        KeyCode::Char('i') => app.order_ice_cream(),
        KeyCode::Char('+') | KeyCode::Up => app.increment_restock_qty(),
        KeyCode::Char('-') | KeyCode::Down => app.decrement_restock_qty(),
        KeyCode::Enter => app.restock_ice_cream(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::Store;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        }
    }

    fn make_app() -> App {
        App::new(Store::new(), Config::default())
    }

    #[test]
    fn q_requests_quit() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn o_orders_one_cake() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('o')));
        assert_eq!(app.state().cake.count, 9);
    }

    #[test]
    fn r_restocks_five_cakes() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.state().cake.count, 15);
        assert_eq!(app.state().ice_cream.count, 20);
    }

    #[test]
    fn enter_restocks_ice_cream_by_pending_quantity() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('+')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.state().ice_cream.count, 22);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        handle_key(&mut app, release(KeyCode::Char('o')));
        assert_eq!(app.state().cake.count, 10);
    }
}
