use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::view::{Button, UiEvent};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    if app.post_detail_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => app.close_post_detail(),
            KeyCode::Char('p') => app.close_posts(),
            _ => {}
        }
        return;
    }

    if app.posts_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('p') => app.close_posts(),
            KeyCode::Enter | KeyCode::Char('l') => app.open_selected_post(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_post(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev_post(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('p') => app.open_posts(),
        KeyCode::Up => app.on_event(UiEvent::Click(Button::Increment)),
        KeyCode::Down => app.on_event(UiEvent::Click(Button::Decrement)),
        KeyCode::Char(c) => app.on_event(UiEvent::Key(c)),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
