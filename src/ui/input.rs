use crate::ui::app::{App, Focus};
use crate::ui::header::HeaderAffordance;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
            app.request_quit();
        }
        return;
    }

    match app.focus() {
        Focus::NowPlaying => match key.code {
            KeyCode::Esc | KeyCode::Down => app.press_header(HeaderAffordance::Dismiss),
            KeyCode::Char('m') => app.press_header(HeaderAffordance::Overflow),
            KeyCode::Char('n') => app.toggle_now_playing(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
        Focus::Settings => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_focus(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_focus(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
            KeyCode::Left | KeyCode::Char('h') => app.nudge(-1),
            KeyCode::Right | KeyCode::Char('l') => app.nudge(1),
            KeyCode::Esc | KeyCode::Backspace => app.go_back(),
            KeyCode::Char('n') => app.toggle_now_playing(),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
    }
}
