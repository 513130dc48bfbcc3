use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = true;
        return true;
    }

    false
}

pub fn handle_help_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
        }
        _ => {}
    }
}
