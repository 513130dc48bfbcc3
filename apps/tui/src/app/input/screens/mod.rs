use crate::app::state::App;
use crossterm::event::KeyCode;

mod dashboard;
mod help;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        help::handle_help_input(app, key);
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    dashboard::handle_dashboard_input(app, key);
}
