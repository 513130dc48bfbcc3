use crate::app::input::helpers::{saturating_step, wrap_decrement, wrap_increment};
use crate::app::state::{App, PanelFocus};
use crate::domain::ViewMode;
use crossterm::event::KeyCode;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match app.focus {
        PanelFocus::ModePicker => handle_mode_input(app, key),
        PanelFocus::CountryPicker => handle_country_input(app, key),
        PanelFocus::YearPicker => handle_year_input(app, key),
    }
}

fn handle_mode_input(app: &mut App, key: KeyCode) {
    let mode_count = ViewMode::ALL.len();

    match key {
        KeyCode::Up | KeyCode::Left => {
            app.select_view_mode(wrap_decrement(app.view_mode_index, mode_count));
        }
        KeyCode::Down | KeyCode::Right => {
            app.select_view_mode(wrap_increment(app.view_mode_index, mode_count));
        }
        KeyCode::Char('1') => app.select_view_mode(0),
        KeyCode::Char('2') => app.select_view_mode(1),
        KeyCode::Char('3') => app.select_view_mode(2),
        KeyCode::Tab | KeyCode::Enter => {
            app.cycle_focus();
        }
        KeyCode::Char('p') => {
            app.animation_paused = !app.animation_paused;
        }
        KeyCode::Esc => {
            app.reset();
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

// Printable keys feed the search filter, so quit and help shortcuts
// are deliberately unavailable while the country picker has focus.
fn handle_country_input(app: &mut App, key: KeyCode) {
    let visible = app.filtered_countries.len();

    match key {
        KeyCode::Up => {
            app.country_cursor = wrap_decrement(app.country_cursor, visible);
        }
        KeyCode::Down => {
            app.country_cursor = wrap_increment(app.country_cursor, visible);
        }
        KeyCode::Home => app.country_cursor = 0,
        KeyCode::End => {
            app.country_cursor = visible.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.confirm_country();
        }
        KeyCode::Delete => {
            app.clear_country();
        }
        KeyCode::Backspace => {
            app.country_filter.pop();
            app.apply_country_filter();
        }
        KeyCode::Char(c) => {
            app.country_filter.push(c);
            app.apply_country_filter();
        }
        KeyCode::Esc => {
            if app.country_filter.is_empty() {
                app.focus = PanelFocus::ModePicker;
            } else {
                app.country_filter.clear();
                app.apply_country_filter();
            }
        }
        KeyCode::Tab => {
            app.focus = PanelFocus::ModePicker;
        }
        _ => {}
    }
}

fn handle_year_input(app: &mut App, key: KeyCode) {
    let count = app.years.len();

    match key {
        KeyCode::Up => {
            app.year_cursor = wrap_decrement(app.year_cursor, count);
        }
        KeyCode::Down => {
            app.year_cursor = wrap_increment(app.year_cursor, count);
        }
        KeyCode::PageUp => {
            app.year_cursor = saturating_step(app.year_cursor, -5, count);
        }
        KeyCode::PageDown => {
            app.year_cursor = saturating_step(app.year_cursor, 5, count);
        }
        KeyCode::Home => app.year_cursor = 0,
        KeyCode::End => {
            app.year_cursor = count.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.confirm_year();
        }
        KeyCode::Delete | KeyCode::Backspace => {
            app.clear_year();
        }
        KeyCode::Esc | KeyCode::Tab => {
            app.focus = PanelFocus::ModePicker;
        }
        KeyCode::Char('p') => {
            app.animation_paused = !app.animation_paused;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::handle_dashboard_input;
    use crate::app::state::{App, PanelFocus};
    use crate::config::AppConfig;
    use crate::domain::ViewMode;
    use crossterm::event::KeyCode;

    fn initialized_app() -> App {
        let mut app = App::new();
        app.initialize(&AppConfig::default());
        app
    }

    #[test]
    fn right_cycles_through_all_modes_and_wraps() {
        let mut app = initialized_app();

        handle_dashboard_input(&mut app, KeyCode::Right);
        assert_eq!(app.view_mode, ViewMode::CountryHistory);
        handle_dashboard_input(&mut app, KeyCode::Right);
        assert_eq!(app.view_mode, ViewMode::ByYear);
        handle_dashboard_input(&mut app, KeyCode::Right);
        assert_eq!(app.view_mode, ViewMode::AllWinners);
    }

    #[test]
    fn tab_only_reaches_the_picker_of_the_current_mode() {
        let mut app = initialized_app();

        handle_dashboard_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, PanelFocus::ModePicker);

        handle_dashboard_input(&mut app, KeyCode::Char('3'));
        handle_dashboard_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, PanelFocus::YearPicker);
    }

    #[test]
    fn typed_characters_filter_instead_of_quitting() {
        let mut app = initialized_app();
        handle_dashboard_input(&mut app, KeyCode::Char('2'));
        handle_dashboard_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, PanelFocus::CountryPicker);

        handle_dashboard_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.country_filter, "q");

        handle_dashboard_input(&mut app, KeyCode::Backspace);
        assert!(app.country_filter.is_empty());
        assert_eq!(app.filtered_countries.len(), app.country_codes.len());
    }

    #[test]
    fn delete_clears_the_year_selection() {
        let mut app = initialized_app();
        handle_dashboard_input(&mut app, KeyCode::Char('3'));
        handle_dashboard_input(&mut app, KeyCode::Tab);

        handle_dashboard_input(&mut app, KeyCode::Delete);
        assert_eq!(app.selected_year, None);
    }

    #[test]
    fn enter_on_the_year_picker_selects_the_cursor_year() {
        let mut app = initialized_app();
        handle_dashboard_input(&mut app, KeyCode::Char('3'));
        handle_dashboard_input(&mut app, KeyCode::Tab);

        handle_dashboard_input(&mut app, KeyCode::Down);
        handle_dashboard_input(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_year, Some(1934));
    }

    #[test]
    fn escape_first_clears_the_filter_then_leaves_the_picker() {
        let mut app = initialized_app();
        handle_dashboard_input(&mut app, KeyCode::Char('2'));
        handle_dashboard_input(&mut app, KeyCode::Tab);
        handle_dashboard_input(&mut app, KeyCode::Char('i'));

        handle_dashboard_input(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, PanelFocus::CountryPicker);
        assert!(app.country_filter.is_empty());

        handle_dashboard_input(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, PanelFocus::ModePicker);
    }
}
