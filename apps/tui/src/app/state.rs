use crate::config::{AppConfig, MapDetail};
use crate::data::queries;
use crate::domain::ViewMode;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};

/// Which control currently receives arrow keys and text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    ModePicker,
    CountryPicker,
    YearPicker,
}

pub struct App {
    pub running: bool,
    pub view_mode: ViewMode,
    pub view_mode_index: usize,
    pub focus: PanelFocus,

    // Picker options and current values. A cleared selection is a
    // real state: the matching view renders its validation message.
    pub country_codes: Vec<&'static str>,
    pub years: Vec<u16>,
    pub selected_country: Option<&'static str>,
    pub selected_year: Option<u16>,
    pub country_cursor: usize,
    pub year_cursor: usize,
    pub country_filter: String,
    pub filtered_countries: Vec<&'static str>,

    pub status_message: String,
    pub show_help: bool,
    pub map_detail: MapDetail,

    pub animation_counter: f64,
    pub animation_paused: bool,
    pub last_frame: Instant,

    // Transition effect armed whenever a control value changes,
    // rendered over the chart panel until it finishes.
    pub chart_fx: Mutex<Option<Effect>>,
    pub last_tick: Duration,
}

impl App {
    pub fn new() -> Self {
        let country_codes = queries::country_codes();
        let filtered_countries = country_codes.clone();

        Self {
            running: true,
            view_mode: ViewMode::AllWinners,
            view_mode_index: 0,
            focus: PanelFocus::ModePicker,
            country_codes,
            years: queries::years(),
            selected_country: None,
            selected_year: None,
            country_cursor: 0,
            year_cursor: 0,
            country_filter: String::new(),
            filtered_countries,
            status_message: String::new(),
            show_help: false,
            map_detail: MapDetail::default(),
            animation_counter: 0.0,
            animation_paused: false,
            last_frame: Instant::now(),
            chart_fx: Mutex::new(None),
            last_tick: Duration::ZERO,
        }
    }

    /// Applies startup configuration. The selections default to
    /// country `ARG` and year 1930 unless overridden.
    pub fn initialize(&mut self, config: &AppConfig) {
        self.map_detail = config.map_detail;

        if let Ok(country) = queries::lookup_country(&config.default_country) {
            self.selected_country = Some(country.code);
            self.country_cursor = self
                .filtered_countries
                .iter()
                .position(|code| *code == country.code)
                .unwrap_or(0);
        }

        if let Ok(tournament) = queries::lookup_year(config.default_year) {
            self.selected_year = Some(tournament.year);
            self.year_cursor = self
                .years
                .iter()
                .position(|year| *year == tournament.year)
                .unwrap_or(0);
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.last_tick = delta;

        if self.animation_paused {
            return;
        }

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    pub fn select_view_mode(&mut self, index: usize) {
        let Some(mode) = ViewMode::from_index(index) else {
            self.status_message = "Invalid display mode selection.".to_string();
            return;
        };

        if mode == self.view_mode {
            return;
        }

        self.view_mode_index = index;
        self.view_mode = mode;
        self.status_message = format!("Display mode: {}", mode.label());

        // The pickers of the other modes are hidden, so focus cannot
        // stay on one of them.
        if !self.focus_is_valid(self.focus) {
            self.focus = PanelFocus::ModePicker;
        }

        self.trigger_chart_fx();
    }

    /// Moves focus between the mode picker and the picker of the
    /// current mode, if it has one.
    pub fn cycle_focus(&mut self) {
        self.focus = match (self.focus, self.view_mode) {
            (PanelFocus::ModePicker, ViewMode::CountryHistory) => PanelFocus::CountryPicker,
            (PanelFocus::ModePicker, ViewMode::ByYear) => PanelFocus::YearPicker,
            _ => PanelFocus::ModePicker,
        };
    }

    const fn focus_is_valid(&self, focus: PanelFocus) -> bool {
        match focus {
            PanelFocus::ModePicker => true,
            PanelFocus::CountryPicker => matches!(self.view_mode, ViewMode::CountryHistory),
            PanelFocus::YearPicker => matches!(self.view_mode, ViewMode::ByYear),
        }
    }

    /// Recomputes the country list from the search filter, ranked by
    /// match score.
    pub fn apply_country_filter(&mut self) {
        if self.country_filter.is_empty() {
            self.filtered_countries = self.country_codes.clone();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, &'static str)> = self
                .country_codes
                .iter()
                .filter_map(|code| {
                    let name = queries::lookup_country(code).map_or(*code, |c| c.name);
                    let haystack = format!("{code} {name}");
                    matcher
                        .fuzzy_match(&haystack, &self.country_filter)
                        .map(|score| (score, *code))
                })
                .collect();

            scored.sort_by(|(score_a, code_a), (score_b, code_b)| {
                score_b.cmp(score_a).then_with(|| code_a.cmp(code_b))
            });
            self.filtered_countries = scored.into_iter().map(|(_, code)| code).collect();
        }

        if self.country_cursor >= self.filtered_countries.len() {
            self.country_cursor = 0;
        }
    }

    pub fn confirm_country(&mut self) {
        let Some(code) = self.filtered_countries.get(self.country_cursor).copied() else {
            self.status_message = "No country matches the filter.".to_string();
            return;
        };

        self.selected_country = Some(code);
        let name = queries::lookup_country(code).map_or(code, |c| c.name);
        self.status_message = format!("Showing {name}'s World Cup history");
        self.trigger_chart_fx();
    }

    pub fn clear_country(&mut self) {
        if self.selected_country.take().is_some() {
            self.status_message = "Country selection cleared".to_string();
            self.trigger_chart_fx();
        }
    }

    pub fn confirm_year(&mut self) {
        let Some(year) = self.years.get(self.year_cursor).copied() else {
            return;
        };

        self.selected_year = Some(year);
        self.status_message = format!("Showing the {year} final");
        self.trigger_chart_fx();
    }

    pub fn clear_year(&mut self) {
        if self.selected_year.take().is_some() {
            self.status_message = "Year selection cleared".to_string();
            self.trigger_chart_fx();
        }
    }

    pub fn reset(&mut self) {
        self.view_mode = ViewMode::AllWinners;
        self.view_mode_index = 0;
        self.focus = PanelFocus::ModePicker;
        self.country_filter.clear();
        self.apply_country_filter();
        self.status_message.clear();
    }

    pub fn trigger_chart_fx(&self) {
        if let Ok(mut slot) = self.chart_fx.lock() {
            *slot = Some(fx::coalesce((250, Interpolation::Linear)));
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{App, PanelFocus};
    use crate::config::AppConfig;
    use crate::domain::ViewMode;

    fn initialized_app() -> App {
        let mut app = App::new();
        app.initialize(&AppConfig::default());
        app
    }

    #[test]
    fn initialize_applies_the_builtin_defaults() {
        let app = initialized_app();

        assert_eq!(app.selected_country, Some("ARG"));
        assert_eq!(app.selected_year, Some(1930));
        assert_eq!(app.view_mode, ViewMode::AllWinners);
    }

    #[test]
    fn changing_mode_pulls_focus_off_a_hidden_picker() {
        let mut app = initialized_app();

        app.select_view_mode(1);
        app.cycle_focus();
        assert_eq!(app.focus, PanelFocus::CountryPicker);

        app.select_view_mode(2);
        assert_eq!(app.focus, PanelFocus::ModePicker);
    }

    #[test]
    fn selecting_the_current_mode_changes_nothing() {
        let mut app = initialized_app();
        app.status_message.clear();

        app.select_view_mode(0);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn country_filter_narrows_and_recovers() {
        let mut app = initialized_app();

        app.country_filter = "braz".to_string();
        app.apply_country_filter();
        assert_eq!(app.filtered_countries, ["BRA"]);

        app.country_filter.clear();
        app.apply_country_filter();
        assert_eq!(app.filtered_countries.len(), app.country_codes.len());
    }

    #[test]
    fn clearing_a_selection_enters_the_validation_state() {
        let mut app = initialized_app();

        app.clear_country();
        assert_eq!(app.selected_country, None);
        assert_eq!(app.status_message, "Country selection cleared");

        // Clearing twice stays silent.
        app.status_message.clear();
        app.clear_country();
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn confirm_country_uses_the_filtered_cursor() {
        let mut app = initialized_app();

        app.country_filter = "germ".to_string();
        app.apply_country_filter();
        app.country_cursor = 0;
        app.confirm_country();

        assert_eq!(app.selected_country, Some("DEU"));
        assert_eq!(app.status_message, "Showing Germany's World Cup history");
    }
}
