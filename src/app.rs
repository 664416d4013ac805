use std::time::{Duration, Instant};

use times_tables::config::Config;
use times_tables::quiz::{Emphasis, FeedbackSignal, KeypadInput, QuizSession, SettingsError};

use crate::ui::theme::Theme;

/// How long a keypad key stays lit after being pressed.
const KEY_HIGHLIGHT: Duration = Duration::from_millis(150);

pub const SETTINGS_FIELDS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Quiz,
    Settings,
}

pub struct App {
    pub screen: AppScreen,
    pub session: QuizSession,
    pub emphasis: Emphasis,
    pub config: Config,
    pub theme: &'static Theme,
    pub settings_selected: usize,
    pub last_key: Option<(KeypadInput, Instant)>,
    pub status: Option<String>,
    pub should_quit: bool,
    bell_pending: bool,
}

impl App {
    pub fn new(session: QuizSession, config: Config, theme: &'static Theme) -> Self {
        Self {
            screen: AppScreen::Quiz,
            session,
            emphasis: Emphasis::default(),
            config,
            theme,
            settings_selected: 0,
            last_key: None,
            status: None,
            should_quit: false,
            bell_pending: false,
        }
    }

    /// Forward one keypad press to the session and react to its signal.
    pub fn keypad(&mut self, input: KeypadInput) {
        if self.session.state().is_round_complete() {
            return;
        }
        self.status = None;
        self.last_key = Some((input, Instant::now()));
        if let Some(signal) = self.session.apply(input) {
            self.emphasis.apply(signal);
            if signal == FeedbackSignal::Failure && self.config.bell_on_failure {
                self.bell_pending = true;
            }
        }
    }

    pub fn pressed_key(&self) -> Option<KeypadInput> {
        self.last_key.map(|(key, _)| key)
    }

    /// Drop the keypad highlight once it has been shown long enough.
    pub fn on_tick(&mut self) {
        if let Some((_, at)) = self.last_key
            && at.elapsed() > KEY_HIGHLIGHT
        {
            self.last_key = None;
        }
    }

    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    pub fn next_table(&mut self) {
        let next = self.session.state().config.selected_table.next();
        self.set_table(next.value());
    }

    pub fn prev_table(&mut self) {
        let prev = self.session.state().config.selected_table.prev();
        self.set_table(prev.value());
    }

    pub fn set_table(&mut self, table: u32) {
        let result = self.session.change_operand(table);
        self.report(result);
    }

    pub fn cycle_round_length(&mut self) {
        let next = self.session.state().config.questions_per_round.cycle();
        self.set_round_length(next.value());
    }

    pub fn set_round_length(&mut self, n: u32) {
        let result = self.session.change_questions_per_round(n);
        self.report(result);
    }

    pub fn dismiss_summary(&mut self) {
        self.session.dismiss_round_summary();
        self.status = None;
    }

    fn report(&mut self, result: Result<(), SettingsError>) {
        self.status = result.err().map(|e| e.to_string());
    }

    pub fn go_to_settings(&mut self) {
        self.settings_selected = 0;
        self.screen = AppScreen::Settings;
    }

    pub fn leave_settings(&mut self) {
        if let Err(e) = self.config.save() {
            self.status = Some(format!("Could not save config: {e}"));
        }
        self.screen = AppScreen::Quiz;
    }

    pub fn settings_cycle_forward(&mut self) {
        match self.settings_selected {
            0 => self.next_table(),
            1 => self.cycle_round_length(),
            2 => self.cycle_theme(true),
            3 => self.config.bell_on_failure = !self.config.bell_on_failure,
            4 => self.config.show_keypad = !self.config.show_keypad,
            _ => {}
        }
    }

    pub fn settings_cycle_backward(&mut self) {
        match self.settings_selected {
            0 => self.prev_table(),
            1 => {
                // Two steps forward through a 3-cycle is one step back
                let back = self.session.state().config.questions_per_round.cycle().cycle();
                self.set_round_length(back.value());
            }
            2 => self.cycle_theme(false),
            3 => self.config.bell_on_failure = !self.config.bell_on_failure,
            4 => self.config.show_keypad = !self.config.show_keypad,
            _ => {}
        }
    }

    fn cycle_theme(&mut self, forward: bool) {
        let themes = Theme::available_themes();
        if themes.is_empty() {
            return;
        }
        let next = match themes.iter().position(|t| *t == self.theme.name) {
            Some(idx) if forward => (idx + 1) % themes.len(),
            Some(idx) => (idx + themes.len() - 1) % themes.len(),
            None => 0,
        };
        self.config.theme = themes[next].clone();
        if let Some(new_theme) = Theme::load(&self.config.theme) {
            self.theme = Box::leak(Box::new(new_theme));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use times_tables::quiz::{Digit, QuestionGenerator};
    use times_tables::store::{MemoryStore, PreferenceKey};

    fn make_app() -> App {
        let session = QuizSession::with_generator(
            Box::new(MemoryStore::new()),
            QuestionGenerator::new(SmallRng::seed_from_u64(3)),
        );
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        App::new(session, Config::default(), theme)
    }

    fn type_answer(app: &mut App, answer: u32) {
        for ch in answer.to_string().chars() {
            app.keypad(KeypadInput::Digit(Digit::from_char(ch).unwrap()));
        }
    }

    #[test]
    fn test_success_grows_emphasis_without_bell() {
        let mut app = make_app();
        let answer = app.session.state().question.answer;
        type_answer(&mut app, answer);
        app.keypad(KeypadInput::Submit);
        assert!(app.emphasis.value() > 1.0);
        assert!(!app.take_bell());
    }

    #[test]
    fn test_failure_shrinks_emphasis_and_rings() {
        let mut app = make_app();
        app.keypad(KeypadInput::Submit);
        assert!(app.emphasis.value() < 1.0);
        assert!(app.take_bell());
        assert!(!app.take_bell());
    }

    #[test]
    fn test_bell_respects_config() {
        let mut app = make_app();
        app.config.bell_on_failure = false;
        app.keypad(KeypadInput::Submit);
        assert!(!app.take_bell());
    }

    #[test]
    fn test_dismissing_feedback_leaves_emphasis_alone() {
        let mut app = make_app();
        app.keypad(KeypadInput::Submit);
        let after_failure = app.emphasis.value();
        app.keypad(KeypadInput::Submit);
        assert_eq!(app.emphasis.value(), after_failure);
    }

    #[test]
    fn test_table_wraps_and_persists() {
        let mut app = make_app();
        for _ in 0..7 {
            app.next_table();
        }
        assert_eq!(app.session.state().config.selected_table.value(), 12);
        app.next_table();
        assert_eq!(app.session.state().config.selected_table.value(), 2);
        assert_eq!(app.session.store().get(PreferenceKey::SelectedTable), Some(2));
        assert!(app.status.is_none());
    }

    #[test]
    fn test_round_length_backward_cycle() {
        let mut app = make_app();
        app.settings_selected = 1;
        app.settings_cycle_backward();
        assert_eq!(app.session.state().config.questions_per_round.value(), 20);
        app.settings_cycle_forward();
        assert_eq!(app.session.state().config.questions_per_round.value(), 5);
    }

    #[test]
    fn test_theme_cycle_starts_from_active_theme() {
        let mut app = make_app();
        app.theme = Box::leak(Box::new(Theme::load("paper").unwrap()));
        assert_eq!(app.config.theme, "chalkboard");
        app.settings_selected = 2;
        app.settings_cycle_forward();
        assert_eq!(app.config.theme, "catppuccin-mocha");
        assert_eq!(app.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn test_invalid_table_reports_status() {
        let mut app = make_app();
        app.set_table(42);
        assert!(app.status.as_deref().is_some_and(|s| s.contains("42")));
        assert_eq!(app.session.state().config.selected_table.value(), 5);
    }

    #[test]
    fn test_keypad_ignored_while_summary_shown() {
        let mut app = make_app();
        for _ in 0..5 {
            app.keypad(KeypadInput::Submit);
            app.keypad(KeypadInput::Backspace);
        }
        assert!(app.session.state().is_round_complete());
        app.keypad(KeypadInput::Submit);
        assert_eq!(app.session.state().progress.completed, 5);
        app.dismiss_summary();
        assert_eq!(app.session.state().progress.completed, 0);
    }

    #[test]
    fn test_key_highlight_expires() {
        let mut app = make_app();
        app.keypad(KeypadInput::Backspace);
        assert_eq!(app.pressed_key(), Some(KeypadInput::Backspace));
        app.last_key = Some((KeypadInput::Backspace, Instant::now() - Duration::from_secs(1)));
        app.on_tick();
        assert_eq!(app.pressed_key(), None);
    }
}
