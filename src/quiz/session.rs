use thiserror::Error;

use crate::quiz::feedback::FeedbackSignal;
use crate::quiz::input::{Digit, InputBuffer, KeypadInput};
use crate::quiz::question::{Question, QuestionGenerator};
use crate::quiz::round::{
    QuestionsPerRound, RoundConfig, RoundConfigError, RoundProgress, TableOperand,
};
use crate::quiz::summary::RoundSummary;
use crate::store::{PreferenceKey, PreferenceStore, StoreError};

pub const SUCCESS_TEXT: &str = "Correct!";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Invalid(#[from] RoundConfigError),
    /// The change is live in the session but did not reach the store.
    #[error("setting applied but not saved: {0}")]
    Persist(#[from] StoreError),
}

/// Message shown in place of the input buffer after a scored submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub signal: FeedbackSignal,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct SessionState {
    pub config: RoundConfig,
    pub question: Question,
    pub input: InputBuffer,
    pub progress: RoundProgress,
    pub feedback: Option<Feedback>,
    pub is_error: bool,
    pub summary: Option<RoundSummary>,
}

impl SessionState {
    fn fresh(config: RoundConfig, question: Question) -> Self {
        Self {
            config,
            question,
            input: InputBuffer::new(),
            progress: RoundProgress::default(),
            feedback: None,
            is_error: false,
            summary: None,
        }
    }

    pub fn is_showing_feedback(&self) -> bool {
        self.feedback.is_some()
    }

    pub fn is_round_complete(&self) -> bool {
        self.summary.is_some()
    }

    /// What belongs in the calculator display: feedback if any, else the buffer.
    pub fn display_text(&self) -> &str {
        match &self.feedback {
            Some(feedback) => &feedback.text,
            None => self.input.as_display(),
        }
    }
}

/// The quiz state machine. Every input is total: it always leaves a valid state.
pub struct QuizSession {
    state: SessionState,
    generator: QuestionGenerator,
    store: Box<dyn PreferenceStore>,
}

impl QuizSession {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_generator(store, QuestionGenerator::from_entropy())
    }

    pub fn with_generator(store: Box<dyn PreferenceStore>, mut generator: QuestionGenerator) -> Self {
        let config = load_config(store.as_ref());
        let question = generator.next_question(config.selected_table, None);
        Self {
            state: SessionState::fresh(config, question),
            generator,
            store,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Fresh question, zeroed progress, no feedback.
    pub fn start(&mut self, config: RoundConfig) {
        let question = self
            .generator
            .next_question(config.selected_table, Some(&self.state.question));
        self.state = SessionState::fresh(config, question);
    }

    /// Switch tables mid-round. Progress is kept, the question and input are not.
    /// Re-picking the current table still draws a fresh question.
    pub fn change_operand(&mut self, new_table: u32) -> Result<(), SettingsError> {
        let table = TableOperand::new(new_table)?;
        self.state.config.selected_table = table;
        self.state.question = self
            .generator
            .next_question(table, Some(&self.state.question));
        self.state.input.clear();
        self.state.feedback = None;
        self.state.is_error = false;
        self.store.set(PreferenceKey::SelectedTable, table.value())?;
        Ok(())
    }

    /// Takes effect at the next completion check; accumulated progress is kept.
    pub fn change_questions_per_round(&mut self, n: u32) -> Result<(), SettingsError> {
        let questions = QuestionsPerRound::new(n)?;
        if questions == self.state.config.questions_per_round {
            return Ok(());
        }
        self.state.config.questions_per_round = questions;
        self.store.set(PreferenceKey::QuestionsPerRound, questions.value())?;
        Ok(())
    }

    pub fn press_digit(&mut self, digit: Digit) {
        self.dismiss_feedback();
        self.state.input.push(digit);
    }

    /// The first press after an answer only clears the message.
    pub fn press_backspace(&mut self) {
        if self.dismiss_feedback() {
            return;
        }
        self.state.input.pop();
    }

    /// Score the buffer against the current question. Returns `None` when the
    /// press only dismissed feedback.
    pub fn submit(&mut self) -> Option<FeedbackSignal> {
        if self.dismiss_feedback() {
            return None;
        }

        let correct = self.state.input.value() == self.state.question.answer;
        self.state.progress.record(correct);

        let (signal, text) = if correct {
            (FeedbackSignal::Success, SUCCESS_TEXT.to_string())
        } else {
            (FeedbackSignal::Failure, self.state.question.failure_text())
        };
        self.state.feedback = Some(Feedback { signal, text });
        self.state.is_error = !correct;
        self.state.input.clear();

        self.state.question = self.generator.next_question(
            self.state.config.selected_table,
            Some(&self.state.question),
        );

        // A summary already up is not replaced until it is dismissed.
        if self.state.summary.is_none()
            && self.state.progress.completed >= self.state.config.questions_per_round.value()
        {
            self.state.summary = Some(RoundSummary::from_progress(&self.state.progress));
        }

        Some(signal)
    }

    pub fn dismiss_round_summary(&mut self) {
        self.state.progress.reset();
        self.state.summary = None;
    }

    pub fn apply(&mut self, input: KeypadInput) -> Option<FeedbackSignal> {
        match input {
            KeypadInput::Digit(digit) => {
                self.press_digit(digit);
                None
            }
            KeypadInput::Backspace => {
                self.press_backspace();
                None
            }
            KeypadInput::Submit => self.submit(),
        }
    }

    /// Returns true if feedback was showing.
    fn dismiss_feedback(&mut self) -> bool {
        if self.state.feedback.take().is_some() {
            self.state.input.clear();
            self.state.is_error = false;
            true
        } else {
            false
        }
    }
}

/// Absent, zero or out-of-set values fall back to the defaults.
pub fn load_config(store: &dyn PreferenceStore) -> RoundConfig {
    let selected_table = store
        .get(PreferenceKey::SelectedTable)
        .and_then(|v| TableOperand::new(v).ok())
        .unwrap_or_default();
    let questions_per_round = store
        .get(PreferenceKey::QuestionsPerRound)
        .and_then(|v| QuestionsPerRound::new(v).ok())
        .unwrap_or_default();
    RoundConfig {
        selected_table,
        questions_per_round,
    }
}
