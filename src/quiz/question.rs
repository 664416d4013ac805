use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::quiz::round::{MAX_TABLE, MIN_TABLE, TableOperand};

/// Redraws allowed before a repeated question is accepted.
pub const MAX_REDRAWS: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub left_operand: u32,
    pub right_operand: u32,
    pub answer: u32,
    pub display_text: String,
}

impl Question {
    /// Operands come from `TableOperand` or the 2..=12 draw, so the product fits.
    pub(crate) fn new(left_operand: u32, right_operand: u32) -> Self {
        Self {
            left_operand,
            right_operand,
            answer: left_operand * right_operand,
            display_text: format!("{left_operand} x {right_operand} = "),
        }
    }

    pub fn failure_text(&self) -> String {
        format!("No, {}{}", self.display_text, self.answer)
    }
}

pub struct QuestionGenerator {
    rng: SmallRng,
}

impl QuestionGenerator {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    /// Draw one question for `table`. The other operand is uniform in 2..=12
    /// and the operand order is a coin flip.
    pub fn draw(&mut self, table: TableOperand) -> Question {
        let other = self.rng.gen_range(MIN_TABLE..=MAX_TABLE);
        if self.rng.gen_bool(0.5) {
            Question::new(table.value(), other)
        } else {
            Question::new(other, table.value())
        }
    }

    /// Draw a question whose display text differs from `previous`.
    /// Gives up after `MAX_REDRAWS` and returns the last draw, repeat or not.
    pub fn next_question(&mut self, table: TableOperand, previous: Option<&Question>) -> Question {
        let mut question = self.draw(table);
        let Some(previous) = previous else {
            return question;
        };
        let mut redraws = 0;
        while question.display_text == previous.display_text && redraws < MAX_REDRAWS {
            question = self.draw(table);
            redraws += 1;
        }
        question
    }
}
