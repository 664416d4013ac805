use thiserror::Error;

pub const MIN_TABLE: u32 = 2;
pub const MAX_TABLE: u32 = 12;
pub const DEFAULT_TABLE: u32 = 5;
pub const ROUND_LENGTHS: [u32; 3] = [5, 10, 20];
pub const DEFAULT_ROUND_LENGTH: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundConfigError {
    #[error("times table {0} is outside 2..=12")]
    TableOutOfRange(u32),
    #[error("round length {0} is not one of 5, 10 or 20")]
    InvalidRoundLength(u32),
}

/// The multiplicand being practised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableOperand(u32);

impl TableOperand {
    pub fn new(value: u32) -> Result<Self, RoundConfigError> {
        if (MIN_TABLE..=MAX_TABLE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RoundConfigError::TableOutOfRange(value))
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Next table up, wrapping 12 back to 2.
    pub fn next(self) -> Self {
        if self.0 >= MAX_TABLE {
            Self(MIN_TABLE)
        } else {
            Self(self.0 + 1)
        }
    }

    pub fn prev(self) -> Self {
        if self.0 <= MIN_TABLE {
            Self(MAX_TABLE)
        } else {
            Self(self.0 - 1)
        }
    }
}

impl Default for TableOperand {
    fn default() -> Self {
        Self(DEFAULT_TABLE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuestionsPerRound(u32);

impl QuestionsPerRound {
    pub fn new(value: u32) -> Result<Self, RoundConfigError> {
        if ROUND_LENGTHS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(RoundConfigError::InvalidRoundLength(value))
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// 5 -> 10 -> 20 -> 5.
    pub fn cycle(self) -> Self {
        let idx = ROUND_LENGTHS.iter().position(|&n| n == self.0).unwrap_or(0);
        Self(ROUND_LENGTHS[(idx + 1) % ROUND_LENGTHS.len()])
    }
}

impl Default for QuestionsPerRound {
    fn default() -> Self {
        Self(DEFAULT_ROUND_LENGTH)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundConfig {
    pub selected_table: TableOperand,
    pub questions_per_round: QuestionsPerRound,
}

impl RoundConfig {
    pub fn new(selected_table: u32, questions_per_round: u32) -> Result<Self, RoundConfigError> {
        Ok(Self {
            selected_table: TableOperand::new(selected_table)?,
            questions_per_round: QuestionsPerRound::new(questions_per_round)?,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundProgress {
    pub completed: u32,
    pub correct: u32,
}

impl RoundProgress {
    pub fn record(&mut self, correct: bool) {
        self.completed += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn ratio_of(&self, questions_per_round: QuestionsPerRound) -> f64 {
        (self.completed as f64 / questions_per_round.value() as f64).clamp(0.0, 1.0)
    }
}
