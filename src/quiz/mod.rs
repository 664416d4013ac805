pub mod feedback;
pub mod input;
pub mod question;
pub mod round;
pub mod session;
pub mod summary;

pub use feedback::{Emphasis, FeedbackSignal};
pub use input::{Digit, InputBuffer, KeypadInput};
pub use question::{Question, QuestionGenerator};
pub use round::{QuestionsPerRound, RoundConfig, RoundConfigError, RoundProgress, TableOperand};
pub use session::{QuizSession, SessionState, SettingsError};
pub use summary::{RoundSummary, SummaryTier};
