pub const EMPHASIS_MIN: f64 = 0.1;
pub const EMPHASIS_MAX: f64 = 2.0;
const SUCCESS_FACTOR: f64 = 1.1;
const FAILURE_FACTOR: f64 = 0.9;

/// Outcome of a scored submit, for haptic or visual feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackSignal {
    Success,
    Failure,
}

/// Cosmetic scale owned by the presentation layer and nudged by each signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emphasis(f64);

impl Emphasis {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn apply(&mut self, signal: FeedbackSignal) {
        let factor = match signal {
            FeedbackSignal::Success => SUCCESS_FACTOR,
            FeedbackSignal::Failure => FAILURE_FACTOR,
        };
        self.0 = (self.0 * factor).clamp(EMPHASIS_MIN, EMPHASIS_MAX);
    }
}

impl Default for Emphasis {
    fn default() -> Self {
        Self(1.0)
    }
}
