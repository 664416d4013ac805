use crate::quiz::round::RoundProgress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryTier {
    DoingGreat,
    Ok,
    NeedsPractice,
}

impl SummaryTier {
    /// Strict comparisons: exactly 75% and 50% fall to the lower tier.
    pub fn from_percent(percent_correct: f64) -> Self {
        if percent_correct > 75.0 {
            SummaryTier::DoingGreat
        } else if percent_correct > 50.0 {
            SummaryTier::Ok
        } else {
            SummaryTier::NeedsPractice
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SummaryTier::DoingGreat => "You're doing great!",
            SummaryTier::Ok => "Not bad, keep going!",
            SummaryTier::NeedsPractice => "Keep practising!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundSummary {
    pub correct: u32,
    pub completed: u32,
    pub percent_correct: f64,
    pub tier: SummaryTier,
}

impl RoundSummary {
    pub fn from_progress(progress: &RoundProgress) -> Self {
        let percent_correct = if progress.completed == 0 {
            0.0
        } else {
            progress.correct as f64 / progress.completed as f64 * 100.0
        };
        Self {
            correct: progress.correct,
            completed: progress.completed,
            percent_correct,
            tier: SummaryTier::from_percent(percent_correct),
        }
    }

    pub fn title_line(&self) -> String {
        format!("Round complete! {}", self.tier.message())
    }

    pub fn detail_line(&self) -> String {
        format!("You got {} out of {} correct.", self.correct, self.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(correct: u32, completed: u32) -> RoundSummary {
        RoundSummary::from_progress(&RoundProgress { completed, correct })
    }

    #[test]
    fn test_tiers() {
        assert_eq!(summary(8, 10).tier, SummaryTier::DoingGreat);
        assert_eq!(summary(6, 10).tier, SummaryTier::Ok);
        assert_eq!(summary(4, 10).tier, SummaryTier::NeedsPractice);
    }

    #[test]
    fn test_boundaries_fall_to_lower_tier() {
        assert_eq!(summary(75, 100).tier, SummaryTier::Ok);
        assert_eq!(summary(50, 100).tier, SummaryTier::NeedsPractice);
        assert_eq!(summary(76, 100).tier, SummaryTier::DoingGreat);
        assert_eq!(summary(51, 100).tier, SummaryTier::Ok);
    }

    #[test]
    fn test_empty_round_is_bottom_tier() {
        let s = summary(0, 0);
        assert_eq!(s.percent_correct, 0.0);
        assert_eq!(s.tier, SummaryTier::NeedsPractice);
    }

    #[test]
    fn test_text_contains_counts() {
        let s = summary(3, 5);
        assert_eq!(s.detail_line(), "You got 3 out of 5 correct.");
        assert_eq!(s.title_line(), "Round complete! Not bad, keep going!");
    }
}
