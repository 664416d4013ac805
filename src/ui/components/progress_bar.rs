use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use times_tables::quiz::{QuestionsPerRound, RoundProgress};

use crate::ui::theme::Theme;

/// Round progress: filled by completed questions, labelled with the tally.
pub struct ProgressBar<'a> {
    pub label: String,
    pub ratio: f64,
    pub caption: String,
    pub theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn for_round(
        progress: &RoundProgress,
        questions_per_round: QuestionsPerRound,
        theme: &'a Theme,
    ) -> Self {
        Self {
            label: "Round".to_string(),
            ratio: progress.ratio_of(questions_per_round),
            caption: format!(
                "{}/{}  ({} correct)",
                progress.completed,
                questions_per_round.value(),
                progress.correct
            ),
            theme,
        }
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio * inner.width as f64) as u16;

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label_x = inner.x + (inner.width.saturating_sub(self.caption.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &self.caption, Style::default().fg(colors.fg()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_and_ratio() {
        let theme = Theme::default();
        let progress = RoundProgress { completed: 3, correct: 2 };
        let bar = ProgressBar::for_round(&progress, QuestionsPerRound::new(10).unwrap(), &theme);
        assert!((bar.ratio - 0.3).abs() < 1e-9);
        assert_eq!(bar.caption, "3/10  (2 correct)");
    }
}
