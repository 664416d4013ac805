use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use times_tables::quiz::feedback::{EMPHASIS_MAX, EMPHASIS_MIN};
use times_tables::quiz::{Emphasis, SessionState};

use crate::ui::theme::Theme;

const TITLE: &str = "Times Tables!";
const MAX_STARS: usize = 5;

/// Number of decoration stars either side of the title, 0..=5.
/// The terminal cannot scale text, so emphasis shows up as stars instead.
pub fn emphasis_stars(emphasis: Emphasis) -> usize {
    let span = EMPHASIS_MAX - EMPHASIS_MIN;
    let t = ((emphasis.value() - EMPHASIS_MIN) / span).clamp(0.0, 1.0);
    (t * MAX_STARS as f64).round() as usize
}

pub struct QuestionCard<'a> {
    pub state: &'a SessionState,
    pub emphasis: Emphasis,
    pub theme: &'a Theme,
}

impl<'a> QuestionCard<'a> {
    pub fn new(state: &'a SessionState, emphasis: Emphasis, theme: &'a Theme) -> Self {
        Self {
            state,
            emphasis,
            theme,
        }
    }
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(inner);

        let stars = "*".repeat(emphasis_stars(self.emphasis));
        let mut title_style = Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD);
        if self.emphasis.value() < 1.0 {
            title_style = title_style.add_modifier(Modifier::DIM);
        }
        let title = Line::from(vec![
            Span::styled(format!("{stars} "), Style::default().fg(colors.warning())),
            Span::styled(TITLE, title_style),
            Span::styled(format!(" {stars}"), Style::default().fg(colors.warning())),
        ]);
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let question_area = vertically_centered(layout[1]);
        Paragraph::new(Line::from(Span::styled(
            self.state.question.display_text.as_str(),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(question_area, buf);

        let display_fg = if self.state.is_error {
            colors.error()
        } else {
            colors.display_fg()
        };
        let display = Paragraph::new(Line::from(Span::styled(
            self.state.display_text(),
            Style::default().fg(display_fg).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_style(Style::default().fg(if self.state.is_error {
                    colors.error()
                } else {
                    colors.border()
                }))
                .style(Style::default().bg(colors.display_bg())),
        );
        display.render(layout[2], buf);
    }
}

fn vertically_centered(area: Rect) -> Rect {
    if area.height <= 1 {
        return area;
    }
    Rect::new(area.x, area.y + area.height / 2, area.width, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use times_tables::quiz::FeedbackSignal;

    #[test]
    fn test_stars_track_emphasis() {
        let mut e = Emphasis::default();
        let neutral = emphasis_stars(e);
        for _ in 0..20 {
            e.apply(FeedbackSignal::Success);
        }
        assert_eq!(emphasis_stars(e), MAX_STARS);
        for _ in 0..60 {
            e.apply(FeedbackSignal::Failure);
        }
        assert_eq!(emphasis_stars(e), 0);
        assert!(neutral > 0 && neutral < MAX_STARS);
    }
}
