use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use times_tables::quiz::{RoundSummary, SummaryTier};

use crate::ui::theme::Theme;

/// Modal overlay shown when a round ends.
pub struct RoundSummaryView<'a> {
    pub summary: &'a RoundSummary,
    pub theme: &'a Theme,
}

impl<'a> RoundSummaryView<'a> {
    pub fn new(summary: &'a RoundSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for RoundSummaryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Round Complete ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let tier_color = match self.summary.tier {
            SummaryTier::DoingGreat => colors.success(),
            SummaryTier::Ok => colors.warning(),
            SummaryTier::NeedsPractice => colors.error(),
        };

        Paragraph::new(Line::from(Span::styled(
            self.summary.title_line(),
            Style::default().fg(tier_color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        Paragraph::new(Line::from(Span::styled(
            self.summary.detail_line(),
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center)
        .render(layout[2], buf);

        let pct_text = format!("{:.0}%", self.summary.percent_correct);
        Paragraph::new(Line::from(vec![
            Span::styled("Score: ", Style::default().fg(colors.text_pending())),
            Span::styled(
                pct_text,
                Style::default().fg(tier_color).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .render(layout[3], buf);

        Paragraph::new(Line::from(Span::styled(
            "[Enter/Space] New round",
            Style::default().fg(colors.accent()),
        )))
        .alignment(Alignment::Center)
        .render(layout[5], buf);
    }
}
