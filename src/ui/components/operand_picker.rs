use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use times_tables::quiz::TableOperand;
use times_tables::quiz::round::{MAX_TABLE, MIN_TABLE};

use crate::ui::theme::Theme;

/// Horizontal strip of tables 2..=12 with the selected one highlighted.
pub struct OperandPicker<'a> {
    pub selected: TableOperand,
    pub theme: &'a Theme,
}

impl<'a> OperandPicker<'a> {
    pub fn new(selected: TableOperand, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }
}

impl Widget for OperandPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans = Vec::new();
        for table in MIN_TABLE..=MAX_TABLE {
            let style = if table == self.selected.value() {
                Style::default()
                    .fg(colors.bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_pending())
            };
            spans.push(Span::styled(format!(" {table} "), style));
            spans.push(Span::raw(" "));
        }
        spans.pop();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(" Table ")
                    .border_style(Style::default().fg(colors.border())),
            )
            .render(area, buf);
    }
}
