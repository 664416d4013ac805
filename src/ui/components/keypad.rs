use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};

use times_tables::quiz::{Digit, KeypadInput};

use crate::ui::theme::Theme;

const BACKSPACE_LABEL: &str = "<-";
const SUBMIT_LABEL: &str = "OK";

/// Phone-style keypad: 7 8 9 / 4 5 6 / 1 2 3 / 0 back enter.
pub fn keypad_rows() -> [[KeypadInput; 3]; 4] {
    use KeypadInput::Digit as D;
    [
        [D(Digit::SEVEN), D(Digit::EIGHT), D(Digit::NINE)],
        [D(Digit::FOUR), D(Digit::FIVE), D(Digit::SIX)],
        [D(Digit::ONE), D(Digit::TWO), D(Digit::THREE)],
        [D(Digit::ZERO), KeypadInput::Backspace, KeypadInput::Submit],
    ]
}

pub fn key_label(key: KeypadInput) -> String {
    match key {
        KeypadInput::Digit(digit) => digit.to_string(),
        KeypadInput::Backspace => BACKSPACE_LABEL.to_string(),
        KeypadInput::Submit => SUBMIT_LABEL.to_string(),
    }
}

pub struct KeypadDiagram<'a> {
    pub pressed: Option<KeypadInput>,
    pub theme: &'a Theme,
}

impl<'a> KeypadDiagram<'a> {
    pub fn new(pressed: Option<KeypadInput>, theme: &'a Theme) -> Self {
        Self { pressed, theme }
    }
}

impl Widget for KeypadDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Keypad ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width < 9 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(inner);

        for (row_area, keys) in rows.iter().zip(keypad_rows()) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 3); 3])
                .split(*row_area);

            for (cell, key) in cells.iter().zip(keys) {
                let is_pressed = self.pressed == Some(key);
                let (border, label_style) = if is_pressed {
                    (
                        colors.key_pressed(),
                        Style::default()
                            .fg(colors.bg())
                            .bg(colors.key_pressed())
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (colors.accent_dim(), Style::default().fg(colors.fg()))
                };

                let key_block = Block::bordered().border_style(Style::default().fg(border));
                let key_inner = key_block.inner(*cell);
                key_block.render(*cell, buf);
                Paragraph::new(Line::from(key_label(key)))
                    .style(label_style)
                    .alignment(Alignment::Center)
                    .render(key_inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_appears_once() {
        let mut seen: Vec<u8> = keypad_rows()
            .iter()
            .flatten()
            .filter_map(|k| match k {
                KeypadInput::Digit(d) => Some(d.value()),
                _ => None,
            })
            .collect();
        seen.sort();
        assert_eq!(seen, (0..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_labels_match_digit_values() {
        for key in keypad_rows().into_iter().flatten() {
            if let KeypadInput::Digit(digit) = key {
                assert_eq!(key_label(key), digit.value().to_string());
            }
        }
        let submits = keypad_rows()
            .into_iter()
            .flatten()
            .filter(|k| *k == KeypadInput::Submit)
            .count();
        assert_eq!(submits, 1);
    }

    #[test]
    fn test_zero_key_is_zero() {
        let bottom = keypad_rows()[3];
        assert_eq!(bottom[0], KeypadInput::Digit(Digit::new(0).unwrap()));
        assert_eq!(key_label(bottom[0]), "0");
        assert_eq!(bottom[1], KeypadInput::Backspace);
        assert_eq!(bottom[2], KeypadInput::Submit);
    }
}
