use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Keypad diagram needs this many rows to be worth drawing.
const KEYPAD_MIN_HEIGHT: u16 = 31;

pub struct AppLayout {
    pub header: Rect,
    pub picker: Rect,
    pub card: Rect,
    pub progress: Rect,
    pub keypad: Option<Rect>,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, want_keypad: bool) -> Self {
        let show_keypad = want_keypad && area.height >= KEYPAD_MIN_HEIGHT;

        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
        ];
        if show_keypad {
            constraints.push(Constraint::Length(14));
        }
        constraints.push(Constraint::Length(1));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (keypad, footer) = if show_keypad {
            (Some(centered_column(34, rows[4])), rows[5])
        } else {
            (None, rows[4])
        };

        Self {
            header: rows[0],
            picker: rows[1],
            card: rows[2],
            progress: rows[3],
            keypad,
            footer,
        }
    }
}

fn centered_column(width: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, area.y, w, area.height)
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 9;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_hidden_on_short_terminal() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24), true);
        assert!(layout.keypad.is_none());
        let layout = AppLayout::new(Rect::new(0, 0, 80, 40), true);
        assert!(layout.keypad.is_some());
        let layout = AppLayout::new(Rect::new(0, 0, 80, 40), false);
        assert!(layout.keypad.is_none());
    }

    #[test]
    fn test_pack_hint_lines_wraps() {
        let lines = pack_hint_lines(&["[Enter] Submit", "[Bksp] Delete", "[q] Quit"], 20);
        assert_eq!(lines.len(), 3);
        let lines = pack_hint_lines(&["[Enter] Submit", "[q] Quit"], 80);
        assert_eq!(lines, vec![" [Enter] Submit  [q] Quit".to_string()]);
    }

    #[test]
    fn test_centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 30, 8);
        let r = centered_rect(50, 50, area);
        assert!(r.width <= area.width && r.height <= area.height);
    }
}
