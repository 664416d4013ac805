mod app;
mod event;
mod ui;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use times_tables::config::Config;
use times_tables::quiz::round::{MAX_TABLE, MIN_TABLE};
use times_tables::quiz::{Digit, KeypadInput, QuestionsPerRound, QuizSession};
use times_tables::store::json_store::JsonPreferenceStore;
use times_tables::store::{MemoryStore, PreferenceStore};

use app::{App, AppScreen, SETTINGS_FIELDS};
use event::{AppEvent, EventHandler};
use ui::components::keypad::KeypadDiagram;
use ui::components::operand_picker::OperandPicker;
use ui::components::progress_bar::ProgressBar;
use ui::components::question_card::QuestionCard;
use ui::components::round_summary::RoundSummaryView;
use ui::layout::AppLayout;
use ui::theme::Theme;

#[derive(Parser)]
#[command(name = "times-tables", version, about = "Times tables quiz for the terminal")]
struct Cli {
    #[arg(
        short,
        long,
        help = "Times table to practise (2-12)",
        value_parser = clap::value_parser!(u32).range(MIN_TABLE as i64..=MAX_TABLE as i64)
    )]
    table: Option<u32>,

    #[arg(short, long, help = "Questions per round (5, 10 or 20)", value_parser = parse_round_length)]
    questions: Option<u32>,

    #[arg(long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Do not read or write saved preferences")]
    no_save: bool,
}

fn parse_round_length(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|e| format!("{e}"))?;
    QuestionsPerRound::new(n)
        .map(|q| q.value())
        .map_err(|e| e.to_string())
}

/// A `--theme` override is used for this run only and never lands in the config.
fn startup_theme(cli_theme: Option<&str>, config: &Config) -> &'static Theme {
    let theme = cli_theme
        .and_then(Theme::load)
        .or_else(|| Theme::load(&config.theme))
        .unwrap_or_default();
    Box::leak(Box::new(theme))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_default();
    let theme = startup_theme(cli.theme.as_deref(), &config);

    let mut startup_status = None;
    let store: Box<dyn PreferenceStore> = if cli.no_save {
        Box::new(MemoryStore::new())
    } else {
        match JsonPreferenceStore::new() {
            Ok(store) => Box::new(store),
            Err(e) => {
                startup_status = Some(format!("Preferences will not be saved: {e}"));
                Box::new(MemoryStore::new())
            }
        }
    };

    let mut app = App::new(QuizSession::new(store), config, theme);
    if let Some(table) = cli.table {
        app.set_table(table);
    }
    if let Some(questions) = cli.questions {
        app.set_round_length(questions);
    }
    if startup_status.is_some() {
        app.status = startup_status;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(app.config.tick_rate_ms));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
        }

        if app.take_bell() {
            let mut out = io::stdout();
            out.write_all(b"\x07")?;
            out.flush()?;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Quiz => handle_quiz_key(app, key),
        AppScreen::Settings => handle_settings_key(app, key),
    }
}

/// Keys that map straight onto the on-screen keypad.
fn keypad_input(code: KeyCode) -> Option<KeypadInput> {
    match code {
        KeyCode::Char(ch) => Digit::from_char(ch).map(KeypadInput::Digit),
        KeyCode::Backspace | KeyCode::Delete => Some(KeypadInput::Backspace),
        KeyCode::Enter => Some(KeypadInput::Submit),
        _ => None,
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    if app.session.state().is_round_complete() {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => app.dismiss_summary(),
            _ => {}
        }
        return;
    }

    if let Some(input) = keypad_input(key.code) {
        app.keypad(input);
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => app.next_table(),
        KeyCode::Left | KeyCode::Char('-') => app.prev_table(),
        KeyCode::Char('r') => app.cycle_round_length(),
        KeyCode::Char('s') => app.go_to_settings(),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.leave_settings(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.settings_selected = app.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.settings_selected + 1 < SETTINGS_FIELDS {
                app.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.settings_cycle_forward(),
        KeyCode::Left | KeyCode::Char('h') => app.settings_cycle_backward(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Quiz => render_quiz(frame, app),
        AppScreen::Settings => render_settings(frame, app),
    }
}

fn render_quiz(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let state = app.session.state();
    let layout = AppLayout::new(area, app.config.show_keypad);

    let header_info = format!(
        " Table {} | {} per round",
        state.config.selected_table.value(),
        state.config.questions_per_round.value(),
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " times-tables ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            header_info,
            Style::default().fg(colors.text_pending()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    frame.render_widget(OperandPicker::new(state.config.selected_table, app.theme), layout.picker);
    frame.render_widget(QuestionCard::new(state, app.emphasis, app.theme), layout.card);
    frame.render_widget(
        ProgressBar::for_round(&state.progress, state.config.questions_per_round, app.theme),
        layout.progress,
    );
    if let Some(keypad_area) = layout.keypad {
        frame.render_widget(KeypadDiagram::new(app.pressed_key(), app.theme), keypad_area);
    }

    render_footer(
        frame,
        app,
        layout.footer,
        &[
            "[0-9] Type",
            "[Enter] Submit",
            "[Bksp] Delete",
            "[</>] Table",
            "[r] Round length",
            "[s] Settings",
            "[q] Quit",
        ],
    );

    if let Some(summary) = &state.summary {
        let popup = ui::layout::centered_rect(50, 40, area);
        frame.render_widget(RoundSummaryView::new(summary, app.theme), popup);
    }
}

fn render_settings(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let state = app.session.state();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let centered = ui::layout::centered_rect(60, 80, outer[0]);

    let block = Block::bordered()
        .title(" Settings ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let on_off = |b: bool| (if b { "on" } else { "off" }).to_string();
    let fields: [(&str, String); SETTINGS_FIELDS] = [
        ("Times table", state.config.selected_table.value().to_string()),
        ("Questions per round", state.config.questions_per_round.value().to_string()),
        ("Theme", app.theme.name.clone()),
        ("Bell on wrong answer", on_off(app.config.bell_on_failure)),
        ("Show keypad", on_off(app.config.show_keypad)),
    ];

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(fields.len() as u16 * 3),
            Constraint::Min(0),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        "  Use arrows to navigate, Enter/Right to change, ESC to save & exit",
        Style::default().fg(colors.text_pending()),
    )));
    header.render(layout[0], frame.buffer_mut());

    let field_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(fields.iter().map(|_| Constraint::Length(3)).collect::<Vec<_>>())
        .split(layout[1]);

    for (i, (label, value)) in fields.iter().enumerate() {
        let is_selected = i == app.settings_selected;
        let indicator = if is_selected { " > " } else { "   " };

        let label_style = Style::default()
            .fg(if is_selected { colors.accent() } else { colors.fg() })
            .add_modifier(if is_selected { Modifier::BOLD } else { Modifier::empty() });
        let value_style = Style::default().fg(if is_selected {
            colors.key_pressed()
        } else {
            colors.text_pending()
        });

        let lines = vec![
            Line::from(Span::styled(format!("{indicator}{label}:"), label_style)),
            Line::from(Span::styled(format!("  < {value} >"), value_style)),
        ];
        Paragraph::new(lines).render(field_layout[i], frame.buffer_mut());
    }

    render_footer(
        frame,
        app,
        outer[1],
        &["[ESC] Save & back", "[Up/Down] Select", "[Enter/arrows] Change value"],
    );
}

/// Status message wins over key hints when there is one.
fn render_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, hints: &[&str]) {
    let colors = &app.theme.colors;
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(colors.warning()),
        )),
        None => {
            let packed = ui::layout::pack_hint_lines(hints, area.width as usize);
            Line::from(Span::styled(
                packed.into_iter().next().unwrap_or_default(),
                Style::default().fg(colors.text_pending()),
            ))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_map_literally() {
        for ch in '0'..='9' {
            let expected = Digit::from_char(ch).map(KeypadInput::Digit);
            assert_eq!(keypad_input(KeyCode::Char(ch)), expected);
        }
        assert_eq!(
            keypad_input(KeyCode::Char('0')),
            Some(KeypadInput::Digit(Digit::new(0).unwrap()))
        );
    }

    #[test]
    fn test_edit_keys_map() {
        assert_eq!(keypad_input(KeyCode::Enter), Some(KeypadInput::Submit));
        assert_eq!(keypad_input(KeyCode::Backspace), Some(KeypadInput::Backspace));
        assert_eq!(keypad_input(KeyCode::Char('x')), None);
        assert_eq!(keypad_input(KeyCode::Tab), None);
    }

    #[test]
    fn test_cli_theme_leaves_config_alone() {
        let config = Config::default();
        let theme = startup_theme(Some("paper"), &config);
        assert_eq!(theme.name, "paper");
        assert_eq!(config.theme, "chalkboard");

        let fallback = startup_theme(Some("no-such-theme"), &config);
        assert_eq!(fallback.name, "chalkboard");
        assert_eq!(startup_theme(None, &config).name, "chalkboard");
    }

    #[test]
    fn test_round_length_arg() {
        assert_eq!(parse_round_length("10"), Ok(10));
        assert!(parse_round_length("7").is_err());
        assert!(parse_round_length("ten").is_err());
    }
}
