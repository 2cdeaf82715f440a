//! TUI rendering with ratatui
//!
//! Letter board, word list and status panels for the Spelling Bee solver.

use super::app::{App, InputMode, MessageStyle};
use crate::core::MAX_ALLOWED;
use crate::output::formatters::display_word;
use crate::output::summary_line;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input help
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Letters and messages
            Constraint::Percentage(60), // Words
        ])
        .split(chunks[1]);

    render_side_panel(f, app, main_chunks[0]);
    render_words(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE SOLVER")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Letters
            Constraint::Length(3), // Pangram gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_pangram_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn letter_span(letter: Option<char>, style: Style) -> Span<'static> {
    let text = letter.map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
    Span::styled(text, style)
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let outer_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let center_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let outer = app.builder.outer();
    let slot = |i: usize| letter_span(outer.get(i).copied(), outer_style);

    // Hive layout: two outer letters, center flanked by two, two outer letters
    let content = vec![
        Line::from(vec![Span::raw("   "), slot(0), slot(1)]),
        Line::from(vec![
            slot(2),
            letter_span(app.builder.center(), center_style),
            slot(3),
        ]),
        Line::from(vec![Span::raw("   "), slot(4), slot(5)]),
        Line::from(""),
        Line::from(format!(
            "{} of {} outer letters",
            outer.len(),
            MAX_ALLOWED
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_pangram_gauge(f: &mut Frame, app: &App, area: Rect) {
    let (found, total) = app
        .solved
        .as_ref()
        .map_or((0, 0), |s| (s.result.pangram_count, s.result.len()));
    let percent = if total == 0 {
        0
    } else {
        (found * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Pangrams ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{found} of {total} words"));

    f.render_widget(gauge, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let (title, items): (String, Vec<ListItem>) = match app.solved {
        Some(ref solved) => {
            let title = format!(
                " {} ",
                summary_line(solved.result.len(), solved.result.pangram_count)
            );
            let items = solved
                .result
                .matches
                .iter()
                .skip(app.scroll)
                .map(|m| {
                    let style = if m.is_pangram {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(format!("  {}", display_word(m))).style(style)
                })
                .collect();
            (title, items)
        }
        None => (
            " Words ".to_string(),
            vec![ListItem::new("Enter letters and press Enter to solve")
                .style(Style::default().fg(Color::DarkGray))],
        ),
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Letters => (
            " Type letters | Enter: Solve | Backspace: Delete | Esc: Quit ",
            Color::Yellow,
        ),
        InputMode::Results => (
            " n: New puzzle | ↑/↓: Scroll | q: Quit ",
            Color::Green,
        ),
    };

    let prompt = match app.input_mode {
        InputMode::Letters => app.builder.prompt().unwrap_or_default(),
        InputMode::Results => app
            .solved
            .as_ref()
            .map(|s| format!("Puzzle: {}", s.letters))
            .unwrap_or_default(),
    };

    let input = Paragraph::new(prompt)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let dictionary = Paragraph::new(format!(
        "Dictionary: {} words",
        app.solver.dictionary_size()
    ))
    .alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[0]);

    let min_length = Paragraph::new(format!(
        "Min length: {}",
        app.solver.config().min_length
    ))
    .alignment(Alignment::Center);
    f.render_widget(min_length, chunks[1]);

    let stats = Paragraph::new(format!(
        "Puzzles: {} | Words: {} | Pangrams: {}",
        app.stats.puzzles_solved, app.stats.words_found, app.stats.pangrams_found
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(stats, chunks[2]);
}
