//! TUI application state and logic

use crate::core::LetterSet;
use crate::input::{BuilderState, LetterSetBuilder};
use crate::output::summary_line;
use crate::solver::{FilterResult, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub builder: LetterSetBuilder,
    pub input_mode: InputMode,
    pub solved: Option<SolvedPuzzle<'a>>,
    pub messages: Vec<Message>,
    pub scroll: usize,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Letters,
    Results,
}

/// A puzzle and the words found for it
#[derive(Debug, Clone)]
pub struct SolvedPuzzle<'a> {
    pub letters: LetterSet,
    pub result: FilterResult<'a>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_solved: usize,
    pub words_found: usize,
    pub pangrams_found: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>, builder: LetterSetBuilder) -> Self {
        let mut app = Self {
            solver,
            builder,
            input_mode: InputMode::Letters,
            solved: None,
            messages: Vec::new(),
            scroll: 0,
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! Type the center letter, then up to six outer letters.",
            MessageStyle::Info,
        );
        app.add_message(
            "Enter solves, Backspace deletes, Esc quits.",
            MessageStyle::Info,
        );

        // Letters from the command line may already make a full puzzle
        if app.builder.is_complete() {
            app.submit();
        }

        app
    }

    /// Handle a typed letter while entering the puzzle
    pub fn handle_letter(&mut self, letter: char) {
        match self.builder.push_letter(letter) {
            Ok(BuilderState::Complete) => self.submit(),
            Ok(_) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn backspace(&mut self) {
        self.builder.pop();
    }

    /// Solve the letters entered so far
    pub fn submit(&mut self) {
        let Some(letters) = self.builder.finish() else {
            self.add_message("Enter the center letter first!", MessageStyle::Error);
            return;
        };

        let result = self.solver.solve(&letters);

        self.stats.puzzles_solved += 1;
        self.stats.words_found += result.len();
        self.stats.pangrams_found += result.pangram_count;

        let style = if result.is_empty() {
            MessageStyle::Error
        } else {
            MessageStyle::Success
        };
        self.add_message(&summary_line(result.len(), result.pangram_count), style);

        self.solved = Some(SolvedPuzzle { letters, result });
        self.scroll = 0;
        self.input_mode = InputMode::Results;
    }

    pub fn new_puzzle(&mut self) {
        self.builder.reset();
        self.solved = None;
        self.scroll = 0;
        self.input_mode = InputMode::Letters;
        self.add_message("New puzzle! Type the center letter.", MessageStyle::Info);
    }

    pub fn scroll_down(&mut self) {
        let len = self.solved.as_ref().map_or(0, |s| s.result.len());
        if self.scroll + 1 < len {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Letters => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.handle_letter(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::Results => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_puzzle(),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// The terminal is restored before any error from the session is returned.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
