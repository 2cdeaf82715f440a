//! Spelling Bee Solver - CLI
//!
//! Prompt and TUI front ends for finding every word and pangram of a puzzle.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use spelling_bee::{
    commands::{PromptError, SolveConfig, load_dictionary, resolve_letters, solve_puzzle},
    input::{LetterSetBuilder, PartialLetters, parse_args},
    output::print_solve_result,
    solver::{DEFAULT_MIN_LENGTH, FilterConfig, Solver},
    wordlists::DEFAULT_WORDLIST,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Command-line tool for playing the New York Times Spelling Bee",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Center letter (every word must contain it)
    #[arg(short, long, global = true)]
    center: Option<String>,

    /// Outer letters, together (-l abc) or by repeating the flag (-l a -l b)
    #[arg(short, long, global = true, action = ArgAction::Append)]
    letters: Option<Vec<String>>,

    /// Word list file, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Header lines to skip at the top of the word list
    #[arg(long, global = true, default_value_t = 0)]
    skip_lines: usize,

    /// Minimum word length
    #[arg(short, long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Show debug logging and the puzzle header
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Solve one puzzle, prompting for any letters not given (default)
    Solve,

    /// Interactive TUI mode
    Play,
}

/// Default log filter when `RUST_LOG` is unset
///
/// The TUI owns stderr's terminal, so it logs nothing.
const fn default_log_filter(command: Commands, verbose: bool) -> &'static str {
    match command {
        Commands::Play => "off",
        Commands::Solve if verbose => "debug",
        Commands::Solve => "warn",
    }
}

fn init_logging(command: Commands, verbose: bool) {
    let default_filter = default_log_filter(command, verbose);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Default to Solve mode if no command given
    let command = cli.command.unwrap_or(Commands::Solve);

    init_logging(command, cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let partial = parse_args(cli.center.as_deref(), cli.letters.as_deref())?;

    let config = SolveConfig {
        wordlist: cli.wordlist,
        skip_lines: cli.skip_lines,
        filter: FilterConfig {
            min_length: cli.min_length,
        },
        verbose: cli.verbose,
    };

    match command {
        Commands::Solve => run_solve_command(&config, partial),
        Commands::Play => run_play_command(&config, partial),
    }
}

fn run_solve_command(config: &SolveConfig, partial: PartialLetters) -> Result<()> {
    let letters = match resolve_letters(partial, &mut io::stdin().lock(), &mut io::stdout()) {
        Ok(letters) => letters,
        Err(PromptError::Cancelled) => {
            println!("{}", PromptError::Cancelled);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let words = load_dictionary(config)?;
    let result = solve_puzzle(&letters, &words, config);

    print_solve_result(&letters, &result, config.verbose);
    Ok(())
}

fn run_play_command(config: &SolveConfig, partial: PartialLetters) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let words = load_dictionary(config)?;
    let solver = Solver::new(&words, config.filter);

    // RUST_LOG may have enabled logging; keep it off the TUI's screen
    log::set_max_level(LevelFilter::Off);

    let app = App::new(solver, LetterSetBuilder::from_partial(partial));
    run_tui(app)
}
