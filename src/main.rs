//! Wordle Infinito - CLI
//!
//! Multi-board Wordle-style game for the terminal with TUI gameplay,
//! time-trial mode, custom games and persistent statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;
use wordle_infinito::{
    commands::evaluate_words,
    dictionary::{Dictionary, GameConfig, config_for_length, loader::parse_custom_words},
    game::{DEFAULT_TRIAL_BOARDS, DEFAULT_TRIAL_SECONDS, FileSaveStore, Game, SaveStore, TimeTrial},
    interactive::{App, run_tui},
    output::{print_eval_result, print_stats},
    stats::{FileStatsStore, StatsStore},
};

#[derive(Parser)]
#[command(
    name = "wordle_infinito",
    about = "Multi-board Wordle-style word game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the multi-board game (default)
    Play {
        /// Number of simultaneous boards
        #[arg(short, long, default_value = "1")]
        boards: usize,

        /// Word length (2-6)
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Draw solutions from the full accepted list, rare words included
        #[arg(short, long)]
        rare: bool,

        /// Comma-separated custom solution words (overrides boards/length)
        #[arg(short, long)]
        words: Option<String>,

        /// Resume the saved in-progress game
        #[arg(long)]
        resume: bool,
    },

    /// Race the clock, one board at a time
    Trial {
        /// Word length (2-6)
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Countdown in seconds
        #[arg(short, long, default_value_t = DEFAULT_TRIAL_SECONDS)]
        duration: u64,
    },

    /// Evaluate a guess against a solution and print the breakdown
    Eval {
        /// The guessed word
        guess: String,

        /// The solution word (must have the same length)
        solution: String,
    },

    /// Show player statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to a single-board game when no command is given
    let command = cli.command.unwrap_or(Commands::Play {
        boards: 1,
        length: 5,
        rare: false,
        words: None,
        resume: false,
    });

    match command {
        Commands::Play {
            boards,
            length,
            rare,
            words,
            resume,
        } => run_play_command(boards, length, rare, words.as_deref(), resume),
        Commands::Trial { length, duration } => run_trial_command(length, duration),
        Commands::Eval { guess, solution } => run_eval_command(&guess, &solution),
        Commands::Stats => {
            run_stats_command();
            Ok(())
        }
    }
}

fn run_play_command(
    boards: usize,
    length: usize,
    rare: bool,
    words: Option<&str>,
    resume: bool,
) -> Result<()> {
    let save_store = FileSaveStore::new();
    let stats_store = FileStatsStore::new();

    let app = if resume {
        let saved = save_store
            .load()
            .context("No saved game to resume")?;
        let game = saved.restore().context("Saved game is corrupt")?;
        let dictionary = Dictionary::for_length(game.word_length()).ok();
        App::resumed(game, dictionary, save_store, stats_store)
    } else if let Some(list) = words {
        let custom = parse_custom_words(list)?;
        let length = custom[0].len();
        let config = config_for_length(length).unwrap_or(GameConfig {
            extra_attempts: 5,
            initial_lives: 5,
        });
        let game = Game::new(custom, config)?;
        let dictionary = Dictionary::for_length(length).ok();
        App::custom_game(game, dictionary, save_store, stats_store)
    } else {
        let dictionary = Dictionary::for_length(length)?;
        let solutions = dictionary.random_solutions(boards, rare)?;
        let game = Game::new(solutions, dictionary.config())?;
        App::standard(game, dictionary, rare, save_store, stats_store)
    };

    run_tui(app)
}

fn run_trial_command(length: usize, duration: u64) -> Result<()> {
    let dictionary = Dictionary::for_length(length)?;

    let count = DEFAULT_TRIAL_BOARDS.min(dictionary.common().len());
    let solutions = dictionary.random_solutions(count, false)?;
    let trial = TimeTrial::new(solutions, Duration::from_secs(duration))?;

    let app = App::trial(
        trial,
        dictionary,
        FileSaveStore::new(),
        FileStatsStore::new(),
    );
    run_tui(app)
}

fn run_eval_command(guess: &str, solution: &str) -> Result<()> {
    let result = evaluate_words(guess, solution)?;
    print_eval_result(&result);
    Ok(())
}

fn run_stats_command() {
    let stats = FileStatsStore::new().load();
    print_stats(&stats);
}
