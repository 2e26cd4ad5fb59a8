//! TUI application state and logic

use crate::core::{KeyboardState, Word, is_game_letter};
use crate::dictionary::{Dictionary, GameConfig, config_for_length};
use crate::game::{FileSaveStore, Game, SaveStore, SavedGame, TimeTrial};
use crate::stats::{FileStatsStore, PlayerStats, StatsStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Which engine the session is running
pub enum Mode {
    Standard(Game),
    Trial(TimeTrial),
}

/// How to build the next game when the player asks for another round
#[derive(Debug, Clone)]
pub enum SessionSettings {
    Standard { board_count: usize, rare: bool },
    Custom,
    Trial { boards: usize, duration: Duration },
}

/// Application state
pub struct App {
    pub mode: Mode,
    pub settings: SessionSettings,
    pub dictionary: Option<Dictionary>,
    pub custom: Vec<Word>,
    pub input: String,
    pub error: Option<String>,
    pub stats: PlayerStats,
    pub show_end_overlay: bool,
    pub should_quit: bool,
    save_store: FileSaveStore,
    stats_store: FileStatsStore,
    recorded: bool,
}

impl App {
    /// Start a standard multi-board session
    #[must_use]
    pub fn standard(
        game: Game,
        dictionary: Dictionary,
        rare: bool,
        save_store: FileSaveStore,
        stats_store: FileStatsStore,
    ) -> Self {
        let settings = SessionSettings::Standard {
            board_count: game.boards().len(),
            rare,
        };
        let mut app = Self::build(
            Mode::Standard(game),
            settings,
            Some(dictionary),
            Vec::new(),
            save_store,
            stats_store,
        );
        app.persist_save();
        app
    }

    /// Start a session over user-supplied solution words
    #[must_use]
    pub fn custom_game(
        game: Game,
        dictionary: Option<Dictionary>,
        save_store: FileSaveStore,
        stats_store: FileStatsStore,
    ) -> Self {
        let custom = game
            .boards()
            .iter()
            .map(|b| b.solution().clone())
            .collect();
        let mut app = Self::build(
            Mode::Standard(game),
            SessionSettings::Custom,
            dictionary,
            custom,
            save_store,
            stats_store,
        );
        app.persist_save();
        app
    }

    /// Resume a previously saved standard session
    #[must_use]
    pub fn resumed(
        game: Game,
        dictionary: Option<Dictionary>,
        save_store: FileSaveStore,
        stats_store: FileStatsStore,
    ) -> Self {
        // Solutions double as accepted guesses so a resumed custom game
        // still accepts its own words
        let custom = game
            .boards()
            .iter()
            .map(|b| b.solution().clone())
            .collect();
        let settings = SessionSettings::Standard {
            board_count: game.boards().len(),
            rare: false,
        };
        Self::build(
            Mode::Standard(game),
            settings,
            dictionary,
            custom,
            save_store,
            stats_store,
        )
    }

    /// Start a time trial
    #[must_use]
    pub fn trial(
        trial: TimeTrial,
        dictionary: Dictionary,
        save_store: FileSaveStore,
        stats_store: FileStatsStore,
    ) -> Self {
        let settings = SessionSettings::Trial {
            boards: trial.total_boards(),
            duration: trial.duration(),
        };
        Self::build(
            Mode::Trial(trial),
            settings,
            Some(dictionary),
            Vec::new(),
            save_store,
            stats_store,
        )
    }

    fn build(
        mode: Mode,
        settings: SessionSettings,
        dictionary: Option<Dictionary>,
        custom: Vec<Word>,
        save_store: FileSaveStore,
        stats_store: FileStatsStore,
    ) -> Self {
        let stats = stats_store.load();
        Self {
            mode,
            settings,
            dictionary,
            custom,
            input: String::new(),
            error: None,
            stats,
            show_end_overlay: false,
            should_quit: false,
            save_store,
            stats_store,
            recorded: false,
        }
    }

    /// Length of the words being guessed
    #[must_use]
    pub fn word_length(&self) -> usize {
        match &self.mode {
            Mode::Standard(game) => game.word_length(),
            Mode::Trial(trial) => trial.word_length(),
        }
    }

    /// True once the current session accepts no more guesses
    #[must_use]
    pub fn is_over(&self) -> bool {
        match &self.mode {
            Mode::Standard(game) => game.is_over(),
            Mode::Trial(trial) => trial.is_over(),
        }
    }

    /// Keyboard highlighting for the current session
    #[must_use]
    pub fn keyboard_state(&self) -> KeyboardState {
        match &self.mode {
            Mode::Standard(game) => game.keyboard_state(),
            Mode::Trial(trial) => trial.keyboard_state(),
        }
    }

    /// Append a typed letter to the pending guess
    pub fn push_letter(&mut self, ch: char) {
        if self.is_over() {
            return;
        }
        self.error = None;

        for upper in ch.to_uppercase() {
            if is_game_letter(upper) && self.input.chars().count() < self.word_length() {
                self.input.push(upper);
            }
        }
    }

    /// Delete the last pending letter
    pub fn backspace(&mut self) {
        self.error = None;
        self.input.pop();
    }

    /// Whether a word may be submitted as a guess
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.dictionary
            .as_ref()
            .is_some_and(|d| d.is_accepted(word))
            || self.custom.contains(word)
    }

    /// Submit the pending guess
    pub fn submit_input(&mut self) {
        if self.is_over() {
            return;
        }

        let length = self.word_length();
        if self.input.chars().count() != length {
            self.error = Some(format!("The word must have {length} letters"));
            return;
        }

        let word = match Word::new(&self.input) {
            Ok(word) => word,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        if !self.is_accepted(&word) {
            self.error = Some("Word not in the dictionary".to_string());
            return;
        }

        match &mut self.mode {
            Mode::Standard(game) => match game.submit(&word) {
                Ok(outcome) => {
                    self.input.clear();
                    self.error = None;
                    if outcome.game_over {
                        self.finish_standard(outcome.won);
                    } else {
                        self.persist_save();
                    }
                }
                Err(e) => self.error = Some(e.to_string()),
            },
            Mode::Trial(trial) => match trial.submit(&word) {
                Ok(outcome) => {
                    self.input.clear();
                    self.error = None;
                    if outcome.trial_over {
                        self.finish_trial();
                    }
                }
                Err(e) => self.error = Some(e.to_string()),
            },
        }
    }

    /// Periodic housekeeping between input events
    ///
    /// A time trial can end by the clock alone, without a final submission.
    pub fn tick(&mut self) {
        if let Mode::Trial(trial) = &self.mode
            && trial.is_over()
            && !self.recorded
        {
            self.finish_trial();
        }
    }

    fn finish_standard(&mut self, won: bool) {
        if !self.recorded {
            self.recorded = true;
            self.stats.record_game(won);
            if let Err(e) = self.stats_store.save(&self.stats) {
                self.error = Some(format!("Could not save stats: {e}"));
            }
            if let Err(e) = self.save_store.clear() {
                self.error = Some(format!("Could not clear saved game: {e}"));
            }
        }
        self.show_end_overlay = true;
    }

    fn finish_trial(&mut self) {
        if !self.recorded {
            self.recorded = true;
            let score = match &self.mode {
                Mode::Trial(trial) => trial.solved_count(),
                Mode::Standard(_) => 0,
            };
            self.stats.record_time_trial(score);
            if let Err(e) = self.stats_store.save(&self.stats) {
                self.error = Some(format!("Could not save stats: {e}"));
            }
        }
        self.show_end_overlay = true;
    }

    fn persist_save(&mut self) {
        if let Mode::Standard(game) = &self.mode
            && !game.is_over()
            && let Err(e) = self.save_store.save(&SavedGame::capture(game))
        {
            self.error = Some(format!("Could not save game: {e}"));
        }
    }

    /// Start another round with the session's settings
    pub fn new_game(&mut self) {
        let result = self.fresh_mode();
        match result {
            Ok(mode) => {
                self.mode = mode;
                self.input.clear();
                self.error = None;
                self.show_end_overlay = false;
                self.recorded = false;
                self.persist_save();
            }
            Err(message) => self.error = Some(message),
        }
    }

    fn fresh_mode(&self) -> Result<Mode, String> {
        match &self.settings {
            SessionSettings::Standard { board_count, rare } => {
                let dictionary = self
                    .dictionary
                    .as_ref()
                    .ok_or_else(|| "No dictionary for this word length".to_string())?;
                let solutions = dictionary
                    .random_solutions(*board_count, *rare)
                    .map_err(|e| e.to_string())?;
                let game =
                    Game::new(solutions, dictionary.config()).map_err(|e| e.to_string())?;
                Ok(Mode::Standard(game))
            }
            SessionSettings::Custom => {
                let length = self.custom.first().map_or(0, Word::len);
                let config = config_for_length(length).unwrap_or(GameConfig {
                    extra_attempts: 5,
                    initial_lives: 5,
                });
                let game = Game::new(self.custom.clone(), config).map_err(|e| e.to_string())?;
                Ok(Mode::Standard(game))
            }
            SessionSettings::Trial { boards, duration } => {
                let dictionary = self
                    .dictionary
                    .as_ref()
                    .ok_or_else(|| "No dictionary for this word length".to_string())?;
                let count = (*boards).min(dictionary.common().len());
                let solutions = dictionary
                    .random_solutions(count, false)
                    .map_err(|e| e.to_string())?;
                let trial = TimeTrial::new(solutions, *duration).map_err(|e| e.to_string())?;
                Ok(Mode::Trial(trial))
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the trial countdown keeps moving without input
        if event::poll(Duration::from_millis(150))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.show_end_overlay {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n' | 'N') => {
                        app.new_game();
                    }
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(ch) => {
                        app.push_letter(ch);
                    }
                    KeyCode::Backspace => {
                        app.backspace();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
