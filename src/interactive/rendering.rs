//! TUI rendering with ratatui
//!
//! Board grids, the colored on-screen keyboard, and the end-of-game
//! overlay.

use super::app::{App, Mode};
use crate::core::{KeyState, LetterState};
use crate::game::{Board, Cell, Game, TimeTrial};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Boards
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match &app.mode {
        Mode::Standard(game) => render_boards(f, app, game, chunks[1]),
        Mode::Trial(trial) => render_trial(f, app, trial, chunks[1]),
    }

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_end_overlay {
        render_end_overlay(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.mode {
        Mode::Standard(_) => "WORDLE INFINITO",
        Mode::Trial(_) => "WORDLE INFINITO - Time Trial",
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_boards(f: &mut Frame, app: &App, game: &Game, area: Rect) {
    let areas = board_grid(area, game.boards().len());

    for (board, cell_area) in game.boards().iter().zip(areas) {
        render_board(
            f,
            app,
            board,
            game.is_over(),
            game.is_last_attempt(),
            cell_area,
        );
    }
}

fn render_trial(f: &mut Frame, app: &App, trial: &TimeTrial, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(7)])
        .split(area);

    render_countdown(f, trial, chunks[0]);

    if let Some(board) = trial.current_board() {
        // Center the single active board
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ])
            .split(chunks[1])[1];

        render_board(f, app, board, trial.is_over(), false, board_area);
    }
}

fn render_countdown(f: &mut Frame, trial: &TimeTrial, area: Rect) {
    let remaining = trial.remaining();
    let total = trial.duration().as_secs_f64();
    let ratio = if total > 0.0 {
        (remaining.as_secs_f64() / total).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "{}:{:02} | {} words guessed",
            remaining.as_secs() / 60,
            remaining.as_secs() % 60,
            trial.solved_count()
        ));

    f.render_widget(gauge, area);
}

/// Split an area into a near-square grid of `count` cells
fn board_grid(area: Rect, count: usize) -> Vec<Rect> {
    let cols = (count as f64).sqrt().ceil() as usize;
    let cols = cols.max(1);
    let rows = count.div_ceil(cols);

    let row_constraints = vec![Constraint::Ratio(1, rows as u32); rows];
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for (r, row_area) in row_areas.iter().enumerate() {
        let in_this_row = (count - r * cols).min(cols);
        let col_constraints = vec![Constraint::Ratio(1, cols as u32); cols];
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);
        cells.extend(col_areas.iter().take(in_this_row).copied());
    }
    cells
}

fn render_board(
    f: &mut Frame,
    app: &App,
    board: &Board,
    game_over: bool,
    last_attempt: bool,
    area: Rect,
) {
    let rows = board.rows(&app.input, game_over, last_attempt);

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for cell in row {
                spans.push(cell_span(*cell));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let border_style = if board.is_solved() {
        Style::default().fg(Color::Green)
    } else if board.is_completed() || game_over {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if game_over && !board.is_solved() {
        // Reveal the missed solution
        format!(" {} ", board.solution().text())
    } else {
        format!(" {} ", board.id() + 1)
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );

    f.render_widget(paragraph, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Cell::Pending(ch) => Span::styled(
            format!(" {ch} "),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Scored(ch, state) => Span::styled(
            format!(" {ch} "),
            Style::default()
                .fg(Color::Black)
                .bg(letter_state_color(state))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

const fn letter_state_color(state: LetterState) -> Color {
    match state {
        LetterState::Correct => Color::Green,
        LetterState::Present => Color::Yellow,
        LetterState::Absent => Color::DarkGray,
    }
}

const fn key_state_color(state: KeyState) -> Color {
    match state {
        KeyState::Correct => Color::Green,
        KeyState::Present => Color::Yellow,
        KeyState::Absent => Color::DarkGray,
        KeyState::Unplayed => Color::Gray,
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.keyboard_state();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for key in row.chars() {
                let state = keyboard.state(key);
                let style = Style::default()
                    .fg(Color::Black)
                    .bg(key_state_color(state));
                spans.push(Span::styled(format!(" {key} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let progress_text = match &app.mode {
        Mode::Standard(game) => format!(
            "Boards: {}/{} | Attempts: {}/{} | Lives: {}",
            game.solved_count(),
            game.boards().len(),
            game.attempts_used(),
            game.max_attempts(),
            game.lives_remaining(),
        ),
        Mode::Trial(trial) => format!(
            "Word {}/{} | Solved: {}",
            (trial.current_index() + 1).min(trial.total_boards()),
            trial.total_boards(),
            trial.solved_count(),
        ),
    };
    let progress = Paragraph::new(progress_text).alignment(Alignment::Center);
    f.render_widget(progress, chunks[0]);

    let middle = if let Some(error) = &app.error {
        Paragraph::new(error.as_str())
            .style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
    } else {
        Paragraph::new(format!("> {}_", app.input)).alignment(Alignment::Center)
    };
    f.render_widget(middle, chunks[1]);

    let help_text = if app.show_end_overlay {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_end_overlay(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let (title, mut lines) = match &app.mode {
        Mode::Standard(game) => {
            if game.is_won() {
                (
                    " You won! ",
                    vec![Line::from(format!(
                        "All {} boards solved in {} attempts",
                        game.boards().len(),
                        game.attempts_used()
                    ))],
                )
            } else {
                let mut lines = vec![Line::from("Out of attempts. Missed solutions:")];
                let missed: Vec<&str> = game
                    .boards()
                    .iter()
                    .filter(|b| !b.is_solved())
                    .map(|b| b.solution().text())
                    .collect();
                for chunk in missed.chunks(8) {
                    lines.push(Line::from(Span::styled(
                        chunk.join("  "),
                        Style::default().fg(Color::Yellow),
                    )));
                }
                (" Game over ", lines)
            }
        }
        Mode::Trial(trial) => (
            " Time's up! ",
            vec![Line::from(format!(
                "Words guessed: {}",
                trial.solved_count()
            ))],
        ),
    };

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Games: {} | Win rate: {:.0}% | Streak: {} | Best: {}",
        app.stats.games_played,
        app.stats.win_rate(),
        app.stats.current_streak,
        app.stats.best_streak,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 'n' for a new game or 'q' to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}

/// Centered sub-rectangle, sized as percentages of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
