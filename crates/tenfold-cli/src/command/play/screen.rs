use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget as _},
};
use tenfold_engine::{
    MatchError, MatchSession, Move, Outcome, PlayerAgent, PlayerId, Position, TurnOutcome,
};
use tracing::info;

use crate::ui::widgets::{GridDisplay, ScoreboardDisplay, color, style};

const MAX_MESSAGES: usize = 6;

/// Who decides the moves of a seat.
#[derive(Debug)]
pub(crate) enum Seat {
    /// Moves come from the keyboard.
    Human,
    Agent(Box<dyn PlayerAgent>),
}

impl Seat {
    fn is_human(&self) -> bool {
        matches!(self, Seat::Human)
    }
}

#[derive(Debug, Clone)]
struct Message {
    player: Option<PlayerId>,
    text: String,
}

#[derive(Debug)]
pub(crate) struct PlayScreen {
    session: MatchSession,
    seats: [Seat; 2],
    names: [String; 2],
    cursor: Position,
    value: u8,
    ai_delay: Duration,
    turn_started: Instant,
    paused: bool,
    messages: VecDeque<Message>,
    failure: Option<String>,
    is_exiting: bool,
}

impl PlayScreen {
    pub(crate) fn new(
        session: MatchSession,
        seats: [Seat; 2],
        names: [String; 2],
        ai_delay: Duration,
    ) -> Self {
        let center = session.grid().size() / 2;
        let value = session.config().card_range.min();
        Self {
            session,
            seats,
            names,
            cursor: Position::new(center, center),
            value,
            ai_delay,
            turn_started: Instant::now(),
            paused: false,
            messages: VecDeque::new(),
            failure: None,
            is_exiting: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &MatchSession {
        &self.session
    }

    pub(crate) fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }

    fn is_playing(&self) -> bool {
        !self.is_exiting && self.failure.is_none() && self.session.state().is_in_progress()
    }

    fn is_human_turn(&self) -> bool {
        self.is_playing() && self.seats[self.session.current_player().index()].is_human()
    }

    /// One-line result, available once the match is over.
    pub(crate) fn result_text(&self) -> Option<String> {
        if let Some(failure) = &self.failure {
            return Some(format!("Match aborted: {failure}"));
        }
        if self.session.state().is_in_progress() {
            return None;
        }
        let scores = self.session.scores();
        let headline = match self.session.winner() {
            Outcome::Winner(player) => format!("{} wins!", self.name(player)),
            Outcome::Tie => "It's a tie!".to_owned(),
        };
        Some(format!(
            "{headline} ({} {} - {} {})",
            self.name(PlayerId::First),
            scores.get(PlayerId::First),
            scores.get(PlayerId::Second),
            self.name(PlayerId::Second),
        ))
    }

    pub(crate) fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_press_event() else {
            return;
        };
        let is_human_turn = self.is_human_turn();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            KeyCode::Char('p') if self.is_playing() => self.paused = !self.paused,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right if is_human_turn => {
                self.cursor = move_cursor(self.cursor, key.code, self.session.grid().size());
            }
            KeyCode::Char(c) if is_human_turn && c.is_ascii_digit() => self.select_value(c),
            KeyCode::Enter | KeyCode::Char(' ') if is_human_turn && !self.paused => {
                self.submit(Move {
                    value: self.value,
                    position: self.cursor,
                });
            }
            _ => {}
        }
    }

    pub(crate) fn update(&mut self) {
        if !self.is_playing() || self.paused {
            return;
        }
        if self.is_human_turn() || self.turn_started.elapsed() < self.ai_delay {
            return;
        }
        self.play_agent_turn();
    }

    fn select_value(&mut self, c: char) {
        let range = self.session.config().card_range;
        let value = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
        match value.map(|v| range.check(v)) {
            Some(Ok(value)) => self.value = value,
            Some(Err(err)) => self.push_message(None, err.to_string()),
            None => {}
        }
    }

    fn play_agent_turn(&mut self) {
        let player = self.session.current_player();
        let values = self.session.config().card_range;
        let Seat::Agent(agent) = &mut self.seats[player.index()] else {
            return;
        };
        match agent.decide_move(self.session.field(), values, player) {
            Ok(mv) => self.submit(mv),
            Err(err) => self.failure = Some(MatchError::Agent(err).to_string()),
        }

        let max_rejections = self.session.config().max_rejections;
        let attempts = self.session.consecutive_rejections();
        if self.failure.is_none() && attempts >= max_rejections {
            let err = MatchError::RetryLimitExceeded { player, attempts };
            self.failure = Some(err.to_string());
        }
    }

    fn submit(&mut self, mv: Move) {
        match self.session.submit_move(mv) {
            Ok(TurnOutcome::Placed {
                player,
                mv,
                points,
                state,
            }) => {
                let name = self.name(player).to_owned();
                self.push_message(Some(player), format!("{name} played {mv}"));
                if points > 0 {
                    let plural = if points == 1 { "" } else { "s" };
                    self.push_message(
                        Some(player),
                        format!("{name} earned {points} point{plural}!"),
                    );
                }
                if state.is_game_over()
                    && let Some(result) = self.result_text()
                {
                    info!(%result, "match finished");
                    self.push_message(None, result);
                }
                self.turn_started = Instant::now();
            }
            Ok(TurnOutcome::Rejected { player, reason }) => {
                let name = self.name(player).to_owned();
                self.push_message(Some(player), format!("{name}: {reason}"));
            }
            Err(err) => self.failure = Some(err.to_string()),
        }
    }

    fn push_message(&mut self, player: Option<PlayerId>, text: String) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(Message { player, text });
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        let border_style = if self.failure.is_some() || !self.session.state().is_in_progress() {
            color::RED
        } else if self.paused {
            color::YELLOW
        } else {
            color::WHITE
        };

        let cursor = self.is_human_turn().then_some(self.cursor);
        let grid = GridDisplay::new(self.session.field())
            .cursor(cursor)
            .block(
                Block::bordered()
                    .title(Line::from(" 3 FOR 10 ").centered())
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let names = [self.name(PlayerId::First), self.name(PlayerId::Second)];
        let scoreboard = ScoreboardDisplay::new(&self.session, names).block(
            Block::bordered()
                .title(Line::from(" SCORE ").centered())
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let scoreboard_height = scoreboard.height();
        let card_panel = Paragraph::new(self.card_line()).block(
            Block::bordered()
                .title(Line::from(" CARD ").centered())
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let messages = Paragraph::new(self.message_lines()).block(
            Block::bordered()
                .title(Line::from(" LOG ").centered())
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let help = Text::from(self.help_text()).style(style::HELP).centered();

        let [main_area, log_area, help_area] = Layout::vertical([
            Constraint::Length(grid.height().max(scoreboard_height + 3)),
            Constraint::Length(u16::try_from(MAX_MESSAGES).unwrap_or(u16::MAX) + 2),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [board_area, side_area] =
            Layout::horizontal([Constraint::Length(grid.width()), Constraint::Length(30)])
                .flex(Flex::Center)
                .spacing(1)
                .areas(main_area);
        let [score_area, card_area] = Layout::vertical([
            Constraint::Length(scoreboard_height),
            Constraint::Length(3),
        ])
        .areas(side_area);
        let log_area = log_area.centered_horizontally(Constraint::Length(grid.width() + 31));

        let grid_area = board_area.centered_vertically(Constraint::Length(grid.height()));
        frame.render_widget(&grid, grid_area);
        frame.render_widget(scoreboard, score_area);
        frame.render_widget(card_panel, card_area);
        frame.render_widget(messages, log_area);
        frame.render_widget(help, help_area);

        if let Some(result) = self.result_text() {
            let banner_style = Style::new().fg(color::WHITE).bg(color::RED);
            let area = grid_area.centered(Constraint::Length(grid.width()), Constraint::Length(3));
            let block = Block::new().style(banner_style);
            let inner = block.inner(area);
            Clear.render(area, frame.buffer_mut());
            block.render(area, frame.buffer_mut());
            Text::styled(result, banner_style)
                .centered()
                .render(inner.centered_vertically(Constraint::Length(1)), frame.buffer_mut());
        }
    }

    fn card_line(&self) -> Line<'static> {
        let range = self.session.config().card_range;
        let active = self.is_human_turn();
        let spans = range.values().map(|v| {
            let text = format!(" {v} ");
            if active && v == self.value {
                Span::styled(text, style::CURSOR.add_modifier(Modifier::REVERSED))
            } else {
                Span::styled(text, style::LABEL)
            }
        });
        Line::from(spans.collect::<Vec<_>>()).centered()
    }

    fn message_lines(&self) -> Vec<Line<'_>> {
        self.messages
            .iter()
            .map(|m| {
                let style = match m.player {
                    Some(player) => Style::new().fg(style::player_fg(player)),
                    None => Style::new().fg(color::YELLOW),
                };
                Line::styled(m.text.as_str(), style)
            })
            .collect()
    }

    fn help_text(&self) -> String {
        if !self.is_playing() {
            return "Controls: q (Quit)".to_owned();
        }
        if self.paused {
            return "Controls: p (Resume) | q (Quit)".to_owned();
        }
        if self.is_human_turn() {
            let range = self.session.config().card_range;
            return format!(
                "Controls: ← ↑ → ↓ (Cell) | {}-{} (Card) | Enter/Space (Place) | p (Pause) | q (Quit)",
                range.min(),
                range.max()
            );
        }
        let thinking = self.name(self.session.current_player());
        format!("{thinking} is thinking... | p (Pause) | q (Quit)")
    }
}

/// Moves the cursor one cell, staying on the board.
fn move_cursor(cursor: Position, key: KeyCode, size: usize) -> Position {
    let (d_row, d_col) = match key {
        KeyCode::Up => (-1, 0),
        KeyCode::Down => (1, 0),
        KeyCode::Left => (0, -1),
        KeyCode::Right => (0, 1),
        _ => (0, 0),
    };
    cursor
        .offset(d_row, d_col)
        .filter(|p| p.is_within(size))
        .unwrap_or(cursor)
}
