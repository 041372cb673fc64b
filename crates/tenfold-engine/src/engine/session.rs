use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    ConfigError, InvalidCardValueError, InvalidMoveError, MatchError,
    core::{Grid, PlayerId, Position},
};

use super::{
    config::{EndPolicy, MatchConfig},
    game_field::GameField,
};

/// A card placement request: which value goes where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub value: u8,
    pub position: Position,
}

impl Move {
    #[must_use]
    pub const fn new(value: u8, row: usize, col: usize) -> Self {
        Self {
            value,
            position: Position::new(row, col),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.value, self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    InProgress,
    GameOver,
}

/// Why a submitted move was refused. The same player moves again.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum MoveRejection {
    #[display("{_0}")]
    InvalidMove(InvalidMoveError),
    #[display("{_0}")]
    InvalidCardValue(InvalidCardValueError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnOutcome {
    Placed {
        player: PlayerId,
        mv: Move,
        points: usize,
        state: MatchState,
    },
    Rejected {
        player: PlayerId,
        reason: MoveRejection,
    },
}

/// Per-player running scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores([usize; 2]);

impl Scores {
    #[must_use]
    pub const fn get(&self, player: PlayerId) -> usize {
        self.0[player.index()]
    }

    const fn add(&mut self, player: PlayerId, points: usize) {
        self.0[player.index()] += points;
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, usize)> + '_ {
        PlayerId::ALL.into_iter().map(|id| (id, self.get(id)))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Compares the two scores: strictly higher wins, equal is a tie.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let first = self.get(PlayerId::First);
        let second = self.get(PlayerId::Second);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Winner(PlayerId::First),
            std::cmp::Ordering::Less => Outcome::Winner(PlayerId::Second),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(player) => write!(f, "{player} wins"),
            Self::Tie => f.write_str("tie"),
        }
    }
}

/// Turn sequencing, scoring and end detection for one match.
///
/// Moves come in through [`MatchSession::submit_move`], either from a
/// [`MatchController`](super::MatchController) driving two agents or from an
/// interactive front-end.
///
/// ```text
/// submit_move ──► card in range? ──no──► Rejected (same player again)
///                     │yes
///                     ▼
///               cell free & on board? ──no──► Rejected (same player again)
///                     │yes
///                     ▼
///               place + credit combinations ──► add points ──► next player
///                                                   │
///                                        end policy fired? ──► GameOver
/// ```
#[derive(Debug, Clone)]
pub struct MatchSession {
    config: MatchConfig,
    field: GameField,
    scores: Scores,
    current_player: PlayerId,
    state: MatchState,
    completed_turns: usize,
    consecutive_rejections: usize,
}

impl MatchSession {
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = GameField::new(config.board_size, config.target_sum)?;
        info!(
            board_size = config.board_size,
            target_sum = config.target_sum,
            end_policy = ?config.end_policy,
            "match started"
        );
        Ok(Self {
            config,
            field,
            scores: Scores::default(),
            current_player: PlayerId::First,
            state: MatchState::InProgress,
            completed_turns: 0,
            consecutive_rejections: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.field.grid()
    }

    #[must_use]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[must_use]
    pub fn completed_turns(&self) -> usize {
        self.completed_turns
    }

    #[must_use]
    pub fn consecutive_rejections(&self) -> usize {
        self.consecutive_rejections
    }

    /// Result of the match by current scores. Final once the state is
    /// [`MatchState::GameOver`].
    #[must_use]
    pub fn winner(&self) -> Outcome {
        self.scores.outcome()
    }

    /// Applies a move for the current player.
    ///
    /// A rejected move leaves the field, the scores and the turn pointer untouched.
    pub fn submit_move(&mut self, mv: Move) -> Result<TurnOutcome, MatchError> {
        if self.state.is_game_over() {
            return Err(MatchError::MatchOver);
        }
        let player = self.current_player;

        let placed = self
            .config
            .card_range
            .check(mv.value)
            .map_err(MoveRejection::from)
            .and_then(|value| {
                self.field
                    .place_and_score(mv.position, value, player)
                    .map_err(MoveRejection::from)
            });
        let points = match placed {
            Ok(points) => points,
            Err(reason) => {
                self.consecutive_rejections += 1;
                warn!(%player, %mv, %reason, "move rejected");
                return Ok(TurnOutcome::Rejected { player, reason });
            }
        };

        self.consecutive_rejections = 0;
        self.completed_turns += 1;
        self.scores.add(player, points);
        debug!(%player, %mv, points, "card placed");

        if self.end_reached() {
            self.state = MatchState::GameOver;
            info!(
                first = self.scores.get(PlayerId::First),
                second = self.scores.get(PlayerId::Second),
                outcome = %self.winner(),
                "match over"
            );
        } else {
            self.current_player = player.other();
        }

        Ok(TurnOutcome::Placed {
            player,
            mv,
            points,
            state: self.state,
        })
    }

    fn end_reached(&self) -> bool {
        if self.field.is_full() {
            return true;
        }
        match self.config.end_policy {
            EndPolicy::BoardFull => false,
            EndPolicy::ScoreThreshold(threshold) => {
                self.scores.iter().any(|(_, score)| score >= threshold)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(board_size: usize) -> MatchSession {
        MatchSession::new(MatchConfig::default().with_board_size(board_size)).unwrap()
    }

    #[test]
    fn test_turns_alternate_and_points_accumulate() {
        let mut session = session(5);
        let moves = [
            Move::new(3, 0, 0),
            Move::new(1, 4, 4),
            Move::new(3, 0, 1),
            Move::new(1, 4, 3),
            Move::new(4, 0, 2),
        ];
        let mut outcomes = vec![];
        for mv in moves {
            outcomes.push(session.submit_move(mv).unwrap());
        }
        assert!(matches!(
            outcomes[4],
            TurnOutcome::Placed {
                player: PlayerId::First,
                points: 1,
                state: MatchState::InProgress,
                ..
            }
        ));
        assert_eq!(session.scores().get(PlayerId::First), 1);
        assert_eq!(session.scores().get(PlayerId::Second), 0);
        assert_eq!(session.current_player(), PlayerId::Second);
        assert_eq!(session.completed_turns(), 5);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = session(3);
        session.submit_move(Move::new(2, 1, 1)).unwrap();
        assert_eq!(session.current_player(), PlayerId::Second);

        let before = session.field().clone();
        let occupied = session.submit_move(Move::new(5, 1, 1)).unwrap();
        assert!(matches!(
            occupied,
            TurnOutcome::Rejected {
                player: PlayerId::Second,
                reason: MoveRejection::InvalidMove(InvalidMoveError::Occupied { .. })
            }
        ));
        let out_of_bounds = session.submit_move(Move::new(5, 0, 3)).unwrap();
        assert!(out_of_bounds.is_rejected());
        let bad_value = session.submit_move(Move::new(9, 0, 0)).unwrap();
        assert!(matches!(
            bad_value,
            TurnOutcome::Rejected {
                reason: MoveRejection::InvalidCardValue(_),
                ..
            }
        ));

        assert_eq!(session.field(), &before);
        assert_eq!(session.current_player(), PlayerId::Second);
        assert_eq!(session.consecutive_rejections(), 3);

        session.submit_move(Move::new(5, 0, 0)).unwrap();
        assert_eq!(session.current_player(), PlayerId::First);
        assert_eq!(session.consecutive_rejections(), 0);
    }

    #[test]
    fn test_board_full_ends_match() {
        let mut session = session(3);
        let positions: Vec<_> = session.grid().positions().collect();
        for (i, pos) in positions.iter().enumerate() {
            assert!(session.state().is_in_progress());
            let outcome = session.submit_move(Move::new(1, pos.row, pos.col)).unwrap();
            if i + 1 == positions.len() {
                assert!(matches!(
                    outcome,
                    TurnOutcome::Placed {
                        state: MatchState::GameOver,
                        ..
                    }
                ));
            }
        }
        assert!(session.state().is_game_over());
        assert_eq!(session.winner(), Outcome::Tie);
        assert_eq!(
            session.submit_move(Move::new(1, 0, 0)),
            Err(MatchError::MatchOver)
        );
    }

    #[test]
    fn test_score_threshold_ends_match_early() {
        let config = MatchConfig::default().with_end_policy(EndPolicy::ScoreThreshold(1));
        let mut session = MatchSession::new(config).unwrap();
        for mv in [
            Move::new(3, 0, 0),
            Move::new(8, 4, 4),
            Move::new(3, 0, 1),
            Move::new(8, 4, 2),
            Move::new(4, 0, 2),
        ] {
            session.submit_move(mv).unwrap();
        }
        assert!(session.state().is_game_over());
        assert_eq!(session.winner(), Outcome::Winner(PlayerId::First));
        assert_eq!(session.current_player(), PlayerId::First);
    }

    #[test]
    fn test_outcome() {
        let mut scores = Scores::default();
        assert_eq!(scores.outcome(), Outcome::Tie);
        scores.add(PlayerId::Second, 2);
        assert_eq!(scores.outcome(), Outcome::Winner(PlayerId::Second));
        scores.add(PlayerId::First, 2);
        assert_eq!(scores.outcome(), Outcome::Tie);
        scores.add(PlayerId::First, 1);
        assert_eq!(scores.outcome(), Outcome::Winner(PlayerId::First));
        assert_eq!(scores.total(), 5);
        assert_eq!(scores.outcome().to_string(), "Player 1 wins");
    }
}
