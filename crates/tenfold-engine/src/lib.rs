pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Why a placement was refused by the [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    #[display("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },
    #[display("position {position} is already occupied")]
    Occupied { position: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("card value {value} is outside the allowed range {range}")]
pub struct InvalidCardValueError {
    pub value: u8,
    pub range: CardRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no legal move available on a full board")]
pub struct NoLegalMoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("board size must be at least {min}, got {size}")]
    BoardTooSmall { size: usize, min: usize },
    #[display("board size must be at most {max}, got {size}")]
    BoardTooLarge { size: usize, max: usize },
    #[display("card range {min}..={max} is empty")]
    EmptyCardRange { min: u8, max: u8 },
    #[display("score threshold must be positive")]
    ZeroScoreThreshold,
    #[display("at least one attempt per turn must be allowed")]
    ZeroRetryLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatchError {
    #[display("match is already over")]
    MatchOver,
    #[display("{player} submitted {attempts} invalid moves in a row")]
    RetryLimitExceeded { player: PlayerId, attempts: usize },
    #[display("agent failed to produce a move")]
    Agent(NoLegalMoveError),
}
