use serde::{Deserialize, Serialize};

/// One of the two seats in a match.
///
/// Turn order is round-robin: [`PlayerId::First`] moves first, then the seats
/// alternate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    #[display("Player 1")]
    First,
    #[display("Player 2")]
    Second,
}

impl PlayerId {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}
