use serde::{Deserialize, Serialize};

use crate::{
    ConfigError,
    core::{CardRange, Grid},
};

use super::tracker::CombinationTracker;

/// When a match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndPolicy {
    /// The match ends when every cell is occupied.
    #[default]
    BoardFull,
    /// The match ends as soon as a player reaches the given score, or when the
    /// board fills up, whichever comes first.
    ScoreThreshold(usize),
}

/// Match parameters.
///
/// Deserialization fills missing fields from [`MatchConfig::default`]:
///
/// ```
/// use tenfold_engine::{EndPolicy, MatchConfig};
///
/// let config: MatchConfig = serde_json::from_str(r#"{ "board_size": 7 }"#).unwrap();
/// assert_eq!(config.board_size, 7);
/// assert_eq!(config.target_sum, 10);
/// assert_eq!(config.end_policy, EndPolicy::BoardFull);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub board_size: usize,
    pub target_sum: u32,
    pub card_range: CardRange,
    pub end_policy: EndPolicy,
    /// Consecutive rejected moves tolerated from one player before the turn fails.
    pub max_rejections: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: 5,
            target_sum: CombinationTracker::DEFAULT_TARGET_SUM,
            card_range: CardRange::STANDARD,
            end_policy: EndPolicy::BoardFull,
            max_rejections: 16,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_board_size(self, board_size: usize) -> Self {
        Self { board_size, ..self }
    }

    #[must_use]
    pub fn with_end_policy(self, end_policy: EndPolicy) -> Self {
        Self { end_policy, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::check_size(self.board_size)?;
        self.card_range.validate()?;
        if self.end_policy == EndPolicy::ScoreThreshold(0) {
            return Err(ConfigError::ZeroScoreThreshold);
        }
        if self.max_rejections == 0 {
            return Err(ConfigError::ZeroRetryLimit);
        }
        Ok(())
    }
}
