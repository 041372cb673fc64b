use std::path::PathBuf;

use anyhow::Context as _;
use tenfold_engine::{EndPolicy, MatchConfig, PlayerAgent, PlayerId};
use tenfold_evaluator::{
    agent::{HeuristicAgent, RandomAgent},
    placement_evaluator::SignalWeights,
};

use crate::util;

/// Automated player implementations selectable from the command line.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::FromStr)]
pub enum AgentKind {
    #[default]
    Heuristic,
    Random,
}

impl AgentKind {
    pub fn build(
        self,
        name: impl Into<String>,
        weights: SignalWeights,
        seed: Option<u64>,
    ) -> Box<dyn PlayerAgent> {
        match self {
            AgentKind::Heuristic => Box::new(HeuristicAgent::with_weights(name, weights, seed)),
            AgentKind::Random => Box::new(RandomAgent::new(name, seed)),
        }
    }
}

/// Match options shared by every mode.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct MatchArg {
    /// Match configuration file (JSON); the options below override it
    #[clap(long)]
    config: Option<PathBuf>,
    /// Board size (N x N, 3 to 10) [default: 5]
    #[clap(long)]
    board_size: Option<usize>,
    /// End the match as soon as a player reaches this score
    #[clap(long)]
    score_threshold: Option<usize>,
    /// Heuristic signal weights file (JSON)
    #[clap(long)]
    weights: Option<PathBuf>,
    /// Seed for the AI random sources
    #[clap(long)]
    seed: Option<u64>,
}

impl MatchArg {
    pub(crate) fn to_config(&self) -> anyhow::Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_config_file(path)?,
            None => MatchConfig::default(),
        };
        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(threshold) = self.score_threshold {
            config.end_policy = EndPolicy::ScoreThreshold(threshold);
        }
        config.validate().context("Invalid match configuration")?;
        Ok(config)
    }

    pub(crate) fn to_weights(&self) -> anyhow::Result<SignalWeights> {
        match &self.weights {
            Some(path) => util::read_weights_file(path),
            None => Ok(SignalWeights::default()),
        }
    }

    pub(crate) fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seed for the agent in `seat` of the `round`-th match, if seeding was requested.
    pub(crate) fn agent_seed(&self, round: u64, seat: PlayerId) -> Option<u64> {
        let offset = round
            .wrapping_mul(2)
            .wrapping_add(u64::from(seat.is_second()));
        self.seed.map(|seed| seed.wrapping_add(offset))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[clap(flatten)]
        inner: MatchArg,
    }

    fn parse(args: &[&str]) -> MatchArg {
        let argv = std::iter::once("test").chain(args.iter().copied());
        TestArgs::try_parse_from(argv).unwrap().inner
    }

    #[test]
    fn test_overrides() {
        let arg = parse(&["--board-size", "7", "--score-threshold", "4"]);
        let config = arg.to_config().unwrap();
        assert_eq!(config.board_size, 7);
        assert_eq!(config.end_policy, EndPolicy::ScoreThreshold(4));
        assert_eq!(arg.to_weights().unwrap(), SignalWeights::default());
    }

    #[test]
    fn test_invalid_board_size() {
        let err = parse(&["--board-size", "2"]).to_config().unwrap_err();
        assert!(format!("{err:#}").contains("board size must be at least 3"));
        assert!(parse(&["--score-threshold", "0"]).to_config().is_err());
    }

    #[test]
    fn test_agent_seeds_are_distinct() {
        let arg = parse(&["--seed", "10"]);
        assert_eq!(arg.agent_seed(0, PlayerId::First), Some(10));
        assert_eq!(arg.agent_seed(0, PlayerId::Second), Some(11));
        assert_eq!(arg.agent_seed(1, PlayerId::First), Some(12));
        assert_eq!(MatchArg::default().agent_seed(3, PlayerId::Second), None);
    }

    #[test]
    fn test_agent_kind_from_str() {
        assert_eq!("random".parse::<AgentKind>().unwrap(), AgentKind::Random);
        assert_eq!(
            "heuristic".parse::<AgentKind>().unwrap(),
            AgentKind::Heuristic
        );
        assert!("minimax".parse::<AgentKind>().is_err());
    }
}
