use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tenfold_engine::{MatchConfig, MatchController, Outcome, PlayerId};
use tenfold_evaluator::placement_evaluator::SignalWeights;
use tracing::{debug, info};

use crate::{
    command::match_arg::{AgentKind, MatchArg},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    game: MatchArg,
    /// Number of matches to play
    #[clap(long, default_value_t = 100)]
    matches: u64,
    /// Agent in the first seat
    #[clap(long, default_value = "heuristic")]
    first: AgentKind,
    /// Agent in the second seat
    #[clap(long, default_value = "heuristic")]
    second: AgentKind,
    /// Output file path (JSON); stdout when omitted
    #[clap(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct MatchRecord {
    index: u64,
    first_score: usize,
    second_score: usize,
    turns: usize,
    outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
struct SimulationSummary {
    generated_at: DateTime<Utc>,
    config: MatchConfig,
    weights: SignalWeights,
    seed: Option<u64>,
    first_agent: String,
    second_agent: String,
    matches: u64,
    first_wins: u64,
    second_wins: u64,
    ties: u64,
    mean_first_score: f64,
    mean_second_score: f64,
    results: Vec<MatchRecord>,
}

impl SimulationSummary {
    #[expect(clippy::cast_precision_loss)]
    fn from_records(
        arg: &SimulateArg,
        config: MatchConfig,
        weights: SignalWeights,
        results: Vec<MatchRecord>,
    ) -> Self {
        let count_outcome =
            |outcome: Outcome| results.iter().filter(|r| r.outcome == outcome).count() as u64;
        let mean = |score: fn(&MatchRecord) -> usize| {
            if results.is_empty() {
                0.0
            } else {
                results.iter().map(score).sum::<usize>() as f64 / results.len() as f64
            }
        };
        Self {
            generated_at: Utc::now(),
            config,
            weights,
            seed: arg.game.seed(),
            first_agent: arg.first.to_string(),
            second_agent: arg.second.to_string(),
            matches: results.len() as u64,
            first_wins: count_outcome(Outcome::Winner(PlayerId::First)),
            second_wins: count_outcome(Outcome::Winner(PlayerId::Second)),
            ties: count_outcome(Outcome::Tie),
            mean_first_score: mean(|r| r.first_score),
            mean_second_score: mean(|r| r.second_score),
            results,
        }
    }
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let config = arg.game.to_config()?;
    let weights = arg.game.to_weights()?;
    let mut output = Output::from_output_path(arg.output.clone())?;

    let results = (0..arg.matches)
        .map(|index| play_match(arg, config, weights, index))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let summary = SimulationSummary::from_records(arg, config, weights, results);
    info!(
        matches = summary.matches,
        first_wins = summary.first_wins,
        second_wins = summary.second_wins,
        ties = summary.ties,
        "simulation finished"
    );
    output.write_json(&summary)?;
    if let Output::File { path, .. } = &output {
        eprintln!("Summary written to {}", path.display());
    }
    Ok(())
}

fn play_match(
    arg: &SimulateArg,
    config: MatchConfig,
    weights: SignalWeights,
    index: u64,
) -> anyhow::Result<MatchRecord> {
    let first = arg
        .first
        .build("first", weights, arg.game.agent_seed(index, PlayerId::First));
    let second = arg
        .second
        .build("second", weights, arg.game.agent_seed(index, PlayerId::Second));
    let mut controller = MatchController::new(config, first, second)?;
    let outcome = controller.run_to_end()?;

    let scores = controller.scores();
    let record = MatchRecord {
        index,
        first_score: scores.get(PlayerId::First),
        second_score: scores.get(PlayerId::Second),
        turns: controller.session().completed_turns(),
        outcome,
    };
    debug!(?record, "match simulated");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[clap(flatten)]
        inner: SimulateArg,
    }

    fn parse(args: &[&str]) -> SimulateArg {
        let argv = std::iter::once("test").chain(args.iter().copied());
        TestArgs::try_parse_from(argv).unwrap().inner
    }

    #[test]
    fn test_seeded_matches_are_reproducible() {
        let arg = parse(&["--board-size", "4", "--seed", "3", "--second", "random"]);
        let config = arg.game.to_config().unwrap();
        let weights = arg.game.to_weights().unwrap();

        let a = play_match(&arg, config, weights, 0).unwrap();
        let b = play_match(&arg, config, weights, 0).unwrap();
        assert_eq!(a.turns, 16);
        assert_eq!(a.first_score, b.first_score);
        assert_eq!(a.second_score, b.second_score);
        assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn test_summary_counts() {
        let arg = parse(&["--matches", "3"]);
        let record = |index, first_score, second_score, outcome| MatchRecord {
            index,
            first_score,
            second_score,
            turns: 25,
            outcome,
        };
        let results = vec![
            record(0, 3, 1, Outcome::Winner(PlayerId::First)),
            record(1, 2, 2, Outcome::Tie),
            record(2, 1, 3, Outcome::Winner(PlayerId::Second)),
        ];
        let summary = SimulationSummary::from_records(
            &arg,
            MatchConfig::default(),
            SignalWeights::default(),
            results,
        );
        assert_eq!(summary.matches, 3);
        assert_eq!(
            (summary.first_wins, summary.second_wins, summary.ties),
            (1, 1, 1)
        );
        assert!((summary.mean_first_score - 2.0).abs() < f64::EPSILON);
        assert_eq!(summary.first_agent, "Heuristic");

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["results"][1]["outcome"], "tie");
        assert_eq!(json["config"]["board_size"], 5);
    }
}
