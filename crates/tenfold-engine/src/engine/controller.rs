use tracing::{instrument, warn};

use crate::{ConfigError, MatchError, core::PlayerId};

use super::{
    agent::PlayerAgent,
    config::MatchConfig,
    session::{MatchSession, MatchState, Outcome, Scores, TurnOutcome},
};

/// Drives a [`MatchSession`] with one [`PlayerAgent`] per seat.
#[derive(Debug)]
pub struct MatchController<'a> {
    session: MatchSession,
    agents: [Box<dyn PlayerAgent + 'a>; 2],
}

impl<'a> MatchController<'a> {
    pub fn new(
        config: MatchConfig,
        first: Box<dyn PlayerAgent + 'a>,
        second: Box<dyn PlayerAgent + 'a>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            session: MatchSession::new(config)?,
            agents: [first, second],
        })
    }

    #[must_use]
    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    #[must_use]
    pub fn agent_name(&self, player: PlayerId) -> &str {
        self.agents[player.index()].name()
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.session.state()
    }

    #[must_use]
    pub fn scores(&self) -> Scores {
        self.session.scores()
    }

    #[must_use]
    pub fn winner(&self) -> Outcome {
        self.session.winner()
    }

    /// Plays one turn for the current player.
    ///
    /// Rejected moves are replayed by the same player, up to
    /// [`MatchConfig::max_rejections`] attempts in a row.
    #[instrument(level = "debug", skip(self), fields(player = %self.session.current_player()))]
    pub fn play_turn(&mut self) -> Result<MatchState, MatchError> {
        if self.session.state().is_game_over() {
            return Err(MatchError::MatchOver);
        }
        let player = self.session.current_player();
        let max_rejections = self.session.config().max_rejections;
        let values = self.session.config().card_range;
        let agent = &mut self.agents[player.index()];

        for _ in 0..max_rejections {
            let mv = agent
                .decide_move(self.session.field(), values, player)
                .map_err(MatchError::Agent)?;
            match self.session.submit_move(mv)? {
                TurnOutcome::Placed { state, .. } => return Ok(state),
                TurnOutcome::Rejected { .. } => {}
            }
        }

        warn!(%player, attempts = max_rejections, "retry limit exceeded");
        Err(MatchError::RetryLimitExceeded {
            player,
            attempts: max_rejections,
        })
    }

    /// Plays turns until the match is over and returns the result.
    pub fn run_to_end(&mut self) -> Result<Outcome, MatchError> {
        while self.play_turn()?.is_in_progress() {}
        Ok(self.winner())
    }

    #[must_use]
    pub fn into_session(self) -> MatchSession {
        self.session
    }
}
