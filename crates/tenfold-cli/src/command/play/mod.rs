use std::time::Duration;

use tenfold_engine::{MatchSession, PlayerId};

use crate::{
    command::match_arg::{AgentKind, MatchArg},
    tui::Runtime,
};

use self::{
    app::{PlayApp, TICK_RATE},
    screen::{PlayScreen, Seat},
};

mod app;
mod screen;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ManualPlayArg {
    #[clap(flatten)]
    game: MatchArg,
    /// Name shown for the human player
    #[clap(long, default_value = "You")]
    name: String,
    /// AI opponent
    #[clap(long, default_value = "heuristic")]
    opponent: AgentKind,
    /// Let the AI take the first turn
    #[clap(long)]
    ai_first: bool,
    /// Pause before each AI move, in milliseconds
    #[clap(long, default_value_t = 1500)]
    ai_delay_ms: u64,
}

impl Default for ManualPlayArg {
    fn default() -> Self {
        Self {
            game: MatchArg::default(),
            name: "You".to_owned(),
            opponent: AgentKind::Heuristic,
            ai_first: false,
            ai_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    #[clap(flatten)]
    game: MatchArg,
    /// Agent in the first seat
    #[clap(long, default_value = "heuristic")]
    first: AgentKind,
    /// Agent in the second seat
    #[clap(long, default_value = "heuristic")]
    second: AgentKind,
    /// Pause before each move, in milliseconds
    #[clap(long, default_value_t = 800)]
    delay_ms: u64,
}

pub(crate) fn run_manual(arg: &ManualPlayArg) -> anyhow::Result<()> {
    let ManualPlayArg {
        game,
        name,
        opponent,
        ai_first,
        ai_delay_ms,
    } = arg;

    let config = game.to_config()?;
    let weights = game.to_weights()?;
    let ai_seat = if *ai_first {
        PlayerId::First
    } else {
        PlayerId::Second
    };
    let ai_name = format!("{opponent} AI");
    let ai = Seat::Agent(opponent.build(ai_name.clone(), weights, game.agent_seed(0, ai_seat)));

    let (seats, names) = match ai_seat {
        PlayerId::First => ([ai, Seat::Human], [ai_name, name.clone()]),
        PlayerId::Second => ([Seat::Human, ai], [name.clone(), ai_name]),
    };
    let screen = PlayScreen::new(
        MatchSession::new(config)?,
        seats,
        names,
        Duration::from_millis(*ai_delay_ms),
    );
    run_screen(screen)
}

pub(crate) fn run_auto(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg {
        game,
        first,
        second,
        delay_ms,
    } = arg;

    let config = game.to_config()?;
    let weights = game.to_weights()?;
    let names = [format!("{first} AI 1"), format!("{second} AI 2")];
    let seats = [
        Seat::Agent(first.build(&names[0], weights, game.agent_seed(0, PlayerId::First))),
        Seat::Agent(second.build(&names[1], weights, game.agent_seed(0, PlayerId::Second))),
    ];
    let screen = PlayScreen::new(
        MatchSession::new(config)?,
        seats,
        names,
        Duration::from_millis(*delay_ms),
    );
    run_screen(screen)
}

fn run_screen(screen: PlayScreen) -> anyhow::Result<()> {
    let mut app = PlayApp::new(screen);
    Runtime::with_tick_rate(TICK_RATE).run(&mut app)?;

    if let Some(result) = app.into_screen().result_text() {
        println!("{result}");
    }
    Ok(())
}
