use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::{self, LogTarget};

use self::{
    play::{AutoPlayArg, ManualPlayArg},
    simulate::SimulateArg,
};

mod match_arg;
mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write log events to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the heuristic AI in the terminal
    #[command(name = "play")]
    ManualPlay(#[clap(flatten)] ManualPlayArg),
    /// Watch two AI players in the terminal
    #[command(name = "auto-play")]
    AutoPlay(#[clap(flatten)] AutoPlayArg),
    /// Play matches without a UI and print a JSON summary
    Simulate(#[clap(flatten)] SimulateArg),
}

impl Mode {
    fn owns_terminal(&self) -> bool {
        matches!(self, Mode::ManualPlay(_) | Mode::AutoPlay(_))
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args
        .mode
        .unwrap_or_else(|| Mode::ManualPlay(ManualPlayArg::default()));
    logging::init(LogTarget::select(
        args.log_file.as_deref(),
        mode.owns_terminal(),
    ))?;

    match mode {
        Mode::ManualPlay(arg) => play::run_manual(&arg)?,
        Mode::AutoPlay(arg) => play::run_auto(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_default_mode_is_manual_play() {
        let args = CommandArgs::try_parse_from(["tenfold"]).unwrap();
        assert!(args.mode.is_none());

        let args =
            CommandArgs::try_parse_from(["tenfold", "simulate", "--matches", "3", "--seed", "7"])
                .unwrap();
        assert!(matches!(args.mode, Some(Mode::Simulate(_))));
        assert!(!args.mode.unwrap().owns_terminal());
    }
}
