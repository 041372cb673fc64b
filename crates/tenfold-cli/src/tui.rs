//! Minimal tick/render loop for the interactive screens.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};
use ratatui::Frame;

/// Applications driven by [`Runtime::run`].
pub(crate) trait App {
    fn should_exit(&self) -> bool;

    /// Key input, resize and other terminal events.
    fn handle_event(&mut self, event: &Event);

    fn draw(&self, frame: &mut Frame<'_>);

    /// Called once per tick.
    fn update(&mut self);
}

#[derive(Debug, Clone)]
enum LoopEvent {
    Tick,
    Render,
    Terminal(Event),
    /// Poll timed out before the next tick.
    Idle,
}

/// Runs an [`App`], ticking at a fixed interval and redrawing after every state
/// change.
#[derive(Debug)]
pub(crate) struct Runtime {
    tick_interval: Duration,
    last_tick: Instant,
    dirty: bool,
}

impl Runtime {
    pub(crate) fn with_tick_rate(rate: f64) -> Self {
        Self {
            tick_interval: Duration::from_secs_f64(1.0 / rate),
            last_tick: Instant::now(),
            dirty: true,
        }
    }

    pub(crate) fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.next()? {
                    LoopEvent::Tick => app.update(),
                    LoopEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    LoopEvent::Terminal(event) => app.handle_event(&event),
                    LoopEvent::Idle => {}
                }
            }
            Ok(())
        })
    }

    fn next(&mut self) -> io::Result<LoopEvent> {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= self.tick_interval {
            self.last_tick = now;
            self.dirty = true;
            return Ok(LoopEvent::Tick);
        }
        if self.dirty {
            self.dirty = false;
            return Ok(LoopEvent::Render);
        }

        let timeout = (self.last_tick + self.tick_interval).saturating_duration_since(now);
        if !event::poll(timeout)? {
            return Ok(LoopEvent::Idle);
        }
        self.dirty = true;
        Ok(LoopEvent::Terminal(event::read()?))
    }
}
