use crossterm::event::Event;
use ratatui::Frame;

use crate::{command::play::screen::PlayScreen, tui::App};

/// Ticks per second; also the granularity of the AI pacing delay.
pub(crate) const TICK_RATE: f64 = 30.0;

#[derive(Debug)]
pub(crate) struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub(crate) fn new(screen: PlayScreen) -> Self {
        Self { screen }
    }

    pub(crate) fn into_screen(self) -> PlayScreen {
        self.screen
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, event: &Event) {
        self.screen.handle_event(event);
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        self.screen.draw(frame);
    }

    fn update(&mut self) {
        self.screen.update();
    }
}
