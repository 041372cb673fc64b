use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block as BlockWidget, Paragraph, Widget},
};
use tenfold_engine::{EndPolicy, MatchSession, PlayerId};

use crate::ui::widgets::{color, style};

/// Per-player scores, the turn marker and the end rule.
#[derive(Debug)]
pub struct ScoreboardDisplay<'a> {
    session: &'a MatchSession,
    names: [&'a str; 2],
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreboardDisplay<'a> {
    pub fn new(session: &'a MatchSession, names: [&'a str; 2]) -> Self {
        Self {
            session,
            names,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        // one line per player, a blank line and the end rule
        4 + super::block_vertical_margin(self.block.as_ref())
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let scores = self.session.scores();
        let in_progress = self.session.state().is_in_progress();
        let mut lines: Vec<Line<'a>> = PlayerId::ALL
            .into_iter()
            .map(|player| {
                let is_turn = in_progress && self.session.current_player() == player;
                let marker = if is_turn {
                    Span::styled("▶ ", Style::new().fg(color::GREEN))
                } else {
                    Span::raw("  ")
                };
                let name = Span::styled(
                    format!("{:<12}", self.names[player.index()]),
                    Style::new()
                        .fg(style::player_fg(player))
                        .add_modifier(Modifier::BOLD),
                );
                let score = Span::styled(format!("{:>3}", scores.get(player)), style::DEFAULT);
                Line::from(vec![marker, name, score])
            })
            .collect();

        let rule = match self.session.config().end_policy {
            EndPolicy::BoardFull => "Ends when the board is full".to_owned(),
            EndPolicy::ScoreThreshold(n) => format!("First to {n} points wins"),
        };
        lines.push(Line::default());
        lines.push(Line::styled(rule, style::LABEL));
        lines
    }
}

impl Widget for ScoreboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let paragraph = Paragraph::new(lines).style(style::DEFAULT);
        match self.block {
            Some(block) => paragraph.block(block).render(area, buf),
            None => paragraph.render(area, buf),
        }
    }
}
