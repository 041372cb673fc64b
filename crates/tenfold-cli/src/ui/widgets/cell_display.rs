use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use tenfold_engine::Card;

use crate::ui::widgets::style;

/// One grid cell: the card value in its owner's color, or a dot.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: String,
}

impl CellDisplay {
    pub fn width() -> u16 {
        4
    }

    pub fn height() -> u16 {
        1
    }

    pub fn new(card: Option<Card>, scored: bool, under_cursor: bool) -> Self {
        let (style, symbol) = match card {
            None => (style::EMPTY_DOT, "·".to_owned()),
            Some(card) if scored => (style::scored_card(card.owner), card.value.to_string()),
            Some(card) => (style::card(card.owner), card.value.to_string()),
        };
        let style = if under_cursor {
            style.patch(style::CURSOR)
        } else {
            style
        };
        Self { style, symbol }
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill the whole cell so highlighted backgrounds are visible.
        Paragraph::new(self.symbol.as_str())
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
