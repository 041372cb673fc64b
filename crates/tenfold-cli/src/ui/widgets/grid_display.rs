use std::{collections::HashSet, iter};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Paragraph, Widget},
};
use tenfold_engine::{GameField, Position};

use crate::ui::widgets::{CellDisplay, style};

const LABEL_WIDTH: u16 = 3;

/// The board with row/column labels, owner colors and highlighted scored cells.
#[derive(Debug)]
pub struct GridDisplay<'a> {
    field: &'a GameField,
    cursor: Option<Position>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(field: &'a GameField) -> Self {
        Self {
            field,
            cursor: None,
            block: None,
        }
    }

    pub fn cursor(self, cursor: Option<Position>) -> Self {
        Self { cursor, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn size(&self) -> u16 {
        u16::try_from(self.field.size()).unwrap_or(u16::MAX)
    }

    pub fn width(&self) -> u16 {
        LABEL_WIDTH
            + self.size().saturating_mul(CellDisplay::width())
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        1 + self.size().saturating_mul(CellDisplay::height())
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let grid = self.field.grid();
        let scored: HashSet<Position> = self
            .field
            .tracker()
            .scored_windows()
            .iter()
            .flat_map(|w| w.cells().iter().copied())
            .collect();

        let columns = Layout::horizontal(
            iter::once(Constraint::Length(LABEL_WIDTH))
                .chain((0..grid.size()).map(|_| Constraint::Length(CellDisplay::width()))),
        )
        .flex(Flex::Start);
        let rows = Layout::vertical(
            iter::once(Constraint::Length(1))
                .chain((0..grid.size()).map(|_| Constraint::Length(CellDisplay::height()))),
        );

        for (row_index, row_area) in rows.split(area).iter().enumerate() {
            let cells = columns.split(*row_area);
            let Some(row) = row_index.checked_sub(1) else {
                for (col, cell_area) in cells.iter().skip(1).enumerate() {
                    Paragraph::new(col.to_string())
                        .style(style::LABEL)
                        .centered()
                        .render(*cell_area, buf);
                }
                continue;
            };
            Paragraph::new(format!("{row:>2}"))
                .style(style::LABEL)
                .render(cells[0], buf);
            for (col, cell_area) in cells.iter().skip(1).enumerate() {
                let position = Position::new(row, col);
                let display = CellDisplay::new(
                    grid.cell(position),
                    scored.contains(&position),
                    self.cursor == Some(position),
                );
                display.render(*cell_area, buf);
            }
        }
    }
}
