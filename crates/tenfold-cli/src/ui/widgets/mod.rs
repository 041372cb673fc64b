use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{cell_display::*, grid_display::*, scoreboard_display::*};

mod cell_display;
mod grid_display;
mod scoreboard_display;

pub mod color {
    use ratatui::style::Color;

    pub const BLUE: Color = Color::Rgb(64, 128, 255);
    pub const RED: Color = Color::Rgb(255, 64, 64);
    pub const YELLOW: Color = Color::Rgb(255, 215, 0);
    pub const GREEN: Color = Color::Rgb(0, 200, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(60, 60, 60);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};
    use tenfold_engine::PlayerId;

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const LABEL: Style = fg_bg(color::GRAY, color::BLACK);
    pub const HELP: Style = Style::new().fg(color::GRAY);
    pub const CURSOR: Style = fg_bg(color::WHITE, color::DARK_GRAY).add_modifier(Modifier::BOLD);

    pub const fn player_fg(player: PlayerId) -> Color {
        match player {
            PlayerId::First => color::BLUE,
            PlayerId::Second => color::RED,
        }
    }

    pub const fn card(player: PlayerId) -> Style {
        fg_bg(player_fg(player), color::BLACK).add_modifier(Modifier::BOLD)
    }

    pub const fn scored_card(player: PlayerId) -> Style {
        fg_bg(player_fg(player), color::YELLOW).add_modifier(Modifier::BOLD)
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
