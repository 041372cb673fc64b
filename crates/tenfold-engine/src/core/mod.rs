//! Board-level data structures.
//!
//! - [`Grid`] - Square cell store with occupancy and ownership
//! - [`Position`] - Zero-based `(row, col)` coordinate
//! - [`Direction`] - The four line directions and their three-cell windows
//! - [`CardRange`] - Closed range of playable card values
//! - [`PlayerId`] - The two seats of a match

pub use self::{card::*, direction::*, grid::*, player::*, position::*};

pub(crate) mod card;
pub(crate) mod direction;
pub(crate) mod grid;
pub(crate) mod player;
pub(crate) mod position;
