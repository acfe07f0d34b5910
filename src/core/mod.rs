mod bounded_grid;
mod bounds;
pub mod consts;
mod glyphs;
mod grid;
mod model_helpers;
mod models;
mod update;

pub use glyphs::{glyph_for_cell, tile_for_glyph};
pub use grid::GameGrid;
pub use models::{Cell, Direction, GameChangeType, Occupant, Rect, Terrain, Tile, Vec2};
