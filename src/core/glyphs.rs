use crate::core::consts::*;
use crate::core::models::{Cell, Occupant, Terrain, Tile};

/// Maps a level-text glyph to the tile it places. Unknown glyphs are floor.
pub fn tile_for_glyph(glyph: char) -> Tile {
    match glyph {
        WALL_GLYPH => Tile::Wall,
        GOAL_GLYPH => Tile::Goal,
        CRATE_GLYPH => Tile::Crate,
        AGENT_GLYPH => Tile::Agent,
        PLACED_CRATE_GLYPH => Tile::PlacedCrate,
        AGENT_ON_GOAL_GLYPH => Tile::AgentOnGoal,
        _ => Tile::Floor,
    }
}

/// Glyph for a stored cell, with the agent layered on top when present.
/// Composites with no glyph of their own (a crate inside a wall) render as floor.
pub fn glyph_for_cell(cell: Cell, has_agent: bool) -> char {
    if has_agent {
        return if cell.terrain == Terrain::Goal { AGENT_ON_GOAL_GLYPH } else { AGENT_GLYPH };
    }
    match (cell.terrain, cell.occupant) {
        (Terrain::Wall, Occupant::Empty) => WALL_GLYPH,
        (Terrain::Goal, Occupant::Empty) => GOAL_GLYPH,
        (Terrain::Floor, Occupant::Crate) => CRATE_GLYPH,
        (Terrain::Goal, Occupant::Crate) => PLACED_CRATE_GLYPH,
        _ => FLOOR_GLYPH,
    }
}
