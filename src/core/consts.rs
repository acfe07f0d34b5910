/// A level text line starting with this character ends the current record.
pub const RECORD_SEPARATOR: char = ';';

pub const WALL_GLYPH: char = '#';
pub const GOAL_GLYPH: char = 'X';
pub const CRATE_GLYPH: char = 'C';
pub const AGENT_GLYPH: char = 'P';
pub const PLACED_CRATE_GLYPH: char = '!';
pub const AGENT_ON_GOAL_GLYPH: char = '?';
pub const FLOOR_GLYPH: char = ' ';

/// Cells of margin added around the agent's old and new cells in the affected area.
pub const AFFECTED_AREA_PADDING: i32 = 1;
