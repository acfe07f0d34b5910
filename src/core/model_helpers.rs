use std::fmt;

use crate::core::glyphs::glyph_for_cell;
use crate::core::models::{Terrain, Vec2};
use crate::core::GameGrid;

impl GameGrid {
    /// True when every goal cell holds a crate. The agent standing on a goal does not count.
    pub fn game_won(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.terrain != Terrain::Goal || cell.has_crate())
    }

    pub fn count_crates_on_goals(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.terrain == Terrain::Goal && cell.has_crate())
            .count()
    }

    pub fn count_goals(&self) -> usize {
        self.cells.iter().filter(|cell| cell.terrain == Terrain::Goal).count()
    }

    /// Text snapshot in the level glyph alphabet, one `\n`-terminated line per row.
    /// Decoding it as a single-record catalog rebuilds this grid.
    pub fn serialize(&self) -> String {
        let mut result = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let has_agent = self.agent == Vec2::new(x, y);
                result.push(glyph_for_cell(self.cell_on_map(x, y), has_agent));
            }
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for GameGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
