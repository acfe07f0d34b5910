use serde::{Deserialize, Serialize};

use crate::core::{tile_for_glyph, GameGrid};

/// One decoded puzzle before instantiation: declared size plus the literal glyph rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    width: usize,
    height: usize,
    data: String,
}

impl LevelDefinition {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph rows, each terminated by `\n`.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.data.lines()
    }

    /// Builds a fresh grid of the declared size. Short rows leave the rest of the row as floor.
    pub fn materialize(&self) -> GameGrid {
        let mut grid = GameGrid::new(self.width, self.height);
        let (mut x, mut y) = (0i32, 0i32);
        for glyph in self.data.chars() {
            if glyph == '\n' {
                x = 0;
                y += 1;
            } else {
                grid.set_tile(x, y, tile_for_glyph(glyph));
                x += 1;
            }
        }
        grid
    }
}

/// Accumulates the lines of one record until a separator or end of input.
#[derive(Debug, Default)]
pub(crate) struct RecordBuilder {
    width: usize,
    height: usize,
    data: String,
    has_content: bool,
}

impl RecordBuilder {
    pub(crate) fn add_line(&mut self, line: &str) {
        self.data.push_str(line);
        self.data.push('\n');
        self.width = self.width.max(line.chars().count());
        self.height += 1;
        self.has_content |= line.chars().any(|c| !c.is_whitespace());
    }

    /// The finished definition, or `None` when the record holds only blank lines.
    pub(crate) fn finish(self) -> Option<LevelDefinition> {
        if !self.has_content {
            return None;
        }
        Some(LevelDefinition {
            width: self.width,
            height: self.height,
            data: self.data,
        })
    }
}
