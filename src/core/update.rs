use tracing::trace;

use crate::core::consts::AFFECTED_AREA_PADDING;
use crate::core::models::{Direction, GameChangeType, Rect, Terrain, Tile, Vec2};
use crate::core::GameGrid;
use crate::error::MoveError;

impl GameGrid {
    /// Moves the agent one cell, pushing a crate when one is in the way.
    /// Returns whether the move happened.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        self.step(direction).is_ok()
    }

    /// Moves the agent one cell, pushing a crate when one is in the way.
    /// A refused move leaves every part of the grid untouched.
    pub fn step(&mut self, direction: Direction) -> Result<GameChangeType, MoveError> {
        let dir = direction.delta();
        let dest = self.agent + dir;

        if let Err(err) = self.validate_destination(dest, dir) {
            trace!(?direction, agent = ?self.agent, %err, "move refused");
            return Err(err);
        }

        self.last_affected = Some(Rect::spanning(self.agent, dest, AFFECTED_AREA_PADDING));

        // crate displacement reads the destination before the agent occupies it
        let pushed = self.displace_crate(dest, dir);

        self.agent = dest;
        self.moves += 1;

        Ok(if pushed {
            GameChangeType::AgentAndCrateMove
        } else {
            GameChangeType::AgentMove
        })
    }

    fn validate_destination(&self, dest: Vec2, dir: Vec2) -> Result<(), MoveError> {
        if !self.contains(&dest) {
            return Err(MoveError::OutOfBounds);
        }
        let cell = self.cells[&dest];
        if cell.terrain == Terrain::Wall {
            return Err(MoveError::Wall);
        }
        if cell.has_crate() {
            let beyond = dest + dir;
            if !self.contains(&beyond) {
                return Err(MoveError::CrateBlocked);
            }
            let beyond_tile = self.tile(beyond.x, beyond.y);
            if !(beyond_tile == Tile::Floor || beyond_tile == Tile::Goal) {
                return Err(MoveError::CrateBlocked);
            }
        }
        Ok(())
    }

    fn displace_crate(&mut self, from: Vec2, dir: Vec2) -> bool {
        if !self.cells[&from].has_crate() {
            return false;
        }
        self.cells[&from].clear_occupant();
        let to = from + dir;
        self.set_tile(to.x, to.y, Tile::Crate);
        true
    }
}
