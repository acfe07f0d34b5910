use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::{Cell, Occupant, Rect, Tile, Vec2};

/// Mutable puzzle state: the layered cell map, the agent overlay and the move counter.
///
/// Cells are only written through [`GameGrid::set_tile`] and the move operations.
/// The agent is never stored in a cell; queries layer it in when they read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameGrid {
    pub(crate) cells: BoundedGrid<Cell>,
    pub(crate) agent: Vec2,
    pub(crate) moves: u32,
    pub(crate) last_affected: Option<Rect>,
}

impl GameGrid {
    pub fn new(width: usize, height: usize) -> GameGrid {
        GameGrid {
            cells: BoundedGrid::new(BoundsOriginRoot::new(width, height), Cell::default()),
            agent: Vec2::new(0, 0),
            moves: 0,
            last_affected: None,
        }
    }

    pub fn width(&self) -> usize {
        self.cells.size().width()
    }

    pub fn height(&self) -> usize {
        self.cells.size().height()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Carries a move count over into a grid rebuilt from a snapshot.
    pub(crate) fn set_moves(&mut self, moves: u32) {
        self.moves = moves;
    }

    pub fn agent(&self) -> Vec2 {
        self.agent
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.cells.contains(pos)
    }

    /// Writes a tile code into a cell. A code carrying the agent moves the agent here
    /// instead of being stored; the rest is merged into the cell's existing layers.
    /// Coordinates off the grid are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        let pos = Vec2::new(x, y);
        let Some(cell) = self.cells.get_mut(&pos) else {
            return;
        };
        if tile.has_agent() {
            self.agent = pos;
        }
        cell.merge(tile.terrain(), tile.occupant());
    }

    /// Raw stored value, both layers. Off-grid reads are plain floor.
    pub fn cell_on_map(&self, x: i32, y: i32) -> Cell {
        self.cells.get(&Vec2::new(x, y)).copied().unwrap_or_default()
    }

    /// Stored tile ignoring the agent. A crate hides the terrain it sits on,
    /// so a crate on a goal reads as `Tile::Crate`.
    pub fn tile_on_map(&self, x: i32, y: i32) -> Tile {
        let cell = self.cell_on_map(x, y);
        match cell.occupant {
            Occupant::Empty => Tile::from_terrain(cell.terrain),
            Occupant::Crate => Tile::Crate,
        }
    }

    /// Like [`GameGrid::tile_on_map`] but reports `Tile::Agent` on the agent's cell.
    pub fn tile(&self, x: i32, y: i32) -> Tile {
        if self.agent == Vec2::new(x, y) {
            return Tile::Agent;
        }
        self.tile_on_map(x, y)
    }

    /// Padded rectangle touched by the most recent successful move.
    pub fn last_affected_area(&self) -> Option<Rect> {
        self.last_affected
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::Terrain;

    #[test]
    fn test_new_grid_is_floor_with_agent_at_origin() {
        let grid = GameGrid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.agent(), Vec2::new(0, 0));
        assert_eq!(grid.moves(), 0);
        assert_eq!(grid.last_affected_area(), None);
        assert_eq!(grid.tile_on_map(3, 2), Tile::Floor);
        assert_eq!(grid.tile(0, 0), Tile::Agent);
    }

    #[test]
    fn test_crate_over_wall_keeps_terrain() {
        let mut grid = GameGrid::new(2, 2);
        grid.set_tile(1, 1, Tile::Wall);
        grid.set_tile(1, 1, Tile::Crate);

        assert_eq!(grid.tile_on_map(1, 1), Tile::Crate);
        assert_eq!(grid.cell_on_map(1, 1).terrain, Terrain::Wall);
    }

    #[test]
    fn test_goal_after_crate_makes_placed_crate() {
        let mut grid = GameGrid::new(2, 1);
        grid.set_tile(1, 0, Tile::Crate);
        grid.set_tile(1, 0, Tile::Goal);

        assert_eq!(grid.cell_on_map(1, 0), Cell::new(Terrain::Goal, Occupant::Crate));
        assert_eq!(grid.tile_on_map(1, 0), Tile::Crate);
    }

    #[test]
    fn test_agent_is_never_stored() {
        let mut grid = GameGrid::new(3, 1);
        grid.set_tile(2, 0, Tile::AgentOnGoal);

        assert_eq!(grid.agent(), Vec2::new(2, 0));
        assert_eq!(grid.cell_on_map(2, 0), Cell::new(Terrain::Goal, Occupant::Empty));
        assert_eq!(grid.tile_on_map(2, 0), Tile::Goal);
        assert_eq!(grid.tile(2, 0), Tile::Agent);
    }

    #[test]
    fn test_off_grid_access_is_tolerated() {
        let mut grid = GameGrid::new(2, 2);
        let before = grid.clone();
        grid.set_tile(-1, 0, Tile::Wall);
        grid.set_tile(2, 0, Tile::Agent);
        grid.set_tile(0, 5, Tile::Crate);

        assert_eq!(grid, before);
        assert_eq!(grid.tile_on_map(2, 0), Tile::Floor);
        assert_eq!(grid.tile_on_map(-3, -3), Tile::Floor);
        assert_eq!(grid.tile(0, 2), Tile::Floor);
    }
}
