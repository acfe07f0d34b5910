use serde::{Deserialize, Serialize};

/// Static terrain of a cell, fixed once a level is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    Floor,
    Wall,
    Goal,
}

/// Dynamic content of a cell. The agent is tracked by the grid, never here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Crate,
}

/// The value stored for one cell: terrain under, occupant over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub terrain: Terrain,
    pub occupant: Occupant,
}

impl Cell {
    pub const fn new(terrain: Terrain, occupant: Occupant) -> Cell {
        Cell { terrain, occupant }
    }

    pub fn has_crate(&self) -> bool {
        self.occupant == Occupant::Crate
    }

    /// Layers an incoming tile onto this cell. Floor terrain and an empty
    /// occupant leave the existing layer as it is.
    pub(crate) fn merge(&mut self, terrain: Terrain, occupant: Occupant) {
        if terrain != Terrain::Floor {
            self.terrain = terrain;
        }
        if occupant != Occupant::Empty {
            self.occupant = occupant;
        }
    }

    pub(crate) fn clear_occupant(&mut self) {
        self.occupant = Occupant::Empty;
    }
}

/// Tile codes accepted by `GameGrid::set_tile` and returned by the grid queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Floor,
    Wall,
    Goal,
    Crate,
    Agent,
    /// A crate resting on a goal.
    PlacedCrate,
    AgentOnGoal,
}

impl Tile {
    pub fn terrain(self) -> Terrain {
        match self {
            Tile::Wall => Terrain::Wall,
            Tile::Goal | Tile::PlacedCrate | Tile::AgentOnGoal => Terrain::Goal,
            Tile::Floor | Tile::Crate | Tile::Agent => Terrain::Floor,
        }
    }

    pub fn occupant(self) -> Occupant {
        match self {
            Tile::Crate | Tile::PlacedCrate => Occupant::Crate,
            _ => Occupant::Empty,
        }
    }

    pub fn has_agent(self) -> bool {
        matches!(self, Tile::Agent | Tile::AgentOnGoal)
    }

    pub fn from_terrain(terrain: Terrain) -> Tile {
        match terrain {
            Terrain::Floor => Tile::Floor,
            Terrain::Wall => Tile::Wall,
            Terrain::Goal => Tile::Goal,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn delta(self) -> Vec2 {
        match self {
            Direction::North => Vec2::new(0, -1),
            Direction::South => Vec2::new(0, 1),
            Direction::East => Vec2::new(1, 0),
            Direction::West => Vec2::new(-1, 0),
        }
    }

    /// Accepts compass letters and up/down/left/right letters, any case.
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'N' | 'U' => Some(Direction::North),
            'S' | 'D' => Some(Direction::South),
            'E' | 'R' => Some(Direction::East),
            'W' | 'L' => Some(Direction::West),
            _ => None,
        }
    }
}

/// Inclusive cell rectangle. `left`/`top` may be negative and `right`/`bottom`
/// may pass the grid edge because the area is padded by one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Smallest rectangle covering both cells, grown by `padding` on each side.
    pub fn spanning(a: Vec2, b: Vec2, padding: i32) -> Rect {
        Rect {
            left: a.x.min(b.x) - padding,
            top: a.y.min(b.y) - padding,
            right: a.x.max(b.x) + padding,
            bottom: a.y.max(b.y) + padding,
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameChangeType {
    AgentMove,
    AgentAndCrateMove,
}
