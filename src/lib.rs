//! Sokoban grid engine.
//! - Layered tile model with the agent kept as an overlay
//! - Move and push resolution, win detection, affected-area tracking
//! - Multi-record level text decoding and grid materialization
//! - Play sessions with save/restore snapshots

pub mod core;
pub mod error;
pub mod level;
pub mod session;


pub use crate::core::{Cell, Direction, GameChangeType, GameGrid, Occupant, Rect, Terrain, Tile, Vec2};
pub use crate::error::{CatalogError, DecodeError, MoveError, SessionError};
pub use crate::level::{DecodeMode, LevelCatalog, LevelDefinition};
pub use crate::session::{SavedGame, Session, SessionEvent};
