use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Direction, GameChangeType, GameGrid};
use crate::error::{CatalogError, MoveError, SessionError};
use crate::level::LevelCatalog;

/// What a single move did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Blocked(MoveError),
    Moved(GameChangeType),
    /// The level was solved in `moves` moves and the next level is now loaded.
    LevelWon { level: usize, moves: u32 },
    /// The last level of the catalog was solved. The solved grid stays loaded.
    CatalogCompleted { level: usize, moves: u32 },
    /// The catalog is already completed; the move was not played.
    Finished,
}

/// An in-progress level, restorable with [`Session::restore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub level: usize,
    /// Moves made on the level before saving. Older saves without it resume at 0.
    #[serde(default)]
    pub moves: u32,
    pub snapshot: String,
}

/// One play-through over a catalog: the current level and its grid.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: LevelCatalog,
    level: usize,
    grid: GameGrid,
    completed: bool,
}

impl Session {
    pub fn new(catalog: LevelCatalog, level: usize) -> Result<Session, CatalogError> {
        let grid = catalog.select_level(level)?;
        Ok(Session { catalog, level, grid, completed: false })
    }

    /// Resumes a saved level. The snapshot is decoded as a one-level catalog;
    /// `saved.level` must still name a level of `catalog`.
    pub fn restore(catalog: LevelCatalog, saved: &SavedGame) -> Result<Session, SessionError> {
        if saved.level >= catalog.len() {
            return Err(CatalogError::OutOfRange { index: saved.level, len: catalog.len() }.into());
        }
        let snapshot = LevelCatalog::decode(&saved.snapshot);
        if snapshot.is_empty() {
            return Err(SessionError::EmptySnapshot);
        }
        let mut grid = snapshot.select_level(0)?;
        grid.set_moves(saved.moves);
        info!(level = saved.level, moves = saved.moves, "saved game restored");
        Ok(Session { catalog, level: saved.level, grid, completed: false })
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn grid(&self) -> &GameGrid {
        &self.grid
    }

    /// True once the last level has been solved. Only `retry` or `select` reopen play.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn play(&mut self, direction: Direction) -> SessionEvent {
        if self.completed {
            return SessionEvent::Finished;
        }
        let change = match self.grid.step(direction) {
            Ok(change) => change,
            Err(err) => return SessionEvent::Blocked(err),
        };
        if !self.grid.game_won() {
            return SessionEvent::Moved(change);
        }

        let (level, moves) = (self.level, self.grid.moves());
        info!(level, moves, "level won");
        match self.select(level + 1) {
            Ok(()) => SessionEvent::LevelWon { level, moves },
            Err(_) => {
                self.completed = true;
                SessionEvent::CatalogCompleted { level, moves }
            }
        }
    }

    /// Reloads the current level from the catalog.
    pub fn retry(&mut self) -> Result<(), CatalogError> {
        self.select(self.level)
    }

    pub fn skip(&mut self) -> Result<(), CatalogError> {
        self.select(self.level + 1)
    }

    pub fn select(&mut self, level: usize) -> Result<(), CatalogError> {
        self.grid = self.catalog.select_level(level)?;
        self.level = level;
        self.completed = false;
        debug!(level, "session level changed");
        Ok(())
    }

    pub fn save(&self) -> SavedGame {
        SavedGame {
            level: self.level,
            moves: self.grid.moves(),
            snapshot: self.grid.serialize(),
        }
    }

    pub fn status_line(&self) -> String {
        format!("Level: {} | Moves: {}", self.level + 1, self.grid.moves())
    }
}
