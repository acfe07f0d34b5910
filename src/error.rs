use thiserror::Error;

use crate::level::LevelCatalog;

/// Why a move was refused. A refused move never changes the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Cannot move out of bounds")]
    OutOfBounds,
    #[error("Cannot walk into a wall")]
    Wall,
    #[error("Cannot push crate")]
    CrateBlocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("level index {index} is out of range for a catalog of {len} levels")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source failed mid-read. `partial` holds every record completed before the failure.
    #[error("failed to read level source at line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
        partial: LevelCatalog,
    },
}

impl DecodeError {
    /// Gives back the records decoded before the failure.
    pub fn into_partial(self) -> LevelCatalog {
        match self {
            DecodeError::Read { partial, .. } => partial,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("saved snapshot contains no level")]
    EmptySnapshot,
}
