use thiserror::Error;

use crate::LevelId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Level {0} does not exist")]
    UnknownLevel(LevelId),
    #[error("Level {0} has not been unlocked yet")]
    LevelLocked(LevelId),
    #[error("Level {0}: grid does not match the declared size")]
    InvalidGridShape(LevelId),
    #[error("Level {0} has no start tile")]
    MissingStart(LevelId),
    #[error("Level {0} has more than one start tile")]
    MultipleStarts(LevelId),
    #[error("Level {0} has no exit tile")]
    MissingExit(LevelId),
    #[error("Level {level}: tile ({x}, {y}) cannot be reached from the start")]
    UnreachableTile { level: LevelId, x: u8, y: u8 },
    #[error("Level ids must be contiguous starting at 1, found {found} at position {expected}")]
    NonContiguousLevelIds { expected: LevelId, found: LevelId },
    #[error("No levels were supplied")]
    EmptyLevelSet,
    #[error("Invalid level data: {0}")]
    InvalidLevelData(String),
    #[error("Invalid game config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure of a persistence medium, never surfaced past the progress store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage is unavailable")]
    Unavailable,
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Stored value could not be decoded: {0}")]
    Codec(String),
}
