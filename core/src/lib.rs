use core::time::Duration;

use serde::{Deserialize, Serialize};

pub use clock::*;
pub use echo::*;
pub use engine::*;
pub use error::*;
pub use levels::*;
pub use maze::*;
pub use progress::*;
pub use tile::*;
pub use types::*;
pub use visibility::*;

mod clock;
mod echo;
mod engine;
mod error;
mod levels;
mod maze;
mod progress;
mod tile;
mod types;
mod visibility;

/// Tunables of a play session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Vision radius without any echo active.
    pub base_vision_radius: Distance,
    /// Radius added while an echo pulse is active.
    pub echo_bonus_radius: Distance,
    pub echo_duration_ms: u32,
}

impl GameConfig {
    pub const MIN_ECHO_DURATION_MS: u32 = 100;

    pub const fn new_unchecked(
        base_vision_radius: Distance,
        echo_bonus_radius: Distance,
        echo_duration_ms: u32,
    ) -> Self {
        Self {
            base_vision_radius,
            echo_bonus_radius,
            echo_duration_ms,
        }
    }

    pub fn new(
        base_vision_radius: Distance,
        echo_bonus_radius: Distance,
        echo_duration_ms: u32,
    ) -> Self {
        // no point in seeing further than corner to corner
        let max_radius = 2 * Distance::from(GRID_SIZE);
        let base_vision_radius = base_vision_radius.min(max_radius);
        let echo_bonus_radius = echo_bonus_radius.min(max_radius - base_vision_radius);
        let echo_duration_ms = echo_duration_ms.max(Self::MIN_ECHO_DURATION_MS);
        Self::new_unchecked(base_vision_radius, echo_bonus_radius, echo_duration_ms)
    }

    /// Parses a JSON config, missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| GameError::InvalidConfig(err.to_string()))?;
        Ok(Self::new(
            config.base_vision_radius,
            config.echo_bonus_radius,
            config.echo_duration_ms,
        ))
    }

    pub const fn echo_duration(&self) -> Duration {
        Duration::from_millis(self.echo_duration_ms as u64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(2, 3, 3000)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MoveOutcome {
    /// The session is over, moves are ignored until a reset.
    NoChange,
    /// The target tile is a wall or off the grid.
    Blocked,
    Moved,
    /// Stepped on an echo tile and (re)started the vision boost.
    EchoPulse,
    Won {
        moves: u32,
        /// Strictly fewer moves than any earlier win on this level.
        new_best: bool,
        last_level: bool,
    },
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Blocked => false,
            Moved => true,
            EchoPulse => true,
            Won { .. } => true,
        }
    }
}
