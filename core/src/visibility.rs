use serde::{Deserialize, Serialize};

use crate::*;

/// Fog-of-war band of a tile relative to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Within the vision radius.
    Visible,
    /// One step past the radius.
    Dim,
    /// Two steps past the radius, hidden but faintly lit.
    Faint,
    Hidden,
}

impl Visibility {
    pub const fn from_distance(distance: Distance, radius: Distance) -> Self {
        if distance <= radius {
            Self::Visible
        } else if distance <= radius.saturating_add(1) {
            Self::Dim
        } else if distance <= radius.saturating_add(2) {
            Self::Faint
        } else {
            Self::Hidden
        }
    }

    /// Opacity of the fog layer drawn over the tile, 0 is fully clear.
    pub const fn fog_opacity(self) -> f32 {
        match self {
            Self::Visible => 0.0,
            Self::Dim => 0.5,
            Self::Faint => 0.8,
            Self::Hidden => 1.0,
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Visible)
    }
}
