use serde::{Deserialize, Serialize};

/// Static content of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Wall,
    Floor,
    Echo,
    Exit,
    Start,
}

impl TileType {
    /// Decodes a stored grid value, unknown codes are plain floor.
    pub const fn from_code(code: u8) -> Self {
        use TileType::*;
        match code {
            1 => Wall,
            2 => Echo,
            3 => Exit,
            4 => Start,
            _ => Floor,
        }
    }

    pub const fn code(self) -> u8 {
        use TileType::*;
        match self {
            Floor => 0,
            Wall => 1,
            Echo => 2,
            Exit => 3,
            Start => 4,
        }
    }

    /// Glyph used by the ASCII level notation: `#` wall, `.` floor, `E` echo,
    /// `X` exit and `S` start.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        use TileType::*;
        match glyph {
            '#' => Some(Wall),
            '.' => Some(Floor),
            'E' => Some(Echo),
            'X' => Some(Exit),
            'S' => Some(Start),
            _ => None,
        }
    }

    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl Default for TileType {
    fn default() -> Self {
        Self::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_decode_with_floor_fallback() {
        assert_eq!(TileType::from_code(0), TileType::Floor);
        assert_eq!(TileType::from_code(1), TileType::Wall);
        assert_eq!(TileType::from_code(2), TileType::Echo);
        assert_eq!(TileType::from_code(3), TileType::Exit);
        assert_eq!(TileType::from_code(4), TileType::Start);
        assert_eq!(TileType::from_code(9), TileType::Floor);
    }

    #[test]
    fn code_is_inverse_of_decode() {
        for code in 0..=4 {
            assert_eq!(TileType::from_code(code).code(), code);
        }
    }

    #[test]
    fn only_walls_block() {
        assert!(!TileType::Wall.is_walkable());
        assert!(TileType::Floor.is_walkable());
        assert!(TileType::Echo.is_walkable());
        assert!(TileType::Exit.is_walkable());
        assert!(TileType::Start.is_walkable());
    }
}
