use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Manhattan distance between two positions.
pub type Distance = u16;

/// Identifier of a level, starting at 1.
pub type LevelId = u32;

/// Side length of every level grid.
pub const GRID_SIZE: Coord = 15;

/// Two-dimensional grid position, `x` grows to the right and `y` downwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Unit step towards `direction`, `None` when it would leave the `u8` range.
    ///
    /// Upper bounds are not checked here, tile queries treat anything past the
    /// grid edge as a wall.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }

    /// Manhattan distance, `|ax - bx| + |ay - by|`.
    pub const fn distance(self, other: Self) -> Distance {
        self.x.abs_diff(other.x) as Distance + self.y.abs_diff(other.y) as Distance
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.x.into(), self.y.into()]
    }
}

/// Directional intent, the only input the engine understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    /// Maps a keyboard `key` value (arrow keys or WASD) to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        use Direction::*;
        match key {
            "ArrowUp" | "w" | "W" => Some(Up),
            "ArrowDown" | "s" | "S" => Some(Down),
            "ArrowLeft" | "a" | "A" => Some(Left),
            "ArrowRight" | "d" | "D" => Some(Right),
            _ => None,
        }
    }
}

/// Formats whole seconds as `m:ss` for timers.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_unit_per_axis() {
        let origin = Position::new(3, 3);

        assert_eq!(origin.step(Direction::Up), Some(Position::new(3, 2)));
        assert_eq!(origin.step(Direction::Down), Some(Position::new(3, 4)));
        assert_eq!(origin.step(Direction::Left), Some(Position::new(2, 3)));
        assert_eq!(origin.step(Direction::Right), Some(Position::new(4, 3)));
    }

    #[test]
    fn step_past_origin_is_none() {
        assert_eq!(Position::new(0, 4).step(Direction::Left), None);
        assert_eq!(Position::new(4, 0).step(Direction::Up), None);
    }

    #[test]
    fn distance_is_manhattan() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 6);

        assert_eq!(a.distance(b), 8);
        assert_eq!(b.distance(a), 8);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("S"), Some(Direction::Down));
        assert_eq!(Direction::from_key("a"), Some(Direction::Left));
        assert_eq!(Direction::from_key("d"), Some(Direction::Right));
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(600), "10:00");
    }
}
