use std::collections::{BTreeSet, VecDeque};
use std::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable tile grid of a single level, serialized as its stored codes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Maze {
    tiles: Array2<TileType>,
}

impl Maze {
    /// Builds a maze from row-major stored codes, `rows[y][x]`.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 || rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }
        if width > Coord::MAX.into() || height > Coord::MAX.into() {
            return None;
        }

        let tiles = Array2::from_shape_fn((width, height), |(x, y)| {
            TileType::from_code(rows[y].as_ref()[x])
        });
        Some(Self { tiles })
    }

    /// Builds a maze from the ASCII notation described in [`TileType::from_glyph`].
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let codes = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|glyph| TileType::from_glyph(glyph).map(TileType::code))
                    .collect::<Option<Vec<u8>>>()
            })
            .collect::<Option<Vec<_>>>()?;
        Self::from_codes(&codes)
    }

    pub fn size(&self) -> (Coord, Coord) {
        let (width, height) = self.tiles.dim();
        // construction guarantees both sides fit in a coordinate
        (width as Coord, height as Coord)
    }

    pub fn contains(&self, pos: Position) -> bool {
        let (width, height) = self.size();
        pos.x < width && pos.y < height
    }

    /// Tile at `pos`, anything outside the grid is a wall.
    pub fn tile_at(&self, pos: Position) -> TileType {
        if self.contains(pos) {
            self[pos]
        } else {
            TileType::Wall
        }
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile_at(pos).is_walkable()
    }

    /// First start tile in row-major order, `(1, 1)` when the grid has none.
    pub fn start_position(&self) -> Position {
        self.positions()
            .find(|&pos| self.tile_at(pos) == TileType::Start)
            .unwrap_or(Position::new(1, 1))
    }

    /// All positions in row-major order, top to bottom, left to right.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Walkable neighbors reachable by a single step.
    pub fn walkable_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| pos.step(direction))
            .filter(|&next| self.is_walkable(next))
    }

    /// Flood fill over walkable tiles from `from`.
    pub fn reachable_from(&self, from: Position) -> BTreeSet<Position> {
        let mut visited = BTreeSet::new();
        if !self.is_walkable(from) {
            return visited;
        }

        let mut to_visit = VecDeque::from([from]);
        while let Some(visit) = to_visit.pop_front() {
            if !visited.insert(visit) {
                continue;
            }
            to_visit.extend(
                self.walkable_neighbors(visit)
                    .filter(|pos| !visited.contains(pos)),
            );
        }
        log::trace!("flood fill from {:?} reached {} tiles", from, visited.len());
        visited
    }

    /// Stored codes in row-major order, the inverse of [`Maze::from_codes`].
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        let (width, height) = self.size();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| self.tile_at(Position::new(x, y)).code())
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Maze {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        Self::from_codes(&rows).ok_or_else(|| {
            GameError::InvalidLevelData("maze rows must be rectangular and non-empty".into())
        })
    }
}

impl From<Maze> for Vec<Vec<u8>> {
    fn from(maze: Maze) -> Self {
        maze.to_codes()
    }
}

impl Index<Position> for Maze {
    type Output = TileType;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Raw level record as supplied by a level feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub id: LevelId,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub layout: Vec<Vec<u8>>,
}

/// A validated level: one start, at least one exit, every open tile reachable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Level {
    id: LevelId,
    name: String,
    description: String,
    difficulty: Difficulty,
    maze: Maze,
    start: Position,
}

impl Level {
    pub fn id(&self) -> LevelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn start_position(&self) -> Position {
        self.start
    }

    pub fn tile_at(&self, pos: Position) -> TileType {
        self.maze.tile_at(pos)
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.maze.is_walkable(pos)
    }

    fn validate(data: LevelData) -> Result<Self> {
        let LevelData {
            id,
            name,
            description,
            difficulty,
            layout,
        } = data;

        let maze = Maze::from_codes(&layout).ok_or(GameError::InvalidGridShape(id))?;
        if maze.size() != (GRID_SIZE, GRID_SIZE) {
            return Err(GameError::InvalidGridShape(id));
        }

        match maze.count(TileType::Start) {
            0 => return Err(GameError::MissingStart(id)),
            1 => {}
            _ => return Err(GameError::MultipleStarts(id)),
        }
        if maze.count(TileType::Exit) == 0 {
            return Err(GameError::MissingExit(id));
        }

        let start = maze.start_position();
        let reachable = maze.reachable_from(start);
        if let Some(pos) = maze
            .positions()
            .find(|&pos| maze.is_walkable(pos) && !reachable.contains(&pos))
        {
            return Err(GameError::UnreachableTile {
                level: id,
                x: pos.x,
                y: pos.y,
            });
        }

        Ok(Self {
            id,
            name,
            description,
            difficulty,
            maze,
            start,
        })
    }
}

impl TryFrom<LevelData> for Level {
    type Error = GameError;

    fn try_from(data: LevelData) -> Result<Self> {
        Self::validate(data)
    }
}

/// Ordered, contiguous collection of validated levels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    /// Validates every level up front, the first defect aborts loading.
    pub fn new(data: impl IntoIterator<Item = LevelData>) -> Result<Self> {
        let levels = data
            .into_iter()
            .zip(1..)
            .map(|(data, expected)| {
                if data.id != expected {
                    return Err(GameError::NonContiguousLevelIds {
                        expected,
                        found: data.id,
                    });
                }
                Level::try_from(data)
            })
            .collect::<Result<Vec<_>>>()?;

        if levels.is_empty() {
            return Err(GameError::EmptyLevelSet);
        }
        log::info!("loaded {} levels", levels.len());
        Ok(Self { levels })
    }

    /// Parses a JSON array of [`LevelData`] records.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Vec<LevelData> = serde_json::from_str(json)
            .map_err(|err| GameError::InvalidLevelData(err.to_string()))?;
        Self::new(data)
    }

    pub fn total(&self) -> LevelId {
        // ids are contiguous from 1, so the count is the last id
        self.levels.last().map_or(0, Level::id)
    }

    pub fn contains(&self, id: LevelId) -> bool {
        (1..=self.total()).contains(&id)
    }

    pub fn level(&self, id: LevelId) -> Result<&Level> {
        if !self.contains(id) {
            return Err(GameError::UnknownLevel(id));
        }
        self.levels
            .get((id - 1) as usize)
            .ok_or(GameError::UnknownLevel(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
