use crate::*;

/// Hand-authored levels shipped with the game, in ASCII notation.
const BUILTIN_LEVELS: [(&str, &str, Difficulty, [&str; GRID_SIZE as usize]); 5] = [
    (
        "First Steps",
        "Learn to move through the dark. Find the glowing exit.",
        Difficulty::Easy,
        [
            "###############",
            "#S....#.......#",
            "#.###.#.#####.#",
            "#...#...#...#.#",
            "###.#####.#.#.#",
            "#...#.....#...#",
            "#.###.#######.#",
            "#.#E..#.....#.#",
            "#.#####.###.#.#",
            "#.....#...#...#",
            "#####.###.###.#",
            "#...#...#...#.#",
            "#.#.###.###.#.#",
            "#.#.........#X#",
            "###############",
        ],
    ),
    (
        "Echo Chamber",
        "Echo tiles light up the maze around you for a few seconds.",
        Difficulty::Medium,
        [
            "###############",
            "#S..#.........#",
            "###.#.#######.#",
            "#...#.#.....#.#",
            "#.###.#.###.#.#",
            "#.#...#...#E#.#",
            "#.#.#.###.###.#",
            "#.#.#...#.....#",
            "#.#.#.#.#####.#",
            "#...#.#.#...#.#",
            "#####.#.#.#.#.#",
            "#E....#...#.#.#",
            "#.#########.#.#",
            "#...........#X#",
            "###############",
        ],
    ),
    (
        "Winding Dark",
        "Dead ends hide in every corner. Use the echoes wisely.",
        Difficulty::Medium,
        [
            "###############",
            "#S#.....#.....#",
            "#.#.#.#.#.###.#",
            "#.#.#E#...#...#",
            "#.#.#.#####.###",
            "#...#...#...#.#",
            "#####.#.#.###.#",
            "#.....#.#.#...#",
            "#.#####.#.#.#.#",
            "#.#.....#E#.#.#",
            "#.#.#######.#.#",
            "#...#.....#.#.#",
            "#.###.###.#.#.#",
            "#.....#E....#X#",
            "###############",
        ],
    ),
    (
        "The Labyrinth",
        "A long, twisting path with few landmarks.",
        Difficulty::Hard,
        [
            "###############",
            "#S....#...#...#",
            "#####.#.#.#.#.#",
            "#...#...#...#.#",
            "#.#.#########.#",
            "#.#.....#E..#.#",
            "#.#####.#.#.#.#",
            "#...#...#.#...#",
            "###.#.###.#####",
            "#E#.#...#.....#",
            "#.#.###.#####.#",
            "#.#...#.#...#.#",
            "#.###.#.#.#.#.#",
            "#.....#...#..X#",
            "###############",
        ],
    ),
    (
        "Abyss",
        "Only the faintest echoes will guide you out.",
        Difficulty::Expert,
        [
            "###############",
            "#S#...#...#..E#",
            "#.#.#.#.#.#.###",
            "#...#...#.#...#",
            "#####.#####.#.#",
            "#...#.#...#.#.#",
            "#.#.#.#.#.#.#.#",
            "#.#...#.#...#.#",
            "#.#######.###.#",
            "#.#E....#.#...#",
            "#.#.###.#.#.#.#",
            "#...#.#...#.#X#",
            "#####.#####.#.#",
            "#E..........#.#",
            "###############",
        ],
    ),
];

/// Raw records of the built-in levels, ids assigned in order from 1.
pub fn builtin_level_data() -> Vec<LevelData> {
    BUILTIN_LEVELS
        .iter()
        .zip(1..)
        .filter_map(|((name, description, difficulty, rows), id)| {
            let maze = Maze::from_ascii(rows)?;
            Some(LevelData {
                id,
                name: (*name).into(),
                description: (*description).into(),
                difficulty: *difficulty,
                layout: maze.to_codes(),
            })
        })
        .collect()
}

/// The built-in level pack, validated.
pub fn builtin_levels() -> Result<LevelSet> {
    LevelSet::new(builtin_level_data())
}
