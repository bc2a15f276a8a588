// Plays the built-in level pack end to end through the public API.

use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;

use echo_maze_core::*;

/// Shortest route from the start tile to the nearest exit.
fn solve(level: &Level) -> Vec<Direction> {
    let maze = level.maze();
    let start = level.start_position();
    let mut parents = BTreeMap::from([(start, start)]);
    let mut to_visit = VecDeque::from([start]);
    let mut exit = None;

    while let Some(pos) = to_visit.pop_front() {
        if maze.tile_at(pos) == TileType::Exit {
            exit = Some(pos);
            break;
        }
        for next in maze.walkable_neighbors(pos) {
            if !parents.contains_key(&next) {
                parents.insert(next, pos);
                to_visit.push_back(next);
            }
        }
    }

    let mut pos = exit.expect("every level has a reachable exit");
    let mut path = Vec::new();
    while pos != start {
        let parent = parents[&pos];
        let direction = Direction::ALL
            .into_iter()
            .find(|&direction| parent.step(direction) == Some(pos))
            .unwrap();
        path.push(direction);
        pos = parent;
    }
    path.reverse();
    path
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("echo-maze-{}-{}.json", name, std::process::id()))
}

#[test]
fn walkability_matches_tiles_on_every_level() {
    let levels = builtin_levels().unwrap();

    for level in levels.iter() {
        for y in 0..=GRID_SIZE {
            for x in 0..=GRID_SIZE {
                let pos = Position::new(x, y);
                assert_eq!(level.is_walkable(pos), level.tile_at(pos) != TileType::Wall);
            }
        }
    }
}

#[test]
fn blocked_moves_are_free_along_every_route() {
    let levels = builtin_levels().unwrap();
    let mut medium = MemoryMedium::default();
    medium.save(MAX_UNLOCKED_KEY, levels.total()).unwrap();
    let mut engine = GameEngine::new(levels.clone(), medium, GameConfig::default()).unwrap();

    for level in levels.iter() {
        engine.go_to_level(level.id()).unwrap();

        for direction in solve(level) {
            for probe in Direction::ALL {
                let target = engine.position().step(probe);
                if target.is_some_and(|pos| engine.level().is_walkable(pos)) {
                    continue;
                }
                let before = (engine.position(), engine.moves(), engine.echo().remaining());
                assert_eq!(engine.move_player(probe), MoveOutcome::Blocked);
                assert_eq!(
                    (engine.position(), engine.moves(), engine.echo().remaining()),
                    before
                );
            }
            engine.move_player(direction);
        }

        assert_eq!(engine.state(), GameState::Won);
    }
}

#[test]
fn full_playthrough_unlocks_every_level_and_persists() {
    let path = temp_path("playthrough");
    let _ = std::fs::remove_file(&path);
    let levels = builtin_levels().unwrap();
    let mut engine =
        GameEngine::new(levels.clone(), JsonFileMedium::new(&path), GameConfig::default()).unwrap();

    for level in levels.iter() {
        assert_eq!(engine.level_id(), level.id());
        assert_eq!(engine.state(), GameState::Playing);

        let route = solve(level);
        let mut outcome = MoveOutcome::NoChange;
        for direction in &route {
            assert!(!engine.is_finished());
            outcome = engine.move_player(*direction);
            engine.advance_clock(Duration::from_millis(100));
        }

        assert_eq!(
            outcome,
            MoveOutcome::Won {
                moves: route.len() as u32,
                new_best: true,
                last_level: level.id() == levels.total(),
            }
        );
        assert_eq!(engine.best_moves(), Some(route.len() as u32));

        if level.id() < levels.total() {
            assert_eq!(engine.max_unlocked_level(), level.id() + 1);
            engine.next_level().unwrap();
        }
    }

    let reopened =
        GameEngine::new(levels.clone(), JsonFileMedium::new(&path), GameConfig::default()).unwrap();
    assert_eq!(reopened.max_unlocked_level(), levels.total());
    assert!(reopened.levels().iter().all(|summary| !summary.locked));
    assert!(reopened.levels().iter().all(|summary| summary.best_moves.is_some()));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn level_pack_round_trips_through_json_feed() {
    let json = serde_json::to_string(&builtin_level_data()).unwrap();

    let levels = LevelSet::from_json(&json).unwrap();

    assert_eq!(levels, builtin_levels().unwrap());
}
