#![cfg(target_arch = "wasm32")]

use echo_maze_core::{ProgressMedium, ProgressStore};
use echo_maze_web::{Intent, KEY_PREFIX, LocalStorageMedium, WebGame};
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn medium_reads_back_saved_values() {
    LocalStorage::clear();
    let mut medium = LocalStorageMedium::new();
    assert!(medium.is_available());

    medium.save("bestMoves:1", 17).unwrap();

    assert_eq!(medium.load("bestMoves:1").unwrap(), Some(17));
    assert_eq!(medium.load("bestMoves:2").unwrap(), None);
    assert_eq!(
        LocalStorage::get::<u32>(format!("{KEY_PREFIX}bestMoves:1")).unwrap(),
        17
    );
}

#[wasm_bindgen_test]
fn progress_persists_across_stores() {
    LocalStorage::clear();
    let mut store = ProgressStore::new(LocalStorageMedium::new(), 5);
    store.unlock_through(3);

    let reopened = ProgressStore::new(LocalStorageMedium::new(), 5);

    assert_eq!(reopened.max_unlocked(), 3);
}

#[wasm_bindgen_test]
fn game_rejects_locked_levels() {
    LocalStorage::clear();
    let mut game = WebGame::new().unwrap();

    assert!(!game.select_level(2));
    assert!(game.select_level(1));
}

#[wasm_bindgen_test]
fn keys_and_intents_share_one_path() {
    LocalStorage::clear();
    let mut game = WebGame::new().unwrap();

    assert!(!game.press_key("Enter"));
    assert!(WebGame::is_movement_key("ArrowUp"));
    assert!(!WebGame::is_movement_key("Enter"));

    // the start tile of the first level has a wall above it
    assert!(!game.press_key("ArrowUp"));
    assert_eq!(game.last_outcome().unwrap(), r#"{"kind":"Blocked"}"#);
    assert!(!game.step(Intent::Up));

    assert!(game.press_key("ArrowDown"));
    assert_eq!(game.last_outcome().unwrap(), r#"{"kind":"Moved"}"#);
    assert!(game.step(Intent::Up));
}
