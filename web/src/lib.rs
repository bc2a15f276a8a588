use echo_maze_core::{
    Direction, FrameClock, GRID_SIZE, GameConfig, GameEngine, LevelId, MoveOutcome, Position,
    builtin_levels, format_clock,
};
use wasm_bindgen::prelude::*;

pub use storage::*;

mod storage;

/// Directional intent coming from the page (buttons, swipes, keys).
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
}

impl From<Intent> for Direction {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Up => Direction::Up,
            Intent::Down => Direction::Down,
            Intent::Left => Direction::Left,
            Intent::Right => Direction::Right,
        }
    }
}

/// Engine handle exported to JavaScript. All state crosses the boundary as
/// JSON snapshots, rendering stays on the page.
#[wasm_bindgen]
pub struct WebGame {
    engine: GameEngine<LocalStorageMedium>,
    clock: FrameClock,
    last_outcome: Option<MoveOutcome>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsError> {
        Self::with_config(GameConfig::default())
    }

    /// Builds a game from a JSON [`GameConfig`], missing fields use defaults.
    pub fn from_config(json: &str) -> Result<WebGame, JsError> {
        Self::with_config(GameConfig::from_json(json)?)
    }

    pub fn grid_size(&self) -> u8 {
        GRID_SIZE
    }

    /// Returns whether the move changed anything worth redrawing.
    pub fn step(&mut self, intent: Intent) -> bool {
        self.apply_move(intent.into())
    }

    /// Keyboard entry point, `key` is a `KeyboardEvent.key` value. Returns
    /// whether the move changed anything worth redrawing, keys that are not
    /// movement keys change nothing.
    pub fn press_key(&mut self, key: &str) -> bool {
        Direction::from_key(key).is_some_and(|direction| self.apply_move(direction))
    }

    /// Whether `key` is one of the movement keys, for `preventDefault`.
    pub fn is_movement_key(key: &str) -> bool {
        Direction::from_key(key).is_some()
    }

    /// Outcome of the latest move as JSON, `null` before the first move.
    pub fn last_outcome(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.last_outcome)?)
    }

    pub fn reset(&mut self) {
        self.engine.reset_level();
        self.after_session_change();
    }

    pub fn select_level(&mut self, id: LevelId) -> bool {
        let result = self.engine.go_to_level(id);
        self.navigated(result)
    }

    pub fn next_level(&mut self) -> bool {
        let result = self.engine.next_level();
        self.navigated(result)
    }

    pub fn previous_level(&mut self) -> bool {
        let result = self.engine.previous_level();
        self.navigated(result)
    }

    /// Call from a `setInterval` or animation frame; returns whether the
    /// snapshot changed.
    pub fn frame(&mut self) -> bool {
        let delta = self.clock.frame();
        self.engine.advance_clock(delta)
    }

    /// Drops the time the page spent hidden.
    pub fn resume(&mut self) {
        self.clock.restart();
    }

    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.engine.snapshot())?)
    }

    pub fn levels(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.engine.levels())?)
    }

    /// Stored tile code at `(x, y)` of the current level.
    pub fn tile(&self, x: u8, y: u8) -> u8 {
        self.engine.tile_at(Position::new(x, y)).code()
    }

    pub fn fog(&self, x: u8, y: u8) -> f32 {
        self.engine.visibility_of(Position::new(x, y)).fog_opacity()
    }

    pub fn elapsed_label(&self) -> String {
        format_clock(self.engine.elapsed_secs())
    }
}

impl WebGame {
    fn apply_move(&mut self, direction: Direction) -> bool {
        let outcome = self.engine.move_player(direction);
        if let MoveOutcome::Won { moves, .. } = outcome {
            log::info!("level {} cleared in {} moves", self.engine.level_id(), moves);
        }
        self.last_outcome = Some(outcome);
        outcome.has_update()
    }

    fn with_config(config: GameConfig) -> Result<WebGame, JsError> {
        let levels = builtin_levels()?;
        let engine = GameEngine::new(levels, LocalStorageMedium::new(), config)?;
        Ok(Self {
            engine,
            clock: FrameClock::new(),
            last_outcome: None,
        })
    }

    fn navigated(&mut self, result: echo_maze_core::Result<()>) -> bool {
        match result {
            Ok(()) => {
                self.after_session_change();
                true
            }
            Err(err) => {
                log::debug!("navigation rejected: {}", err);
                false
            }
        }
    }

    fn after_session_change(&mut self) {
        self.clock.restart();
        self.last_outcome = None;
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Error initializing logger");
    log::info!("Echo Maze started");
}
