use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::*;

/// Identity of a play session, bumped by every reset or level change.
pub type SessionId = u64;

/// Valid transitions:
/// - Playing -> Won (stepping on an exit)
/// - Won -> Playing (reset or level change only)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Read-only view of the engine handed to presentation every frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session: SessionId,
    pub level: LevelId,
    pub total_levels: LevelId,
    pub max_unlocked_level: LevelId,
    pub position: Position,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub state: GameState,
    pub vision_radius: Distance,
    pub echo_active: bool,
    pub echo_remaining_secs: f32,
    pub best_moves: Option<u32>,
}

/// Row of a level-select listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub id: LevelId,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub locked: bool,
    pub best_moves: Option<u32>,
}

/// Per-session state machine over a level pack and a progress store.
#[derive(Clone, Debug)]
pub struct GameEngine<M> {
    levels: LevelSet,
    progress: ProgressStore<M>,
    config: GameConfig,
    level: Level,
    session: SessionId,
    position: Position,
    moves: u32,
    elapsed: Duration,
    state: GameState,
    echo: EchoPulse,
}

impl<M: ProgressMedium> GameEngine<M> {
    /// Starts a session on the first level.
    pub fn new(levels: LevelSet, medium: M, config: GameConfig) -> Result<Self> {
        let level = levels.level(1)?.clone();
        let progress = ProgressStore::new(medium, levels.total());
        log::debug!(
            "engine ready with {} levels, {} unlocked",
            levels.total(),
            progress.max_unlocked()
        );
        Ok(Self {
            levels,
            progress,
            config,
            position: level.start_position(),
            level,
            session: 0,
            moves: 0,
            elapsed: Duration::ZERO,
            state: GameState::Playing,
            echo: EchoPulse::new(config.echo_duration(), config.echo_bonus_radius),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_id(&self) -> LevelId {
        self.level.id()
    }

    pub fn total_levels(&self) -> LevelId {
        self.levels.total()
    }

    pub fn max_unlocked_level(&self) -> LevelId {
        self.progress.max_unlocked()
    }

    pub fn progress(&self) -> &ProgressStore<M> {
        &self.progress
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whole seconds spent playing this session.
    pub fn elapsed_secs(&self) -> u32 {
        u32::try_from(self.elapsed.as_secs()).unwrap_or(u32::MAX)
    }

    pub fn echo(&self) -> &EchoPulse {
        &self.echo
    }

    pub fn vision_radius(&self) -> Distance {
        self.config.base_vision_radius.saturating_add(self.echo.bonus())
    }

    pub fn best_moves(&self) -> Option<u32> {
        self.progress.best(self.level.id())
    }

    pub fn tile_at(&self, pos: Position) -> TileType {
        self.level.tile_at(pos)
    }

    /// Fog band of `pos` as seen from the player, recomputed on every call.
    pub fn visibility_of(&self, pos: Position) -> Visibility {
        Visibility::from_distance(self.position.distance(pos), self.vision_radius())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session,
            level: self.level.id(),
            total_levels: self.levels.total(),
            max_unlocked_level: self.progress.max_unlocked(),
            position: self.position,
            moves: self.moves,
            elapsed_secs: self.elapsed_secs(),
            state: self.state,
            vision_radius: self.vision_radius(),
            echo_active: self.echo.is_active(),
            echo_remaining_secs: self.echo.remaining().as_secs_f32(),
            best_moves: self.best_moves(),
        }
    }

    pub fn levels(&self) -> Vec<LevelSummary> {
        self.levels
            .iter()
            .map(|level| LevelSummary {
                id: level.id(),
                name: level.name().into(),
                description: level.description().into(),
                difficulty: level.difficulty(),
                locked: !self.progress.is_unlocked(level.id()),
                best_moves: self.progress.best(level.id()),
            })
            .collect()
    }

    /// Moves the player one tile, walls and the grid edge block without cost.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.is_finished() {
            return MoveOutcome::NoChange;
        }

        let Some(target) = self
            .position
            .step(direction)
            .filter(|&pos| self.level.is_walkable(pos))
        else {
            log::trace!("blocked moving {:?} from {:?}", direction, self.position);
            return MoveOutcome::Blocked;
        };

        self.position = target;
        self.moves += 1;

        match self.level.tile_at(target) {
            TileType::Echo => {
                self.echo.activate();
                MoveOutcome::EchoPulse
            }
            TileType::Exit => self.win(),
            _ => MoveOutcome::Moved,
        }
    }

    /// Restarts the current level from its start tile.
    pub fn reset_level(&mut self) {
        let level = self.level.clone();
        self.start_session(level);
    }

    /// Switches to level `id`, which must exist and be unlocked.
    pub fn go_to_level(&mut self, id: LevelId) -> Result<()> {
        let level = self.levels.level(id)?;
        if !self.progress.is_unlocked(id) {
            return Err(GameError::LevelLocked(id));
        }
        let level = level.clone();
        self.start_session(level);
        Ok(())
    }

    /// Advances to the following level, the last level restarts itself.
    pub fn next_level(&mut self) -> Result<()> {
        let next = (self.level.id() + 1).min(self.levels.total());
        self.go_to_level(next)
    }

    /// Goes back one level, the first level restarts itself. Earlier levels
    /// are never locked.
    pub fn previous_level(&mut self) -> Result<()> {
        let previous = self.level.id().saturating_sub(1).max(1);
        let level = self.levels.level(previous)?.clone();
        self.start_session(level);
        Ok(())
    }

    /// Feeds elapsed wall-clock time into the session timer and the echo
    /// countdown. Returns whether anything visible changed.
    pub fn advance_clock(&mut self, delta: Duration) -> bool {
        let mut updated = false;

        if !self.state.is_finished() {
            let before = self.elapsed_secs();
            self.elapsed = self.elapsed.saturating_add(delta);
            updated |= self.elapsed_secs() != before;
        }

        if self.echo.is_active() {
            updated |= self.echo.tick(delta).has_update();
        }

        updated
    }

    fn win(&mut self) -> MoveOutcome {
        let id = self.level.id();
        let total = self.levels.total();
        self.state = GameState::Won;
        log::debug!("won level {} in {} moves", id, self.moves);

        self.progress.unlock_through((id + 1).min(total));
        let new_best = self.progress.set_best_if_better(id, self.moves);

        MoveOutcome::Won {
            moves: self.moves,
            new_best,
            last_level: id == total,
        }
    }

    /// Replaces the session, the echo countdown is cancelled before any new
    /// state is applied.
    fn start_session(&mut self, level: Level) {
        self.echo.cancel();
        self.session += 1;
        log::debug!("session {} on level {}", self.session, level.id());

        self.position = level.start_position();
        self.level = level;
        self.moves = 0;
        self.elapsed = Duration::ZERO;
        self.state = GameState::Playing;
    }
}
