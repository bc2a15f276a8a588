use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::*;

pub const MAX_UNLOCKED_KEY: &str = "maxUnlockedLevel";

pub fn best_moves_key(level: LevelId) -> String {
    format!("bestMoves:{level}")
}

/// Durable key-value medium holding progress counters.
pub trait ProgressMedium {
    fn load(&self, key: &str) -> core::result::Result<Option<u32>, StoreError>;
    fn save(&mut self, key: &str, value: u32) -> core::result::Result<(), StoreError>;
}

/// Volatile medium, also the fallback when nothing durable is available.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryMedium {
    values: BTreeMap<String, u32>,
}

impl ProgressMedium for MemoryMedium {
    fn load(&self, key: &str) -> core::result::Result<Option<u32>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn save(&mut self, key: &str, value: u32) -> core::result::Result<(), StoreError> {
        self.values.insert(key.into(), value);
        Ok(())
    }
}

/// Stores every counter in a single JSON object on disk.
#[derive(Clone, Debug)]
pub struct JsonFileMedium {
    path: PathBuf,
}

impl JsonFileMedium {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> core::result::Result<BTreeMap<String, u32>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|err| StoreError::Codec(err.to_string()))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl ProgressMedium for JsonFileMedium {
    fn load(&self, key: &str) -> core::result::Result<Option<u32>, StoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn save(&mut self, key: &str, value: u32) -> core::result::Result<(), StoreError> {
        let mut values = self.read_all()?;
        values.insert(key.into(), value);
        let contents =
            serde_json::to_string_pretty(&values).map_err(|err| StoreError::Codec(err.to_string()))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Best scores and unlock progress over any [`ProgressMedium`].
///
/// Medium failures are logged and never reach the caller. Every write also
/// lands in an in-memory cache that answers reads for the written keys, so a
/// medium that reads but cannot write still keeps this session's progress.
#[derive(Clone, Debug)]
pub struct ProgressStore<M> {
    medium: M,
    cache: MemoryMedium,
    total_levels: LevelId,
}

impl<M: ProgressMedium> ProgressStore<M> {
    pub fn new(medium: M, total_levels: LevelId) -> Self {
        Self {
            medium,
            cache: MemoryMedium::default(),
            total_levels,
        }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    pub fn total_levels(&self) -> LevelId {
        self.total_levels
    }

    pub fn best(&self, level: LevelId) -> Option<u32> {
        self.load(&best_moves_key(level))
    }

    /// Stores `moves` when no best exists yet or it beats the stored one.
    pub fn set_best_if_better(&mut self, level: LevelId, moves: u32) -> bool {
        if self.best(level).is_some_and(|best| moves >= best) {
            return false;
        }
        log::debug!("new best for level {}: {} moves", level, moves);
        self.save(&best_moves_key(level), moves);
        true
    }

    pub fn max_unlocked(&self) -> LevelId {
        self.load(MAX_UNLOCKED_KEY).map_or(1, |level| level.max(1))
    }

    /// Raises the unlock threshold to `level`, never lowers it or passes the last level.
    pub fn unlock_through(&mut self, level: LevelId) -> bool {
        if level <= self.max_unlocked() || level > self.total_levels {
            return false;
        }
        log::debug!("unlocked through level {}", level);
        self.save(MAX_UNLOCKED_KEY, level);
        true
    }

    pub fn is_unlocked(&self, level: LevelId) -> bool {
        (1..=self.max_unlocked()).contains(&level)
    }

    /// The cache holds every value written this session, so it wins over the
    /// medium, which may have dropped the write.
    fn load(&self, key: &str) -> Option<u32> {
        if let Ok(Some(value)) = self.cache.load(key) {
            return Some(value);
        }
        match self.medium.load(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not read {} from progress storage: {}", key, err);
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: u32) {
        // the in-memory medium is infallible
        let _ = self.cache.save(key, value);
        if let Err(err) = self.medium.save(key, value) {
            log::warn!("could not write {} to progress storage: {}", key, err);
        }
    }
}
