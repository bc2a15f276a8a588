use echo_maze_core::{ProgressMedium, StoreError};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

/// Browser `localStorage` medium, keys are namespaced with [`KEY_PREFIX`].
#[derive(Clone, Debug)]
pub struct LocalStorageMedium {
    available: bool,
}

pub const KEY_PREFIX: &str = "echo-maze:";

impl LocalStorageMedium {
    /// Probes for `localStorage`, which private browsing modes may deny.
    pub fn new() -> Self {
        let available = matches!(gloo::utils::window().local_storage(), Ok(Some(_)));
        if !available {
            log::warn!("localStorage unavailable, progress will not persist");
        }
        Self { available }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    fn key(key: &str) -> String {
        format!("{KEY_PREFIX}{key}")
    }
}

impl Default for LocalStorageMedium {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressMedium for LocalStorageMedium {
    fn load(&self, key: &str) -> Result<Option<u32>, StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        match LocalStorage::get::<u32>(Self::key(key)) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(err)) => Err(StoreError::Codec(err.to_string())),
            Err(err) => {
                log::debug!("localStorage read failed: {:?}", err);
                Err(StoreError::Unavailable)
            }
        }
    }

    fn save(&mut self, key: &str, value: u32) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        LocalStorage::set(Self::key(key), value).map_err(|err| {
            log::debug!("localStorage write failed: {:?}", err);
            StoreError::Unavailable
        })
    }
}
