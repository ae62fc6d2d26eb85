use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use quest_core::model::PlayerState;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the one persisted player state blob.
///
/// There is exactly one state per install; `load` returns `None` only
/// before the first save.
#[async_trait]
pub trait PlayerStateRepository: Send + Sync {
    /// Fetch the stored state, if any has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the stored data no
    /// longer maps onto the domain model.
    async fn load(&self) -> Result<Option<PlayerState>, StorageError>;

    /// Persist the whole state, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    async fn save(&self, state: &PlayerState) -> Result<(), StorageError>;
}

/// In-memory repository for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<Option<PlayerState>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerStateRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<PlayerState>, StorageError> {
        let guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, state: &PlayerState) -> Result<(), StorageError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(state.clone());
        Ok(())
    }
}

/// Aggregates the repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub player_state: Arc<dyn PlayerStateRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            player_state: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::model::{AgeGroup, GameId, PlayerName};
    use quest_core::time::fixed_now;

    #[tokio::test]
    async fn round_trips_player_state() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().await.unwrap().is_none());

        let mut state = PlayerState::new(fixed_now());
        state
            .profile_mut()
            .set_name(Some(PlayerName::new("Ada").unwrap()));
        state.profile_mut().set_age_group(Some(AgeGroup::Middle));
        state.progress_mut().record_answer(true);
        state.progress_mut().level_up(GameId::Loops);
        repo.save(&state).await.unwrap();

        let loaded = repo.load().await.unwrap().expect("state should be stored");
        assert_eq!(loaded, state);
        assert_eq!(loaded.progress().level(GameId::Loops), 2);
    }

    #[tokio::test]
    async fn save_replaces_previous_state() {
        let repo = InMemoryRepository::new();
        let mut state = PlayerState::new(fixed_now());
        repo.save(&state).await.unwrap();

        state.progress_mut().add_stars(5);
        repo.save(&state).await.unwrap();

        let loaded = repo.load().await.unwrap().expect("state should be stored");
        assert_eq!(loaded.progress().total_stars(), 5);
    }
}
