use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use quest_core::model::{AgeGroup, GameId, PlayerName, PlayerState};
use storage::repository::PlayerStateRepository;

use crate::error::ProgressServiceError;
use crate::Clock;

/// Single source of truth for the player's cross-session state.
///
/// Keeps the live state behind a mutex, applies the pure domain transition
/// inside the lock, and writes the whole record through the repository
/// afterwards. When a save fails the in-memory transition is kept; the next
/// successful save writes it through.
pub struct ProgressService {
    clock: Clock,
    repo: Arc<dyn PlayerStateRepository>,
    state: Mutex<PlayerState>,
}

impl ProgressService {
    /// Load the persisted state, or create and persist a fresh one when
    /// nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn load_or_init(
        clock: Clock,
        repo: Arc<dyn PlayerStateRepository>,
    ) -> Result<Self, ProgressServiceError> {
        let state = match repo.load().await? {
            Some(state) => state,
            None => {
                let state = PlayerState::new(clock.now());
                repo.save(&state).await?;
                state
            }
        };

        Ok(Self {
            clock,
            repo,
            state: Mutex::new(state),
        })
    }

    /// A point-in-time copy of the whole player state.
    #[must_use]
    pub fn snapshot(&self) -> PlayerState {
        self.locked().clone()
    }

    /// The player's selected age tier, if one was picked yet.
    #[must_use]
    pub fn age_group(&self) -> Option<AgeGroup> {
        self.locked().profile().age_group()
    }

    /// Set or clear the player's display name.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn set_player_name(
        &self,
        name: Option<PlayerName>,
    ) -> Result<PlayerState, ProgressServiceError> {
        self.mutate(|state| state.profile_mut().set_name(name)).await
    }

    /// Set or clear the player's age tier.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn set_age_group(
        &self,
        age_group: Option<AgeGroup>,
    ) -> Result<PlayerState, ProgressServiceError> {
        self.mutate(|state| state.profile_mut().set_age_group(age_group))
            .await
    }

    /// Toggle sound effects on or off.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn set_sound_enabled(
        &self,
        enabled: bool,
    ) -> Result<PlayerState, ProgressServiceError> {
        self.mutate(|state| state.set_sound_enabled(enabled)).await
    }

    /// Count one played game.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn increment_games_played(&self) -> Result<PlayerState, ProgressServiceError> {
        self.mutate(|state| state.progress_mut().increment_games_played())
            .await
    }

    /// Record one answered trial, updating totals and streaks.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn record_answer(
        &self,
        is_correct: bool,
    ) -> Result<PlayerState, ProgressServiceError> {
        self.mutate(|state| state.progress_mut().record_answer(is_correct))
            .await
    }

    /// Award stars after a finished session.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn add_stars(&self, count: u32) -> Result<PlayerState, ProgressServiceError> {
        self.mutate(|state| state.progress_mut().add_stars(count))
            .await
    }

    /// Raise the player's level for one game by one.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn level_up(&self, game: GameId) -> Result<PlayerState, ProgressServiceError> {
        self.mutate(|state| state.progress_mut().level_up(game)).await
    }

    /// Wipe all progress counters and levels, keeping the profile.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` on storage failures.
    pub async fn reset_progress(&self) -> Result<PlayerState, ProgressServiceError> {
        self.mutate(|state| state.progress_mut().reset()).await
    }

    async fn mutate(
        &self,
        apply: impl FnOnce(&mut PlayerState),
    ) -> Result<PlayerState, ProgressServiceError> {
        let snapshot = {
            let mut guard = self.locked();
            apply(&mut guard);
            guard.touch(self.clock.now());
            guard.clone()
        };
        self.repo.save(&snapshot).await?;
        Ok(snapshot)
    }

    // A poisoned lock still yields the last written state.
    fn locked(&self) -> MutexGuard<'_, PlayerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use quest_core::time::{fixed_clock, fixed_now};
    use storage::repository::{InMemoryRepository, StorageError};

    async fn service_with_repo() -> (ProgressService, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        let service = ProgressService::load_or_init(fixed_clock(), Arc::new(repo.clone()))
            .await
            .unwrap();
        (service, repo)
    }

    #[tokio::test]
    async fn init_persists_a_fresh_state() {
        let (service, repo) = service_with_repo().await;

        let stored = repo.load().await.unwrap().unwrap();
        assert_eq!(stored, service.snapshot());
        assert_eq!(stored.progress().games_played(), 0);
        assert!(stored.sound_enabled());
        assert_eq!(stored.updated_at(), fixed_now());
    }

    #[tokio::test]
    async fn init_reuses_the_persisted_state() {
        let repo = InMemoryRepository::new();
        let mut state = PlayerState::new(fixed_now());
        state.progress_mut().add_stars(7);
        repo.save(&state).await.unwrap();

        let service = ProgressService::load_or_init(fixed_clock(), Arc::new(repo))
            .await
            .unwrap();

        assert_eq!(service.snapshot().progress().total_stars(), 7);
    }

    #[tokio::test]
    async fn mutations_write_through_to_the_repository() {
        let (service, repo) = service_with_repo().await;

        service.record_answer(true).await.unwrap();
        service.record_answer(true).await.unwrap();
        service.record_answer(false).await.unwrap();
        let updated = service.add_stars(3).await.unwrap();

        assert_eq!(updated.progress().correct_answers(), 2);
        assert_eq!(updated.progress().current_streak(), 0);
        assert_eq!(updated.progress().best_streak(), 2);
        assert_eq!(updated.progress().total_stars(), 3);

        let stored = repo.load().await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn profile_edits_survive_a_progress_reset() {
        let (service, _repo) = service_with_repo().await;

        let name = PlayerName::new("Mona").unwrap();
        service.set_player_name(Some(name)).await.unwrap();
        service.set_age_group(Some(AgeGroup::Middle)).await.unwrap();
        service.level_up(GameId::Loops).await.unwrap();

        let state = service.reset_progress().await.unwrap();

        assert_eq!(state.profile().name().map(PlayerName::as_str), Some("Mona"));
        assert_eq!(state.profile().age_group(), Some(AgeGroup::Middle));
        assert_eq!(state.progress().level(GameId::Loops), 1);
        assert_eq!(state.progress().total_stars(), 0);
    }

    struct FailingRepository;

    #[async_trait]
    impl PlayerStateRepository for FailingRepository {
        async fn load(&self) -> Result<Option<PlayerState>, StorageError> {
            Ok(Some(PlayerState::new(fixed_now())))
        }

        async fn save(&self, _state: &PlayerState) -> Result<(), StorageError> {
            Err(StorageError::Connection("disk gone".into()))
        }
    }

    #[tokio::test]
    async fn failed_save_keeps_the_in_memory_transition() {
        let service = ProgressService::load_or_init(fixed_clock(), Arc::new(FailingRepository))
            .await
            .unwrap();

        let err = service.increment_games_played().await.unwrap_err();
        assert!(matches!(err, ProgressServiceError::Storage(_)));
        assert_eq!(service.snapshot().progress().games_played(), 1);
    }
}
