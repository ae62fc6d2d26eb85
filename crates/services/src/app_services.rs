use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::trial_loop::TrialLoopService;
use crate::Clock;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    trial_loop: Arc<TrialLoopService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the first
    /// state load fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::with_storage(storage, clock).await
    }

    /// Build services over an already constructed storage aggregate.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the first state load fails.
    pub async fn with_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let progress = Arc::new(
            ProgressService::load_or_init(clock, Arc::clone(&storage.player_state)).await?,
        );
        let trial_loop = Arc::new(TrialLoopService::new(Arc::clone(&progress)));

        Ok(Self {
            progress,
            trial_loop,
        })
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn trial_loop(&self) -> Arc<TrialLoopService> {
        Arc::clone(&self.trial_loop)
    }
}
