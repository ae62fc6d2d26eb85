use std::sync::Arc;

use services::{ProgressService, TrialLoopService};

pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressService>;
    fn trial_loop(&self) -> Arc<TrialLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressService>,
    trial_loop: Arc<TrialLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
            trial_loop: app.trial_loop(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
