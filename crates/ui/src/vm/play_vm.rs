use quest_core::model::{GameId, PlayerAnswer, Trial};
use quest_core::session::{CompletionReport, Phase, Resolution, TrialOutcome, TrialSession};
use services::{TrialLoopError, TrialLoopService};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayIntent {
    Begin,
    Tick,
    Select(PlayerAnswer),
    Advance,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayOutcome {
    Ignored,
    Resolved(Resolution),
    Completed(CompletionReport),
}

/// Screen-side wrapper around one trial session.
///
/// The session itself stays pure; the wrapper adds the run counter the
/// countdown task is keyed by and remembers the completion report for the
/// results card.
pub struct PlayVm {
    session: TrialSession,
    run: u32,
    report: Option<CompletionReport>,
}

impl PlayVm {
    #[must_use]
    pub fn new(session: TrialSession) -> Self {
        Self {
            session,
            run: 0,
            report: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn game(&self) -> GameId {
        self.session.game()
    }

    #[must_use]
    pub fn current_trial(&self) -> Option<&Trial> {
        self.session.current_trial()
    }

    #[must_use]
    pub fn trial_index(&self) -> usize {
        self.session.trial_index()
    }

    #[must_use]
    pub fn total_trials(&self) -> usize {
        self.session.total_trials()
    }

    #[must_use]
    pub fn ticks_left(&self) -> u32 {
        self.session.ticks_left()
    }

    #[must_use]
    pub fn ticks_per_trial(&self) -> u32 {
        self.session.config().ticks_per_trial()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[must_use]
    pub fn selected(&self) -> Option<PlayerAnswer> {
        self.session.selected()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<TrialOutcome> {
        self.session.outcome()
    }

    #[must_use]
    pub fn report(&self) -> Option<&CompletionReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn is_last_trial(&self) -> bool {
        self.session.trial_index() + 1 >= self.session.total_trials()
    }

    /// Identity of the countdown the screen should be running, if any.
    ///
    /// Changes on every trial entry and on restart, and clears on lock, so
    /// the timer guard arms and tears down exactly with the presented trial.
    #[must_use]
    pub fn timer_key(&self) -> Option<(u32, usize)> {
        match self.session.phase() {
            Phase::Presenting => Some((self.run, self.session.trial_index())),
            _ => None,
        }
    }

    pub fn begin(&mut self) {
        self.session.begin();
    }

    /// Start the whole session over as a fresh playthrough.
    pub fn restart(&mut self) {
        self.session.restart();
        self.run = self.run.wrapping_add(1);
        self.report = None;
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub async fn select(
        &mut self,
        trial_loop: &TrialLoopService,
        answer: PlayerAnswer,
    ) -> Result<PlayOutcome, ViewError> {
        let resolution = trial_loop
            .answer_current(&mut self.session, answer)
            .await
            .map_err(|_| ViewError::Unknown)?;
        Ok(resolution.map_or(PlayOutcome::Ignored, PlayOutcome::Resolved))
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub async fn tick(&mut self, trial_loop: &TrialLoopService) -> Result<PlayOutcome, ViewError> {
        let resolution = trial_loop
            .tick(&mut self.session)
            .await
            .map_err(|_| ViewError::Unknown)?;
        Ok(resolution.map_or(PlayOutcome::Ignored, PlayOutcome::Resolved))
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for service failures.
    pub async fn advance(
        &mut self,
        trial_loop: &TrialLoopService,
    ) -> Result<PlayOutcome, ViewError> {
        let report = trial_loop
            .advance(&mut self.session)
            .await
            .map_err(|_| ViewError::Unknown)?;
        match report {
            Some(report) => {
                self.report = Some(report);
                Ok(PlayOutcome::Completed(report))
            }
            None => Ok(PlayOutcome::Ignored),
        }
    }
}

/// # Errors
///
/// Returns `ViewError::NeedsAgeGroup` when no tier was picked yet.
/// Returns `ViewError::Unknown` for other failures.
pub fn start_play(trial_loop: &TrialLoopService, game: GameId) -> Result<PlayVm, ViewError> {
    let session = match trial_loop.start_session(game) {
        Ok(session) => session,
        Err(TrialLoopError::MissingAgeGroup) => return Err(ViewError::NeedsAgeGroup),
        Err(_) => return Err(ViewError::Unknown),
    };

    Ok(PlayVm::new(session))
}
