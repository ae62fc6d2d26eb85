use std::sync::Arc;

use rand::seq::SliceRandom;

use quest_core::content;
use quest_core::model::{GameId, PlayerAnswer};
use quest_core::session::{CompletionReport, Resolution, TrialSession};

use crate::error::TrialLoopError;
use crate::progress_service::ProgressService;

/// Orchestrates trial sessions and writes their outcomes through the
/// progress store.
///
/// The session state machine itself stays pure; this service pairs each
/// resolving step with the matching store updates.
#[derive(Clone)]
pub struct TrialLoopService {
    progress: Arc<ProgressService>,
}

impl TrialLoopService {
    #[must_use]
    pub fn new(progress: Arc<ProgressService>) -> Self {
        Self { progress }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    /// Build a fresh session for `game` at the player's current tier.
    ///
    /// Games whose content asks for it get their trial order shuffled once,
    /// here at session start.
    ///
    /// # Errors
    ///
    /// Returns `TrialLoopError::MissingAgeGroup` when no tier was picked yet,
    /// or a content error if the catalog cannot produce a session.
    pub fn start_session(&self, game: GameId) -> Result<TrialSession, TrialLoopError> {
        let tier = self
            .progress
            .age_group()
            .ok_or(TrialLoopError::MissingAgeGroup)?;

        let mut config = content::config(game, tier)?;
        if config.shuffle() {
            config.reorder_trials(|trials| trials.shuffle(&mut rand::rng()));
        }

        Ok(TrialSession::new(config))
    }

    /// Answer the current trial; a resolving answer is recorded in the store.
    ///
    /// Returns `None` when the session is not presenting a trial, or when the
    /// answer kind does not resolve anything.
    ///
    /// # Errors
    ///
    /// Returns `TrialLoopError` when the store update fails.
    pub async fn answer_current(
        &self,
        session: &mut TrialSession,
        answer: PlayerAnswer,
    ) -> Result<Option<Resolution>, TrialLoopError> {
        let Some(resolution) = session.select(answer) else {
            return Ok(None);
        };
        self.record_resolution(&resolution).await?;
        Ok(Some(resolution))
    }

    /// Advance the countdown by one tick; expiry resolves the trial as timed
    /// out and is recorded like an answer.
    ///
    /// # Errors
    ///
    /// Returns `TrialLoopError` when the store update fails.
    pub async fn tick(
        &self,
        session: &mut TrialSession,
    ) -> Result<Option<Resolution>, TrialLoopError> {
        let Some(resolution) = session.tick() else {
            return Ok(None);
        };
        self.record_resolution(&resolution).await?;
        Ok(Some(resolution))
    }

    /// Move past a locked trial; finishing the last one awards stars and any
    /// level-up.
    ///
    /// # Errors
    ///
    /// Returns `TrialLoopError` when the store update fails.
    pub async fn advance(
        &self,
        session: &mut TrialSession,
    ) -> Result<Option<CompletionReport>, TrialLoopError> {
        let Some(report) = session.advance() else {
            return Ok(None);
        };
        self.record_completion(&report).await?;
        Ok(Some(report))
    }

    async fn record_resolution(&self, resolution: &Resolution) -> Result<(), TrialLoopError> {
        if resolution.counts_play() {
            self.progress.increment_games_played().await?;
        }
        self.progress.record_answer(resolution.is_correct()).await?;
        Ok(())
    }

    async fn record_completion(&self, report: &CompletionReport) -> Result<(), TrialLoopError> {
        self.progress.add_stars(report.stars()).await?;
        if report.leveled_up() {
            self.progress.level_up(report.game()).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quest_core::model::AgeGroup;
    use quest_core::session::Phase;
    use quest_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    async fn loop_with_tier(tier: Option<AgeGroup>) -> TrialLoopService {
        let repo = Arc::new(InMemoryRepository::new());
        let progress = ProgressService::load_or_init(fixed_clock(), repo)
            .await
            .unwrap();
        if tier.is_some() {
            progress.set_age_group(tier).await.unwrap();
        }
        TrialLoopService::new(Arc::new(progress))
    }

    #[tokio::test]
    async fn start_requires_an_age_group() {
        let loop_svc = loop_with_tier(None).await;

        let err = loop_svc.start_session(GameId::Loops).unwrap_err();
        assert!(matches!(err, TrialLoopError::MissingAgeGroup));
    }

    #[tokio::test]
    async fn answers_before_begin_are_ignored() {
        let loop_svc = loop_with_tier(Some(AgeGroup::Young)).await;
        let mut session = loop_svc.start_session(GameId::Gates).unwrap();

        let resolution = loop_svc
            .answer_current(&mut session, PlayerAnswer::Truth(true))
            .await
            .unwrap();

        assert!(resolution.is_none());
        assert_eq!(session.phase(), Phase::Intro);
        assert_eq!(loop_svc.progress().snapshot().progress().games_played(), 0);
    }

    #[tokio::test]
    async fn first_resolution_counts_the_play_once() {
        let loop_svc = loop_with_tier(Some(AgeGroup::Young)).await;
        let mut session = loop_svc.start_session(GameId::Gates).unwrap();
        session.begin();

        let first = loop_svc
            .answer_current(&mut session, PlayerAnswer::Truth(true))
            .await
            .unwrap()
            .unwrap();
        assert!(first.counts_play());

        loop_svc.advance(&mut session).await.unwrap();
        let second = loop_svc
            .answer_current(&mut session, PlayerAnswer::Truth(false))
            .await
            .unwrap()
            .unwrap();
        assert!(!second.counts_play());

        let progress = loop_svc.progress().snapshot();
        assert_eq!(progress.progress().games_played(), 1);
    }

    #[tokio::test]
    async fn ticking_down_to_zero_records_a_timeout() {
        let loop_svc = loop_with_tier(Some(AgeGroup::Young)).await;
        let mut session = loop_svc.start_session(GameId::Patterns).unwrap();
        session.begin();

        let ticks = session.ticks_left();
        let mut resolution = None;
        for _ in 0..ticks {
            resolution = loop_svc.tick(&mut session).await.unwrap();
        }

        let resolution = resolution.unwrap();
        assert!(!resolution.is_correct());

        let progress = loop_svc.progress().snapshot();
        assert_eq!(progress.progress().games_played(), 1);
        assert_eq!(progress.progress().correct_answers(), 0);
        assert_eq!(progress.progress().current_streak(), 0);
    }
}
