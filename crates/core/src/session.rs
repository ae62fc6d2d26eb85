//! The timed trial runner: one generic state machine shared by every game.
//!
//! A session walks `Intro → Presenting(i) → Locked(i, outcome)` and from
//! there to `Presenting(i + 1)` or `Completed`. Games supply only a
//! [`GameConfig`] (trial list, countdown length, level threshold); none of
//! them carries its own copy of the control flow. Store side effects are
//! not performed here: resolving a trial or finishing a session yields a
//! value describing what the progress store should record.

use thiserror::Error;

use crate::model::{GameId, PlayerAnswer, Trial};

/// Countdown length used when a game does not override it.
pub const DEFAULT_TICKS_PER_TRIAL: u32 = 35;

/// Everything a game hands to the runner: its trials plus tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    game: GameId,
    trials: Vec<Trial>,
    ticks_per_trial: u32,
    level_threshold: u32,
    shuffle: bool,
}

impl GameConfig {
    /// Create a config with the default countdown and a level threshold of
    /// one below the trial count (a near-perfect session levels up).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoTrials` if the trial list is empty.
    pub fn new(game: GameId, trials: Vec<Trial>) -> Result<Self, SessionError> {
        if trials.is_empty() {
            return Err(SessionError::NoTrials { game });
        }
        let level_threshold = (trials.len() - 1).max(1) as u32;
        Ok(Self {
            game,
            trials,
            ticks_per_trial: DEFAULT_TICKS_PER_TRIAL,
            level_threshold,
            shuffle: false,
        })
    }

    /// Override the countdown length. Clamped to at least one tick.
    #[must_use]
    pub fn with_ticks_per_trial(mut self, ticks: u32) -> Self {
        self.ticks_per_trial = ticks.max(1);
        self
    }

    /// Override the session score needed to level up.
    #[must_use]
    pub fn with_level_threshold(mut self, threshold: u32) -> Self {
        self.level_threshold = threshold;
        self
    }

    /// Ask for the trial order to be reshuffled once at session start.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Reorder the trial list in place. The caller supplies the shuffle;
    /// the config stays free of randomness so sessions replay the order
    /// they were built with.
    pub fn reorder_trials(&mut self, reorder: impl FnOnce(&mut [Trial])) {
        reorder(&mut self.trials);
    }

    #[must_use]
    pub fn game(&self) -> GameId {
        self.game
    }

    #[must_use]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    #[must_use]
    pub fn ticks_per_trial(&self) -> u32 {
        self.ticks_per_trial
    }

    #[must_use]
    pub fn level_threshold(&self) -> u32 {
        self.level_threshold
    }

    #[must_use]
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rules card before the first trial. Leaving it is one-way.
    Intro,
    /// A trial is on screen and the countdown is running.
    Presenting,
    /// The current trial has resolved; waiting for advance.
    Locked(TrialOutcome),
    /// Terminal until an explicit restart.
    Completed,
}

/// How a single trial resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    Correct,
    Incorrect,
    TimedOut,
}

impl TrialOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, TrialOutcome::Correct)
    }
}

/// What the progress store should record for one resolved trial.
///
/// `counts_play` is true exactly once per session, on the first resolution
/// (selection or timeout); the session owns that guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    trial_index: usize,
    outcome: TrialOutcome,
    counts_play: bool,
}

impl Resolution {
    #[must_use]
    pub fn trial_index(&self) -> usize {
        self.trial_index
    }

    #[must_use]
    pub fn outcome(&self) -> TrialOutcome {
        self.outcome
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.outcome.is_correct()
    }

    #[must_use]
    pub fn counts_play(&self) -> bool {
        self.counts_play
    }
}

/// Final reckoning of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionReport {
    game: GameId,
    score: u32,
    total: u32,
    stars: u32,
    leveled_up: bool,
}

impl CompletionReport {
    #[must_use]
    pub fn game(&self) -> GameId {
        self.game
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Stars awarded: the session score, but never less than one.
    #[must_use]
    pub fn stars(&self) -> u32 {
        self.stars
    }

    #[must_use]
    pub fn leveled_up(&self) -> bool {
        self.leveled_up
    }
}

/// Ephemeral per-screen session state. Created when a game screen mounts,
/// dropped when the player navigates away.
///
/// Within one trial at most one resolution (selection or timeout) is ever
/// honored; `tick`, `select` and `advance` are no-ops outside the phase
/// they belong to and return `None` when ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSession {
    config: GameConfig,
    phase: Phase,
    index: usize,
    ticks_left: u32,
    selected: Option<PlayerAnswer>,
    score: u32,
    play_counted: bool,
}

impl TrialSession {
    /// A fresh session showing the intro card.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let ticks_left = config.ticks_per_trial();
        Self {
            config,
            phase: Phase::Intro,
            index: 0,
            ticks_left,
            selected: None,
            score: 0,
            play_counted: false,
        }
    }

    /// Leave the intro card and present the first trial. No-op once left.
    pub fn begin(&mut self) {
        if self.phase == Phase::Intro {
            self.enter_trial(0);
        }
    }

    /// Advance the countdown by one tick.
    ///
    /// Reaching zero locks the trial as timed out and returns the
    /// resolution to record. Ticks outside `Presenting` are ignored.
    pub fn tick(&mut self) -> Option<Resolution> {
        if self.phase != Phase::Presenting {
            return None;
        }
        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left > 0 {
            return None;
        }
        Some(self.lock(TrialOutcome::TimedOut))
    }

    /// Answer the current trial.
    ///
    /// Grades under the trial's own rule, locks with the outcome, and
    /// returns the resolution to record. Selections after lock, during the
    /// intro, or after completion are no-ops.
    pub fn select(&mut self, answer: PlayerAnswer) -> Option<Resolution> {
        if self.phase != Phase::Presenting {
            return None;
        }
        let correct = self.current_trial()?.grade(answer);
        self.selected = Some(answer);
        if correct {
            self.score += 1;
        }
        let outcome = if correct {
            TrialOutcome::Correct
        } else {
            TrialOutcome::Incorrect
        };
        Some(self.lock(outcome))
    }

    /// Move on from a locked trial: either present the next one or, from
    /// the last trial, complete the session and return the final report.
    pub fn advance(&mut self) -> Option<CompletionReport> {
        if !matches!(self.phase, Phase::Locked(_)) {
            return None;
        }
        if self.index + 1 < self.config.trials().len() {
            self.enter_trial(self.index + 1);
            None
        } else {
            self.phase = Phase::Completed;
            Some(CompletionReport {
                game: self.config.game(),
                score: self.score,
                total: self.config.trials().len() as u32,
                stars: self.score.max(1),
                leveled_up: self.score >= self.config.level_threshold(),
            })
        }
    }

    /// Throw the playthrough away and start over at the first trial.
    ///
    /// Session score and selection reset; the played-once guard re-arms
    /// because a restarted playthrough is a new session. Cumulative
    /// progress recorded so far stays recorded.
    pub fn restart(&mut self) {
        self.score = 0;
        self.play_counted = false;
        self.enter_trial(0);
    }

    fn enter_trial(&mut self, index: usize) {
        self.phase = Phase::Presenting;
        self.index = index;
        self.ticks_left = self.config.ticks_per_trial();
        self.selected = None;
    }

    fn lock(&mut self, outcome: TrialOutcome) -> Resolution {
        self.phase = Phase::Locked(outcome);
        let counts_play = !self.play_counted;
        self.play_counted = true;
        Resolution {
            trial_index: self.index,
            outcome,
            counts_play,
        }
    }

    // ─── Accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn game(&self) -> GameId {
        self.config.game()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The trial on screen, if one is.
    #[must_use]
    pub fn current_trial(&self) -> Option<&Trial> {
        match self.phase {
            Phase::Presenting | Phase::Locked(_) => self.config.trials().get(self.index),
            Phase::Intro | Phase::Completed => None,
        }
    }

    /// Zero-based index of the current trial.
    #[must_use]
    pub fn trial_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total_trials(&self) -> usize {
        self.config.trials().len()
    }

    #[must_use]
    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<PlayerAnswer> {
        self.selected
    }

    /// The outcome of the current trial, once locked.
    #[must_use]
    pub fn outcome(&self) -> Option<TrialOutcome> {
        match self.phase {
            Phase::Locked(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }
}

/// Errors building a session configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{game} has no trials to play")]
    NoTrials { game: GameId },
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
