use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::GameId;

/// First level of every game.
pub const INITIAL_LEVEL: u32 = 1;

/// Cumulative cross-session progress: play and answer counters, streaks,
/// star currency, and a per-game level map.
///
/// Invariants held by every transition:
/// - `best_streak >= current_streak`
/// - every [`GameId`] has a level entry, and levels never drop below 1
/// - levels only move via [`ProgressRecord::level_up`], by exactly +1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    games_played: u32,
    correct_answers: u32,
    current_streak: u32,
    best_streak: u32,
    total_stars: u32,
    levels: BTreeMap<GameId, u32>,
}

impl ProgressRecord {
    /// A fresh record: all counters zero, every game at level 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            games_played: 0,
            correct_answers: 0,
            current_streak: 0,
            best_streak: 0,
            total_stars: 0,
            levels: initial_levels(),
        }
    }

    /// Rebuild a record from persisted counters.
    ///
    /// Games missing from `levels` are filled in at level 1 so an older
    /// save keeps working when a game is added; unknown keys must already
    /// have been dropped by the caller.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::StreakInvariant` if `best_streak` is below
    /// `current_streak`, or `ProgressError::LevelOutOfRange` if any stored
    /// level is below 1.
    pub fn from_persisted(
        games_played: u32,
        correct_answers: u32,
        current_streak: u32,
        best_streak: u32,
        total_stars: u32,
        levels: BTreeMap<GameId, u32>,
    ) -> Result<Self, ProgressError> {
        if best_streak < current_streak {
            return Err(ProgressError::StreakInvariant {
                current: current_streak,
                best: best_streak,
            });
        }
        if let Some((game, level)) = levels
            .iter()
            .find(|(_, level)| **level < INITIAL_LEVEL)
            .map(|(game, level)| (*game, *level))
        {
            return Err(ProgressError::LevelOutOfRange { game, level });
        }
        let mut filled = initial_levels();
        filled.extend(levels);
        Ok(Self {
            games_played,
            correct_answers,
            current_streak,
            best_streak,
            total_stars,
            levels: filled,
        })
    }

    // ─── Transitions ───────────────────────────────────────────────────────────

    /// Count one played game.
    ///
    /// Called at most once per session, on the first answer interaction;
    /// the session owns that guard, not this record.
    pub fn increment_games_played(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
    }

    /// Record one resolved trial.
    ///
    /// A correct answer bumps the answer counter and the streak (raising
    /// the high-water mark when passed); a wrong answer or timeout resets
    /// the streak to zero.
    pub fn record_answer(&mut self, is_correct: bool) {
        if is_correct {
            self.correct_answers = self.correct_answers.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
            if self.current_streak > self.best_streak {
                self.best_streak = self.current_streak;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Add stars earned by a finished session.
    pub fn add_stars(&mut self, count: u32) {
        self.total_stars = self.total_stars.saturating_add(count);
    }

    /// Raise one game's level by exactly one.
    pub fn level_up(&mut self, game: GameId) {
        let level = self.levels.entry(game).or_insert(INITIAL_LEVEL);
        *level = level.saturating_add(1);
    }

    /// Back to the fresh state. Profile fields live elsewhere and are
    /// untouched by this.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ─── Accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn total_stars(&self) -> u32 {
        self.total_stars
    }

    /// Current level for a game.
    #[must_use]
    pub fn level(&self, game: GameId) -> u32 {
        self.levels.get(&game).copied().unwrap_or(INITIAL_LEVEL)
    }

    /// The full levels map, one entry per game.
    #[must_use]
    pub fn levels(&self) -> &BTreeMap<GameId, u32> {
        &self.levels
    }
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_levels() -> BTreeMap<GameId, u32> {
    GameId::ALL
        .into_iter()
        .map(|game| (game, INITIAL_LEVEL))
        .collect()
}

/// Errors rebuilding a [`ProgressRecord`] from persisted data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("best streak {best} is below current streak {current}")]
    StreakInvariant { current: u32, best: u32 },
    #[error("stored level {level} for {game} is below 1")]
    LevelOutOfRange { game: GameId, level: u32 },
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_every_game_at_level_one() {
        let record = ProgressRecord::new();
        assert_eq!(record.levels().len(), GameId::ALL.len());
        for game in GameId::ALL {
            assert_eq!(record.level(game), 1);
        }
    }

    #[test]
    fn test_record_answer_correct_bumps_counters() {
        let mut record = ProgressRecord::new();
        record.record_answer(true);
        record.record_answer(true);
        assert_eq!(record.correct_answers(), 2);
        assert_eq!(record.current_streak(), 2);
        assert_eq!(record.best_streak(), 2);
    }

    #[test]
    fn test_record_answer_wrong_resets_streak_to_zero() {
        let mut record = ProgressRecord::new();
        record.record_answer(true);
        record.record_answer(true);
        record.record_answer(true);
        record.record_answer(false);
        assert_eq!(record.current_streak(), 0);
        assert_eq!(record.best_streak(), 3);
        assert_eq!(record.correct_answers(), 3);
    }

    #[test]
    fn test_best_streak_never_decreases_and_dominates_current() {
        let mut record = ProgressRecord::new();
        let mut previous_best = 0;
        let outcomes = [true, true, false, true, true, true, false, true];
        for is_correct in outcomes {
            record.record_answer(is_correct);
            assert!(record.best_streak() >= previous_best);
            assert!(record.best_streak() >= record.current_streak());
            previous_best = record.best_streak();
        }
        assert_eq!(record.best_streak(), 3);
        assert_eq!(record.current_streak(), 1);
    }

    #[test]
    fn test_add_stars_accumulates_exactly() {
        let mut record = ProgressRecord::new();
        record.add_stars(3);
        record.add_stars(0);
        record.add_stars(5);
        assert_eq!(record.total_stars(), 8);
    }

    #[test]
    fn test_level_up_moves_one_game_by_exactly_one() {
        let mut record = ProgressRecord::new();
        record.level_up(GameId::Loops);
        record.level_up(GameId::Loops);
        assert_eq!(record.level(GameId::Loops), 3);
        assert_eq!(record.level(GameId::Variables), 1);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut record = ProgressRecord::new();
        record.increment_games_played();
        record.record_answer(true);
        record.add_stars(4);
        record.level_up(GameId::Patterns);
        record.reset();
        assert_eq!(record, ProgressRecord::new());
    }

    #[test]
    fn test_from_persisted_fills_missing_games() {
        let levels = BTreeMap::from([(GameId::Gates, 4)]);
        let record = ProgressRecord::from_persisted(10, 7, 2, 5, 12, levels).unwrap();
        assert_eq!(record.level(GameId::Gates), 4);
        assert_eq!(record.level(GameId::BugHunt), 1);
        assert_eq!(record.levels().len(), GameId::ALL.len());
    }

    #[test]
    fn test_from_persisted_rejects_streak_inversion() {
        let result = ProgressRecord::from_persisted(1, 1, 5, 2, 0, BTreeMap::new());
        assert_eq!(
            result,
            Err(ProgressError::StreakInvariant {
                current: 5,
                best: 2
            })
        );
    }

    #[test]
    fn test_from_persisted_rejects_zero_level() {
        let levels = BTreeMap::from([(GameId::Loops, 0)]);
        let result = ProgressRecord::from_persisted(0, 0, 0, 0, 0, levels);
        assert_eq!(
            result,
            Err(ProgressError::LevelOutOfRange {
                game: GameId::Loops,
                level: 0
            })
        );
    }
}
