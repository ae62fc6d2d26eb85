//! Static trial tables for the eleven games.
//!
//! Each game module returns one shared table with per-trial minimum-tier
//! tags; [`config`] slices it for the requested tier and wraps it in a
//! [`GameConfig`]. Tables are plain data, built fresh per session and
//! cheap enough to rebuild on every restart.

mod bug_hunt;
mod color_sort;
mod conditions;
mod gates;
mod loops;
mod odd_one_out;
mod patterns;
mod sequences;
mod shape_sort;
mod syllogisms;
mod variables;

use thiserror::Error;

use crate::model::{AgeGroup, GameId, Trial, TrialError};
use crate::session::{GameConfig, SessionError};

/// Build the session configuration for one game at one tier.
///
/// Question-bank games ask for a reshuffle at session start; games with a
/// deliberate progression (gates, patterns, the two sorters with their
/// mid-session rule flip) keep their listed order.
///
/// # Errors
///
/// Returns `ContentError` if a trial table fails to build or the tier
/// slice ends up empty. Both would be authoring mistakes; the tests below
/// build every game at every tier.
pub fn config(game: GameId, tier: AgeGroup) -> Result<GameConfig, ContentError> {
    let table = match game {
        GameId::Variables => variables::trials()?,
        GameId::Loops => loops::trials()?,
        GameId::Gates => gates::trials()?,
        GameId::Syllogisms => syllogisms::trials()?,
        GameId::Patterns => patterns::trials()?,
        GameId::ColorSort => color_sort::trials()?,
        GameId::ShapeSort => shape_sort::trials()?,
        GameId::Sequences => sequences::trials()?,
        GameId::Conditions => conditions::trials()?,
        GameId::BugHunt => bug_hunt::trials()?,
        GameId::OddOneOut => odd_one_out::trials()?,
    };
    let trials: Vec<Trial> = table
        .into_iter()
        .filter(|trial| trial.min_tier() <= tier)
        .collect();
    let config = GameConfig::new(game, trials)?;
    Ok(match game {
        GameId::Variables
        | GameId::Loops
        | GameId::Syllogisms
        | GameId::Sequences
        | GameId::Conditions
        | GameId::BugHunt
        | GameId::OddOneOut => config.with_shuffle(true),
        GameId::Gates | GameId::Patterns | GameId::ColorSort | GameId::ShapeSort => config,
    })
}

/// Errors assembling game content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error(transparent)]
    Trial(#[from] TrialError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerRule;

    #[test]
    fn test_every_game_builds_at_every_tier() {
        for game in GameId::ALL {
            for tier in AgeGroup::ALL {
                let config = config(game, tier)
                    .unwrap_or_else(|err| panic!("{game} at {tier} failed to build: {err}"));
                assert!(
                    config.trials().len() >= 4,
                    "{game} at {tier} has only {} trials",
                    config.trials().len()
                );
            }
        }
    }

    #[test]
    fn test_higher_tiers_see_at_least_as_many_trials() {
        for game in GameId::ALL {
            let young = config(game, AgeGroup::Young).unwrap().trials().len();
            let middle = config(game, AgeGroup::Middle).unwrap().trials().len();
            let older = config(game, AgeGroup::Older).unwrap().trials().len();
            assert!(young <= middle, "{game}: young slice larger than middle");
            assert!(middle <= older, "{game}: middle slice larger than older");
        }
    }

    #[test]
    fn test_sorting_games_flip_their_rule_mid_session() {
        for game in [GameId::ColorSort, GameId::ShapeSort] {
            for tier in AgeGroup::ALL {
                let config = config(game, tier).unwrap();
                let rules: Vec<_> = config
                    .trials()
                    .iter()
                    .filter_map(|trial| match trial.rule() {
                        AnswerRule::Sort { rule } => Some(*rule),
                        _ => None,
                    })
                    .collect();
                assert_eq!(rules.len(), config.trials().len());
                let first = rules.first().copied();
                let last = rules.last().copied();
                assert_ne!(first, last, "{game} at {tier} never flips its rule");
            }
        }
    }

    #[test]
    fn test_sorting_trials_all_carry_items() {
        for game in [GameId::ColorSort, GameId::ShapeSort] {
            let config = config(game, AgeGroup::Older).unwrap();
            for trial in config.trials() {
                assert!(trial.item().is_some(), "{game}: sort trial without an item");
            }
        }
    }

    #[test]
    fn test_gate_trials_carry_their_specs() {
        let config = config(GameId::Gates, AgeGroup::Older).unwrap();
        for trial in config.trials() {
            let spec = trial.gate_spec().expect("gate trial without a spec");
            assert_eq!(
                trial.rule(),
                &AnswerRule::Truth {
                    expected: spec.output()
                }
            );
        }
    }

    #[test]
    fn test_pattern_trials_offer_three_or_four_options() {
        for tier in AgeGroup::ALL {
            let config = config(GameId::Patterns, tier).unwrap();
            for trial in config.trials() {
                let count = trial.options().len();
                assert!(
                    count == 3 || count == 4,
                    "pattern trial offers {count} options"
                );
                assert!(trial.pattern_spec().is_some());
            }
        }
    }

    #[test]
    fn test_progression_games_keep_listed_order() {
        for game in [
            GameId::Gates,
            GameId::Patterns,
            GameId::ColorSort,
            GameId::ShapeSort,
        ] {
            assert!(!config(game, AgeGroup::Young).unwrap().shuffle());
        }
        assert!(config(GameId::Loops, AgeGroup::Young).unwrap().shuffle());
    }
}
