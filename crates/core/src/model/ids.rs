use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for one of the eleven mini-games.
///
/// The slug form (`Display`/`FromStr`) is stable: it names route segments
/// and keys the persisted per-game levels map. Renaming a variant must not
/// change its slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameId {
    Variables,
    Loops,
    Gates,
    Syllogisms,
    Patterns,
    ColorSort,
    ShapeSort,
    Sequences,
    Conditions,
    BugHunt,
    OddOneOut,
}

impl GameId {
    /// Every game, in dashboard display order.
    pub const ALL: [GameId; 11] = [
        GameId::Variables,
        GameId::Loops,
        GameId::Gates,
        GameId::Syllogisms,
        GameId::Patterns,
        GameId::ColorSort,
        GameId::ShapeSort,
        GameId::Sequences,
        GameId::Conditions,
        GameId::BugHunt,
        GameId::OddOneOut,
    ];

    /// Stable slug used in routes and persisted data.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            GameId::Variables => "variables",
            GameId::Loops => "loops",
            GameId::Gates => "gates",
            GameId::Syllogisms => "syllogisms",
            GameId::Patterns => "patterns",
            GameId::ColorSort => "color_sort",
            GameId::ShapeSort => "shape_sort",
            GameId::Sequences => "sequences",
            GameId::Conditions => "conditions",
            GameId::BugHunt => "bug_hunt",
            GameId::OddOneOut => "odd_one_out",
        }
    }

    /// Kid-facing title shown on the dashboard and game screens.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            GameId::Variables => "Variable Vault",
            GameId::Loops => "Loop Lab",
            GameId::Gates => "Gate Garden",
            GameId::Syllogisms => "Truth Train",
            GameId::Patterns => "Pattern Parade",
            GameId::ColorSort => "Color Corral",
            GameId::ShapeSort => "Shape Shed",
            GameId::Sequences => "Sequence Safari",
            GameId::Conditions => "If-Then Island",
            GameId::BugHunt => "Bug Hunt",
            GameId::OddOneOut => "Odd One Out",
        }
    }

    /// One-line skill description for the intro card.
    #[must_use]
    pub fn skill(&self) -> &'static str {
        match self {
            GameId::Variables => "Tracking values as they change",
            GameId::Loops => "Counting how often things repeat",
            GameId::Gates => "AND, OR and NOT logic",
            GameId::Syllogisms => "Careful step-by-step deduction",
            GameId::Patterns => "Spotting what repeats",
            GameId::ColorSort => "Sorting fast when the rule flips",
            GameId::ShapeSort => "Sorting fast when the rule flips",
            GameId::Sequences => "Putting steps in order",
            GameId::Conditions => "Following if-then choices",
            GameId::BugHunt => "Finding the line that is wrong",
            GameId::OddOneOut => "Seeing what does not belong",
        }
    }

    /// Emoji badge for the dashboard grid.
    #[must_use]
    pub fn emoji(&self) -> &'static str {
        match self {
            GameId::Variables => "📦",
            GameId::Loops => "🔁",
            GameId::Gates => "💡",
            GameId::Syllogisms => "🚂",
            GameId::Patterns => "🎨",
            GameId::ColorSort => "🌈",
            GameId::ShapeSort => "🔷",
            GameId::Sequences => "🐾",
            GameId::Conditions => "🏝️",
            GameId::BugHunt => "🐞",
            GameId::OddOneOut => "🔍",
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

// ─── FromStr Implementation ────────────────────────────────────────────────────

/// Error type for parsing a game slug from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGameIdError {
    raw: String,
}

impl ParseGameIdError {
    /// The string that failed to parse.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseGameIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown game slug: {}", self.raw)
    }
}

impl std::error::Error for ParseGameIdError {}

impl FromStr for GameId {
    type Err = ParseGameIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameId::ALL
            .into_iter()
            .find(|game| game.slug() == s)
            .ok_or_else(|| ParseGameIdError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_display_is_slug() {
        assert_eq!(GameId::ColorSort.to_string(), "color_sort");
        assert_eq!(GameId::Gates.to_string(), "gates");
    }

    #[test]
    fn test_game_id_from_str() {
        let game: GameId = "odd_one_out".parse().unwrap();
        assert_eq!(game, GameId::OddOneOut);
    }

    #[test]
    fn test_game_id_from_str_unknown() {
        let result = "tic_tac_toe".parse::<GameId>();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().raw(), "tic_tac_toe");
    }

    #[test]
    fn test_slug_roundtrip_for_every_game() {
        for game in GameId::ALL {
            let parsed: GameId = game.slug().parse().unwrap();
            assert_eq!(parsed, game);
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        for a in GameId::ALL {
            for b in GameId::ALL {
                if a != b {
                    assert_ne!(a.slug(), b.slug());
                }
            }
        }
    }

    #[test]
    fn test_serde_slug_matches_display() {
        for game in GameId::ALL {
            let json = serde_json::to_string(&game).unwrap();
            assert_eq!(json, format!("\"{}\"", game.slug()));
        }
    }
}
