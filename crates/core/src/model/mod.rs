mod ids;
mod profile;
mod progress;
mod state;
mod trial;

pub use ids::{GameId, ParseGameIdError};
pub use profile::{AgeGroup, PlayerName, PlayerProfile, ProfileError};
pub use progress::{ProgressError, ProgressRecord};
pub use state::PlayerState;
pub use trial::{
    AnswerRule, GateSpec, PatternSpec, PlayerAnswer, SortItem, SortRule, SortSide, Trial,
    TrialError,
};
