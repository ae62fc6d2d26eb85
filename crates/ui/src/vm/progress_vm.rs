use quest_core::model::{GameId, PlayerState};

use crate::vm::time_fmt::format_datetime;

/// Dashboard/progress numbers lifted out of the player state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub player_name: Option<String>,
    pub tier_label: Option<&'static str>,
    pub games_played: u32,
    pub correct_answers: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_stars: u32,
    pub updated_at_str: String,
    pub games: Vec<GameRowVm>,
}

/// One per-game row on the dashboard and the progress screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRowVm {
    pub game: GameId,
    pub emoji: &'static str,
    pub title: &'static str,
    pub skill: &'static str,
    pub level: u32,
}

#[must_use]
pub fn map_progress(state: &PlayerState) -> ProgressVm {
    let games = GameId::ALL
        .iter()
        .map(|&game| GameRowVm {
            game,
            emoji: game.emoji(),
            title: game.title(),
            skill: game.skill(),
            level: state.progress().level(game),
        })
        .collect();

    ProgressVm {
        player_name: state
            .profile()
            .name()
            .map(|name| name.as_str().to_string()),
        tier_label: state.profile().age_group().map(|tier| tier.label()),
        games_played: state.progress().games_played(),
        correct_answers: state.progress().correct_answers(),
        current_streak: state.progress().current_streak(),
        best_streak: state.progress().best_streak(),
        total_stars: state.progress().total_stars(),
        updated_at_str: format_datetime(state.updated_at()),
        games,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quest_core::model::{AgeGroup, PlayerName};
    use quest_core::time::fixed_now;

    #[test]
    fn maps_every_game_row_with_its_level() {
        let mut state = PlayerState::new(fixed_now());
        state
            .profile_mut()
            .set_name(Some(PlayerName::new("Zoe").unwrap()));
        state.profile_mut().set_age_group(Some(AgeGroup::Older));
        state.progress_mut().level_up(GameId::BugHunt);

        let vm = map_progress(&state);

        assert_eq!(vm.player_name.as_deref(), Some("Zoe"));
        assert_eq!(vm.tier_label, Some("Ages 11+"));
        assert_eq!(vm.games.len(), 11);
        let bug_hunt = vm
            .games
            .iter()
            .find(|row| row.game == GameId::BugHunt)
            .unwrap();
        assert_eq!(bug_hunt.level, 2);
        assert!(vm.games.iter().all(|row| !row.title.is_empty()));
    }
}
