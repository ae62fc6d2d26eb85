use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{PlayerStateRepository, StorageError};
use quest_core::model::{AgeGroup, GameId, PlayerName, PlayerProfile, PlayerState, ProgressRecord};

use super::SqliteRepository;

#[async_trait]
impl PlayerStateRepository for SqliteRepository {
    async fn load(&self) -> Result<Option<PlayerState>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT
                player_name,
                age_group,
                sound_enabled,
                games_played,
                correct_answers,
                current_streak,
                best_streak,
                total_stars,
                levels,
                updated_at
            FROM player_state
            WHERE id = 1
            ",
        )
        .fetch_optional(self.pool())
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let player_name: Option<String> = column(&row, "player_name")?;
        let age_group: Option<String> = column(&row, "age_group")?;
        let sound_enabled: bool = column(&row, "sound_enabled")?;
        let games_played: i64 = column(&row, "games_played")?;
        let correct_answers: i64 = column(&row, "correct_answers")?;
        let current_streak: i64 = column(&row, "current_streak")?;
        let best_streak: i64 = column(&row, "best_streak")?;
        let total_stars: i64 = column(&row, "total_stars")?;
        let levels_json: String = column(&row, "levels")?;
        let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

        let name = player_name
            .map(PlayerName::new)
            .transpose()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let age_group = age_group
            .map(|raw| raw.parse::<AgeGroup>())
            .transpose()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let profile = PlayerProfile::new(name, age_group);

        let progress = ProgressRecord::from_persisted(
            to_u32(games_played, "games_played")?,
            to_u32(correct_answers, "correct_answers")?,
            to_u32(current_streak, "current_streak")?,
            to_u32(best_streak, "best_streak")?,
            to_u32(total_stars, "total_stars")?,
            decode_levels(&levels_json)?,
        )
        .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(Some(PlayerState::from_persisted(
            profile,
            progress,
            sound_enabled,
            updated_at,
        )))
    }

    async fn save(&self, state: &PlayerState) -> Result<(), StorageError> {
        let levels = encode_levels(state.progress().levels())?;
        sqlx::query(
            r"
            INSERT INTO player_state (
                id,
                player_name,
                age_group,
                sound_enabled,
                games_played,
                correct_answers,
                current_streak,
                best_streak,
                total_stars,
                levels,
                updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(id) DO UPDATE SET
                player_name = excluded.player_name,
                age_group = excluded.age_group,
                sound_enabled = excluded.sound_enabled,
                games_played = excluded.games_played,
                correct_answers = excluded.correct_answers,
                current_streak = excluded.current_streak,
                best_streak = excluded.best_streak,
                total_stars = excluded.total_stars,
                levels = excluded.levels,
                updated_at = excluded.updated_at
            ",
        )
        .bind(1_i64)
        .bind(state.profile().name().map(PlayerName::as_str))
        .bind(state.profile().age_group().map(|tier| tier.slug()))
        .bind(state.sound_enabled())
        .bind(i64::from(state.progress().games_played()))
        .bind(i64::from(state.progress().correct_answers()))
        .bind(i64::from(state.progress().current_streak()))
        .bind(i64::from(state.progress().best_streak()))
        .bind(i64::from(state.progress().total_stars()))
        .bind(levels)
        .bind(state.updated_at())
        .execute(self.pool())
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, StorageError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

fn to_u32(value: i64, field: &str) -> Result<u32, StorageError> {
    u32::try_from(value)
        .map_err(|_| StorageError::Serialization(format!("{field} out of range: {value}")))
}

fn encode_levels(levels: &BTreeMap<GameId, u32>) -> Result<String, StorageError> {
    let by_slug: BTreeMap<&str, u32> = levels
        .iter()
        .map(|(game, level)| (game.slug(), *level))
        .collect();
    serde_json::to_string(&by_slug).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Unknown slugs in a stored map are dropped instead of failing the load,
/// so a save written by a build with a different game list stays readable.
/// Missing games are filled back in at level 1 by the domain constructor.
fn decode_levels(raw: &str) -> Result<BTreeMap<GameId, u32>, StorageError> {
    let by_slug: BTreeMap<String, u32> =
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
    Ok(by_slug
        .into_iter()
        .filter_map(|(slug, level)| slug.parse::<GameId>().ok().map(|game| (game, level)))
        .collect())
}
