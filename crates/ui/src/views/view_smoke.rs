use std::sync::Arc;

use quest_core::model::{AgeGroup, GameId, PlayerAnswer, PlayerState};
use quest_core::time::fixed_now;
use storage::repository::{PlayerStateRepository, StorageError};

use super::test_harness::{
    ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_player_repo,
    setup_view_harness_without_tier,
};
use crate::vm::PlayIntent;

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_smoke_renders_tier_picker() {
    let mut harness = setup_view_harness_without_tier(ViewKind::Welcome).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("LogiQuest"), "missing title in {html}");
    assert!(
        html.contains("How old are you?"),
        "missing tier prompt in {html}"
    );
    assert!(html.contains("Ages 5-7"), "missing young tier in {html}");
    assert!(html.contains("Ages 11+"), "missing older tier in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_a_tile_per_game() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Hi!"), "missing greeting in {html}");
    for game in GameId::ALL {
        let title = game.title();
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("Level 1"), "missing level badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn gated_view_smoke_redirects_without_a_tier() {
    let mut harness = setup_view_harness_without_tier(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Taking you to the welcome screen"),
        "missing redirect placeholder in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_walks_intro_into_the_first_trial() {
    let mut harness = setup_view_harness(ViewKind::Play(GameId::Gates)).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Gate Garden"), "missing game title in {html}");
    assert!(html.contains("Start!"), "missing start button in {html}");
    assert!(html.contains("questions"), "missing intro rules in {html}");

    let handles = harness.play_handles.clone().expect("play handles");
    harness
        .dom
        .in_runtime(|| handles.dispatch().call(PlayIntent::Begin));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Question 1 /"), "missing trial meta in {html}");
    assert!(html.contains("countdown-bar"), "missing countdown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_locks_after_an_answer() {
    let mut harness = setup_view_harness(ViewKind::Play(GameId::Gates)).await;
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness.play_handles.clone().expect("play handles");
    harness
        .dom
        .in_runtime(|| handles.dispatch().call(PlayIntent::Begin));
    drive_dom(&mut harness.dom);

    harness
        .dom
        .in_runtime(|| handles.dispatch().call(PlayIntent::Select(PlayerAnswer::Truth(true))));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("play-advance"), "missing advance button in {html}");
    assert!(html.contains("feedback"), "missing feedback panel in {html}");
    assert_eq!(harness.progress.snapshot().progress().games_played(), 1);
}

struct FailingSaveRepository;

#[async_trait::async_trait]
impl PlayerStateRepository for FailingSaveRepository {
    async fn load(&self) -> Result<Option<PlayerState>, StorageError> {
        let mut state = PlayerState::new(fixed_now());
        state.profile_mut().set_age_group(Some(AgeGroup::Middle));
        Ok(Some(state))
    }

    async fn save(&self, _state: &PlayerState) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_surfaces_a_failed_save() {
    let repo = Arc::new(FailingSaveRepository);
    let mut harness =
        setup_view_harness_with_player_repo(ViewKind::Play(GameId::Gates), repo, None).await;
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness.play_handles.clone().expect("play handles");
    harness
        .dom
        .in_runtime(|| handles.dispatch().call(PlayIntent::Begin));
    drive_dom(&mut harness.dom);

    harness
        .dom
        .in_runtime(|| handles.dispatch().call(PlayIntent::Select(PlayerAnswer::Truth(true))));
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing save error in {html}"
    );
    assert!(
        html.contains("play-advance"),
        "board should stay playable in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_stats_and_levels() {
    let mut harness = setup_view_harness(ViewKind::Progress).await;
    harness.progress.record_answer(true).await.expect("record");
    harness.progress.add_stars(3).await.expect("stars");
    harness
        .progress
        .level_up(GameId::Loops)
        .await
        .expect("level up");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("My Progress"), "missing title in {html}");
    assert!(html.contains("Games Played"), "missing stat label in {html}");
    assert!(html.contains("Loop Lab"), "missing game row in {html}");
    assert!(html.contains("Level 2"), "missing raised level in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_renders_profile_controls() {
    let mut harness = setup_view_harness(ViewKind::Settings).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your name"), "missing name field in {html}");
    assert!(html.contains("Age group"), "missing tier row in {html}");
    assert!(html.contains("Sound effects"), "missing sound row in {html}");
    assert!(html.contains("Reset Progress"), "missing reset in {html}");
}
