use std::sync::Arc;

use quest_core::model::{AgeGroup, AnswerRule, GameId, PlayerAnswer, Trial};
use quest_core::session::Phase;
use quest_core::time::fixed_now;
use services::{Clock, ProgressService, TrialLoopService};
use storage::repository::{InMemoryRepository, PlayerStateRepository};

fn correct_answer(trial: &Trial) -> PlayerAnswer {
    match *trial.rule() {
        AnswerRule::Choice { correct } => PlayerAnswer::Choice(correct),
        AnswerRule::Truth { expected } => PlayerAnswer::Truth(expected),
        AnswerRule::Sort { rule } => {
            let item = trial.item().expect("sort trial carries an item");
            PlayerAnswer::Side(rule.expected_side(item))
        }
    }
}

#[tokio::test]
async fn trial_loop_persists_a_perfect_session() {
    let repo = InMemoryRepository::new();
    let progress = ProgressService::load_or_init(Clock::fixed(fixed_now()), Arc::new(repo.clone()))
        .await
        .unwrap();
    progress.set_age_group(Some(AgeGroup::Middle)).await.unwrap();

    let loop_svc = TrialLoopService::new(Arc::new(progress));
    let mut session = loop_svc.start_session(GameId::ColorSort).unwrap();
    session.begin();

    let total = session.total_trials() as u32;
    let mut report = None;
    while report.is_none() {
        let answer = correct_answer(session.current_trial().expect("trial is presenting"));
        loop_svc
            .answer_current(&mut session, answer)
            .await
            .unwrap()
            .expect("answer resolves the trial");
        report = loop_svc.advance(&mut session).await.unwrap();
    }

    let report = report.unwrap();
    assert_eq!(report.score(), total);
    assert_eq!(report.stars(), total);
    assert!(report.leveled_up());
    assert_eq!(session.phase(), Phase::Completed);

    let stored = repo.load().await.unwrap().unwrap();
    assert_eq!(stored.progress().games_played(), 1);
    assert_eq!(stored.progress().correct_answers(), total);
    assert_eq!(stored.progress().best_streak(), total);
    assert_eq!(stored.progress().total_stars(), total);
    assert_eq!(stored.progress().level(GameId::ColorSort), 2);
    assert_eq!(stored.progress().level(GameId::Patterns), 1);
}

#[tokio::test]
async fn restart_counts_a_second_play() {
    let repo = InMemoryRepository::new();
    let progress = ProgressService::load_or_init(Clock::fixed(fixed_now()), Arc::new(repo.clone()))
        .await
        .unwrap();
    progress.set_age_group(Some(AgeGroup::Young)).await.unwrap();

    let loop_svc = TrialLoopService::new(Arc::new(progress));
    let mut session = loop_svc.start_session(GameId::Syllogisms).unwrap();
    session.begin();

    let answer = correct_answer(session.current_trial().unwrap());
    loop_svc
        .answer_current(&mut session, answer)
        .await
        .unwrap()
        .unwrap();

    session.restart();
    let answer = correct_answer(session.current_trial().unwrap());
    let resolution = loop_svc
        .answer_current(&mut session, answer)
        .await
        .unwrap()
        .unwrap();
    assert!(resolution.counts_play());

    let stored = repo.load().await.unwrap().unwrap();
    assert_eq!(stored.progress().games_played(), 2);
}
