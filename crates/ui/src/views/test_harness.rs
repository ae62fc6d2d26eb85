use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quest_core::model::{AgeGroup, GameId};
use quest_core::time::fixed_now;
use services::{Clock, ProgressService, TrialLoopService};
use storage::repository::{InMemoryRepository, PlayerStateRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::play::PlayTestHandles;
use crate::views::{HomeView, PlayView, ProgressView, SettingsView, WelcomeView};

#[derive(Clone)]
struct TestApp {
    progress: Arc<ProgressService>,
    trial_loop: Arc<TrialLoopService>,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn trial_loop(&self) -> Arc<TrialLoopService> {
        Arc::clone(&self.trial_loop)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Home,
    Play(GameId),
    Progress,
    Settings,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    play_handles: Option<PlayTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.play_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Play(game) => rsx! { PlayView { game } },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::Settings => rsx! { SettingsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressService>,
    pub play_handles: Option<PlayTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let repo = Arc::new(InMemoryRepository::new());
    setup_view_harness_with_player_repo(view, repo, Some(AgeGroup::Middle)).await
}

pub async fn setup_view_harness_without_tier(view: ViewKind) -> ViewHarness {
    let repo = Arc::new(InMemoryRepository::new());
    setup_view_harness_with_player_repo(view, repo, None).await
}

pub async fn setup_view_harness_with_player_repo(
    view: ViewKind,
    repo: Arc<dyn PlayerStateRepository>,
    tier: Option<AgeGroup>,
) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let progress = Arc::new(
        ProgressService::load_or_init(clock, repo)
            .await
            .expect("init progress"),
    );
    if let Some(tier) = tier {
        progress
            .set_age_group(Some(tier))
            .await
            .expect("seed age group");
    }
    let trial_loop = Arc::new(TrialLoopService::new(Arc::clone(&progress)));

    let play_handles = match view {
        ViewKind::Play(_) => Some(PlayTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        progress: Arc::clone(&progress),
        trial_loop,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            play_handles: play_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        progress,
        play_handles,
    }
}
