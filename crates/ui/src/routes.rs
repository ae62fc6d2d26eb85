use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use quest_core::model::GameId;

use crate::views::{HomeView, PlayView, ProgressView, SettingsView, WelcomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/welcome", WelcomeView)] Welcome {},
        #[route("/", HomeView)] Home {},
        #[route("/play/:game", PlayView)] Play { game: GameId },
        #[route("/progress", ProgressView)] Progress {},
        #[route("/settings", SettingsView)] Settings {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Topbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Topbar() -> Element {
    rsx! {
        nav { class: "topbar",
            span { class: "topbar-brand", "🧠 LogiQuest" }
            ul { class: "topbar-links",
                li { Link { to: Route::Home {}, "Games" } }
                li { Link { to: Route::Progress {}, "My Progress" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
        }
    }
}

/// Unknown paths (including bad game slugs) land back on the dashboard.
#[component]
fn NotFoundView(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        navigator.replace(Route::Home {});
    });
    let path = segments.join("/");
    rsx! {
        div { class: "page",
            p { "There's nothing at /{path}. Taking you back to the games..." }
        }
    }
}
