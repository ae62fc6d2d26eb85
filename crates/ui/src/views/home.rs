use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::decor::FloatingShapes;
use crate::views::state::use_tier_guard;
use crate::vm::{GameRowVm, map_progress};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    if !use_tier_guard() {
        return rsx! {
            div { class: "page",
                p { "Taking you to the welcome screen..." }
            }
        };
    }

    let vm = map_progress(&ctx.progress().snapshot());
    let greeting = vm
        .player_name
        .as_deref()
        .map_or_else(|| "Hi!".to_string(), |name| format!("Hi, {name}!"));

    rsx! {
        div { class: "page home-page",
            FloatingShapes {}
            header { class: "home-header",
                div { class: "home-heading",
                    h2 { class: "home-greeting", "{greeting}" }
                    p { class: "home-subtitle", "Pick a game to play." }
                }
                div { class: "home-chips",
                    span { class: "chip chip--stars", "⭐ {vm.total_stars}" }
                    span { class: "chip chip--streak", "🔥 {vm.current_streak}" }
                }
            }
            div { class: "game-grid",
                for row in vm.games {
                    GameTile { row }
                }
            }
        }
    }
}

#[component]
fn GameTile(row: GameRowVm) -> Element {
    rsx! {
        Link { class: "game-tile", to: Route::Play { game: row.game },
            span { class: "game-tile-emoji", "{row.emoji}" }
            span { class: "game-tile-title", "{row.title}" }
            span { class: "game-tile-skill", "{row.skill}" }
            span { class: "game-tile-level", "Level {row.level}" }
        }
    }
}
