use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::state::use_tier_guard;
use crate::vm::map_progress;

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let allowed = use_tier_guard();
    let player = use_signal(|| ctx.progress().snapshot());

    if !allowed {
        return rsx! {
            div { class: "page",
                p { "Taking you to the welcome screen..." }
            }
        };
    }

    let vm = map_progress(&player.read());
    let who = vm
        .player_name
        .clone()
        .unwrap_or_else(|| "Explorer".to_string());
    let tier = vm.tier_label.unwrap_or("No age group yet");

    rsx! {
        div { class: "page progress-page",
            header { class: "progress-header",
                h2 { class: "view-title", "My Progress" }
                p { class: "view-hint", "{who} · {tier} · last played {vm.updated_at_str}" }
            }
            div { class: "progress-stats",
                StatCard { value: vm.games_played, label: "Games Played", glyph: "🎮" }
                StatCard { value: vm.correct_answers, label: "Correct Answers", glyph: "✅" }
                StatCard { value: vm.best_streak, label: "Best Streak", glyph: "🔥" }
                StatCard { value: vm.total_stars, label: "Stars", glyph: "⭐" }
            }
            section { class: "progress-games",
                h3 { class: "progress-section-title", "Game Levels" }
                ul { class: "progress-game-list",
                    for row in vm.games {
                        li { class: "progress-game-row",
                            span { class: "progress-game-emoji", "{row.emoji}" }
                            div { class: "progress-game-text",
                                span { class: "progress-game-title", "{row.title}" }
                                span { class: "progress-game-skill", "{row.skill}" }
                            }
                            span { class: "progress-game-level", "Level {row.level}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(value: u32, label: &'static str, glyph: &'static str) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-glyph", "{glyph}" }
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
