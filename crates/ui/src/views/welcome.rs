use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quest_core::model::{AgeGroup, PlayerName, ProfileError};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::decor::FloatingShapes;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Error(ViewError),
}

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let progress = ctx.progress();

    let stored = progress.snapshot();
    let mut name = use_signal(|| {
        stored
            .profile()
            .name()
            .map(|name| name.as_str().to_string())
            .unwrap_or_default()
    });
    let mut tier = use_signal(|| stored.profile().age_group());
    let mut name_error = use_signal(|| None::<&'static str>);
    let mut save_state = use_signal(|| SaveState::Idle);

    let on_start = {
        let progress = progress.clone();
        use_callback(move |()| {
            let Some(picked_tier) = tier() else {
                return;
            };
            let parsed_name = match parse_name(&name()) {
                Ok(parsed) => parsed,
                Err(message) => {
                    name_error.set(Some(message));
                    return;
                }
            };
            name_error.set(None);

            let progress = progress.clone();
            spawn(async move {
                save_state.set(SaveState::Saving);
                let saved = progress.set_player_name(parsed_name).await;
                let saved = match saved {
                    Ok(_) => progress.set_age_group(Some(picked_tier)).await,
                    Err(err) => Err(err),
                };
                match saved {
                    Ok(_) => {
                        save_state.set(SaveState::Idle);
                        navigator.replace(Route::Home {});
                    }
                    Err(_) => save_state.set(SaveState::Error(ViewError::Unknown)),
                }
            });
        })
    };

    let name_max = PlayerName::MAX_LENGTH;
    rsx! {
        div { class: "page welcome-page",
            FloatingShapes {}
            div { class: "welcome-card",
                h1 { class: "welcome-title", "🧠 LogiQuest" }
                p { class: "welcome-subtitle", "Puzzles, patterns, and brain games!" }

                label { class: "welcome-label", r#for: "welcome-name", "What's your name?" }
                input {
                    class: "welcome-name-input",
                    id: "welcome-name",
                    r#type: "text",
                    placeholder: "Type your name (or skip it)",
                    maxlength: "{name_max}",
                    value: "{name()}",
                    oninput: move |evt| {
                        name.set(evt.value());
                        name_error.set(None);
                    },
                }
                if let Some(message) = name_error() {
                    p { class: "welcome-error", "{message}" }
                }

                p { class: "welcome-label", "How old are you?" }
                div { class: "tier-picker",
                    for option in AgeGroup::ALL {
                        TierCard { tier: option, selected: tier() == Some(option), on_pick: move |picked| tier.set(Some(picked)) }
                    }
                }

                button {
                    class: "btn btn-primary welcome-start",
                    id: "welcome-start",
                    r#type: "button",
                    disabled: tier().is_none() || save_state() == SaveState::Saving,
                    onclick: move |_| on_start.call(()),
                    "Let's Play!"
                }
                if let SaveState::Error(err) = save_state() {
                    p { class: "welcome-error", "{err.message()}" }
                }
            }
        }
    }
}

pub(crate) fn parse_name(raw: &str) -> Result<Option<PlayerName>, &'static str> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match PlayerName::new(raw) {
        Ok(name) => Ok(Some(name)),
        Err(ProfileError::NameTooLong { .. }) => Err("That name is a bit too long."),
        Err(_) => Err("That name doesn't look right."),
    }
}

#[component]
fn TierCard(tier: AgeGroup, selected: bool, on_pick: EventHandler<AgeGroup>) -> Element {
    let emoji = match tier {
        AgeGroup::Young => "🐣",
        AgeGroup::Middle => "🦊",
        AgeGroup::Older => "🦉",
    };
    rsx! {
        button {
            class: if selected { "tier-card tier-card--selected" } else { "tier-card" },
            id: "tier-{tier.slug()}",
            r#type: "button",
            onclick: move |_| on_pick.call(tier),
            span { class: "tier-emoji", "{emoji}" }
            span { class: "tier-label", "{tier.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_names_are_skipped() {
        assert_eq!(parse_name(""), Ok(None));
        assert_eq!(parse_name("   "), Ok(None));
    }

    #[test]
    fn overlong_names_surface_a_kid_friendly_message() {
        let raw = "x".repeat(PlayerName::MAX_LENGTH + 1);
        assert!(parse_name(&raw).is_err());
    }

    #[test]
    fn valid_names_parse() {
        let parsed = parse_name("  Ada  ").unwrap().unwrap();
        assert_eq!(parsed.as_str(), "Ada");
    }
}
