use dioxus::prelude::*;

use quest_core::model::{AgeGroup, PlayerName};

use crate::context::AppContext;
use crate::views::state::{ViewError, use_tier_guard};
use crate::views::welcome::parse_name;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Error(ViewError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResetState {
    Idle,
    Resetting,
    Error(ViewError),
}

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let allowed = use_tier_guard();
    let progress = ctx.progress();

    let stored = progress.snapshot();
    let mut player = use_signal(|| stored.clone());
    let mut name = use_signal(|| {
        stored
            .profile()
            .name()
            .map(|name| name.as_str().to_string())
            .unwrap_or_default()
    });
    let mut name_error = use_signal(|| None::<&'static str>);
    let mut name_save = use_signal(|| SaveState::Idle);
    let mut op_error = use_signal(|| None::<ViewError>);
    let mut confirm_reset = use_signal(|| false);
    let mut reset_state = use_signal(|| ResetState::Idle);

    let on_save_name = {
        let progress = progress.clone();
        use_callback(move |()| {
            let parsed = match parse_name(&name()) {
                Ok(parsed) => parsed,
                Err(message) => {
                    name_error.set(Some(message));
                    return;
                }
            };
            let progress = progress.clone();
            name_save.set(SaveState::Saving);
            spawn(async move {
                match progress.set_player_name(parsed).await {
                    Ok(next) => {
                        player.set(next);
                        name_save.set(SaveState::Saved);
                    }
                    Err(_) => name_save.set(SaveState::Error(ViewError::Unknown)),
                }
            });
        })
    };

    let on_pick_tier = {
        let progress = progress.clone();
        use_callback(move |picked: AgeGroup| {
            let progress = progress.clone();
            spawn(async move {
                match progress.set_age_group(Some(picked)).await {
                    Ok(next) => {
                        player.set(next);
                        op_error.set(None);
                    }
                    Err(_) => op_error.set(Some(ViewError::Unknown)),
                }
            });
        })
    };

    let on_toggle_sound = {
        let progress = progress.clone();
        use_callback(move |()| {
            let enabled = !player.read().sound_enabled();
            let progress = progress.clone();
            spawn(async move {
                match progress.set_sound_enabled(enabled).await {
                    Ok(next) => {
                        player.set(next);
                        op_error.set(None);
                    }
                    Err(_) => op_error.set(Some(ViewError::Unknown)),
                }
            });
        })
    };

    if !allowed {
        return rsx! {
            div { class: "page",
                p { "Taking you to the welcome screen..." }
            }
        };
    }

    let current_tier = player.read().profile().age_group();
    let sound_on = player.read().sound_enabled();
    let name_max = PlayerName::MAX_LENGTH;

    rsx! {
        div { class: "page settings-page",
            h2 { class: "view-title", "Settings" }
            section { class: "settings-card",
                div { class: "settings-row",
                    div { class: "settings-row__label",
                        label { r#for: "settings-name", "Your name" }
                    }
                    div { class: "settings-row__field",
                        input {
                            class: "settings-input",
                            id: "settings-name",
                            r#type: "text",
                            placeholder: "Type your name (or skip it)",
                            maxlength: "{name_max}",
                            value: "{name()}",
                            oninput: move |evt| {
                                name.set(evt.value());
                                name_error.set(None);
                                name_save.set(SaveState::Idle);
                            },
                        }
                        button {
                            class: "btn btn-secondary",
                            id: "settings-name-save",
                            r#type: "button",
                            disabled: name_save() == SaveState::Saving,
                            onclick: move |_| on_save_name.call(()),
                            "Save"
                        }
                    }
                }
                if let Some(message) = name_error() {
                    p { class: "settings-error", "{message}" }
                } else if name_save() == SaveState::Saved {
                    p { class: "settings-saved", "Saved!" }
                } else if let SaveState::Error(err) = name_save() {
                    p { class: "settings-error", "{err.message()}" }
                }

                div { class: "settings-row",
                    div { class: "settings-row__label",
                        label { "Age group" }
                    }
                    div { class: "settings-row__field settings-tiers",
                        for option in AgeGroup::ALL {
                            button {
                                class: if current_tier == Some(option) {
                                    "settings-tier settings-tier--active"
                                } else {
                                    "settings-tier"
                                },
                                id: "settings-tier-{option.slug()}",
                                r#type: "button",
                                onclick: move |_| on_pick_tier.call(option),
                                "{option.label()}"
                            }
                        }
                    }
                }

                div { class: "settings-row",
                    div { class: "settings-row__label",
                        label { "Sound effects" }
                    }
                    div { class: "settings-row__field settings-row__field--toggle",
                        button {
                            class: "settings-toggle",
                            id: "settings-sound",
                            r#type: "button",
                            role: "switch",
                            aria_checked: "{sound_on}",
                            onclick: move |_| on_toggle_sound.call(()),
                        }
                    }
                }
                if let Some(err) = op_error() {
                    p { class: "settings-error", "{err.message()}" }
                }
            }

            section { class: "settings-danger",
                h3 { class: "settings-danger-title", "Start over" }
                p { class: "settings-danger-body",
                    "Clears your stars, streaks, and game levels. Your name and age group stay."
                }
                button {
                    class: "btn btn-danger",
                    id: "settings-reset",
                    r#type: "button",
                    onclick: move |_| {
                        reset_state.set(ResetState::Idle);
                        confirm_reset.set(true);
                    },
                    "Reset Progress"
                }
            }

            if confirm_reset() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| {
                        confirm_reset.set(false);
                        reset_state.set(ResetState::Idle);
                    },
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "Reset all progress?" }
                        p { class: "modal-body",
                            "Stars, streaks, and levels go back to the start. This cannot be undone."
                        }
                        if let ResetState::Error(err) = reset_state() {
                            p { class: "modal-error", "{err.message()}" }
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn modal-cancel",
                                r#type: "button",
                                onclick: move |_| {
                                    confirm_reset.set(false);
                                    reset_state.set(ResetState::Idle);
                                },
                                "Cancel"
                            }
                            button {
                                class: "btn modal-confirm",
                                id: "settings-reset-confirm",
                                r#type: "button",
                                disabled: reset_state() == ResetState::Resetting,
                                onclick: move |_| {
                                    let progress = progress.clone();
                                    spawn(async move {
                                        reset_state.set(ResetState::Resetting);
                                        match progress.reset_progress().await {
                                            Ok(next) => {
                                                player.set(next);
                                                reset_state.set(ResetState::Idle);
                                                confirm_reset.set(false);
                                            }
                                            Err(_) => {
                                                reset_state.set(ResetState::Error(ViewError::Unknown));
                                            }
                                        }
                                    });
                                },
                                "Reset"
                            }
                        }
                    }
                }
            }
        }
    }
}
